// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{Configuration, DEFAULT_PASSWORD_LENGTH};

// Configuration for the password form
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_numbers: bool,
    pub default_characters: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_numbers: false,
            default_characters: false,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = var("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => config.warnings.push(format!(
                    "Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}",
                    val, config.default_password_length
                )),
            }
        }

        if let Some(val) = var("DEFAULT_NUMBERS") {
            match parse_flag(&val) {
                Some(enabled) => config.default_numbers = enabled,
                None => config.warnings.push(format!("Ignoring invalid boolean DEFAULT_NUMBERS='{}'", val)),
            }
        }

        if let Some(val) = var("DEFAULT_CHARACTERS") {
            match parse_flag(&val) {
                Some(enabled) => config.default_characters = enabled,
                None => config.warnings.push(format!("Ignoring invalid boolean DEFAULT_CHARACTERS='{}'", val)),
            }
        }

        // Logging
        if let Some(level) = var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    // Configuration the form mounts with, clamped to the slider range
    pub fn initial_configuration(&self) -> Configuration {
        Configuration::new(
            self.default_password_length,
            self.default_numbers,
            self.default_characters,
        )
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 8);
        assert!(!config.default_numbers);
        assert!(!config.default_characters);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
        assert!(config.warnings.is_empty());
        assert_eq!(config.initial_configuration(), Configuration::default());
    }

    #[test]
    fn reads_generation_defaults() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_NUMBERS", "true"),
            ("DEFAULT_CHARACTERS", "yes"),
        ]);
        let initial = config.initial_configuration();
        assert_eq!(initial.length, 24);
        assert!(initial.digits_allowed);
        assert!(initial.symbols_allowed);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "long"),
            ("DEFAULT_NUMBERS", "maybe"),
            ("LOG_LEVEL", "loud"),
            ("LOG_FILE", "  "),
        ]);
        assert_eq!(config.default_password_length, 8);
        assert!(!config.default_numbers);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
        assert_eq!(config.warnings.len(), 3);
        assert!(config.warnings[0].contains("Invalid DEFAULT_PASSWORD_LENGTH 'long'"));
        assert!(config.warnings[1].contains("DEFAULT_NUMBERS='maybe'"));
        assert!(config.warnings[2].contains("Unknown log level 'loud'"));
    }

    #[test]
    fn initial_length_is_clamped() {
        let config = config_from(&[("DEFAULT_PASSWORD_LENGTH", "250")]);
        assert_eq!(config.default_password_length, 250);
        assert_eq!(config.initial_configuration().length, 100);
    }

    #[test]
    fn reads_logging_settings() {
        let config = config_from(&[("LOG_LEVEL", "DEBUG"), ("LOG_FILE", "logs/passgen.log")]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/passgen.log")));
    }
}
