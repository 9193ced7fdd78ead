// src/models.rs
use serde::{Serialize, Deserialize};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 100;
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

// Password generation options, as shown by the form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub length: usize,
    pub digits_allowed: bool,
    pub symbols_allowed: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            digits_allowed: false,
            symbols_allowed: false,
        }
    }
}

impl Configuration {
    pub fn new(length: usize, digits_allowed: bool, symbols_allowed: bool) -> Self {
        Self {
            length: clamp_length(length),
            digits_allowed,
            symbols_allowed,
        }
    }
}

// Same bounds as the length slider
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

// Output of the one-shot `generate` command in JSON mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub numbers: bool,
    pub characters: bool,
    pub copied: bool,
}

impl GeneratedPassword {
    pub fn new(password: String, config: &Configuration) -> Self {
        Self {
            password,
            length: config.length,
            numbers: config.digits_allowed,
            characters: config.symbols_allowed,
            copied: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_mount_state() {
        let config = Configuration::default();
        assert_eq!(config.length, 8);
        assert!(!config.digits_allowed);
        assert!(!config.symbols_allowed);
    }

    #[test]
    fn length_is_clamped_to_slider_range() {
        assert_eq!(Configuration::new(0, false, false).length, MIN_PASSWORD_LENGTH);
        assert_eq!(Configuration::new(5, false, false).length, 6);
        assert_eq!(Configuration::new(42, true, false).length, 42);
        assert_eq!(Configuration::new(1000, false, true).length, MAX_PASSWORD_LENGTH);
    }

    #[test]
    fn generated_password_serializes_flags() {
        let config = Configuration::new(10, true, false);
        let out = GeneratedPassword::new("abcdefghij".to_string(), &config);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["password"], "abcdefghij");
        assert_eq!(json["length"], 10);
        assert_eq!(json["numbers"], true);
        assert_eq!(json["characters"], false);
        assert_eq!(json["copied"], false);
    }
}
