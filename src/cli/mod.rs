// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

use crate::core::config::Config;
use crate::models::{Configuration, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords from the terminal", long_about = None)]
pub struct Args {
    /// Use JSON for output of one-shot commands
    #[arg(long)]
    pub json: bool,

    /// Initial password length (6-100)
    #[arg(long, short, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Start with numbers enabled
    #[arg(long, short, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Start with numbers disabled
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Start with special characters enabled
    #[arg(long, short, overrides_with = "no_characters")]
    pub characters: bool,

    /// Start with special characters disabled
    #[arg(long, overrides_with = "characters")]
    pub no_characters: bool,

    /// Command to execute (defaults to the interactive form)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    // Flags override the environment defaults
    pub fn configuration(&self, config: &Config) -> Configuration {
        let initial = config.initial_configuration();
        Configuration::new(
            self.length.unwrap_or(initial.length),
            toggle(self.numbers, self.no_numbers).unwrap_or(initial.digits_allowed),
            toggle(self.characters, self.no_characters).unwrap_or(initial.symbols_allowed),
        )
    }
}

// `--x` / `--no-x` pair; `None` leaves the environment default in place
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(format!(
            "length must be between {} and {}",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        ));
    }

    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_opens_form_with_defaults() {
        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.configuration(&Config::default()), Configuration::default());
    }

    #[test]
    fn flags_override_environment() {
        let args = Args::try_parse_from(["rust_passgen", "-l", "20", "--numbers"]).unwrap();
        let config = Config {
            default_password_length: 12,
            default_characters: true,
            ..Config::default()
        };
        assert_eq!(args.configuration(&config), Configuration::new(20, true, true));
    }

    #[test]
    fn length_outside_slider_range_is_rejected() {
        assert!(Args::try_parse_from(["rust_passgen", "--length", "5"]).is_err());
        assert!(Args::try_parse_from(["rust_passgen", "--length", "101"]).is_err());
        assert!(Args::try_parse_from(["rust_passgen", "--length", "ten"]).is_err());
        assert!(Args::try_parse_from(["rust_passgen", "--length", "100"]).is_ok());
    }

    #[test]
    fn parses_generate_subcommand() {
        let args = Args::try_parse_from(["rust_passgen", "--json", "generate", "--copy"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Some(CliCommand::Generate { copy: true })));
    }

    #[test]
    fn negative_flags_turn_off_environment_defaults() {
        let config = Config {
            default_numbers: true,
            default_characters: true,
            ..Config::default()
        };

        let args = Args::try_parse_from(["rust_passgen", "--no-numbers"]).unwrap();
        assert_eq!(args.configuration(&config), Configuration::new(8, false, true));

        let args = Args::try_parse_from(["rust_passgen", "--no-numbers", "--no-characters"]).unwrap();
        assert_eq!(args.configuration(&config), Configuration::new(8, false, false));

        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        assert_eq!(args.configuration(&config), Configuration::new(8, true, true));
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let args = Args::try_parse_from(["rust_passgen", "--numbers", "--no-numbers"]).unwrap();
        assert!(!args.configuration(&Config::default()).digits_allowed);

        let args = Args::try_parse_from(["rust_passgen", "--no-characters", "-c"]).unwrap();
        assert!(args.configuration(&Config::default()).symbols_allowed);
    }
}
