// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum CliCommand {
    /// Open the interactive password form
    #[default]
    Form,

    /// Generate a single password and print it
    Generate {
        /// Also copy the password to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_is_the_default_command() {
        assert_eq!(CliCommand::default(), CliCommand::Form);
    }
}
