//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::greeting;

/// greet - print a fixed greeting to stdout.
///
/// The program takes no flags. Every argument, including the usual
/// `--help` and `--version`, is accepted and ignored.
#[derive(Parser, Debug)]
#[command(name = "greet")]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    ignore_errors = true
)]
pub struct Cli {
    /// Ignored positional arguments.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub args: Vec<String>,
}

/// Run the CLI with parsed arguments
pub fn run(_cli: Cli) -> Result<()> {
    greeting::emit().context("failed to write greeting to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_args() {
        let cli = Cli::try_parse_from(["greet"]).unwrap();
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_parse_collects_ignored_args() {
        let cli = Cli::try_parse_from(["greet", "foo", "-x", "bar"]).unwrap();
        assert_eq!(cli.args, vec!["foo", "-x", "bar"]);
    }

    #[test]
    fn test_help_and_version_are_not_flags() {
        for flag in ["--help", "-h", "--version", "-V"] {
            assert!(Cli::try_parse_from(["greet", flag]).is_ok(), "{}", flag);
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
