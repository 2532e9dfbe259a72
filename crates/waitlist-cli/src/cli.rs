//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Waitlist CLI - Validate and submit waitlist signup forms
///
/// Checks signup fields against the waitlist form's rules and runs the
/// complete submit flow against a simulated or HTTP backend.
#[derive(Parser, Debug)]
#[command(
    name = "waitlist",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "WAITLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a single field value
    Validate(ValidateArgs),

    /// Validate every field of a form file without submitting it
    Check(CheckArgs),

    /// Validate a form file and submit it to the backend
    Submit(SubmitArgs),

    /// Show the field rules in effect
    Rules,

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Field name (firstName, lastName, email; other names always pass)
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Value to validate; omit to validate an absent value
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the form file (JSON or YAML object of field names to values)
    #[arg(value_name = "FORM")]
    pub form: PathBuf,
}

/// Arguments for the submit command
#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Path to the form file (JSON or YAML object of field names to values)
    #[arg(value_name = "FORM")]
    pub form: PathBuf,

    /// Submission endpoint; the simulated backend is used when absent
    #[arg(long, env = "WAITLIST_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Latency of the simulated backend in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Make the simulated backend reject the submission
    #[arg(long, conflicts_with = "endpoint")]
    pub fail: bool,

    /// Give up on the backend after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Skip the analytics event after a successful submission
    #[arg(long)]
    pub no_analytics: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: OutputFormat::Human,
            no_color: false,
            command: Commands::Rules,
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_validate_without_value() {
        let cli = Cli::parse_from(["waitlist", "validate", "email"]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.field, "email");
                assert_eq!(args.value, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_submit_flags() {
        let cli = Cli::parse_from([
            "waitlist",
            "-o",
            "json",
            "submit",
            "form.yaml",
            "--delay-ms",
            "5",
            "--fail",
            "--timeout-secs",
            "2",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.delay_ms, Some(5));
                assert!(args.fail);
                assert_eq!(args.timeout_secs, Some(2));
                assert!(!args.no_analytics);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fail_conflicts_with_endpoint() {
        let result = Cli::try_parse_from([
            "waitlist",
            "submit",
            "form.json",
            "--endpoint",
            "https://example.com",
            "--fail",
        ]);
        assert!(result.is_err());
    }
}
