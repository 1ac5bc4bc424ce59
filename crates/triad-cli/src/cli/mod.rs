use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `triad` binary.
#[derive(Debug, Parser)]
#[command(
    name = "triad",
    version,
    about = "Cross-check README, API contract, and tests for behavioral agreement"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["triad", "--format", "json", "--verbose", "schema"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["triad", "config", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["triad", "--format", "xml", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_collects_paths_and_overrides() {
        let cli = Cli::try_parse_from([
            "triad",
            "analyze",
            "service/",
            "--readme",
            "docs/USAGE.txt",
            "--spec",
            "contract.json",
            "--test",
            "checks.js",
            "--offline",
            "--show-context",
        ])
        .expect("cli should parse");

        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.artifacts.paths, vec![PathBuf::from("service/")]);
        assert_eq!(args.artifacts.readme, vec![PathBuf::from("docs/USAGE.txt")]);
        assert_eq!(args.artifacts.spec, vec![PathBuf::from("contract.json")]);
        assert_eq!(args.artifacts.test, vec![PathBuf::from("checks.js")]);
        assert!(args.artifacts.offline);
        assert!(args.show_context);
        assert!(!args.artifacts.parallel);
    }

    #[test]
    fn text_is_the_default_format() {
        let cli = Cli::try_parse_from(["triad", "schema"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
