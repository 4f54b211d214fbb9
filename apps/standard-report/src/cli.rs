//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "standard-report",
    version,
    about = "Ruby Standard Style offense reporter",
    long_about = "standard-report renders a linting engine's JSON offense report as a Ruby Standard Style summary.\n\nConfiguration precedence: CLI > standard-report.toml > defaults.",
    after_help = "Examples:\n  rubocop --format json | standard-report report\n  standard-report report --input tmp/rubocop.json --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current standard-report version."
    )]
    Version,
    /// Render an offense report
    #[command(
        about = "Render an offense report",
        long_about = "Read a RuboCop JSON report and print uncorrected offenses. Exits 1 when any are found.",
        after_help = "Examples:\n  standard-report report --input tmp/rubocop.json\n  standard-report report --output json < tmp/rubocop.json"
    )]
    Report {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Path to the JSON report; '-' or absent reads stdin")]
        input: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Print paths as given instead of relative to the current dir")]
        absolute_paths: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_flags() {
        let cli = Cli::try_parse_from([
            "standard-report",
            "report",
            "--input",
            "r.json",
            "--output",
            "json",
            "--absolute-paths",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Report {
                repo_root,
                input,
                output,
                absolute_paths,
            } => {
                assert!(repo_root.is_none());
                assert_eq!(input.as_deref(), Some("r.json"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(absolute_paths);
            }
            Commands::Version => panic!("expected report"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["standard-report"]).is_err());
    }
}
