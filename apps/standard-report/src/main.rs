//! standard-report CLI binary entry point.
//! Reads the offense report, renders it, and maps the outcome to an exit code.

use clap::Parser;
use standard_report::cli::{Cli, Commands};
use standard_report::error::{Error, ExitCode, Result};
use standard_report::{config, input, output, utils};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_env("STANDARD_REPORT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            ExitCode::from(&e)
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::Success)
        }
        Commands::Report {
            repo_root,
            input: input_path,
            output: output_mode,
            absolute_paths,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                input_path.as_deref(),
                output_mode.as_deref(),
                if absolute_paths { Some(false) } else { None },
            )?;
            tracing::debug!(
                root = %eff.repo_root.display(),
                output = %eff.output,
                relative_paths = eff.relative_paths,
                "resolved config"
            );
            let data = input::read_source(eff.input.as_deref())?;
            let files = input::parse_report(&data)?;
            if files.is_empty() {
                eprintln!("{} report lists no inspected files", utils::note_prefix());
            }

            let base_dir = if eff.relative_paths {
                Some(std::env::current_dir().map_err(|source| Error::Io {
                    path: ".".into(),
                    source,
                })?)
            } else {
                None
            };
            let stdout = std::io::stdout();
            let summary =
                output::print_report(&files, &eff.output, stdout.lock(), base_dir.as_deref())
                    .map_err(|source| Error::Io {
                        path: "<stdout>".into(),
                        source,
                    })?;

            Ok(ExitCode::for_summary(&summary))
        }
    }
}
