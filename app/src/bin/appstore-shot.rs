//! CLI entry point: `appstore-shot <input_image> [size]`.
//!
//! Exits with 1 on any failure, including usage errors.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use appstore_shot_lib::{Cli, ComposeError, produce};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also land here, on stdout
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.downcast_ref::<ComposeError>().is_some_and(ComposeError::is_usage) {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::debug!(input = %cli.input.display(), size = %cli.size, "Starting");

    let output = produce(&cli.input, cli.size)?;
    println!("Created: {}", output.display());

    let (w, h) = cli.size.dimensions();
    println!("\nOutput size: {w}x{h}");
    Ok(())
}
