//! kindle CLI - scaffold a TypeScript + React + Vite project from a template
//!
//! This is the main entry point for the kindle command-line interface.

mod cli;
mod commands;
mod output;
mod prompt;

use clap::error::ErrorKind;
use clap::Parser;
use kindle_core::types::InvocationContext;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, USAGE_EXAMPLES};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => exit_on_parse_error(e),
    };

    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        report_error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = InvocationContext::current_dir()?;
    commands::create::run(cli, &cwd).await
}

/// Help and version output exit normally; every other parse error exits 1
fn exit_on_parse_error(e: clap::Error) -> ! {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            output::error(&parse_error_message(&e));
            std::process::exit(1);
        }
    }
}

/// Clap's rendered message without its own `error:` prefix
fn parse_error_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    rendered
        .trim_start_matches("error: ")
        .trim_end()
        .to_string()
}

/// The single place errors are printed
fn report_error(e: &anyhow::Error) {
    output::error(&format!("{:#}", e));
    if is_usage_error(e) {
        eprintln!();
        eprintln!("{}", USAGE_EXAMPLES);
    }
}

fn is_usage_error(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<kindle_core::Error>(),
        Some(kindle_core::Error::MissingDirectory)
    )
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    // Log lines would interleave with prompts, so only warnings by default
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
