// ABOUTME: Entry point for the xrruntime CLI application.
// ABOUTME: Discovers runtimes, then dispatches list/help/init and runtime selection switches.

mod cli;
mod output;

use clap::Parser;
use cli::Cli;
use output::{Output, OutputMode};
use tracing_subscriber::EnvFilter;
use xrruntime::config::{self, TemplateStatus};
use xrruntime::error::{Error, Result};
use xrruntime::runtime::{Discovery, SelectionError, discover, normalize_flag};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let output = Output::new(if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Normal
    });
    let config_path = cli.config.clone().or_else(config::config_path);

    if cli.init {
        match config_path.as_deref() {
            Some(path) => match config::ensure_config_exists(path) {
                Ok(TemplateStatus::Created) => {
                    output.message(&format!("Created runtime list at {}", path.display()));
                }
                Ok(TemplateStatus::AlreadyExists) => {
                    output.message(&format!("Runtime list already exists at {}", path.display()));
                }
                // Discovery still works from the defaults.
                Err(e) => output.error(&e.to_string())?,
            },
            None => output.error(&Error::NoConfigPath.to_string())?,
        }
    }

    let Discovery { runtimes, .. } = discover(config_path.as_deref());

    if cli.is_empty() {
        output.help(&runtimes);
        return Ok(());
    }
    if cli.list {
        output.runtimes(&runtimes)?;
    }
    if cli.help {
        output.help(&runtimes);
    }

    for arg in &cli.runtimes {
        match normalize_flag(arg).to_ascii_lowercase().as_str() {
            "list" | "l" => output.runtimes(&runtimes)?,
            "help" | "h" | "?" => output.help(&runtimes),
            name => match runtimes.select(name) {
                Ok(runtime) => output.selected(runtime)?,
                Err(e @ SelectionError::NotPresent { .. }) => output.error(&e.to_string())?,
                Err(SelectionError::Unknown { .. }) => output.help(&runtimes),
            },
        }
    }

    Ok(())
}
