// server/src/cli/cli.rs

// Entry point of the clinic shell: parses arguments, loads the config,
// initializes logging and hands a freshly seeded clinic to the interactive
// session.

use anyhow::{anyhow, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rustyline::DefaultEditor;
use std::io;

use clinic_lib::Clinic;

use crate::cli::commands::CliArgs;
use crate::cli::config::{load_cli_config, CliConfig, LoggingConfig};
use crate::cli::interactive::Shell;

/// Applies command-line overrides on top of the loaded config.
pub fn resolve_config(args: &CliArgs) -> Result<CliConfig> {
    let mut config = load_cli_config(args.config.as_deref())?;
    if let Some(attempts) = args.max_attempts {
        config.shell.max_login_attempts = attempts;
    }
    Ok(config)
}

const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Builds the logger without installing it. The variable named by
/// `filter_var` wins over the config file; `verbose` ignores both and logs
/// every module at debug.
fn logger_builder(logging: &LoggingConfig, verbose: bool, filter_var: &str) -> env_logger::Builder {
    if verbose {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Debug);
        return builder;
    }
    let env = env_logger::Env::default().filter_or(filter_var, logging.level.trim());
    env_logger::Builder::from_env(env)
}

pub fn init_logging(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    logger_builder(logging, verbose, LOG_FILTER_VAR)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    let config = resolve_config(&args)?;
    init_logging(&config.logging, args.verbose)?;

    let clinic = Clinic::seeded()?;
    info!(
        "Clinic initialized with {} patients and {} accounts",
        clinic.patients().len(),
        clinic.access().all_roles().len()
    );

    let editor = DefaultEditor::new().map_err(|e| anyhow!("Failed to open terminal: {}", e))?;
    let mut shell = Shell::new(clinic, editor, io::stdout(), config.shell);
    shell.run()
}
