//! Order tracker command-line entry point.
//!
//! # Responsibility
//! - Read deployment configuration from flags/environment.
//! - Open the store before any command runs; init failure exits non-zero.
//! - Print operation results as JSON on stdout.

mod args;
mod commands;

use anyhow::{Context, Result};
use args::{Cli, Command};
use clap::Parser;
use log::error;
use ordertrack_core::{
    core_version, default_log_level, init_logging, open_db, ping, BreakingJobService,
    LoadingJobService,
};
use rusqlite::Connection;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let output = match cli.command {
        Command::Ping => serde_json::Value::from(ping()),
        Command::Version => serde_json::Value::from(core_version()),
        Command::Breaking { op } => {
            let conn = open_store(&cli.db_file)?;
            commands::run_job_op(&BreakingJobService::sqlite(&conn), op)?
        }
        Command::Loading { op } => {
            let conn = open_store(&cli.db_file)?;
            commands::run_job_op(&LoadingJobService::sqlite(&conn), op)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn open_store(path: &Path) -> Result<Connection> {
    open_db(path).with_context(|| format!("failed to initialize store `{}`", path.display()))
}
