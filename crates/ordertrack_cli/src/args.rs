use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ordertrack",
    author,
    version,
    about = "Manage breaking and loading jobs in the order tracker store"
)]
pub struct Cli {
    #[arg(
        long,
        env = "DB_FILE",
        default_value = "orders.db",
        value_name = "PATH",
        help = "SQLite store file, created with its schema if missing"
    )]
    pub db_file: PathBuf,

    #[arg(
        long,
        env = "ORDERTRACK_LOG_LEVEL",
        value_name = "LEVEL",
        help = "trace|debug|info|warn|error (defaults by build mode)"
    )]
    pub log_level: Option<String>,

    #[arg(
        long,
        env = "ORDERTRACK_LOG_DIR",
        value_name = "DIR",
        help = "Absolute directory for rolling log files; logging is off when unset"
    )]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print `pong` to check core linkage
    Ping,
    /// Print the core crate version
    Version,
    /// Operate on breaking jobs
    Breaking {
        #[command(subcommand)]
        op: JobOp,
    },
    /// Operate on loading jobs
    Loading {
        #[command(subcommand)]
        op: JobOp,
    },
}

#[derive(Subcommand, Debug)]
pub enum JobOp {
    /// Print every stored job as a JSON array
    List,
    /// Print one job by id
    Get { id: String },
    /// Store a new job from a JSON object
    Insert {
        #[arg(value_name = "JSON")]
        input: String,
    },
    /// Overwrite the job addressed by id with a JSON object
    Replace {
        id: String,
        #[arg(value_name = "JSON")]
        input: String,
    },
    /// Remove the job addressed by id
    Delete { id: String },
}
