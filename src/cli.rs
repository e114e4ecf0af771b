use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// To-do tracker with per-project boards.
/// Storage is a single JSON file remembered between runs; pass --file to
/// work on a specific one.
#[derive(Parser)]
#[command(name = "tb", version, about = "Project to-do boards in the terminal")]
pub struct Cli {
    /// Path to the JSON store file (overrides the remembered one).
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
