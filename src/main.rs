//! # Taskboard - Project To-Do Boards
//!
//! A to-do tracker that groups tasks into projects and shows them on two
//! boards, one for active work and one for completed work, with a CLI for
//! scripting and a terminal user interface (TUI) for everyday use.
//!
//! ## Key Features
//!
//! - **Projects and Tasks**: Tasks carry a title, an optional due date, and a
//! completed flag; each task belongs to exactly one project
//! - **Two Boards**: Active and completed boards, each with one column per
//! project, ordered by due date with undated tasks last
//! - **Simple Storage**: One versioned JSON file per board set; the last
//! opened file and a recent-files list are remembered between runs
//! - **Sync Aware**: Warns when cloud-sync "conflicted copy" duplicates of
//! the store file appear next to it
//! - **Export**: Plain-text and PDF to-do list export
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive boards
//! tb ui
//!
//! # Add a task via CLI
//! tb add "Revise chapter 2" --project Thesis --due 2026-09-10
//!
//! # List open tasks
//! tb list
//!
//! # Export the to-do list
//! tb export --pdf
//! ```
//!
//! Configuration is stored in `~/.taskboard/` (or `$TASKBOARD_HOME`); the
//! task data itself lives wherever you keep the JSON store file, which makes
//! it easy to drop into a synced folder.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod conflict;
pub mod export;
pub mod project;
pub mod state;
pub mod task;
pub mod tui {
    pub mod board;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod menu;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use config::{config_dir, Config};

fn main() {
    let cli = Cli::parse();
    let cfg_dir = config_dir();

    // Commands that pick their own store file (or need none at all).
    match &cli.command {
        Commands::Ui => {
            cmd_ui(&cfg_dir, cli.file);
            return;
        }
        Commands::Recent => {
            cmd_recent(&cfg_dir);
            return;
        }
        Commands::Completions { shell } => {
            cmd_completions(*shell);
            return;
        }
        _ => {}
    }

    // Everything else operates on a specific store file: --file wins,
    // otherwise the one remembered from the last run.
    let store_path = cli
        .file
        .or_else(|| Config::load(&cfg_dir).data_file)
        .unwrap_or_else(|| {
            eprintln!("No store file selected.");
            eprintln!("Run 'tb ui' to pick one, or pass --file <path>.");
            std::process::exit(1);
        });

    if let Commands::Conflicts = cli.command {
        cmd_conflicts(&store_path);
        return;
    }

    let mut state = open_store(&store_path, &cfg_dir);

    match cli.command {
        Commands::Ui | Commands::Recent | Commands::Completions { .. } | Commands::Conflicts => {
            unreachable!("handled above")
        }

        Commands::Add { title, project, due } => {
            cmd_add(&mut state, &store_path, title, project, due)
        }

        Commands::List { all, project } => cmd_list(&state, all, project),

        Commands::Complete { title, project } => {
            cmd_complete(&mut state, &store_path, title, project)
        }

        Commands::Reopen { title, project } => {
            cmd_reopen(&mut state, &store_path, title, project)
        }

        Commands::Delete { title, project } => {
            cmd_delete(&mut state, &store_path, title, project)
        }

        Commands::Edit { title, project, rename, due, clear_due } => {
            cmd_edit(&mut state, &store_path, title, project, rename, due, clear_due)
        }

        Commands::Project { action } => cmd_project(&mut state, &store_path, action),

        Commands::Export { output, all, projects, pdf } => {
            cmd_export(&state, output, all, projects, pdf)
        }
    }
}
