//! Command implementations for the CLI interface.
//!
//! This module contains all the command handlers behind the subcommands,
//! from task and project CRUD through export, recent-file listing, conflict
//! scanning, and the TUI entry point.

use clap::Subcommand;
use clap_complete::{generate, Shell};

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::Config;
use crate::conflict::conflict_candidates;
use crate::export::{export_pdf, export_text, ExportOptions};
use crate::state::{parse_due_input, print_task_table, resolve_task, AppState};
use crate::task::Task;
use crate::tui::board::BoardExit;
use crate::tui::run::{run_board, run_start_menu};

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive board UI.
    Ui,

    /// Add a new task.
    Add {
        /// Task title.
        title: String,
        /// Project to add to (defaults to the first project).
        #[arg(long)]
        project: Option<String>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", "in Nd", or a weekday.
        #[arg(long)]
        due: Option<String>,
    },

    /// List tasks across projects.
    List {
        /// Include completed tasks.
        #[arg(long)]
        all: bool,
        /// Only this project.
        #[arg(long)]
        project: Option<String>,
    },

    /// Mark a task completed.
    Complete {
        /// Task title.
        title: String,
        /// Project scope when the title is ambiguous.
        #[arg(long)]
        project: Option<String>,
    },

    /// Reopen a completed task.
    Reopen {
        /// Task title.
        title: String,
        /// Project scope when the title is ambiguous.
        #[arg(long)]
        project: Option<String>,
    },

    /// Delete a task.
    Delete {
        /// Task title.
        title: String,
        /// Project scope when the title is ambiguous.
        #[arg(long)]
        project: Option<String>,
    },

    /// Edit a task's title or due date.
    Edit {
        /// Task title.
        title: String,
        /// Project scope when the title is ambiguous.
        #[arg(long)]
        project: Option<String>,
        /// New title.
        #[arg(long)]
        rename: Option<String>,
        /// New due date.
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date.
        #[arg(long)]
        clear_due: bool,
    },

    /// Manage projects.
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Export the to-do list as text or PDF.
    Export {
        /// Output file path (default: todo.txt, or todo.pdf with --pdf).
        #[arg(long, short)]
        output: Option<String>,
        /// Include completed tasks (text export only).
        #[arg(long)]
        all: bool,
        /// Only these projects. May be repeated.
        #[arg(long = "project")]
        projects: Vec<String>,
        /// Write a PDF instead of plain text.
        #[arg(long)]
        pdf: bool,
    },

    /// List recently opened store files.
    Recent,

    /// Scan for cloud-sync conflict copies next to the store file.
    Conflicts,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a new project.
    Add {
        /// Project name.
        name: String,
    },
    /// Rename a project.
    Rename {
        /// Current name.
        old: String,
        /// New name.
        new: String,
    },
    /// Delete a project and all its tasks.
    Delete {
        /// Project name.
        name: String,
    },
    /// List projects with open-task counts.
    List,
}

fn save_or_exit(state: &AppState, path: &Path) {
    if let Err(e) = state.save(path) {
        eprintln!("Failed to save store: {e}");
        eprintln!("The file may be read-only or locked by sync software.");
        std::process::exit(1);
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

/// Open a store file for a CLI command: load it, remember it in the config,
/// and warn about likely sync-conflict copies.
pub fn open_store(path: &Path, cfg_dir: &Path) -> AppState {
    let state = match AppState::load(path) {
        Ok(s) => s,
        Err(e) => fail(&format!("Could not open store: {e}")),
    };

    let mut cfg = Config::load(cfg_dir);
    cfg.touch_recent(path);
    if let Err(e) = cfg.save(cfg_dir) {
        eprintln!("Warning: could not update config: {e}");
    }

    let hits = conflict_candidates(path);
    if !hits.is_empty() {
        eprintln!("Warning: possible sync conflict copy detected:");
        for h in &hits {
            eprintln!("  {}", h.display());
        }
        eprintln!("Check which file is current before trusting this one.");
    }

    state
}

/// Add a new task to a project.
pub fn cmd_add(
    state: &mut AppState,
    store_path: &Path,
    title: String,
    project: Option<String>,
    due: Option<String>,
) {
    let due = match due {
        Some(ref s) => match parse_due_input(s) {
            Some(d) => Some(d),
            None => fail("Unrecognised due date. Use YYYY-MM-DD, 'today', 'tomorrow', or 'in Nd'."),
        },
        None => None,
    };

    let pi = match project {
        Some(ref name) => match state.find_project(name) {
            Some(i) => i,
            None => fail(&format!("No project named '{name}'")),
        },
        None => {
            if state.projects.is_empty() {
                fail("No projects yet. Create one with: tb project add <name>");
            }
            0
        }
    };

    let Some(task) = Task::new(&title, due) else {
        fail("Task title cannot be empty.");
    };
    let title = task.title.clone();
    state.projects[pi].tasks.push(task);
    save_or_exit(state, store_path);
    println!("Added '{}' to {}", title, state.projects[pi].name);
}

/// List tasks across projects, active by default.
pub fn cmd_list(state: &AppState, all: bool, project: Option<String>) {
    let rows: Vec<(&str, &Task)> = state
        .projects
        .iter()
        .filter(|p| match project {
            Some(ref name) => p.name.eq_ignore_ascii_case(name.trim()),
            None => true,
        })
        .flat_map(|p| {
            let mut tasks: Vec<&Task> = p
                .tasks
                .iter()
                .filter(|t| all || !t.completed)
                .collect();
            tasks.sort_by_key(|t| t.sort_key());
            tasks.into_iter().map(move |t| (p.name.as_str(), t))
        })
        .collect();
    print_task_table(&rows);
}

/// Mark a task completed.
pub fn cmd_complete(state: &mut AppState, store_path: &Path, title: String, project: Option<String>) {
    let (pi, ti) = match resolve_task(state, project.as_deref(), &title) {
        Ok(pos) => pos,
        Err(e) => fail(&e),
    };
    state.projects[pi].tasks[ti].completed = true;
    save_or_exit(state, store_path);
    println!("Completed '{}'", state.projects[pi].tasks[ti].title);
}

/// Reopen a completed task.
pub fn cmd_reopen(state: &mut AppState, store_path: &Path, title: String, project: Option<String>) {
    let (pi, ti) = match resolve_task(state, project.as_deref(), &title) {
        Ok(pos) => pos,
        Err(e) => fail(&e),
    };
    state.projects[pi].tasks[ti].completed = false;
    save_or_exit(state, store_path);
    println!("Reopened '{}'", state.projects[pi].tasks[ti].title);
}

/// Delete a task outright. There is no deleted marker kept around; the task
/// is removed from its project.
pub fn cmd_delete(state: &mut AppState, store_path: &Path, title: String, project: Option<String>) {
    let (pi, ti) = match resolve_task(state, project.as_deref(), &title) {
        Ok(pos) => pos,
        Err(e) => fail(&e),
    };
    let removed = state.projects[pi].tasks.remove(ti);
    save_or_exit(state, store_path);
    println!("Deleted '{}'", removed.title);
}

/// Edit a task's title or due date.
pub fn cmd_edit(
    state: &mut AppState,
    store_path: &Path,
    title: String,
    project: Option<String>,
    rename: Option<String>,
    due: Option<String>,
    clear_due: bool,
) {
    if rename.is_none() && due.is_none() && !clear_due {
        fail("Nothing to change. Pass --rename, --due, or --clear-due.");
    }
    let (pi, ti) = match resolve_task(state, project.as_deref(), &title) {
        Ok(pos) => pos,
        Err(e) => fail(&e),
    };

    if let Some(new_title) = rename {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            fail("Task title cannot be empty.");
        }
        state.projects[pi].tasks[ti].title = new_title.to_string();
    }
    if clear_due {
        state.projects[pi].tasks[ti].due = None;
    }
    if let Some(ref s) = due {
        match parse_due_input(s) {
            Some(d) => state.projects[pi].tasks[ti].due = Some(d),
            None => fail("Unrecognised due date. Use YYYY-MM-DD, 'today', 'tomorrow', or 'in Nd'."),
        }
    }

    save_or_exit(state, store_path);
    println!("Updated '{}'", state.projects[pi].tasks[ti].title);
}

/// Handle project management commands.
pub fn cmd_project(state: &mut AppState, store_path: &Path, action: ProjectAction) {
    match action {
        ProjectAction::Add { name } => {
            if let Err(e) = state.add_project(&name) {
                fail(&e);
            }
            save_or_exit(state, store_path);
            println!("Added project '{}'", name.trim());
        }
        ProjectAction::Rename { old, new } => {
            if let Err(e) = state.rename_project(&old, &new) {
                fail(&e);
            }
            save_or_exit(state, store_path);
            println!("Renamed '{}' to '{}'", old, new.trim());
        }
        ProjectAction::Delete { name } => {
            let removed = match state.delete_project(&name) {
                Ok(p) => p,
                Err(e) => fail(&e),
            };
            save_or_exit(state, store_path);
            println!(
                "Deleted project '{}' and {} task(s)",
                removed.name,
                removed.tasks.len()
            );
        }
        ProjectAction::List => {
            println!("{:<24} {:<6} {}", "Project", "Open", "Total");
            for p in &state.projects {
                println!(
                    "{:<24} {:<6} {}",
                    crate::state::truncate(&p.name, 24),
                    p.open_count(),
                    p.tasks.len()
                );
            }
        }
    }
}

/// Export the to-do list to a text or PDF file.
pub fn cmd_export(
    state: &AppState,
    output: Option<String>,
    all: bool,
    projects: Vec<String>,
    pdf: bool,
) {
    let opts = ExportOptions {
        projects,
        include_completed: all,
    };
    for name in &opts.projects {
        if state.find_project(name).is_none() {
            fail(&format!("No project named '{name}'"));
        }
    }

    let default_name = if pdf { "todo.pdf" } else { "todo.txt" };
    let output = PathBuf::from(output.unwrap_or_else(|| default_name.to_string()));
    let today = Local::now().date_naive();

    let result = if pdf {
        export_pdf(state, &opts, &output, today)
    } else {
        export_text(state, &opts, &output, today)
    };
    match result {
        Ok(()) => println!("Exported to {}", output.display()),
        Err(e) => fail(&format!("Export failed: {e}")),
    }
}

/// List recently opened store files.
pub fn cmd_recent(cfg_dir: &Path) {
    let cfg = Config::load(cfg_dir);
    let recent = cfg.existing_recent();
    if recent.is_empty() {
        println!("No recent files.");
        return;
    }
    for path in recent {
        let marker = if cfg.data_file.as_deref() == Some(&path) {
            "*"
        } else {
            " "
        };
        println!("{marker} {}", path.display());
    }
}

/// Report sync-conflict copies next to the store file.
pub fn cmd_conflicts(store_path: &Path) {
    let hits = conflict_candidates(store_path);
    if hits.is_empty() {
        println!("No conflict copies found.");
    } else {
        println!("Possible sync conflict copies:");
        for h in hits {
            println!("  {}", h.display());
        }
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

/// Launch the board UI: pick a store file (argument, remembered, or via the
/// start menu), then run the boards until the user quits.
pub fn cmd_ui(cfg_dir: &Path, file: Option<PathBuf>) {
    let mut next = file.or_else(|| {
        let cfg = Config::load(cfg_dir);
        cfg.data_file.filter(|p| p.exists())
    });

    loop {
        let path = match next.take() {
            Some(p) => p,
            None => match run_start_menu(cfg_dir) {
                Ok(Some(p)) => p,
                Ok(None) => return,
                Err(e) => fail(&format!("UI error: {e}")),
            },
        };

        let state = match AppState::load(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Could not open {}: {e}", path.display());
                continue; // back to the start menu
            }
        };

        let mut cfg = Config::load(cfg_dir);
        cfg.touch_recent(&path);
        if let Err(e) = cfg.save(cfg_dir) {
            eprintln!("Warning: could not update config: {e}");
        }

        let conflicts = conflict_candidates(&path);
        match run_board(&path, state, conflicts) {
            Ok(BoardExit::Quit) => return,
            Ok(BoardExit::FileMenu) => continue,
            Err(e) => fail(&format!("UI error: {e}")),
        }
    }
}
