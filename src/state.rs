//! Application state and JSON persistence.
//!
//! This module provides the `AppState` root that owns every project, the
//! load/save path for the single JSON store file, and the date utilities the
//! CLI and TUI share for due-date input and display.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::project::Project;
use crate::task::Task;

/// Version written into the store envelope.
pub const STATE_VERSION: u32 = 1;

/// Faults while reading or writing the store or config files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Root of all persisted data: an ordered list of projects.
#[derive(Debug, Serialize)]
pub struct AppState {
    pub version: u32,
    pub projects: Vec<Project>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            version: STATE_VERSION,
            projects: Vec::new(),
        }
    }
}

// Older files may carry a null `completed` (a deletion marker the original
// writer was never supposed to emit) or blank names. Loading goes through
// these raw shapes and normalises, rather than rejecting old files.
#[derive(Deserialize)]
struct RawState {
    #[serde(default)]
    projects: Vec<RawProject>,
}

#[derive(Deserialize)]
struct RawProject {
    name: Option<String>,
    #[serde(default)]
    tasks: Vec<RawTask>,
}

#[derive(Deserialize)]
struct RawTask {
    title: Option<String>,
    #[serde(default, alias = "due_date")]
    due: Option<NaiveDate>,
    // Missing -> false; explicit null -> deleted sentinel, task is dropped.
    #[serde(default, deserialize_with = "nullable_flag")]
    completed: Option<Option<bool>>,
}

fn nullable_flag<'de, D>(de: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

impl RawState {
    fn normalise(self) -> AppState {
        let projects = self
            .projects
            .into_iter()
            .map(|p| {
                let name = p
                    .name
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| "Untitled".to_string());
                let tasks = p
                    .tasks
                    .into_iter()
                    .filter_map(|t| {
                        let completed = match t.completed {
                            // `"completed": null` marked deletion in the
                            // original format; drop the task.
                            Some(None) => return None,
                            Some(Some(c)) => c,
                            None => false,
                        };
                        let title = t
                            .title
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .unwrap_or_else(|| "Untitled Task".to_string());
                        Some(Task {
                            title,
                            due: t.due,
                            completed,
                        })
                    })
                    .collect();
                Project { name, tasks }
            })
            .collect();
        AppState {
            version: STATE_VERSION,
            projects,
        }
    }
}

impl AppState {
    /// Load state from a JSON store file. A missing file yields a fresh empty
    /// state written back to disk; a present but unreadable or corrupt file is
    /// a hard error so that user data is never silently clobbered.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            let state = AppState::default();
            state.save(path)?;
            return Ok(state);
        }
        let buf = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let raw: RawState = serde_json::from_str(&buf).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(raw.normalise())
    }

    /// Save state to the store file using atomic write (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(self).unwrap();
        let mut f = File::create(&tmp).map_err(|e| StoreError::io(&tmp, e))?;
        f.write_all(data.as_bytes())
            .and_then(|_| f.flush())
            .map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
        Ok(())
    }

    /// Find a project by name, case-insensitive. First match wins; project
    /// names are not guaranteed unique.
    pub fn find_project(&self, name: &str) -> Option<usize> {
        self.projects
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Append a new empty project. Fails on a blank name.
    pub fn add_project(&mut self, name: &str) -> Result<(), String> {
        let project = Project::new(name).ok_or("Project name cannot be empty")?;
        self.projects.push(project);
        Ok(())
    }

    /// Rename the first project matching `old`.
    pub fn rename_project(&mut self, old: &str, new: &str) -> Result<(), String> {
        let idx = self
            .find_project(old)
            .ok_or_else(|| format!("No project named '{old}'"))?;
        self.rename_project_at(idx, new)
    }

    /// Rename the project at `idx`. Names are not unique, so callers that
    /// already hold an index (the board view) must not go through name
    /// lookup, or a duplicate earlier in the list would be renamed instead.
    pub fn rename_project_at(&mut self, idx: usize, new: &str) -> Result<(), String> {
        let new = new.trim();
        if new.is_empty() {
            return Err("Project name cannot be empty".into());
        }
        self.projects[idx].name = new.to_string();
        Ok(())
    }

    /// Remove the first project matching `name`, with all its tasks.
    pub fn delete_project(&mut self, name: &str) -> Result<Project, String> {
        let idx = self
            .find_project(name)
            .ok_or_else(|| format!("No project named '{name}'"))?;
        Ok(self.projects.remove(idx))
    }
}

/// Resolve a task by title for the name-addressed CLI commands.
///
/// When `project` is given the search is scoped to that project, otherwise
/// all projects are searched. More than one match across projects is an
/// error asking the caller to scope with `--project`.
pub fn resolve_task(
    state: &AppState,
    project: Option<&str>,
    title: &str,
) -> Result<(usize, usize), String> {
    if let Some(name) = project {
        let pi = state
            .find_project(name)
            .ok_or_else(|| format!("No project named '{name}'"))?;
        let ti = state.projects[pi]
            .find_task(title)
            .ok_or_else(|| format!("No task titled '{title}' in project '{name}'"))?;
        return Ok((pi, ti));
    }

    let matches: Vec<(usize, usize)> = state
        .projects
        .iter()
        .enumerate()
        .filter_map(|(pi, p)| p.find_task(title).map(|ti| (pi, ti)))
        .collect();
    match matches.len() {
        0 => Err(format!("No task titled '{title}'")),
        1 => Ok(matches[0]),
        _ => {
            let mut msg = format!("Multiple tasks titled '{title}':\n");
            for &(pi, _) in &matches {
                msg.push_str(&format!("  in project '{}'\n", state.projects[pi].name));
            }
            msg.push_str("Use --project to pick one.");
            Err(msg)
        }
    }
}

/// Parse human-readable due date input.
///
/// Supports "today", "tomorrow", "in Nd" / "in Nw", bare or "next" weekday
/// names, and the ISO "YYYY-MM-DD" format.
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }
    let today = Local::now().date_naive();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(n) = rest.strip_suffix('d') {
            if let Ok(days) = n.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
        if let Some(n) = rest.strip_suffix('w') {
            if let Ok(weeks) = n.trim().parse::<i64>() {
                return Some(today + Duration::weeks(weeks));
            }
        }
    }

    let weekdays = [
        ("monday", 0),
        ("tuesday", 1),
        ("wednesday", 2),
        ("thursday", 3),
        ("friday", 4),
        ("saturday", 5),
        ("sunday", 6),
    ];
    for (name, target) in weekdays {
        let current = today.weekday().num_days_from_monday() as i64;
        let ahead = (target + 7 - current) % 7;
        if s == name {
            return Some(today + Duration::days(ahead));
        }
        if s == format!("next {name}") {
            let days = if ahead == 0 { 7 } else { ahead + 7 };
            return Some(today + Duration::days(days));
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "-".into(),
        Some(d) => {
            let days = (d - today).num_days();
            match days {
                0 => "today".into(),
                1 => "tomorrow".into(),
                n if n > 1 => format!("in {n}d"),
                n => format!("{}d late", -n),
            }
        }
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

/// Print tasks in a formatted table, one row per (project, task) pair.
pub fn print_task_table(rows: &[(&str, &Task)]) {
    println!(
        "{:<18} {:<6} {:<12} {:<10} {}",
        "Project", "Done", "Due", "When", "Title"
    );
    let today = Local::now().date_naive();
    for (project, t) in rows {
        let done = if t.completed { "[x]" } else { "[ ]" };
        let due = t.due.map(|d| d.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "{:<18} {:<6} {:<12} {:<10} {}",
            truncate(project, 18),
            done,
            due,
            format_due_relative(t.due, today),
            t.title
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        state.add_project("Thesis").unwrap();
        state.add_project("Admin").unwrap();
        state.projects[0]
            .tasks
            .push(Task::new("draft chapter", Some(date("2026-09-15"))).unwrap());
        state.projects[1]
            .tasks
            .push(Task::new("file expenses", None).unwrap());
        state
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        let state = sample_state();
        state.save(&path).unwrap();

        let loaded = AppState::load(&path).unwrap();
        assert_eq!(loaded.version, STATE_VERSION);
        assert_eq!(loaded.projects, state.projects);
        // No temp file left behind by the atomic write.
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_missing_creates_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.json");
        let state = AppState::load(&path).unwrap();
        assert!(state.projects.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            AppState::load(&path),
            Err(StoreError::Parse { .. })
        ));
        // Original bytes untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn test_load_legacy_null_completed_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        fs::write(
            &path,
            r#"{
  "version": 1,
  "projects": [
    {
      "name": "Thesis",
      "tasks": [
        {"title": "keep me", "due_date": "2026-09-01", "completed": false},
        {"title": null, "due_date": null, "completed": null},
        {"title": "   ", "due_date": null, "completed": true}
      ]
    },
    {"name": "  ", "tasks": []}
  ]
}"#,
        )
        .unwrap();

        let state = AppState::load(&path).unwrap();
        assert_eq!(state.projects.len(), 2);
        let thesis = &state.projects[0];
        assert_eq!(thesis.tasks.len(), 2);
        assert_eq!(thesis.tasks[0].title, "keep me");
        assert_eq!(thesis.tasks[0].due, Some(date("2026-09-01")));
        assert_eq!(thesis.tasks[1].title, "Untitled Task");
        assert!(thesis.tasks[1].completed);
        assert_eq!(state.projects[1].name, "Untitled");
    }

    #[test]
    fn test_project_crud() {
        let mut state = sample_state();
        assert_eq!(state.find_project("thesis"), Some(0));

        state.rename_project("Admin", "Paperwork").unwrap();
        assert_eq!(state.projects[1].name, "Paperwork");
        assert!(state.rename_project("Paperwork", " ").is_err());

        // With duplicate names, index-based rename touches exactly the
        // addressed project.
        state.add_project("thesis").unwrap();
        state.rename_project_at(2, "Archive").unwrap();
        assert_eq!(state.projects[0].name, "Thesis");
        assert_eq!(state.projects[2].name, "Archive");
        assert!(state.rename_project_at(2, "  ").is_err());

        let removed = state.delete_project("Thesis").unwrap();
        assert_eq!(removed.tasks.len(), 1);
        assert_eq!(state.projects.len(), 1);
        assert!(state.delete_project("Thesis").is_err());
    }

    #[test]
    fn test_resolve_task_scoped_and_ambiguous() {
        let mut state = sample_state();
        assert_eq!(resolve_task(&state, None, "draft chapter"), Ok((0, 0)));
        assert_eq!(
            resolve_task(&state, Some("Admin"), "file expenses"),
            Ok((1, 0))
        );
        assert!(resolve_task(&state, None, "missing").is_err());

        // Same title in two projects is ambiguous without a scope.
        state.projects[1]
            .tasks
            .push(Task::new("draft chapter", None).unwrap());
        let err = resolve_task(&state, None, "draft chapter").unwrap_err();
        assert!(err.contains("--project"));
        assert_eq!(
            resolve_task(&state, Some("Thesis"), "draft chapter"),
            Ok((0, 0))
        );
    }

    #[test]
    fn test_parse_due_input() {
        let today = Local::now().date_naive();
        assert_eq!(parse_due_input("today"), Some(today));
        assert_eq!(parse_due_input("Tomorrow"), Some(today + Duration::days(1)));
        assert_eq!(parse_due_input("in 3d"), Some(today + Duration::days(3)));
        assert_eq!(parse_due_input("in 2w"), Some(today + Duration::weeks(2)));
        assert_eq!(parse_due_input("2026-12-24"), Some(date("2026-12-24")));
        assert_eq!(parse_due_input("not a date"), None);
        assert_eq!(parse_due_input(""), None);

        let friday = parse_due_input("friday").unwrap();
        assert_eq!(friday.weekday().num_days_from_monday(), 4);
        assert!(friday >= today);
        let next_friday = parse_due_input("next friday").unwrap();
        assert!(next_friday > friday || friday == today);
    }

    #[test]
    fn test_format_due_relative() {
        let today = date("2026-08-29");
        assert_eq!(format_due_relative(None, today), "-");
        assert_eq!(format_due_relative(Some(today), today), "today");
        assert_eq!(
            format_due_relative(Some(date("2026-08-30")), today),
            "tomorrow"
        );
        assert_eq!(format_due_relative(Some(date("2026-09-03")), today), "in 5d");
        assert_eq!(
            format_due_relative(Some(date("2026-08-27")), today),
            "2d late"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer name", 8), "a longe…");
    }
}
