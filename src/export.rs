//! To-do list export in plain text and PDF.
//!
//! Both renderings share the same selection rules: a subset of projects
//! (default all), completed tasks only on request, and tasks ordered by the
//! usual due-date invariant (dated ascending, undated last).

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

use crate::state::AppState;
use crate::task::Task;

const RULE_WIDTH: usize = 32;

/// Faults while writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not render PDF: {0}")]
    Pdf(String),
}

/// What to include in an export.
#[derive(Debug, Default)]
pub struct ExportOptions {
    /// Project names to include; empty means all projects.
    pub projects: Vec<String>,
    /// Include completed tasks (text export only; the PDF is an active
    /// to-do list by definition).
    pub include_completed: bool,
}

impl ExportOptions {
    fn selects(&self, name: &str) -> bool {
        self.projects.is_empty()
            || self
                .projects
                .iter()
                .any(|p| p.eq_ignore_ascii_case(name))
    }
}

fn sorted_tasks<'a>(tasks: &'a [Task], include_completed: bool) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks
        .iter()
        .filter(|t| include_completed || !t.completed)
        .collect();
    out.sort_by_key(|t| t.sort_key());
    out
}

/// Render the plain-text to-do list.
///
/// Projects that end up with no tasks after filtering are skipped entirely.
pub fn render_todo_text(state: &AppState, opts: &ExportOptions, today: NaiveDate) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("Taskboard - To-Do List".to_string());
    lines.push(format!("Generated: {today}"));
    lines.push(String::new());

    for project in &state.projects {
        if !opts.selects(&project.name) {
            continue;
        }
        let tasks = sorted_tasks(&project.tasks, opts.include_completed);
        if tasks.is_empty() {
            continue;
        }

        lines.push("=".repeat(RULE_WIDTH));
        lines.push(format!("PROJECT: {}", project.name));
        lines.push("-".repeat(RULE_WIDTH));
        for t in tasks {
            let marker = if t.completed { "[x]" } else { "[ ]" };
            let due = t
                .due
                .map(|d| format!("  Due: {d}"))
                .unwrap_or_default();
            lines.push(format!("{marker} {}{due}", t.title));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Write the plain-text to-do list to `path`.
pub fn export_text(
    state: &AppState,
    opts: &ExportOptions,
    path: &Path,
    today: NaiveDate,
) -> Result<(), ExportError> {
    let body = render_todo_text(state, opts, today);
    fs::write(path, body).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

// A4 page geometry in millimetres, with a simple line-per-task flow.
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const TOP_Y: f32 = 277.0;
const BOTTOM_Y: f32 = 20.0;
const LINE_STEP: f32 = 6.0;
const HEADING_STEP: f32 = 10.0;

/// Write the active to-do list as a single flowing PDF document.
pub fn export_pdf(
    state: &AppState,
    opts: &ExportOptions,
    path: &Path,
    today: NaiveDate,
) -> Result<(), ExportError> {
    let (doc, page, layer) = PdfDocument::new("To-Do List", Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let head_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = TOP_Y;

    layer.use_text("To-Do List", 16.0, Mm(MARGIN_LEFT), Mm(y), &head_font);
    y -= LINE_STEP;
    layer.use_text(
        format!("Generated: {today}"),
        10.0,
        Mm(MARGIN_LEFT),
        Mm(y),
        &body_font,
    );
    y -= HEADING_STEP;

    let mut next_line = |doc: &printpdf::PdfDocumentReference,
                         layer: &mut printpdf::PdfLayerReference,
                         y: &mut f32,
                         step: f32| {
        *y -= step;
        if *y < BOTTOM_Y {
            let (page, new_layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
            *layer = doc.get_page(page).get_layer(new_layer);
            *y = TOP_Y;
        }
    };

    for project in &state.projects {
        if !opts.selects(&project.name) {
            continue;
        }
        // The PDF is a working to-do list: active tasks only.
        let tasks = sorted_tasks(&project.tasks, false);
        if tasks.is_empty() {
            continue;
        }

        layer.use_text(project.name.as_str(), 13.0, Mm(MARGIN_LEFT), Mm(y), &head_font);
        for t in tasks {
            next_line(&doc, &mut layer, &mut y, LINE_STEP);
            let due = t.due.map(|d| format!(" - due {d}")).unwrap_or_default();
            layer.use_text(
                format!("[ ] {}{due}", t.title),
                11.0,
                Mm(MARGIN_LEFT + 4.0),
                Mm(y),
                &body_font,
            );
        }
        next_line(&doc, &mut layer, &mut y, HEADING_STEP);
    }

    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Pdf(e.to_string()))
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
        state.add_project("Empty").unwrap();
        state.add_project("Admin").unwrap();

        let thesis = &mut state.projects[0];
        thesis
            .tasks
            .push(Task::new("revise chapter 2", Some(date("2026-09-10"))).unwrap());
        thesis.tasks.push(Task::new("order printing", None).unwrap());
        let mut done = Task::new("submit outline", Some(date("2026-08-01"))).unwrap();
        done.completed = true;
        thesis.tasks.push(done);

        state.projects[2]
            .tasks
            .push(Task::new("renew library card", Some(date("2026-09-01"))).unwrap());
        state
    }

    #[test]
    fn test_text_export_layout() {
        let state = sample_state();
        let opts = ExportOptions::default();
        let out = render_todo_text(&state, &opts, date("2026-08-29"));
        let expected = "\
Taskboard - To-Do List
Generated: 2026-08-29

================================
PROJECT: Thesis
--------------------------------
[ ] revise chapter 2  Due: 2026-09-10
[ ] order printing

================================
PROJECT: Admin
--------------------------------
[ ] renew library card  Due: 2026-09-01
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_text_export_includes_completed_on_request() {
        let state = sample_state();
        let opts = ExportOptions {
            include_completed: true,
            ..Default::default()
        };
        let out = render_todo_text(&state, &opts, date("2026-08-29"));
        assert!(out.contains("[x] submit outline  Due: 2026-08-01"));
        // Completed-but-dated still sorts before the undated task.
        let x = out.find("[x] submit outline").unwrap();
        let undated = out.find("[ ] order printing").unwrap();
        assert!(x < undated);
    }

    #[test]
    fn test_text_export_project_selection() {
        let state = sample_state();
        let opts = ExportOptions {
            projects: vec!["admin".to_string()],
            ..Default::default()
        };
        let out = render_todo_text(&state, &opts, date("2026-08-29"));
        assert!(out.contains("PROJECT: Admin"));
        assert!(!out.contains("PROJECT: Thesis"));
    }

    #[test]
    fn test_pdf_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.pdf");
        let state = sample_state();
        export_pdf(&state, &ExportOptions::default(), &path, date("2026-08-29")).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
