//! Task form for the add/edit popup.
//!
//! Two fields, title and due date, with Tab cycling between them. The form
//! validates on submit and keeps an error message for the popup to show.

use crate::state::parse_due_input;
use crate::task::Task;
use crate::tui::input::TextField;

#[derive(Clone, Copy, PartialEq)]
pub enum FormField {
    Title,
    Due,
}

/// State of the task add/edit form.
pub struct TaskForm {
    pub title: TextField,
    pub due: TextField,
    pub field: FormField,
    pub error: Option<String>,
}

impl TaskForm {
    /// Empty form for adding a task.
    pub fn new() -> Self {
        Self {
            title: TextField::new(),
            due: TextField::new(),
            field: FormField::Title,
            error: None,
        }
    }

    /// Form pre-filled from an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: TextField::with_value(&task.title),
            due: TextField::with_value(
                &task.due.map(|d| d.to_string()).unwrap_or_default(),
            ),
            field: FormField::Title,
            error: None,
        }
    }

    /// Move focus to the other field.
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Title => FormField::Due,
            FormField::Due => FormField::Title,
        };
    }

    /// The field that currently has focus.
    pub fn active_mut(&mut self) -> &mut TextField {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Due => &mut self.due,
        }
    }

    /// Validate the form and build a task. The completed flag is always
    /// false here; the caller preserves it when editing.
    pub fn build(&mut self) -> Option<Task> {
        let due = match self.due.value.trim() {
            "" => None,
            s => match parse_due_input(s) {
                Some(d) => Some(d),
                None => {
                    self.error =
                        Some("Due date not recognised. Try YYYY-MM-DD, 'today', or 'in 3d'.".to_string());
                    return None;
                }
            },
        };

        match Task::new(&self.title.value, due) {
            Some(task) => {
                self.error = None;
                Some(task)
            }
            None => {
                self.error = Some("Title cannot be empty.".to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;

    #[test]
    fn test_build_rejects_blank_title() {
        let mut form = TaskForm::new();
        form.title.handle_key(KeyCode::Char(' '));
        assert!(form.build().is_none());
        assert!(form.error.is_some());
    }

    #[test]
    fn test_build_parses_iso_due() {
        let mut form = TaskForm::new();
        for c in "write intro".chars() {
            form.title.handle_key(KeyCode::Char(c));
        }
        form.toggle_field();
        for c in "2026-09-10".chars() {
            form.due.handle_key(KeyCode::Char(c));
        }
        let task = form.build().unwrap();
        assert_eq!(task.title, "write intro");
        assert_eq!(task.due, NaiveDate::from_ymd_opt(2026, 9, 10));
        assert!(!task.completed);
    }

    #[test]
    fn test_build_flags_bad_due() {
        let mut form = TaskForm::new();
        form.title = TextField::with_value("t");
        form.due = TextField::with_value("whenever");
        assert!(form.build().is_none());
        assert!(form.error.as_deref().unwrap().contains("Due date"));
    }

    #[test]
    fn test_from_task_round_trip() {
        let task = Task::new("draft", NaiveDate::from_ymd_opt(2026, 1, 2)).unwrap();
        let mut form = TaskForm::from_task(&task);
        let rebuilt = form.build().unwrap();
        assert_eq!(rebuilt.title, task.title);
        assert_eq!(rebuilt.due, task.due);
    }
}
