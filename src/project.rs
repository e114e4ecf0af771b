//! Project grouping for tasks.
//!
//! A project is a named, ordered list of tasks. Names are not guaranteed
//! unique across the state; operations that address a project by name act on
//! the first match.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A named grouping of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Create an empty project. Returns `None` for a blank name.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Project {
            name: name.to_string(),
            tasks: Vec::new(),
        })
    }

    /// Indices of this project's tasks for one board, sorted by due date.
    /// `completed` selects the board: `false` for active, `true` for done.
    pub fn board_tasks(&self, completed: bool) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.completed == completed)
            .map(|(i, _)| i)
            .collect();
        indices.sort_by_key(|&i| self.tasks[i].sort_key());
        indices
    }

    /// Count of tasks still open.
    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Find a task by title, case-insensitive. First match wins.
    pub fn find_task(&self, title: &str) -> Option<usize> {
        self.tasks
            .iter()
            .position(|t| t.title.eq_ignore_ascii_case(title.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Project {
        let mut p = Project::new("Thesis").unwrap();
        p.tasks.push(Task::new("no date", None).unwrap());
        p.tasks.push(Task::new("late", Some(date("2026-09-30"))).unwrap());
        p.tasks.push(Task::new("early", Some(date("2026-09-01"))).unwrap());
        let mut done = Task::new("finished", Some(date("2026-08-01"))).unwrap();
        done.completed = true;
        p.tasks.push(done);
        p
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Project::new("  ").is_none());
    }

    #[test]
    fn test_board_filter_and_order() {
        let p = sample();
        let active = p.board_tasks(false);
        let titles: Vec<&str> = active.iter().map(|&i| p.tasks[i].title.as_str()).collect();
        assert_eq!(titles, vec!["early", "late", "no date"]);

        let done = p.board_tasks(true);
        assert_eq!(done.len(), 1);
        assert_eq!(p.tasks[done[0]].title, "finished");
    }

    #[test]
    fn test_undated_ties_keep_insertion_order() {
        let mut p = Project::new("P").unwrap();
        p.tasks.push(Task::new("first", None).unwrap());
        p.tasks.push(Task::new("second", None).unwrap());
        let order = p.board_tasks(false);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_find_task_case_insensitive() {
        let p = sample();
        assert_eq!(p.find_task("EARLY"), Some(2));
        assert_eq!(p.find_task("missing"), None);
    }

    #[test]
    fn test_open_count() {
        assert_eq!(sample().open_count(), 3);
    }
}
