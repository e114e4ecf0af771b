//! Task data structure and related functionality.
//!
//! A task is the smallest unit of work: a title, an optional due date, and a
//! completion flag. Tasks are owned by their parent [`Project`](crate::project::Project)
//! and carry no identity beyond their position in the project's task list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a task from user input. Returns `None` when the title is blank
    /// after trimming; a task is never committed without a real title.
    pub fn new(title: &str, due: Option<NaiveDate>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Task {
            title: title.to_string(),
            due,
            completed: false,
        })
    }

    /// Key for due-date ordering: dated tasks ascend, undated tasks sort last.
    /// Used with a stable sort so ties keep insertion order.
    pub fn sort_key(&self) -> (bool, NaiveDate) {
        (self.due.is_none(), self.due.unwrap_or(NaiveDate::MAX))
    }

    /// Whether the task's due date has passed relative to `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due.map(|d| d < today).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_blank_titles_rejected() {
        assert!(Task::new("", None).is_none());
        assert!(Task::new("   ", None).is_none());
        assert!(Task::new("\t\n", None).is_none());
    }

    #[test]
    fn test_title_trimmed() {
        let t = Task::new("  write intro  ", None).unwrap();
        assert_eq!(t.title, "write intro");
        assert!(!t.completed);
    }

    #[test]
    fn test_undated_sorts_after_dated() {
        let dated = Task::new("a", Some(date("2026-12-31"))).unwrap();
        let undated = Task::new("b", None).unwrap();
        assert!(dated.sort_key() < undated.sort_key());
    }

    #[test]
    fn test_dated_sorts_ascending() {
        let early = Task::new("a", Some(date("2026-01-02"))).unwrap();
        let late = Task::new("b", Some(date("2026-03-04"))).unwrap();
        assert!(early.sort_key() < late.sort_key());
    }

    #[test]
    fn test_overdue() {
        let today = date("2026-08-29");
        let mut t = Task::new("a", Some(date("2026-08-28"))).unwrap();
        assert!(t.is_overdue(today));
        t.completed = true;
        assert!(!t.is_overdue(today));
        let undated = Task::new("b", None).unwrap();
        assert!(!undated.is_overdue(today));
    }
}
