//! Enumerations for TUI state management.

/// Which of the two boards is showing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Board {
    Active,
    Completed,
}

impl Board {
    /// Whether this board shows completed tasks.
    pub fn shows_completed(self) -> bool {
        matches!(self, Board::Completed)
    }

    /// The other board.
    pub fn toggled(self) -> Board {
        match self {
            Board::Active => Board::Completed,
            Board::Completed => Board::Active,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Board::Active => "ACTIVE",
            Board::Completed => "COMPLETED",
        }
    }
}

/// What the board view is currently doing.
#[derive(Clone, PartialEq, Debug)]
pub enum Mode {
    /// Normal board navigation.
    Board,
    /// Task form popup; `Some` holds the (project, task) being edited.
    TaskForm(Option<(usize, usize)>),
    /// Project name popup; `Some` holds the project being renamed.
    ProjectName(Option<usize>),
    /// Confirm deleting the selected task.
    ConfirmDeleteTask,
    /// Confirm deleting the selected project and everything in it.
    ConfirmDeleteProject,
}
