//! Kanban-style board interface.
//!
//! One column per project, cards ordered by due date with undated tasks
//! last. Two boards share the view: the active board shows open tasks and
//! the completed board shows finished ones. Every mutation saves the store
//! immediately and rebuilds the columns from it.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::state::{format_due_relative, AppState};
use crate::task::Task;
use crate::tui::colors::{ACTIVE_BLUE, DONE_GREEN, OVERDUE_RED, WARN_AMBER};
use crate::tui::enums::{Board, Mode};
use crate::tui::input::TextField;
use crate::tui::task_form::{FormField, TaskForm};
use crate::tui::utils::centered_rect;

/// Return value for the board app to indicate what should happen next.
#[derive(Debug)]
pub enum BoardExit {
    Quit,
    FileMenu,
}

// Idle status-bar quotes, rotated once a minute.
const QUOTES: [&str; 6] = [
    "\u{201c}Opportunity is missed by most people because it is dressed in overalls and looks like work.\u{201d}",
    "\u{201c}I can do hard things.\u{201d}",
    "\u{201c}No shoulda, woulda, coulda.\u{201d}",
    "\u{201c}Done is better than perfect.\u{201d}",
    "\u{201c}Start where you are. Use what you have.\u{201d}",
    "\u{201c}A little progress each day adds up.\u{201d}",
];

const QUOTE_ROTATE_SECS: u64 = 60;

/// Main board application state.
pub struct BoardApp {
    state: AppState,
    store_path: PathBuf,
    board: Board,
    selected_column: usize,
    selected_card: usize,
    scroll_offsets: Vec<usize>,
    status_message: String,
    mode: Mode,
    form: TaskForm,
    name_input: TextField,
    conflicts: Vec<PathBuf>,
    today: NaiveDate,
    open_file_menu: bool,
    quote_index: usize,
    quote_changed: Instant,
    // Tasks on the current board, one column of task indices per project.
    columns: Vec<Vec<usize>>,
}

impl BoardApp {
    /// Create a board app over an already loaded store.
    pub fn new(store_path: &Path, state: AppState, conflicts: Vec<PathBuf>) -> Self {
        let mut app = BoardApp {
            state,
            store_path: store_path.to_path_buf(),
            board: Board::Active,
            selected_column: 0,
            selected_card: 0,
            scroll_offsets: Vec::new(),
            status_message: String::new(),
            mode: Mode::Board,
            form: TaskForm::new(),
            name_input: TextField::new(),
            conflicts,
            today: Local::now().date_naive(),
            open_file_menu: false,
            quote_index: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() as usize)
                .unwrap_or(0)
                % QUOTES.len(),
            quote_changed: Instant::now(),
            columns: Vec::new(),
        };
        app.update_columns();
        app
    }

    /// Accent color for the current board.
    fn accent(&self) -> Color {
        match self.board {
            Board::Active => ACTIVE_BLUE,
            Board::Completed => DONE_GREEN,
        }
    }

    /// Rebuild the columns from the store for the current board.
    fn update_columns(&mut self) {
        self.columns = self
            .state
            .projects
            .iter()
            .map(|p| p.board_tasks(self.board.shows_completed()))
            .collect();
        self.scroll_offsets.resize(self.columns.len(), 0);
        for off in &mut self.scroll_offsets {
            *off = 0;
        }
        self.clamp_selection();
    }

    /// Ensure selected column and card indices are valid.
    fn clamp_selection(&mut self) {
        if self.columns.is_empty() {
            self.selected_column = 0;
            self.selected_card = 0;
            return;
        }
        if self.selected_column >= self.columns.len() {
            self.selected_column = self.columns.len() - 1;
        }
        let column_len = self.columns[self.selected_column].len();
        if column_len == 0 {
            self.selected_card = 0;
            self.scroll_offsets[self.selected_column] = 0;
        } else if self.selected_card >= column_len {
            self.selected_card = column_len - 1;
        }
    }

    /// The (project, task) indices of the selected card, if any.
    fn selected_task(&self) -> Option<(usize, usize)> {
        let column = self.columns.get(self.selected_column)?;
        let task = *column.get(self.selected_card)?;
        Some((self.selected_column, task))
    }

    /// Save the store to disk and rebuild the columns.
    fn save_and_rebuild(&mut self) {
        if let Err(e) = self.state.save(&self.store_path) {
            self.status_message = format!("Error saving: {e}");
        }
        self.update_columns();
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Advance to the next idle quote once the rotation interval has passed.
    fn rotate_quote(&mut self) {
        if self.quote_changed.elapsed().as_secs() >= QUOTE_ROTATE_SECS {
            self.quote_index = (self.quote_index + 1) % QUOTES.len();
            self.quote_changed = Instant::now();
        }
    }

    /// Handle keyboard input. Returns true when the view should close.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.status_message.clear();
                match self.mode.clone() {
                    Mode::Board => return Ok(self.handle_board_input(key.code)),
                    Mode::TaskForm(editing) => self.handle_form_input(key.code, editing),
                    Mode::ProjectName(renaming) => self.handle_name_input(key.code, renaming),
                    Mode::ConfirmDeleteTask => self.handle_confirm_task_input(key.code),
                    Mode::ConfirmDeleteProject => self.handle_confirm_project_input(key.code),
                }
            }
        }
        Ok(false)
    }

    fn handle_board_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Char('o') => {
                self.open_file_menu = true;
                return true;
            }

            // Board switching
            KeyCode::Tab => self.switch_board(self.board.toggled()),
            KeyCode::Char('1') => self.switch_board(Board::Active),
            KeyCode::Char('2') => self.switch_board(Board::Completed),

            // Column and card navigation
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                    self.clamp_selection();
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.columns.len() {
                    self.selected_column += 1;
                    self.clamp_selection();
                }
            }
            KeyCode::Up => {
                if self.selected_card > 0 {
                    self.selected_card -= 1;
                }
            }
            KeyCode::Down => {
                let column_len = self
                    .columns
                    .get(self.selected_column)
                    .map_or(0, |c| c.len());
                if column_len > 0 && self.selected_card < column_len - 1 {
                    self.selected_card += 1;
                }
            }

            // Toggle completion; the card jumps to the other board
            KeyCode::Char(' ') => self.toggle_task_completion(),

            // Task actions
            KeyCode::Char('a') => {
                if self.state.projects.is_empty() {
                    self.set_status_message(
                        "No projects yet. Press n to create one first.".to_string(),
                    );
                } else {
                    self.form = TaskForm::new();
                    self.mode = Mode::TaskForm(None);
                }
            }
            KeyCode::Char('e') => {
                if let Some((pi, ti)) = self.selected_task() {
                    self.form = TaskForm::from_task(&self.state.projects[pi].tasks[ti]);
                    self.mode = Mode::TaskForm(Some((pi, ti)));
                }
            }
            KeyCode::Char('d') => {
                if self.selected_task().is_some() {
                    self.mode = Mode::ConfirmDeleteTask;
                }
            }

            // Project actions
            KeyCode::Char('n') => {
                self.name_input.clear();
                self.mode = Mode::ProjectName(None);
            }
            KeyCode::Char('r') => {
                if !self.state.projects.is_empty() {
                    let name = self.state.projects[self.selected_column].name.clone();
                    self.name_input = TextField::with_value(&name);
                    self.mode = Mode::ProjectName(Some(self.selected_column));
                }
            }
            KeyCode::Char('X') => {
                if !self.state.projects.is_empty() {
                    self.mode = Mode::ConfirmDeleteProject;
                }
            }

            KeyCode::Char('h') => {
                self.set_status_message(
                    "Help: Space: Done | a: Add | e: Edit | d: Delete | n/r/X: Project | Tab: Board | o: File | q: Quit"
                        .to_string(),
                );
            }
            _ => {}
        }
        false
    }

    fn switch_board(&mut self, board: Board) {
        if self.board != board {
            self.board = board;
            self.selected_card = 0;
            self.update_columns();
        }
    }

    /// Flip the selected task between open and completed.
    fn toggle_task_completion(&mut self) {
        let Some((pi, ti)) = self.selected_task() else {
            return;
        };
        let task = &mut self.state.projects[pi].tasks[ti];
        task.completed = !task.completed;
        let msg = if task.completed {
            format!("Completed '{}'", task.title)
        } else {
            format!("Reopened '{}'", task.title)
        };
        self.save_and_rebuild();
        self.set_status_message(msg);
    }

    fn handle_form_input(&mut self, key: KeyCode, editing: Option<(usize, usize)>) {
        match key {
            KeyCode::Esc => self.mode = Mode::Board,
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => self.form.toggle_field(),
            KeyCode::Enter => {
                let Some(task) = self.form.build() else {
                    return;
                };
                match editing {
                    Some((pi, ti)) => {
                        let slot = &mut self.state.projects[pi].tasks[ti];
                        slot.title = task.title;
                        slot.due = task.due;
                        self.set_status_message("Task updated".to_string());
                    }
                    None => {
                        let pi = self.selected_column.min(self.state.projects.len() - 1);
                        self.state.projects[pi].tasks.push(task);
                        self.set_status_message(format!(
                            "Added to {}",
                            self.state.projects[pi].name
                        ));
                    }
                }
                self.mode = Mode::Board;
                self.save_and_rebuild();
            }
            other => {
                self.form.active_mut().handle_key(other);
            }
        }
    }

    fn handle_name_input(&mut self, key: KeyCode, renaming: Option<usize>) {
        match key {
            KeyCode::Esc => self.mode = Mode::Board,
            KeyCode::Enter => {
                let name = self.name_input.value.clone();
                let result = match renaming {
                    // Rename by index: names are not unique, so a name
                    // lookup could hit a duplicate in another column.
                    Some(pi) => self.state.rename_project_at(pi, &name),
                    None => self.state.add_project(&name),
                };
                match result {
                    Ok(()) => {
                        self.mode = Mode::Board;
                        self.save_and_rebuild();
                        if renaming.is_none() {
                            // Jump to the new column
                            self.selected_column = self.columns.len() - 1;
                            self.selected_card = 0;
                        }
                    }
                    Err(e) => self.set_status_message(e),
                }
            }
            other => {
                self.name_input.handle_key(other);
            }
        }
    }

    fn handle_confirm_task_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some((pi, ti)) = self.selected_task() {
                    let removed = self.state.projects[pi].tasks.remove(ti);
                    self.save_and_rebuild();
                    self.set_status_message(format!("Deleted '{}'", removed.title));
                }
                self.mode = Mode::Board;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Board;
            }
            _ => {}
        }
    }

    fn handle_confirm_project_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if self.selected_column < self.state.projects.len() {
                    let removed = self.state.projects.remove(self.selected_column);
                    self.save_and_rebuild();
                    self.set_status_message(format!(
                        "Deleted project '{}' and {} task(s)",
                        removed.name,
                        removed.tasks.len()
                    ));
                }
                self.mode = Mode::Board;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Board;
            }
            _ => {}
        }
    }

    /// Render the full board view.
    fn render(&mut self, f: &mut Frame) {
        self.rotate_quote();
        let banner_height = if self.conflicts.is_empty() { 0 } else { 1 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Header
                Constraint::Length(banner_height), // Conflict banner
                Constraint::Min(0),                // Board
                Constraint::Length(1),             // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        if banner_height > 0 {
            self.render_conflict_banner(f, chunks[1]);
        }
        self.render_board(f, chunks[2]);
        self.render_status_bar(f, chunks[3]);

        match self.mode.clone() {
            Mode::TaskForm(editing) => self.render_task_form(f, editing.is_some()),
            Mode::ProjectName(renaming) => self.render_name_popup(f, renaming.is_some()),
            Mode::ConfirmDeleteTask => self.render_confirm(
                f,
                "Delete Task",
                "This will permanently delete the selected task.",
            ),
            Mode::ConfirmDeleteProject => self.render_confirm(
                f,
                "Delete Project",
                "This will permanently delete the project and all its tasks.",
            ),
            Mode::Board => {}
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let file_name = self
            .store_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?");
        let header_text = vec![Line::from(vec![
            Span::styled(
                format!("{} BOARD", self.board.title()),
                Style::default()
                    .fg(self.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("File: {file_name}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])];

        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn render_conflict_banner(&self, f: &mut Frame, area: Rect) {
        let first = self
            .conflicts
            .first()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("?");
        let text = if self.conflicts.len() == 1 {
            format!("⚠ Sync conflict copy found next to this file: {first}")
        } else {
            format!(
                "⚠ {} sync conflict copies found next to this file, e.g. {first}",
                self.conflicts.len()
            )
        };
        let banner = Paragraph::new(text)
            .style(Style::default().bg(WARN_AMBER).fg(Color::Black))
            .alignment(Alignment::Left);
        f.render_widget(banner, area);
    }

    fn render_board(&mut self, f: &mut Frame, area: Rect) {
        if self.columns.is_empty() {
            let hint = Paragraph::new("No projects yet. Press n to create one.")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center);
            f.render_widget(hint, area);
            return;
        }

        let column_count = self.columns.len();
        let constraints: Vec<Constraint> = (0..column_count)
            .map(|_| Constraint::Ratio(1, column_count as u32))
            .collect();
        let columns_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (i, &column_area) in columns_layout.iter().enumerate() {
            self.render_column(f, column_area, i);
        }
    }

    fn render_column(&mut self, f: &mut Frame, area: Rect, column_index: usize) {
        let is_selected = column_index == self.selected_column;
        let project = &self.state.projects[column_index];
        let title = format!("{} ({})", project.name, self.columns[column_index].len());

        let border_style = if is_selected {
            Style::default()
                .fg(self.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let cards = &self.columns[column_index];
        if cards.is_empty() {
            return;
        }

        let card_height = 4; // borders + title line + due line
        let available_height = inner.height as usize;
        let visible_cards = (available_height / card_height).max(1);

        // Keep the selected card visible
        let scroll_offset = if is_selected {
            let start = self.scroll_offsets[column_index];
            if self.selected_card < start {
                self.scroll_offsets[column_index] = self.selected_card;
            } else if self.selected_card >= start + visible_cards {
                self.scroll_offsets[column_index] = self.selected_card - visible_cards + 1;
            }
            self.scroll_offsets[column_index]
        } else {
            self.scroll_offsets[column_index]
        };

        let mut current_y = 0;
        let mut rendered = 0;
        for (card_index, &task_index) in cards.iter().enumerate().skip(scroll_offset) {
            if current_y + card_height > available_height {
                break;
            }
            let task = &self.state.projects[column_index].tasks[task_index];
            let card_selected = is_selected && card_index == self.selected_card;
            let card_area = Rect {
                x: inner.x,
                y: inner.y + current_y as u16,
                width: inner.width,
                height: card_height as u16,
            };
            self.render_card(f, card_area, task, card_selected);
            current_y += card_height;
            rendered += 1;
        }

        if scroll_offset > 0 {
            let indicator = Paragraph::new(format!("▲ +{scroll_offset} above"))
                .style(Style::default().fg(Color::Cyan));
            f.render_widget(
                indicator,
                Rect { x: inner.x, y: inner.y, width: inner.width, height: 1 },
            );
        }
        let remaining = cards.len() - scroll_offset - rendered;
        if remaining > 0 {
            let indicator = Paragraph::new(format!("▼ +{remaining} below"))
                .style(Style::default().fg(Color::Cyan));
            f.render_widget(
                indicator,
                Rect {
                    x: inner.x,
                    y: inner.y + inner.height - 1,
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }

    fn render_card(&self, f: &mut Frame, area: Rect, task: &Task, is_selected: bool) {
        let style = if is_selected {
            Style::default()
                .bg(self.accent())
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray)
        };

        let due_line = match task.due {
            Some(due) => {
                let text = format!("Due: {}", format_due_relative(Some(due), self.today));
                if task.is_overdue(self.today) && !is_selected {
                    Line::from(Span::styled(text, Style::default().fg(OVERDUE_RED)))
                } else {
                    Line::from(text)
                }
            }
            None => Line::from("No due date"),
        };

        let card = Paragraph::new(vec![Line::from(task.title.clone()), due_line])
            .block(Block::default().borders(Borders::ALL))
            .style(style)
            .wrap(Wrap { trim: true });
        f.render_widget(card, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let total: usize = self.columns.iter().map(|c| c.len()).sum();
            format!("Tasks: {total} | {} | h: Help", QUOTES[self.quote_index])
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(self.accent()).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    fn render_task_form(&mut self, f: &mut Frame, editing: bool) {
        let area = centered_rect(60, 40, f.area());
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title field
                Constraint::Length(3), // Due field
                Constraint::Length(2), // Error / hint
                Constraint::Min(0),
            ])
            .split(area);

        let title = if editing { "Edit Task" } else { "New Task" };
        let active = self.form.field;

        let field_style = |focused: bool| {
            if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }
        };

        let title_input = Paragraph::new(self.form.title.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{title} - Title"))
                .border_style(field_style(active == FormField::Title)),
        );
        f.render_widget(title_input, chunks[0]);

        let due_input = Paragraph::new(self.form.due.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Due (optional: 2026-09-10, today, in 3d)")
                .border_style(field_style(active == FormField::Due)),
        );
        f.render_widget(due_input, chunks[1]);

        let hint = match &self.form.error {
            Some(e) => Paragraph::new(e.as_str()).style(Style::default().fg(OVERDUE_RED)),
            None => Paragraph::new("Tab: switch field | Enter: save | Esc: cancel"),
        };
        f.render_widget(hint, chunks[2]);

        let (field, chunk) = match active {
            FormField::Title => (&self.form.title, chunks[0]),
            FormField::Due => (&self.form.due, chunks[1]),
        };
        f.set_cursor_position((chunk.x + field.cursor_col() + 1, chunk.y + 1));
    }

    fn render_name_popup(&mut self, f: &mut Frame, renaming: bool) {
        let area = centered_rect(50, 25, f.area());
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let title = if renaming { "Rename Project" } else { "New Project" };
        let input = Paragraph::new(self.name_input.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(input, chunks[0]);

        f.set_cursor_position((
            chunks[0].x + self.name_input.cursor_col() + 1,
            chunks[0].y + 1,
        ));
    }

    fn render_confirm(&self, f: &mut Frame, title: &str, message: &str) {
        let area = centered_rect(60, 30, f.area());
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Are you sure?",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(OVERDUE_RED),
            )]),
            Line::from(""),
            Line::from(message.to_string()),
            Line::from(""),
            Line::from("Press Y to confirm, N or Esc to cancel"),
        ];

        let confirm = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title.to_string())
                    .border_style(Style::default().fg(OVERDUE_RED)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(confirm, area);
    }

    /// Get the exit action requested by the user.
    pub fn get_exit_action(&self) -> BoardExit {
        if self.open_file_menu {
            BoardExit::FileMenu
        } else {
            BoardExit::Quit
        }
    }

    /// Main event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(projects: &[&str]) -> (tempfile::TempDir, BoardApp) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        let mut state = AppState::default();
        for name in projects {
            state.add_project(name).unwrap();
        }
        let app = BoardApp::new(&path, state, Vec::new());
        (dir, app)
    }

    #[test]
    fn test_rename_targets_selected_project_with_duplicate_names() {
        let (_dir, mut app) = app_with(&["Thesis", "THESIS"]);
        app.selected_column = 1;
        app.mode = Mode::ProjectName(Some(1));
        app.name_input = TextField::with_value("Renamed");

        app.handle_name_input(KeyCode::Enter, Some(1));

        // The selected column is renamed, not its earlier duplicate.
        assert_eq!(app.state.projects[0].name, "Thesis");
        assert_eq!(app.state.projects[1].name, "Renamed");
        assert_eq!(app.mode, Mode::Board);
    }

    #[test]
    fn test_rename_blank_name_stays_in_popup() {
        let (_dir, mut app) = app_with(&["Thesis"]);
        app.mode = Mode::ProjectName(Some(0));
        app.name_input = TextField::with_value("   ");

        app.handle_name_input(KeyCode::Enter, Some(0));

        assert_eq!(app.state.projects[0].name, "Thesis");
        assert_eq!(app.mode, Mode::ProjectName(Some(0)));
        assert!(!app.status_message.is_empty());
    }

    #[test]
    fn test_quote_rotates_after_interval() {
        let (_dir, mut app) = app_with(&["Thesis"]);
        let start = app.quote_index;

        // Not due yet: nothing changes.
        app.rotate_quote();
        assert_eq!(app.quote_index, start);

        app.quote_changed = Instant::now() - Duration::from_secs(QUOTE_ROTATE_SECS + 1);
        app.rotate_quote();
        assert_eq!(app.quote_index, (start + 1) % QUOTES.len());
    }
}
