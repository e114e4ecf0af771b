//! Start menu for picking a store file.
//!
//! Shown when the boards are launched without a remembered file, and again
//! whenever the user switches files from the board view. Offers the recent
//! files list plus a free-form path prompt for opening or creating a store.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::tui::input::TextField;
use crate::tui::utils::centered_rect;

/// Start menu application state.
pub struct MenuApp {
    recent: Vec<PathBuf>,
    state: MenuState,
    list_state: ListState,
    path_input: TextField,
    status_message: String,
    should_exit: bool,
    chosen: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuState {
    FileList,
    PathInput,
}

// Synthetic rows appended after the recent files.
const ROW_OPEN_PATH: &str = "Open or create by path...";
const ROW_QUIT: &str = "Quit";

impl MenuApp {
    /// Create the start menu from the saved recent-files list.
    pub fn new(cfg_dir: &Path) -> Self {
        let recent = Config::load(cfg_dir).existing_recent();
        let mut app = MenuApp {
            recent,
            state: MenuState::FileList,
            list_state: ListState::default(),
            path_input: TextField::new(),
            status_message: String::new(),
            should_exit: false,
            chosen: None,
        };
        app.list_state.select(Some(0));
        app
    }

    /// The file the user picked, if any.
    pub fn chosen(&self) -> Option<PathBuf> {
        self.chosen.clone()
    }

    fn row_count(&self) -> usize {
        self.recent.len() + 2
    }

    /// Handle keyboard input based on current state.
    fn handle_input(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.status_message.clear();
                match self.state {
                    MenuState::FileList => self.handle_file_list_input(key.code),
                    MenuState::PathInput => self.handle_path_input(key.code),
                }
            }
        }
        Ok(())
    }

    fn handle_file_list_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                if let Some(selected) = self.list_state.selected() {
                    if selected > 0 {
                        self.list_state.select(Some(selected - 1));
                    }
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.list_state.selected() {
                    if selected < self.row_count() - 1 {
                        self.list_state.select(Some(selected + 1));
                    }
                }
            }
            KeyCode::Enter => {
                let Some(selected) = self.list_state.selected() else {
                    return;
                };
                if selected < self.recent.len() {
                    self.chosen = Some(self.recent[selected].clone());
                    self.should_exit = true;
                } else if selected == self.recent.len() {
                    self.state = MenuState::PathInput;
                    self.path_input.clear();
                } else {
                    self.should_exit = true;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_exit = true;
            }
            _ => {}
        }
    }

    fn handle_path_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.state = MenuState::FileList;
            }
            KeyCode::Enter => {
                let raw = self.path_input.value.trim();
                if raw.is_empty() {
                    self.status_message = "Enter a path, or Esc to go back.".to_string();
                    return;
                }
                let mut path = PathBuf::from(raw);
                if path.extension().is_none() {
                    path.set_extension("json");
                }
                self.chosen = Some(path);
                self.should_exit = true;
            }
            other => {
                self.path_input.handle_key(other);
            }
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        self.render_file_list(f, chunks[0]);
        if self.state == MenuState::PathInput {
            self.render_path_input(f, chunks[0]);
        }
        self.render_status_bar(f, chunks[1]);
    }

    fn render_file_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let header_text = vec![Line::from(vec![Span::styled(
            "TASKBOARD",
            Style::default().add_modifier(Modifier::BOLD),
        )])];
        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
        f.render_widget(header, chunks[0]);

        let mut items: Vec<ListItem> = self
            .recent
            .iter()
            .map(|p| ListItem::new(Line::from(format!("  {}", p.display()))))
            .collect();
        items.push(ListItem::new(Line::from(format!("  {ROW_OPEN_PATH}"))));
        items.push(ListItem::new(Line::from(format!("  {ROW_QUIT}"))));

        let title = if self.recent.is_empty() {
            "No recent files"
        } else {
            "Recent files"
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    fn render_path_input(&mut self, f: &mut Frame, area: Rect) {
        let area = centered_rect(60, 30, area);
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let instructions = Paragraph::new("Path to a board file (created if missing):")
            .block(Block::default().borders(Borders::ALL).title("Open File"))
            .alignment(Alignment::Left);
        f.render_widget(instructions, chunks[0]);

        let input = Paragraph::new(self.path_input.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(input, chunks[1]);

        f.set_cursor_position((
            chunks[1].x + self.path_input.cursor_col() + 1,
            chunks[1].y + 1,
        ));
    }

    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                MenuState::FileList => {
                    "Use ↑↓ to navigate, Enter to open, q/Esc to quit".to_string()
                }
                MenuState::PathInput => {
                    "Type a path, Enter to open, Esc to go back".to_string()
                }
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main event loop for the start menu.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            self.handle_input()?;

            if self.should_exit {
                break;
            }
        }
        Ok(())
    }
}
