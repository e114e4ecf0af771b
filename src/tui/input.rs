//! Text field handling for the terminal user interface.

use crossterm::event::KeyCode;

/// A single-line text field with cursor tracking.
#[derive(Clone, Default)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    /// Create an empty text field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text field pre-filled with `value`, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.len(),
        }
    }

    /// Apply a key press to the field. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            KeyCode::Backspace => {
                if let Some((i, _)) = self.value[..self.cursor].char_indices().next_back() {
                    self.value.remove(i);
                    self.cursor = i;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Left => {
                if let Some((i, _)) = self.value[..self.cursor].char_indices().next_back() {
                    self.cursor = i;
                }
            }
            KeyCode::Right => {
                if let Some(c) = self.value[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            _ => return false,
        }
        true
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Cursor position in display columns.
    pub fn cursor_col(&self) -> u16 {
        self.value[..self.cursor].chars().count() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut f = TextField::new();
        for c in "abc".chars() {
            f.handle_key(KeyCode::Char(c));
        }
        assert_eq!(f.value, "abc");
        f.handle_key(KeyCode::Left);
        f.handle_key(KeyCode::Backspace);
        assert_eq!(f.value, "ac");
        assert_eq!(f.cursor, 1);
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut f = TextField::with_value("café");
        f.handle_key(KeyCode::Left);
        f.handle_key(KeyCode::Backspace);
        assert_eq!(f.value, "caé");
        f.handle_key(KeyCode::End);
        f.handle_key(KeyCode::Backspace);
        assert_eq!(f.value, "ca");
    }
}
