//! Single-line text input with a character-based cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns `false` when the key is not an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let start = self.byte_pos(self.cursor - 1);
                    self.value.remove(start);
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let pos = self.byte_pos(self.cursor);
                    self.value.remove(pos);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    /// Value with a block cursor drawn at the cursor position
    #[must_use]
    pub fn display_with_cursor(&self) -> String {
        let pos = self.byte_pos(self.cursor);
        format!("{}█{}", &self.value[..pos], &self.value[pos..])
    }

    fn insert(&mut self, c: char) {
        let pos = self.byte_pos(self.cursor);
        self.value.insert(pos, c);
        self.cursor += 1;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace_with_multibyte_chars() {
        let mut input = TextInput::default();
        for c in "Fälle".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "Fälle");
        assert_eq!(input.cursor(), 5);

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "Flle");
        assert_eq!(input.cursor(), 1);

        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "Fle");
    }

    #[test]
    fn test_cursor_display() {
        let mut input = TextInput::new("abc");
        assert_eq!(input.display_with_cursor(), "abc█");
        input.handle_key(key(KeyCode::Home));
        assert_eq!(input.display_with_cursor(), "█abc");
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut input = TextInput::default();
        let handled = input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!handled);
        assert_eq!(input.value(), "");
        assert!(!input.handle_key(key(KeyCode::Tab)));
    }
}
