//! Text input handling
//!
//! Translates key events into edits of a single-line text buffer. Used by the
//! search box, the first-name filter and the text fields of the employee form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An edit to a single-line text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Append a character
    Insert(char),
    /// Remove the last character
    Backspace,
    /// Clear the whole buffer (Ctrl+U)
    Clear,
}

impl TextEdit {
    /// Map a key event to a text edit, if it is one.
    ///
    /// Control/Alt chords other than Ctrl+U are not text.
    pub fn from_key(key_event: &KeyEvent) -> Option<Self> {
        let chord = key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key_event.code {
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Clear)
            }
            KeyCode::Char(c) if !chord => Some(Self::Insert(c)),
            KeyCode::Backspace => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Apply the edit to `buffer`
    pub fn apply(self, buffer: &mut String) {
        match self {
            Self::Insert(c) => buffer.push(c),
            Self::Backspace => {
                buffer.pop();
            }
            Self::Clear => buffer.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_printable_chars_insert() {
        assert_eq!(
            TextEdit::from_key(&key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(TextEdit::Insert('a'))
        );
        assert_eq!(
            TextEdit::from_key(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TextEdit::Insert('A'))
        );
    }

    #[test]
    fn test_chords_are_not_text() {
        assert_eq!(
            TextEdit::from_key(&key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            TextEdit::from_key(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(TextEdit::Clear)
        );
        assert_eq!(TextEdit::from_key(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_apply() {
        let mut buffer = String::from("An");
        TextEdit::Insert('n').apply(&mut buffer);
        assert_eq!(buffer, "Ann");
        TextEdit::Backspace.apply(&mut buffer);
        assert_eq!(buffer, "An");
        TextEdit::Clear.apply(&mut buffer);
        assert!(buffer.is_empty());
        TextEdit::Backspace.apply(&mut buffer);
        assert!(buffer.is_empty());
    }
}
