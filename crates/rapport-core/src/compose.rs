//! Input Composer
//!
//! A UI-agnostic pending-input buffer with the keyboard submission rule:
//! Enter submits, Shift+Enter inserts a newline instead. The buffer is
//! drained synchronously on submit, before any network activity starts.

/// A key the composer cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

/// One keypress with its shift modifier state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    /// Plain Enter
    pub fn enter() -> Self {
        Self {
            key: Key::Enter,
            shift: false,
        }
    }

    /// Shift+Enter
    pub fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }

    /// A printable character
    pub fn char(c: char) -> Self {
        Self {
            key: Key::Char(c),
            shift: false,
        }
    }
}

/// Pending input buffer
#[derive(Debug, Default)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the pending buffer
    pub fn insert_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Current pending text
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Feed one keypress
    ///
    /// Returns the drained buffer on plain Enter, even when blank — the
    /// emptiness gate belongs to the client, not the composer. Shift+Enter
    /// and ordinary characters grow the buffer and return nothing.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<String> {
        match (event.key, event.shift) {
            (Key::Enter, false) => Some(std::mem::take(&mut self.buffer)),
            (Key::Enter, true) => {
                self.buffer.push('\n');
                None
            }
            (Key::Char(c), _) => {
                self.buffer.push(c);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_submits_and_clears_buffer() {
        let mut composer = Composer::new();
        composer.insert_str("Bonjour");

        let submitted = composer.handle_key(KeyEvent::enter());

        assert_eq!(submitted.as_deref(), Some("Bonjour"));
        assert!(composer.is_empty());
    }

    #[test]
    fn test_shift_enter_inserts_newline_without_submitting() {
        let mut composer = Composer::new();
        composer.insert_str("ligne un");

        assert_eq!(composer.handle_key(KeyEvent::shift_enter()), None);
        composer.insert_str("ligne deux");

        assert_eq!(composer.buffer(), "ligne un\nligne deux");
    }

    #[test]
    fn test_characters_accumulate() {
        let mut composer = Composer::new();
        for c in "salut".chars() {
            assert_eq!(composer.handle_key(KeyEvent::char(c)), None);
        }
        assert_eq!(composer.buffer(), "salut");
    }

    #[test]
    fn test_enter_on_empty_buffer_submits_blank() {
        let mut composer = Composer::new();
        assert_eq!(composer.handle_key(KeyEvent::enter()).as_deref(), Some(""));
    }
}
