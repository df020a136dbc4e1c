use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::formula::is_operator_key;

/// What a keystroke means for the widget, decided by the controller and
/// applied by the app layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Commit an operator token with the given glyph.
    CommitOperator(char),
    /// Commit the typed text as a value token.
    CommitValue(String),
    /// Backspace on empty text: drop the last committed token.
    RemoveLastToken,
    /// Ordinary text editing changed the current text; suggestions need a
    /// refresh.
    TextEdited,
    Ignore,
}

/// Keystroke state machine over `(current_text, input_visible)`.
///
/// The cursor is a grapheme offset into the text, so editing stays correct
/// for multi-byte input.
pub struct InputController {
    current_text: String,
    cursor: usize,
    input_visible: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self {
            current_text: String::new(),
            cursor: 0,
            input_visible: false,
        }
    }

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn input_visible(&self) -> bool {
        self.input_visible
    }

    /// First interaction with the formula area shows the input box. There is
    /// no hide transition; it stays visible for the rest of the session.
    pub fn activate(&mut self) {
        self.input_visible = true;
    }

    /// Discard the typed text after an externally triggered commit
    /// (suggestion selection); focus stays in the input box.
    pub fn clear_after_commit(&mut self) {
        self.current_text.clear();
        self.cursor = 0;
        self.input_visible = true;
    }

    /// Interpret one keystroke. `last_is_operator` reports whether the last
    /// committed token is an operator token.
    pub fn interpret(&mut self, key: &KeyEvent, last_is_operator: bool) -> KeyAction {
        match key.code {
            KeyCode::Char(c) if is_operator_key(c) => {
                // Two operator tokens in a row are never committed.
                if last_is_operator {
                    return KeyAction::Ignore;
                }
                self.clear_after_commit();
                KeyAction::CommitOperator(c)
            }
            KeyCode::Char(' ') => self.commit_typed_text(),
            KeyCode::Enter => self.commit_typed_text(),
            KeyCode::Backspace => {
                if self.current_text.is_empty() {
                    KeyAction::RemoveLastToken
                } else if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_grapheme_at(self.cursor);
                    KeyAction::TextEdited
                } else {
                    KeyAction::Ignore
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.grapheme_len() {
                    self.remove_grapheme_at(self.cursor);
                    KeyAction::TextEdited
                } else {
                    KeyAction::Ignore
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                KeyAction::Ignore
            }
            KeyCode::Right => {
                if self.cursor < self.grapheme_len() {
                    self.cursor += 1;
                }
                KeyAction::Ignore
            }
            KeyCode::Home => {
                self.cursor = 0;
                KeyAction::Ignore
            }
            KeyCode::End => {
                self.cursor = self.grapheme_len();
                KeyAction::Ignore
            }
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)
                {
                    return KeyAction::Ignore;
                }
                let at = self.byte_index(self.cursor);
                self.current_text.insert(at, c);
                self.cursor += 1;
                self.input_visible = true;
                KeyAction::TextEdited
            }
            _ => KeyAction::Ignore,
        }
    }

    /// Space/Enter commit branch: trimmed non-empty text becomes a value
    /// token; whitespace-only text absorbs the keystroke.
    fn commit_typed_text(&mut self) -> KeyAction {
        let trimmed = self.current_text.trim().to_string();
        if trimmed.is_empty() {
            return KeyAction::Ignore;
        }
        self.clear_after_commit();
        KeyAction::CommitValue(trimmed)
    }

    fn grapheme_len(&self) -> usize {
        self.current_text.graphemes(true).count()
    }

    fn byte_index(&self, grapheme_idx: usize) -> usize {
        self.current_text
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.current_text.len())
    }

    fn remove_grapheme_at(&mut self, grapheme_idx: usize) {
        let start = self.byte_index(grapheme_idx);
        let end = self.byte_index(grapheme_idx + 1);
        self.current_text.replace_range(start..end, "");
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}
