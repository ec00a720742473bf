//! Core model for the search input.

use super::keymap::{default_key_map, KeyMap};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// A focusable single-line text field whose width follows its content.
///
/// # Examples
///
/// ```rust
/// use searcher_widgets::input::new;
///
/// let mut input = new();
/// input.set_value("hello");
/// input.set_cursor(2);
/// assert_eq!(input.position(), 2);
/// input.reset();
/// assert_eq!(input.value(), "");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// Prompt rendered before the text.
    pub prompt: String,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the typed text.
    pub text_style: Style,
    /// Placeholder shown while the value is empty.
    pub placeholder: String,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the character under the cursor while focused.
    pub cursor_style: Style,
    /// Editing key bindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,
    pub(super) width: usize,
    pub(super) min_width: usize,
}

/// Creates an unfocused, empty input.
pub fn new() -> Model {
    Model {
        prompt: String::new(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        key_map: default_key_map(),
        value: Vec::new(),
        focus: false,
        pos: 0,
        width: 1,
        min_width: 1,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the value and moves the cursor to its end.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Reports whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Clears the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the smallest width `fit_to_content` may shrink the field to.
    pub fn set_min_width(&mut self, width: usize) {
        self.min_width = width;
        self.width = self.width.max(width);
    }

    /// Sets the display width in columns.
    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(self.min_width);
    }

    /// Display width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Resizes the field to fit the placeholder, or the value once typed.
    ///
    /// One extra column is kept for the cursor at the end of the text.
    pub fn fit_to_content(&mut self) {
        let text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            self.value()
        };
        self.width = (UnicodeWidthStr::width(text.as_str()) + 1).max(self.min_width);
    }

    /// Reports whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the input focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Applies an editing key. Returns `true` if the key was an editing key.
    ///
    /// Keys are ignored while the input is blurred.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }

        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.value.truncate(self.pos);
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        } else if let KeyCode::Char(ch) = key_msg.key {
            // Shift is already folded into the char's case
            if key_msg.modifiers.contains(KeyModifiers::CONTROL)
                || key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                return false;
            }
            self.value.insert(self.pos, ch);
            self.pos += 1;
        } else {
            return false;
        }
        true
    }

    /// Processes a message. Only key messages affect the input.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        let old_pos = self.pos;
        let mut i = self.pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        self.value.drain(i..old_pos);
        self.pos = i;
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new();
        model.focus();
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus();
        None
    }

    fn blur(&mut self) {
        self.blur();
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
