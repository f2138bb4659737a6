use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::suggestions::BoundField;

/// Single-line text field backed by tui-textarea
pub struct InputState {
    pub textarea: TextArea<'static>,
    pub focused: bool,
    pub scroll_offset: usize,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            focused: true,
            scroll_offset: 0,
        }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Feed a key to the editor. Returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.query().to_string();
        self.textarea.input(key);
        self.flatten_lines();
        self.query() != before
    }

    /// Insert pasted text at the cursor; line breaks become spaces
    pub fn insert_text(&mut self, text: &str) -> bool {
        let flat = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        if flat.is_empty() {
            return false;
        }
        self.textarea.insert_str(&flat);
        true
    }

    // Some editor bindings (Ctrl+M, Ctrl+J) insert a newline
    fn flatten_lines(&mut self) {
        if self.textarea.lines().len() <= 1 {
            return;
        }
        let (row, col) = self.textarea.cursor();
        let lines = self.textarea.lines();
        let flat_col = lines[..row]
            .iter()
            .map(|line| line.chars().count())
            .sum::<usize>()
            + col;
        let joined = lines.concat();
        self.set_value(&joined);
        self.set_cursor_column(flat_col);
    }

    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let cursor_col = self.textarea.cursor().1;
        let text_length = self.query().chars().count();

        let mut new_scroll = self.scroll_offset;
        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }

    /// Move cursor to a specific column position
    pub fn set_cursor_column(&mut self, target_col: usize) {
        let current_col = self.textarea.cursor().1;
        let text_length = self.query().chars().count();
        let target_col = target_col.min(text_length);

        match target_col.cmp(&current_col) {
            std::cmp::Ordering::Less => {
                for _ in 0..(current_col - target_col) {
                    self.textarea.move_cursor(CursorMove::Back);
                }
            }
            std::cmp::Ordering::Greater => {
                for _ in 0..(target_col - current_col) {
                    self.textarea.move_cursor(CursorMove::Forward);
                }
            }
            std::cmp::Ordering::Equal => {}
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundField for InputState {
    fn value(&self) -> String {
        self.query().to_string()
    }

    /// Replace the text and park the cursor at its end
    fn set_value(&mut self, value: &str) {
        let mut textarea = TextArea::new(vec![value.to_string()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
