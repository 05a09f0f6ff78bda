//! Text input widget
//!
//! A single-line text field with a character cursor. The cursor counts
//! characters, not bytes, so non-ASCII category names edit correctly.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width the field labels are right-aligned to
const LABEL_WIDTH: usize = 10;

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Shown when the content is empty and the field is not focused
    placeholder: String,
}

impl TextInput {
    /// Create an empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    /// Replace the content, moving the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Get the cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Build a `Label: value` line, drawing the cursor when focused
    pub fn render_line(&self, label: &str, focused: bool) -> Line<'static> {
        let mut spans = vec![label_span(label, focused)];

        if !focused {
            let (text, style) = if self.content.is_empty() {
                (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
            } else {
                (self.content.clone(), Style::default().fg(Color::Yellow))
            };
            spans.push(Span::styled(text, style));
            return Line::from(spans);
        }

        let value_style = Style::default().fg(Color::White);
        let split = self.byte_offset(self.cursor);
        let (before, after) = self.content.split_at(split);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');

        spans.push(Span::styled(before.to_string(), value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(rest.as_str().to_string(), value_style));

        Line::from(spans)
    }
}

/// Right-aligned field label, bold when focused
pub fn label_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>width$}: ", label, width = LABEL_WIDTH), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('1');
        input.insert('2');
        input.move_left();
        input.insert('.');
        assert_eq!(input.value(), "1.2");

        input.backspace();
        assert_eq!(input.value(), "12");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_unicode_editing() {
        let mut input = TextInput::new().content("Café");
        assert_eq!(input.cursor(), 4);
        input.backspace();
        assert_eq!(input.value(), "Caf");
        input.insert('é');
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "afé");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("12.5");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_render_line_placeholder() {
        let input = TextInput::new().placeholder("Amount");
        let line = input.render_line("Amount", false);
        assert_eq!(line_text(&line), "    Amount: Amount");
    }

    #[test]
    fn test_render_line_focused_shows_cursor_cell() {
        let input = TextInput::new().content("12");
        let line = input.render_line("Amount", true);
        assert_eq!(line_text(&line), "    Amount: 12 ");
    }
}
