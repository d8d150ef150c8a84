/// Editable single-line text input with a character-based cursor index.
///
/// Used for the search box, form text fields, and the password prompt. The
/// cursor counts Unicode scalar values, not bytes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Cursor position measured in characters from the start.
    pub cursor: usize,
    text: String,
}

impl InputState {
    /// Creates an empty input with the cursor at position `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input from existing text with the cursor at the end.
    pub fn with_text(text: String) -> Self {
        let cursor = text.chars().count();

        Self { cursor, text }
    }

    /// Returns the current text buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of characters in the buffer.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Empties the buffer and resets the cursor.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.text.clear();
    }

    /// Inserts one character at the cursor and advances the cursor.
    pub fn insert_char(&mut self, ch: char) {
        let byte_offset = self.byte_offset(self.cursor);
        self.text.insert(byte_offset, ch);
        self.cursor += 1;
    }

    /// Deletes the character immediately before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Moves the cursor one character to the left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one character to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_char_appends_at_cursor() {
        // Arrange
        let mut input = InputState::new();

        // Act
        input.insert_char('h');
        input.insert_char('i');

        // Assert
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_insert_char_in_the_middle() {
        // Arrange
        let mut input = InputState::with_text("hd".to_string());
        input.move_left();

        // Act
        input.insert_char('a');

        // Assert
        assert_eq!(input.text(), "had");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_delete_backward_removes_before_cursor() {
        // Arrange
        let mut input = InputState::with_text("abc".to_string());

        // Act
        input.delete_backward();

        // Assert
        assert_eq!(input.text(), "ab");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_delete_backward_at_start_is_a_no_op() {
        // Arrange
        let mut input = InputState::with_text("abc".to_string());
        input.cursor = 0;

        // Act
        input.delete_backward();

        // Assert
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_cursor_counts_multibyte_characters() {
        // Arrange
        let mut input = InputState::with_text("héllo".to_string());
        input.cursor = 2;

        // Act
        input.delete_backward();

        // Assert
        assert_eq!(input.text(), "hllo");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_move_right_stops_at_end() {
        // Arrange
        let mut input = InputState::with_text("ab".to_string());

        // Act
        input.move_right();

        // Assert
        assert_eq!(input.cursor, 2);
    }
}
