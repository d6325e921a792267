//! Input manipulation utilities
//! Extracted for testability

/// Find the position of the previous word boundary in input
pub fn find_word_boundary_backward(input: &str, cursor_position: usize) -> usize {
    if cursor_position == 0 {
        return 0;
    }
    let bytes = input.as_bytes();
    let mut pos = cursor_position.min(bytes.len()) - 1;
    // Skip trailing whitespace
    while pos > 0 && bytes[pos].is_ascii_whitespace() {
        pos -= 1;
    }
    // Find start of word
    while pos > 0 && !bytes[pos - 1].is_ascii_whitespace() {
        pos -= 1;
    }
    pos
}

/// Delete the word before cursor, returning new string and cursor position
pub fn delete_word_backward(input: &str, cursor_position: usize) -> (String, usize) {
    let new_pos = find_word_boundary_backward(input, cursor_position);
    let mut new_input = input.to_string();
    new_input.drain(new_pos..cursor_position);
    (new_input, new_pos)
}

/// Delete from cursor to end of line
pub fn delete_to_end(input: &str, cursor_position: usize) -> String {
    input[..cursor_position].to_string()
}

/// Delete from beginning to cursor
pub fn delete_to_start(input: &str, cursor_position: usize) -> String {
    input[cursor_position..].to_string()
}

/// Byte offset of the char boundary before `cursor_position`
pub fn prev_char_boundary(input: &str, cursor_position: usize) -> usize {
    let mut pos = cursor_position.min(input.len());
    while pos > 0 {
        pos -= 1;
        if input.is_char_boundary(pos) {
            break;
        }
    }
    pos
}

/// Byte offset of the char boundary after `cursor_position`
pub fn next_char_boundary(input: &str, cursor_position: usize) -> usize {
    let len = input.len();
    let mut pos = cursor_position.min(len);
    loop {
        pos += 1;
        if pos >= len {
            return len;
        }
        if input.is_char_boundary(pos) {
            return pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_backward_simple() {
        let input = "hello world";
        assert_eq!(find_word_boundary_backward(input, 11), 6); // End -> start of "world"
        assert_eq!(find_word_boundary_backward(input, 6), 0);  // Start of "world" -> start
        assert_eq!(find_word_boundary_backward(input, 5), 0);  // Space -> start
    }

    #[test]
    fn test_word_boundary_backward_multiple_spaces() {
        let input = "hello   world";
        assert_eq!(find_word_boundary_backward(input, 13), 8); // End -> start of "world"
        assert_eq!(find_word_boundary_backward(input, 8), 0);  // Start of "world" -> start
    }

    #[test]
    fn test_word_boundary_backward_at_start() {
        let input = "hello";
        assert_eq!(find_word_boundary_backward(input, 0), 0);
    }

    #[test]
    fn test_delete_word_backward() {
        let (new_input, new_pos) = delete_word_backward("hello world", 11);
        assert_eq!(new_input, "hello ");
        assert_eq!(new_pos, 6);
    }

    #[test]
    fn test_delete_word_backward_multiple() {
        let (s1, p1) = delete_word_backward("one two three", 13);
        assert_eq!(s1, "one two ");
        assert_eq!(p1, 8);

        let (s2, p2) = delete_word_backward(&s1, p1);
        assert_eq!(s2, "one ");
        assert_eq!(p2, 4);
    }

    #[test]
    fn test_delete_to_end() {
        assert_eq!(delete_to_end("hello world", 6), "hello ");
        assert_eq!(delete_to_end("hello world", 0), "");
        assert_eq!(delete_to_end("hello world", 11), "hello world");
    }

    #[test]
    fn test_delete_to_start() {
        assert_eq!(delete_to_start("hello world", 6), "world");
        assert_eq!(delete_to_start("hello world", 0), "hello world");
        assert_eq!(delete_to_start("hello world", 11), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(find_word_boundary_backward("", 0), 0);
        let (s, p) = delete_word_backward("", 0);
        assert_eq!(s, "");
        assert_eq!(p, 0);
    }

    #[test]
    fn test_single_word() {
        let input = "hello";
        assert_eq!(find_word_boundary_backward(input, 3), 0);
    }

    #[test]
    fn test_with_special_chars() {
        let input = "hello-world test";
        // hyphen is not whitespace, so treated as part of word
        assert_eq!(find_word_boundary_backward(input, 11), 0); // "hello-world" is one word
    }

    #[test]
    fn test_prev_char_boundary_ascii() {
        assert_eq!(prev_char_boundary("abc", 3), 2);
        assert_eq!(prev_char_boundary("abc", 1), 0);
        assert_eq!(prev_char_boundary("abc", 0), 0);
    }

    #[test]
    fn test_char_boundaries_multibyte() {
        let input = "héllo"; // 'é' is two bytes
        assert_eq!(next_char_boundary(input, 1), 3);
        assert_eq!(prev_char_boundary(input, 3), 1);
        assert_eq!(next_char_boundary(input, 5), 6);
        assert_eq!(next_char_boundary(input, 6), 6);
    }

    #[test]
    fn test_delete_word_backward_multibyte() {
        // "café" is five bytes
        let (s, p) = delete_word_backward("café latte", 11);
        assert_eq!(s, "café ");
        assert_eq!(p, 6);
    }
}
