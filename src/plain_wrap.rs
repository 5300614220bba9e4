//! Plain message wrapping
//!
//! Splits chat messages on spaces so no word is ever broken across lines.

/// Line budget used when the caller has no better limit
pub const DEFAULT_MAX_LINE_LENGTH: usize = 90;

/// Split a message into lines of roughly `max_len` characters.
///
/// Splits on single spaces, so interior runs of spaces survive as empty words.
/// The length test runs before a word is appended and ignores the separator,
/// so a line can end up one character over `max_len`. The first word of a line
/// is always placed, which means a word longer than `max_len` becomes its own
/// line instead of being cut.
pub fn wrap_message(text: &str, max_len: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    // Tracked separately since String::len counts bytes
    let mut current_len = 0;

    for word in text.split(' ') {
        let word_len = word.chars().count();

        if !current.is_empty() && (current_len > max_len || current_len + word_len > max_len) {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(wrap_message("", 90).is_empty());
    }

    #[test]
    fn test_fits_in_one_line() {
        assert_eq!(wrap_message("hello world", 90), vec!["hello world"]);
    }

    #[test]
    fn test_split_on_word_boundary() {
        assert_eq!(
            wrap_message("hello world this is a test", 15),
            vec!["hello world", "this is a test"]
        );
    }

    #[test]
    fn test_long_word_is_not_split() {
        let word = "a".repeat(95);
        assert_eq!(wrap_message(&word, 90), vec![word.clone()]);

        // Long word in the middle gets a line of its own
        let text = format!("short {} tail", word);
        assert_eq!(wrap_message(&text, 90), vec!["short".to_string(), word, "tail".to_string()]);
    }

    #[test]
    fn test_separator_not_counted() {
        // 5 + 5 == 10 is not over the limit, so the line becomes 11 chars
        assert_eq!(wrap_message("aaaaa bbbbb", 10), vec!["aaaaa bbbbb"]);
        assert_eq!(wrap_message("aaaaa bbbbbb", 10), vec!["aaaaa", "bbbbbb"]);
    }

    #[test]
    fn test_multibyte_counted_as_chars() {
        // 6 chars each, 12 bytes each
        let text = "привет привет";
        assert_eq!(wrap_message(text, 12), vec![text]);
        assert_eq!(wrap_message(text, 11), vec!["привет", "привет"]);
    }

    #[test]
    fn test_consecutive_spaces_preserved() {
        assert_eq!(wrap_message("a  b", 90), vec!["a  b"]);
    }
}
