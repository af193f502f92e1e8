//! String utilities for the domain layer.

/// Collapse a reply onto one line and cap it at `max_len` bytes with an
/// ellipsis, for log previews (UTF-8 safe).
pub fn preview(s: &str, max_len: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len.saturating_sub(3).min(flat.len());
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_flattens_lines() {
        assert_eq!(preview("line one\n\n  line two", 40), "line one line two");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        assert_eq!(preview("hello world", 8), "hello...");
    }

    #[test]
    fn test_preview_multibyte_boundary() {
        // each character is 3 bytes; cutting at 4 must back up to 3
        assert_eq!(preview("あのねあのね", 7), "あ...");
    }
}
