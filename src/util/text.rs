// src/util/text.rs

/// Truncate `content` to at most `max_chars` characters, on char boundaries.
pub fn clip(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}

/// Truncate `content` for a list preview, appending an ellipsis when cut.
///
/// # Examples
///
/// ```
/// use noteview::util::text::preview;
///
/// assert_eq!(preview("short", 10), "short");
/// assert_eq!(preview("a longer piece of content", 8), "a longer...");
/// ```
pub fn preview(content: &str, max_chars: usize) -> String {
    let mut out = clip(content, max_chars);
    if content.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

/// Format an optional update timestamp for list display.
pub fn format_timestamp(timestamp: Option<chrono::DateTime<chrono::Utc>>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_content_when_clipping_then_returns_content_unchanged() {
        assert_eq!(clip("hello", 50), "hello");
    }

    #[test]
    fn given_long_content_when_clipping_then_cuts_at_char_count() {
        assert_eq!(clip("abcdef", 3), "abc");
    }

    #[test]
    fn given_multibyte_content_when_clipping_then_respects_char_boundaries() {
        assert_eq!(clip("日本語のノート", 3), "日本語");
    }

    #[test]
    fn given_short_content_when_previewing_then_omits_ellipsis() {
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn given_long_content_when_previewing_then_appends_ellipsis() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn given_no_timestamp_when_formatting_then_returns_empty_string() {
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn given_timestamp_when_formatting_then_renders_date_and_time() {
        let ts = "2024-03-01T10:30:00Z".parse().unwrap();
        assert_eq!(format_timestamp(Some(ts)), "2024-03-01 10:30");
    }
}
