//! News text validation and character-safe truncation.

use crate::errors::CoreError;

/// Validate a news text before it enters the pipeline.
///
/// Returns the trimmed text. Length is measured in characters, not bytes.
///
/// # Errors
///
/// Returns [`CoreError::EmptyText`] for blank input and
/// [`CoreError::TextTooLong`] when the text exceeds `max_chars`.
pub fn validate_news_text(text: &str, max_chars: usize) -> Result<&str, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyText);
    }
    let length = trimmed.chars().count();
    if length > max_chars {
        return Err(CoreError::TextTooLong {
            length,
            limit: max_chars,
        });
    }
    Ok(trimmed)
}

/// Truncate `text` to at most `max_chars` characters without splitting a
/// character.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(matches!(
            validate_news_text("   \n\t", 100),
            Err(CoreError::EmptyText)
        ));
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_news_text("  hello  ", 100).unwrap(), "hello");
    }

    #[test]
    fn overlong_text_reports_length() {
        let err = validate_news_text("abcdef", 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::TextTooLong {
                length: 6,
                limit: 5
            }
        ));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
