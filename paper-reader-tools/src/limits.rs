use serde::{Deserialize, Serialize};

const READ_MAX_CHARS: usize = 15_000;
const ABSTRACT_MIN_CHARS: usize = 80;
const SNIPPET_CHARS: usize = 1_000;

/// Character budgets applied to extracted text.
///
/// All counts are in `char`s so truncation never splits a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextLimits {
    /// Upper bound on the text returned by `read_pdf`.
    pub read_max_chars: usize,
    /// `compare_papers` only trusts an abstract longer than this.
    pub abstract_min_chars: usize,
    /// Length of the fallback excerpt used by `compare_papers`.
    pub snippet_chars: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            read_max_chars: READ_MAX_CHARS,
            abstract_min_chars: ABSTRACT_MIN_CHARS,
            snippet_chars: SNIPPET_CHARS,
        }
    }
}

/// Longest prefix of `text` holding at most `max` chars.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_defaults() {
        let limits = TextLimits::default();
        assert_eq!(limits.read_max_chars, 15_000);
        assert_eq!(limits.abstract_min_chars, 80);
        assert_eq!(limits.snippet_chars, 1_000);
    }
}
