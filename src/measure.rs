//! Width measurement for words and word runs.
//!
//! Widths are Unicode scalar value counts (`char`), not bytes. The
//! justifier's padding arithmetic must agree with these measurements, so
//! every width in the crate goes through this module.

/// Width of a single word in characters.
#[inline]
pub fn word_width(word: &str) -> usize {
    word.chars().count()
}

/// Rendered width of a run of words joined by single spaces.
///
/// Returns 0 for an empty slice.
pub fn line_width(words: &[&str]) -> usize {
    if words.is_empty() {
        return 0;
    }
    let chars: usize = words.iter().map(|w| word_width(w)).sum();
    chars + (words.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── word_width ──

    #[test]
    fn word_width_ascii() {
        assert_eq!(word_width("test"), 4);
        assert_eq!(word_width("a"), 1);
    }

    #[test]
    fn word_width_cyrillic() {
        // 6 chars, 12 bytes
        assert_eq!(word_width("монгол"), 6);
        assert_eq!(word_width("уу"), 2);
    }

    // ── line_width ──

    #[test]
    fn line_width_empty() {
        assert_eq!(line_width(&[]), 0);
    }

    #[test]
    fn line_width_single_word() {
        assert_eq!(line_width(&["test"]), 4);
    }

    #[test]
    fn line_width_counts_gaps() {
        // "This is a" = 4 + 1 + 2 + 1 + 1 = 9
        assert_eq!(line_width(&["This", "is", "a"]), 9);
    }

    #[test]
    fn line_width_cyrillic() {
        // "Сайн байна уу" = 4 + 1 + 5 + 1 + 2 = 13 chars
        assert_eq!(line_width(&["Сайн", "байна", "уу"]), 13);
    }
}
