//! Whitespace tokenization.

/// Split text into words on runs of whitespace.
///
/// Leading, trailing, and collapsed whitespace produce no empty tokens, so
/// every returned word is non-empty. Empty or whitespace-only input yields
/// an empty `Vec`. Total over any input, no error conditions.
pub fn split(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
