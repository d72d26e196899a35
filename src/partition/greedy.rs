//! Greedy line breaking.

use tracing::debug;

use super::Partition;
use crate::measure::word_width;

/// Break words into lines with a single left-to-right pass.
///
/// Each line starts with the next unplaced word; while the following word
/// fits within `width` with a single-space gap, it is appended. A word wider
/// than `width` still starts its line, which is then closed immediately (the
/// irreducible-overflow case). Deterministic, no backtracking.
///
/// Returns an empty partition for empty input.
pub fn greedy_break<'a>(words: &[&'a str], width: usize) -> Partition<'a> {
    let mut lines = Partition::new();
    let mut i = 0;

    while i < words.len() {
        let mut line = vec![words[i]];
        let mut len = word_width(words[i]);
        i += 1;

        if len <= width {
            while i < words.len() {
                let next = word_width(words[i]);
                if len + 1 + next > width {
                    break;
                }
                len += 1 + next;
                line.push(words[i]);
                i += 1;
            }
        }

        lines.push(line);
    }

    debug!(words = words.len(), lines = lines.len(), width, "greedy break");
    lines
}
