//! Justification formatting.
//!
//! Renders a partition to fixed-width strings under an [`Alignment`]
//! policy. Every output line is exactly `width` characters, with two
//! exceptions: a line whose natural content already exceeds `width`
//! (irreducible overflow) is passed through unpadded, and full
//! justification never stretches the last line or a single-word line.
//!
//! All padding arithmetic is in `char` counts, matching [`crate::measure`].

use crate::measure::{line_width, word_width};
use crate::partition::Line;

/// Horizontal alignment policy for rendered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Words flush left, trailing spaces to `width`.
    Left,
    /// Words flush right, leading spaces to `width`.
    Right,
    /// Centered; when the slack is odd the extra space goes to the right.
    Center,
    /// Both margins flush: interior gaps are stretched to fill `width`.
    /// The last line and single-word lines render as [`Alignment::Left`].
    Full,
}

/// Render every line of a partition under the given alignment.
///
/// Produces one string per line, in order. An explicitly empty line formats
/// to `width` spaces in every mode. An empty partition produces an empty
/// `Vec`.
pub fn format(partition: &[Line<'_>], align: Alignment, width: usize) -> Vec<String> {
    partition
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let is_last = idx + 1 == partition.len();
            match align {
                Alignment::Left => align_left(line, width),
                Alignment::Right => align_right(line, width),
                Alignment::Center => align_center(line, width),
                Alignment::Full if is_last || line.len() < 2 => align_left(line, width),
                Alignment::Full => stretch_gaps(line, width),
            }
        })
        .collect()
}

fn align_left(line: &[&str], width: usize) -> String {
    let mut s = line.join(" ");
    pad(&mut s, width.saturating_sub(line_width(line)));
    s
}

fn align_right(line: &[&str], width: usize) -> String {
    let mut s = String::new();
    pad(&mut s, width.saturating_sub(line_width(line)));
    s.push_str(&line.join(" "));
    s
}

fn align_center(line: &[&str], width: usize) -> String {
    let slack = width.saturating_sub(line_width(line));
    let left = slack / 2;
    let mut s = String::new();
    pad(&mut s, left);
    s.push_str(&line.join(" "));
    pad(&mut s, slack - left);
    s
}

/// Distribute all slack across the interior gaps.
///
/// The first `total % gaps` gaps, left to right, get one space more than the
/// rest. Caller guarantees at least two words.
fn stretch_gaps(line: &[&str], width: usize) -> String {
    let words: usize = line.iter().map(|w| word_width(w)).sum();
    let gaps = line.len() - 1;
    let total = width.saturating_sub(words);
    let base = total / gaps;
    let extra = total % gaps;

    let mut s = String::with_capacity(width.max(words + gaps));
    for (i, word) in line.iter().enumerate() {
        s.push_str(word);
        if i < gaps {
            pad(&mut s, base + usize::from(i < extra));
        }
    }
    s
}

fn pad(s: &mut String, n: usize) {
    s.extend(std::iter::repeat_n(' ', n));
}
