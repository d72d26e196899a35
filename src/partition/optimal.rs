//! Optimal line breaking via dynamic programming.
//!
//! Minimizes total raggedness over all break choices: every line except the
//! last costs the cube of its slack (`width − rendered`), the last line is
//! free, and a single word wider than `width` forms its own line at no cost.
//! The table is indexed by suffix start with one backpointer per entry, so
//! reconstruction is a linear walk over an arena of indices rather than a
//! recursive unwind.

use tracing::{debug, warn};

use super::{Line, Partition, greedy_break};
use crate::measure::{line_width, word_width};

/// Sentinel for unreachable states, with headroom so `INF + cost` cannot wrap.
const INF: u64 = u64::MAX / 4;

/// Break words into lines minimizing the total raggedness cost.
///
/// `dp[i]` is the minimal cost of partitioning the suffix starting at word
/// `i`, filled from the back; `next[i]` records the exclusive end of the
/// line opened at `i`. The inner scan walks candidate line ends in ascending
/// order, accumulating the rendered width, and stops at the first end that
/// no longer fits. Ties between equal-cost breaks keep the first candidate
/// found, so shorter lines win ties and output is deterministic.
///
/// O(n²) time, O(n) extra space. Returns an empty partition for empty input.
pub fn dp_break<'a>(words: &[&'a str], width: usize) -> Partition<'a> {
    let n = words.len();
    if n == 0 {
        return Partition::new();
    }

    let mut dp = vec![INF; n + 1];
    let mut next: Vec<Option<usize>> = vec![None; n + 1];
    dp[n] = 0;

    for i in (0..n).rev() {
        let mut best = INF;
        let mut best_j = None;
        let mut len = 0;

        for j in i..n {
            len = if j == i {
                word_width(words[j])
            } else {
                len + 1 + word_width(words[j])
            };

            if j == i && len > width {
                // Irreducible overflow: the word stands alone at no cost.
                if dp[j + 1] < best {
                    best = dp[j + 1];
                    best_j = Some(j + 1);
                }
                break;
            }
            if len > width {
                break;
            }

            let cost = if j == n - 1 { 0 } else { cube(width - len) };
            if dp[j + 1] != INF && dp[j + 1] + cost < best {
                best = dp[j + 1] + cost;
                best_j = Some(j + 1);
            }
        }

        dp[i] = best;
        next[i] = best_j;
    }

    let lines = reconstruct(words, width, &next);
    debug!(words = n, lines = lines.len(), width, cost = dp[0], "dp break");
    lines
}

/// Walk backpointers from the front, emitting one line per step.
///
/// A missing or non-advancing pointer cannot occur with a correct
/// recurrence; if it does, the remaining suffix is finished greedily so the
/// output still covers every word.
fn reconstruct<'a>(words: &[&'a str], width: usize, next: &[Option<usize>]) -> Partition<'a> {
    let n = words.len();
    let mut lines = Partition::new();
    let mut i = 0;

    while i < n {
        match next[i] {
            Some(j) if j > i => {
                lines.push(words[i..j].to_vec());
                i = j;
            }
            _ => {
                warn!(at = i, "non-advancing backpointer, finishing suffix greedily");
                lines.extend(greedy_break(&words[i..], width));
                break;
            }
        }
    }

    lines
}

/// Total raggedness cost of an existing partition.
///
/// Sums the cubed slack of every line except the last; lines that render
/// wider than `width` (irreducible overflow) contribute nothing. This is the
/// same objective [`dp_break`] minimizes, evaluated after the fact.
pub fn raggedness(partition: &[Line<'_>], width: usize) -> u64 {
    let Some((_, rest)) = partition.split_last() else {
        return 0;
    };
    rest.iter()
        .map(|line| {
            let rendered = line_width(line);
            if rendered > width {
                0
            } else {
                cube(width - rendered)
            }
        })
        .sum()
}

#[inline]
fn cube(slack: usize) -> u64 {
    let s = slack as u64;
    s * s * s
}
