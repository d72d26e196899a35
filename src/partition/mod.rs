//! Line partitioning.
//!
//! A [`Partition`] groups a word sequence into consecutive lines without
//! reordering, omission, or duplication: concatenating its lines in order
//! reconstructs the input exactly. Every line except possibly the last
//! renders within the requested width, unless it holds a single word that is
//! itself wider than the width (irreducible overflow, emitted alone).
//!
//! Two partitioners produce one:
//! - [`greedy_break`]: locally greedy left-to-right pass, O(n)
//! - [`dp_break`]: globally cost-minimal dynamic program, O(n²)

mod greedy;
mod optimal;

pub use greedy::greedy_break;
pub use optimal::{dp_break, raggedness};

/// An ordered run of consecutive words from the input sequence.
pub type Line<'a> = Vec<&'a str>;

/// An ordered sequence of lines covering every input word exactly once.
pub type Partition<'a> = Vec<Line<'a>>;
