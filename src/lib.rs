//! # justline
//!
//! Line breaking and justification for fixed-width text.
//!
//! Two partitioners turn an ordered word sequence into lines:
//! - **Greedy** ([`greedy_break`]): single left-to-right pass, O(n)
//! - **Optimal** ([`dp_break`]): dynamic programming over suffixes that
//!   minimizes a cubic raggedness cost, O(n²)
//!
//! A stateless justifier ([`format`]) then renders a partition under one of
//! four alignment policies: left, right, center, or full (both margins
//! flush, interior gaps stretched).
//!
//! ## Pipeline
//!
//! ```text
//! text → split → words → {greedy_break | dp_break} → partition → format → lines
//! ```
//!
//! ## Example
//!
//! ```
//! use justline::{split, dp_break, format, Alignment};
//!
//! let words = split("This is a test");
//! let partition = dp_break(&words, 10);
//! let lines = format(&partition, Alignment::Full, 10);
//! assert_eq!(lines, vec!["This  is a", "test      "]);
//! ```
//!
//! Widths are measured in Unicode scalar values (`char` count); grapheme
//! clusters, East Asian widths, and hyphenation are out of scope. A word
//! wider than the requested width is emitted alone on its own line and
//! passed through unpadded.

pub mod justify;
pub mod measure;
pub mod partition;
pub mod tokenize;

pub use justify::{Alignment, format};
pub use measure::{line_width, word_width};
pub use partition::{Line, Partition, dp_break, greedy_break, raggedness};
pub use tokenize::split;
