//! # Multiset Jaccard comparison
//!
//! This crate compares two token sequences and reports how much they share.
//! It takes tokens produced upstream and never tokenizes or normalizes text
//! itself.
//!
//! ## Contract
//!
//! - Input is two ordered token sequences, duplicates included.
//! - The API is a pure function of `(tokens_a, tokens_b, mode)`: no I/O, no
//!   global state, and the result does not depend on argument order.
//! - When both sequences are empty the ratio is undefined and reported as
//!   `None`, never as `NaN` and never as an error.
//!
//! ## Modes
//!
//! 1.  **Multiset** (default): each token counts with its multiplicity.
//!     Intersection is `Σ min(countA, countB)`, union is
//!     `Σ max(countA, countB)`. "good good day" against "good day" shares 2
//!     of 3.
//! 2.  **Distinct**: every token counts once, giving plain set Jaccard.
//! 3.  **Positional**: token `i` only matches token `i`. Intersection is the
//!     number of aligned equal tokens, union is the longer length, so
//!     "dog bites man" against "man bites dog" shares 1 of 3.
//!
//! A TF-IDF weighted variant lives in [`weighted`].
//!
//! ## Example Usage
//!
//! ```
//! use multiset::compare;
//!
//! let a = ["good", "good", "day"];
//! let b = ["good", "day"];
//! let result = compare(&a, &b, false);
//!
//! assert_eq!((result.intersection, result.union), (2, 3));
//! assert!((result.index.unwrap() - 2.0 / 3.0).abs() < 1e-12);
//! ```
mod compare;
mod counts;
mod score;
mod set;
pub mod weighted;

pub use crate::compare::{
    compare, compare_with, distinct_components, multiset_components, positional_components,
    ComparisonMode,
};
pub use crate::counts::TokenCounts;
pub use crate::score::{jaccard_ratio, Comparison};
pub use crate::set::{set_jaccard, set_jaccard_distance};
pub use crate::weighted::{inverse_document_frequencies, term_frequencies, weighted_jaccard};
