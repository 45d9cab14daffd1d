//! This crate computes edit scripts between any two sequences.
//!
//! The sequences can be lines, tokens, or any indexable collection whose
//! items can be tested for equality.  The engine only ever looks at them
//! through the [`Compare`] trait, so it knows nothing about the items
//! themselves.
//!
//! The crate is split into these parts:
//!
//! * [`algorithms`]: [`make`] builds an edit script from a longest common
//!   subsequence and [`compact`] trims long runs of matches down to the
//!   context around the changes.
//! * [`Compare`] and its adapters [`SliceCompare`] and [`FnCompare`].
//! * [`DiffConfig`] and a few helpers to work with the produced [`Diff`]s.
//!
//! ```rust
//! use gendiff::{compact, group_hunks, make, Op, SliceCompare};
//!
//! let left = ["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"];
//! let right = ["the", "quick", "brown", "dog", "jumps", "over", "the", "lazy", "fox"];
//!
//! let diffs = make(&SliceCompare::new(&left, &right)).unwrap();
//! for hunk in group_hunks(&compact(&diffs, 1)) {
//!     for diff in hunk {
//!         match diff.op {
//!             Op::Match => println!("  {}", left[diff.left_range()].join(" ")),
//!             Op::Delete => println!("- {}", left[diff.left_range()].join(" ")),
//!             Op::Insert => println!("+ {}", right[diff.right_range()].join(" ")),
//!         }
//!     }
//! }
//! ```
//!
//! # Memory
//!
//! [`make`] holds a table of `(left_len + 1) * (right_len + 1)` cells for
//! the duration of the call.  Use [`make_limited`] or
//! [`DiffConfig::max_cells`] to reject inputs that would not fit.
//!
//! # Optional Features
//!
//! * `serde`: derives `Serialize` and `Deserialize` for [`Op`] and [`Diff`].
pub mod algorithms;
mod common;
mod compare;
mod config;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use self::algorithms::{compact, make, make_limited};
pub use self::common::*;
pub use self::compare::*;
pub use self::config::*;
pub use self::error::*;
pub use self::types::*;
