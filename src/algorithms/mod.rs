//! The diff algorithms.
//!
//! [`make`] builds an edit script with a dynamic programming longest common
//! subsequence table.  [`compact`] post-processes such a script so that only
//! the context around the changes remains.
//!
//! Both work purely on indexes: the items themselves are only ever seen
//! through a [`Compare`](crate::Compare) implementation.

mod compact;
mod lcs;

pub use compact::compact;
pub use lcs::{make, make_limited};
