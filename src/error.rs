use thiserror::Error;

/// Errors raised before a diff table is built.
///
/// Both variants reject the input up front, so no partial edit script is
/// ever produced.  A broken table discovered while tracing it back is a bug
/// in this crate and panics instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The table for the two sequences does not fit in memory at all.
    #[error("cannot diff {left_len} against {right_len} items: table size overflows usize")]
    InvalidInput {
        /// Number of items in the left sequence.
        left_len: usize,
        /// Number of items in the right sequence.
        right_len: usize,
    },

    /// The table is larger than the configured bound.
    #[error("diff table of {cells} cells exceeds the limit of {max_cells}")]
    TooLarge {
        /// Number of cells the table would need.
        cells: usize,
        /// The configured maximum.
        max_cells: usize,
    },
}

#[test]
fn test_messages() {
    let err = DiffError::TooLarge {
        cells: 121,
        max_cells: 100,
    };
    assert_eq!(
        err.to_string(),
        "diff table of 121 cells exceeds the limit of 100"
    );
    let err = DiffError::InvalidInput {
        left_len: usize::MAX,
        right_len: 2,
    };
    assert!(err.to_string().contains("overflows usize"));
}
