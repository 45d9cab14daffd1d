use crate::algorithms::{compact, make_limited};
use crate::compare::Compare;
use crate::error::DiffError;
use crate::types::Diff;

/// A builder type config for more complex uses of the diff engine.
///
/// ```rust
/// use gendiff::{DiffConfig, SliceCompare};
///
/// let left = b"lllllllaaarrrrrrr";
/// let right = b"lllllllrrrrrrr";
/// let diffs = DiffConfig::default()
///     .max_cells(Some(1 << 20))
///     .context_len(Some(2))
///     .diff(&SliceCompare::new(left, right))
///     .unwrap();
/// assert_eq!(diffs.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiffConfig {
    max_cells: Option<usize>,
    context_len: Option<usize>,
}

impl DiffConfig {
    /// Bounds the size of the table in cells.
    ///
    /// The table needs `(left_len + 1) * (right_len + 1)` cells.  Inputs
    /// over the bound fail with [`DiffError::TooLarge`] before anything is
    /// allocated.  The default is unbounded.
    pub fn max_cells(&mut self, max_cells: Option<usize>) -> &mut Self {
        self.max_cells = max_cells;
        self
    }

    /// Compacts the result to the given context length.
    ///
    /// See [`compact`](crate::compact).  The default is to return the full
    /// edit script.
    pub fn context_len(&mut self, context_len: Option<usize>) -> &mut Self {
        self.context_len = context_len;
        self
    }

    /// Diffs the two sequences of `cmp` with this configuration.
    pub fn diff<C>(&self, cmp: &C) -> Result<Vec<Diff>, DiffError>
    where
        C: Compare + ?Sized,
    {
        let diffs = make_limited(cmp, self.max_cells)?;
        Ok(match self.context_len {
            Some(context_len) => compact(&diffs, context_len),
            None => diffs,
        })
    }
}

/// Creates a default [`DiffConfig`].
pub fn configure() -> DiffConfig {
    DiffConfig::default()
}

#[test]
fn test_default_is_full_script() {
    let cmp = crate::SliceCompare::new(b"abc", b"abc");
    assert_eq!(
        configure().diff(&cmp).unwrap(),
        vec![Diff::new(crate::Op::Match, 0..3, 0..3)]
    );
    assert_eq!(configure().context_len(Some(3)).diff(&cmp).unwrap(), vec![]);
}

#[test]
fn test_max_cells() {
    let cmp = crate::SliceCompare::new(b"abcd", b"abcd");
    let err = configure().max_cells(Some(24)).diff(&cmp).unwrap_err();
    assert_eq!(
        err,
        DiffError::TooLarge {
            cells: 25,
            max_cells: 24
        }
    );
}
