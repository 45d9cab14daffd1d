//! Dynamic programming LCS diff.
//!
//! * time: `O(NM)`
//! * space: `O(NM)`
//!
//! The whole `(N + 1) * (M + 1)` table is held in memory while the diff is
//! computed and there is no chunked variant.  Callers diffing large inputs
//! should bound them up front, see [`make_limited`].
use std::mem;
use std::ops::{Index, IndexMut};

use log::{debug, trace};

use crate::compare::Compare;
use crate::error::DiffError;
use crate::types::{Diff, Op};

/// Creates the edit script turning the left sequence into the right one.
///
/// The matches of the result form a longest common subsequence.  When more
/// than one exists, the one chosen is fixed: a mismatch is recorded as a
/// deletion only if that yields a strictly longer subsequence than an
/// insertion would, otherwise as an insertion.
///
/// The result starts at `(0, 0)`, ends at `(left_len, right_len)`, is
/// contiguous on both sequences and never has two adjacent runs with the
/// same [`Op`].  Two empty sequences give an empty script.
///
/// ```rust
/// use gendiff::{make, Diff, Op, SliceCompare};
///
/// let diffs = make(&SliceCompare::new(b"aaa", b"bbb")).unwrap();
/// assert_eq!(
///     diffs,
///     vec![
///         Diff::new(Op::Delete, 0..3, 0..0),
///         Diff::new(Op::Insert, 3..3, 0..3),
///     ]
/// );
/// ```
pub fn make<C>(cmp: &C) -> Result<Vec<Diff>, DiffError>
where
    C: Compare + ?Sized,
{
    make_limited(cmp, None)
}

/// Like [`make`] but refuses to build a table of more than `max_cells` cells.
///
/// The check happens before anything is allocated or compared.
pub fn make_limited<C>(cmp: &C, max_cells: Option<usize>) -> Result<Vec<Diff>, DiffError>
where
    C: Compare + ?Sized,
{
    let left_len = cmp.left_len();
    let right_len = cmp.right_len();

    let cells = table_cells(left_len, right_len)?;
    if let Some(max_cells) = max_cells {
        if cells > max_cells {
            trace!(
                "refusing {}x{} diff: {} cells over limit {}",
                left_len,
                right_len,
                cells,
                max_cells
            );
            return Err(DiffError::TooLarge { cells, max_cells });
        }
    }

    debug!(
        "building lcs table for {}x{} items ({} cells)",
        left_len, right_len, cells
    );
    let table = build_table(cmp, left_len, right_len);
    let diffs = trace_back(&table, left_len, right_len);
    debug!("lcs diff produced {} runs", diffs.len());
    Ok(diffs)
}

/// Number of cells needed to diff sequences of the given lengths.
fn table_cells(left_len: usize, right_len: usize) -> Result<usize, DiffError> {
    left_len
        .checked_add(1)
        .zip(right_len.checked_add(1))
        .and_then(|(rows, cols)| rows.checked_mul(cols))
        .filter(|&cells| {
            cells
                .checked_mul(mem::size_of::<Cell>())
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| {
            trace!("{}x{} diff table overflows", left_len, right_len);
            DiffError::InvalidInput {
                left_len,
                right_len,
            }
        })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cell {
    /// Transition that produced `len`, `None` until the cell is filled.
    op: Option<Op>,
    /// Length of the longest common subsequence up to this cell.
    len: usize,
}

impl Cell {
    fn new(op: Op, len: usize) -> Cell {
        Cell { op: Some(op), len }
    }
}

/// Dense row-major table indexed by `(left, right)`.
struct Table {
    cells: Vec<Cell>,
    stride: usize,
}

impl Table {
    fn new(left_len: usize, right_len: usize) -> Table {
        let stride = right_len + 1;
        Table {
            cells: vec![Cell::default(); (left_len + 1) * stride],
            stride,
        }
    }
}

impl Index<(usize, usize)> for Table {
    type Output = Cell;

    #[inline(always)]
    fn index(&self, (left, right): (usize, usize)) -> &Cell {
        &self.cells[left * self.stride + right]
    }
}

impl IndexMut<(usize, usize)> for Table {
    #[inline(always)]
    fn index_mut(&mut self, (left, right): (usize, usize)) -> &mut Cell {
        &mut self.cells[left * self.stride + right]
    }
}

fn build_table<C>(cmp: &C, left_len: usize, right_len: usize) -> Table
where
    C: Compare + ?Sized,
{
    let mut table = Table::new(left_len, right_len);

    // against an empty right sequence everything on the left is deleted,
    // against an empty left sequence everything on the right is inserted
    for left in 0..=left_len {
        table[(left, 0)] = Cell::new(Op::Delete, 0);
    }
    for right in 0..=right_len {
        table[(0, right)] = Cell::new(Op::Insert, 0);
    }
    table[(0, 0)] = Cell::new(Op::Match, 0);

    for left in 1..=left_len {
        for right in 1..=right_len {
            let cell = if cmp.equal(left - 1, right - 1) {
                Cell::new(Op::Match, table[(left - 1, right - 1)].len + 1)
            } else {
                let insert_len = table[(left, right - 1)].len;
                let delete_len = table[(left - 1, right)].len;
                if insert_len < delete_len {
                    Cell::new(Op::Delete, delete_len)
                } else {
                    Cell::new(Op::Insert, insert_len)
                }
            };
            table[(left, right)] = cell;
        }
    }

    table
}

/// State of the run currently being collected during the trace.
enum Run {
    Flushed,
    Accumulating(Diff),
}

/// Coalesces single steps of the backwards trace into runs.
struct Runs {
    state: Run,
    // collected back to front
    diffs: Vec<Diff>,
}

impl Runs {
    fn new() -> Runs {
        Runs {
            state: Run::Flushed,
            diffs: Vec::new(),
        }
    }

    /// Records a step of `op` from `from` to `to`, where `from` is the cell
    /// the trace moves to next.
    fn step(&mut self, op: Op, from: (usize, usize), to: (usize, usize)) {
        if let Run::Accumulating(ref mut diff) = self.state {
            if diff.op == op {
                diff.left_start = from.0;
                diff.right_start = from.1;
                return;
            }
        }
        self.flush();
        self.state = Run::Accumulating(Diff::new(op, from.0..to.0, from.1..to.1));
    }

    fn flush(&mut self) {
        if let Run::Accumulating(diff) = mem::replace(&mut self.state, Run::Flushed) {
            self.diffs.push(diff);
        }
    }

    fn finish(mut self) -> Vec<Diff> {
        self.flush();
        self.diffs.reverse();
        self.diffs
    }
}

fn trace_back(table: &Table, left_len: usize, right_len: usize) -> Vec<Diff> {
    let mut runs = Runs::new();
    let (mut left, mut right) = (left_len, right_len);

    while left > 0 || right > 0 {
        let op = match table[(left, right)].op {
            Some(op) => op,
            None => panic!(
                "lcs table cell ({}, {}) was never filled, this is a bug in gendiff",
                left, right
            ),
        };
        let from = match op {
            Op::Match => (left - 1, right - 1),
            Op::Delete => (left - 1, right),
            Op::Insert => (left, right - 1),
        };
        runs.step(op, from, (left, right));
        left = from.0;
        right = from.1;
    }

    runs.finish()
}

#[cfg(test)]
fn diff_str(left: &str, right: &str) -> Vec<Diff> {
    make(&crate::SliceCompare::new(left.as_bytes(), right.as_bytes())).unwrap()
}

#[test]
fn test_table() {
    let cmp = crate::SliceCompare::new(b"ab", b"b");
    let table = build_table(&cmp, 2, 1);
    assert_eq!(table[(0, 0)], Cell::new(Op::Match, 0));
    assert_eq!(table[(0, 1)], Cell::new(Op::Insert, 0));
    assert_eq!(table[(1, 0)], Cell::new(Op::Delete, 0));
    assert_eq!(table[(2, 0)], Cell::new(Op::Delete, 0));
    assert_eq!(table[(1, 1)], Cell::new(Op::Insert, 0));
    assert_eq!(table[(2, 1)], Cell::new(Op::Match, 1));
}

#[test]
fn test_empty() {
    assert_eq!(diff_str("", ""), vec![]);
}

#[test]
fn test_degenerate() {
    assert_eq!(diff_str("a", ""), vec![Diff::new(Op::Delete, 0..1, 0..0)]);
    assert_eq!(diff_str("", "a"), vec![Diff::new(Op::Insert, 0..0, 0..1)]);
    assert_eq!(diff_str("abc", ""), vec![Diff::new(Op::Delete, 0..3, 0..0)]);
    assert_eq!(diff_str("", "abc"), vec![Diff::new(Op::Insert, 0..0, 0..3)]);
}

#[test]
fn test_full_mismatch() {
    assert_eq!(
        diff_str("aaa", "bbb"),
        vec![
            Diff::new(Op::Delete, 0..3, 0..0),
            Diff::new(Op::Insert, 3..3, 0..3),
        ]
    );
}

#[test]
fn test_mixed() {
    assert_eq!(
        diff_str("aBce", "acDe"),
        vec![
            Diff::new(Op::Match, 0..1, 0..1),
            Diff::new(Op::Delete, 1..2, 1..1),
            Diff::new(Op::Match, 2..3, 1..2),
            Diff::new(Op::Insert, 3..3, 2..3),
            Diff::new(Op::Match, 3..4, 3..4),
        ]
    );
}

#[test]
fn test_tie_break() {
    // `aBa` and `aCa` are both longest, ties lean towards insertion
    assert_eq!(
        diff_str("aBaCa", "aCaBa"),
        vec![
            Diff::new(Op::Delete, 0..2, 0..0),
            Diff::new(Op::Match, 2..4, 0..2),
            Diff::new(Op::Insert, 4..4, 2..4),
            Diff::new(Op::Match, 4..5, 4..5),
        ]
    );
}

#[test]
fn test_runs() {
    assert_eq!(
        diff_str("aaabbbccceee", "aaacccDDDeee"),
        vec![
            Diff::new(Op::Match, 0..3, 0..3),
            Diff::new(Op::Delete, 3..6, 3..3),
            Diff::new(Op::Match, 6..9, 3..6),
            Diff::new(Op::Insert, 9..9, 6..9),
            Diff::new(Op::Match, 9..12, 9..12),
        ]
    );
    assert_eq!(
        diff_str("bbbCCCddd", "CCCeee"),
        vec![
            Diff::new(Op::Delete, 0..3, 0..0),
            Diff::new(Op::Match, 3..6, 0..3),
            Diff::new(Op::Delete, 6..9, 3..3),
            Diff::new(Op::Insert, 9..9, 3..6),
        ]
    );
    assert_eq!(
        diff_str("AbbbbbbbCdddddddE", "bbbbbbbddddddd"),
        vec![
            Diff::new(Op::Delete, 0..1, 0..0),
            Diff::new(Op::Match, 1..8, 0..7),
            Diff::new(Op::Delete, 8..9, 7..7),
            Diff::new(Op::Match, 9..16, 7..14),
            Diff::new(Op::Delete, 16..17, 14..14),
        ]
    );
}

#[test]
fn test_equal_call_order() {
    use std::cell::RefCell;

    let calls = RefCell::new(Vec::new());
    let cmp = crate::FnCompare::new(2, 3, |l, r| {
        calls.borrow_mut().push((l, r));
        false
    });
    make(&cmp).unwrap();
    assert_eq!(
        calls.into_inner(),
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
    );
}

#[test]
fn test_limit() {
    let cmp = crate::SliceCompare::new(b"abc", b"abd");
    assert_eq!(
        make_limited(&cmp, Some(15)),
        Err(DiffError::TooLarge {
            cells: 16,
            max_cells: 15
        })
    );
    assert_eq!(make_limited(&cmp, Some(16)).unwrap().len(), 3);
}

#[test]
fn test_overflow() {
    let cmp = crate::FnCompare::new(usize::MAX, 1, |_, _| true);
    assert_eq!(
        make(&cmp),
        Err(DiffError::InvalidInput {
            left_len: usize::MAX,
            right_len: 1
        })
    );
    let cmp = crate::FnCompare::new(1 << 40, 1 << 40, |_, _| true);
    assert!(matches!(make(&cmp), Err(DiffError::InvalidInput { .. })));
}

#[test]
#[should_panic(expected = "was never filled")]
fn test_untagged_cell() {
    let table = Table::new(1, 1);
    trace_back(&table, 1, 1);
}
