use std::fmt;
use std::ops::Range;

/// The operation recorded by a [`Diff`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Op {
    /// Items in the left and right range are equal.
    Match,
    /// Items in the left range are missing from the right.
    Delete,
    /// Items in the right range are missing from the left.
    Insert,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Op::Match => "match",
                Op::Delete => "delete",
                Op::Insert => "insert",
            }
        )
    }
}

/// A single run of an edit script.
///
/// `left_start..left_end` and `right_start..right_end` are half-open ranges
/// into the left and right sequence.  A [`Op::Delete`] has an empty right
/// range and an [`Op::Insert`] an empty left range; both sit at the cursor
/// position of the other sequence.
///
/// For example `Diff { op: Op::Insert, left_start: 0, left_end: 0,
/// right_start: 0, right_end: 3 }` says that the items `0..3` of the right
/// sequence were inserted at index 0 of the left sequence.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diff {
    pub op: Op,
    pub left_start: usize,
    pub left_end: usize,
    pub right_start: usize,
    pub right_end: usize,
}

impl Diff {
    /// Creates a diff from an operation and the two ranges it spans.
    pub fn new(op: Op, left: Range<usize>, right: Range<usize>) -> Diff {
        Diff {
            op,
            left_start: left.start,
            left_end: left.end,
            right_start: right.start,
            right_end: right.end,
        }
    }

    /// Returns the number of items in the run.
    ///
    /// For matches and deletions this is counted on the left sequence, for
    /// insertions on the right one.
    pub fn len(&self) -> usize {
        match self.op {
            Op::Match | Op::Delete => self.left_end - self.left_start,
            Op::Insert => self.right_end - self.right_start,
        }
    }

    /// Returns `true` if the run covers no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The range covered on the left sequence.
    pub fn left_range(&self) -> Range<usize> {
        self.left_start..self.left_end
    }

    /// The range covered on the right sequence.
    pub fn right_range(&self) -> Range<usize> {
        self.right_start..self.right_end
    }

    /// Returns the leading `n` items of a match.
    ///
    /// `n` must not exceed [`len`](Self::len).
    pub fn head(&self, n: usize) -> Diff {
        debug_assert!(n <= self.len());
        Diff {
            op: Op::Match,
            left_start: self.left_start,
            left_end: self.left_start + n,
            right_start: self.right_start,
            right_end: self.right_start + n,
        }
    }

    /// Returns the trailing `n` items of a match.
    ///
    /// `n` must not exceed [`len`](Self::len).
    pub fn tail(&self, n: usize) -> Diff {
        debug_assert!(n <= self.len());
        Diff {
            op: Op::Match,
            left_start: self.left_end - n,
            left_end: self.left_end,
            right_start: self.right_end - n,
            right_end: self.right_end,
        }
    }
}

impl fmt::Display for Diff {
    /// Renders the diff as `op left_range right_range`, mostly for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} {:?}",
            self.op,
            self.left_range(),
            self.right_range()
        )
    }
}

#[test]
fn test_len() {
    assert_eq!(Diff::new(Op::Match, 2..5, 0..3).len(), 3);
    assert_eq!(Diff::new(Op::Delete, 1..2, 1..1).len(), 1);
    assert_eq!(Diff::new(Op::Insert, 3..3, 2..6).len(), 4);
    assert!(Diff::new(Op::Insert, 3..3, 2..2).is_empty());
}

#[test]
fn test_head_tail() {
    let m = Diff::new(Op::Match, 4..10, 1..7);
    assert_eq!(m.head(2), Diff::new(Op::Match, 4..6, 1..3));
    assert_eq!(m.tail(2), Diff::new(Op::Match, 8..10, 5..7));
    assert_eq!(m.head(0), Diff::new(Op::Match, 4..4, 1..1));
    assert_eq!(m.tail(6), m);
}

#[test]
fn test_display() {
    assert_eq!(Op::Delete.to_string(), "delete");
    assert_eq!(
        Diff::new(Op::Insert, 3..3, 0..3).to_string(),
        "insert 3..3 0..3"
    );
}

#[test]
#[cfg(feature = "serde")]
fn test_serde() {
    let d = Diff::new(Op::Delete, 0..2, 0..0);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(
        json,
        r#"{"op":"delete","left_start":0,"left_end":2,"right_start":0,"right_end":0}"#
    );
    let back: Diff = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}
