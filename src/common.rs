use crate::algorithms::make;
use crate::compare::SliceCompare;
use crate::error::DiffError;
use crate::types::{Diff, Op};

/// Shortcut for diffing two slices.
pub fn make_slices<T>(left: &[T], right: &[T]) -> Result<Vec<Diff>, DiffError>
where
    T: PartialEq,
{
    make(&SliceCompare::new(left, right))
}

/// Returns the number of items elided between two adjacent diffs.
///
/// Scripts produced by [`make`] are contiguous so this is always `0` for
/// them.  After [`compact`](crate::compact) a split match leaves a gap that
/// is equally large on both sequences.
pub fn elided_len(prev: &Diff, next: &Diff) -> usize {
    next.left_start.saturating_sub(prev.left_end)
}

/// Splits a compacted edit script into contiguous hunks.
///
/// A new hunk starts wherever the indexes of two adjacent diffs do not
/// line up on either sequence.
pub fn group_hunks(diffs: &[Diff]) -> Vec<&[Diff]> {
    let mut rv = Vec::new();
    let mut start = 0;

    for (idx, pair) in diffs.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.left_end != next.left_start || prev.right_end != next.right_start {
            rv.push(&diffs[start..=idx]);
            start = idx + 1;
        }
    }
    if start < diffs.len() {
        rv.push(&diffs[start..]);
    }

    rv
}

/// Return a measure of similarity in the range `0..=1`.
///
/// A ratio of `1.0` means the two sequences are a complete match, a ratio
/// of `0.0` would indicate completely distinct sequences.  The input is an
/// uncompacted edit script and the length of the left and right sequence.
pub fn diff_ratio(diffs: &[Diff], left_len: usize, right_len: usize) -> f32 {
    let matches = diffs
        .iter()
        .filter(|diff| diff.op == Op::Match)
        .map(Diff::len)
        .sum::<usize>();
    let len = left_len + right_len;
    if len == 0 {
        1.0
    } else {
        2.0 * matches as f32 / len as f32
    }
}

/// Replays an edit script on the left sequence.
///
/// Deleted items are dropped while matched and inserted items are taken
/// from `right`, in order.  Applied to the full output of [`make`] this
/// reproduces `right` exactly.
pub fn apply<T: Clone>(diffs: &[Diff], right: &[T]) -> Vec<T> {
    diffs
        .iter()
        .filter(|diff| diff.op != Op::Delete)
        .flat_map(|diff| right[diff.right_range()].iter().cloned())
        .collect()
}

#[cfg(test)]
fn render(diffs: &[Diff], left: &str, right: &str) -> String {
    use std::fmt::Write;

    let (left, right) = (left.as_bytes(), right.as_bytes());
    let mut rv = String::new();
    for (idx, hunk) in group_hunks(diffs).into_iter().enumerate() {
        if idx > 0 {
            writeln!(rv, "~~~").unwrap();
        }
        for diff in hunk {
            let (marker, items) = match diff.op {
                Op::Match => (' ', &left[diff.left_range()]),
                Op::Delete => ('-', &left[diff.left_range()]),
                Op::Insert => ('+', &right[diff.right_range()]),
            };
            writeln!(rv, "{}{}", marker, String::from_utf8_lossy(items)).unwrap();
        }
    }
    rv
}

#[test]
fn test_group_hunks() {
    let left = "abbbbbbbcddddddde";
    let right = "bbbbbbbddddddd";
    let diffs = make_slices(left.as_bytes(), right.as_bytes()).unwrap();
    let compacted = crate::compact(&diffs, 2);
    let hunks = group_hunks(&compacted);
    assert_eq!(hunks.len(), 3);
    assert_eq!(elided_len(&compacted[2], &compacted[3]), 0);
    assert_eq!(elided_len(&compacted[1], &compacted[2]), 3);
    assert_eq!(elided_len(&compacted[4], &compacted[5]), 3);
    insta::assert_snapshot!(render(&compacted, left, right), @r###"
    -a
     bb
    ~~~
     bb
    -c
     dd
    ~~~
     dd
    -e
    "###);
}

#[test]
fn test_group_hunks_contiguous() {
    let diffs = make_slices(b"aBce", b"acDe").unwrap();
    assert_eq!(group_hunks(&diffs), vec![&diffs[..]]);
    assert!(group_hunks(&[]).is_empty());
}

#[test]
fn test_diff_ratio() {
    let diffs = make_slices(b"abcd", b"abxd").unwrap();
    assert_eq!(diff_ratio(&diffs, 4, 4), 0.75);
    assert_eq!(diff_ratio(&[], 0, 0), 1.0);
    let diffs = make_slices(b"aaa", b"bbb").unwrap();
    assert_eq!(diff_ratio(&diffs, 3, 3), 0.0);
}

#[test]
fn test_apply() {
    let left = ["the", "quick", "brown", "fox", "jumps"];
    let right = ["the", "slow", "brown", "dog", "jumps", "high"];
    let diffs = make_slices(&left, &right).unwrap();
    assert_eq!(apply(&diffs, &right), right.to_vec());
}
