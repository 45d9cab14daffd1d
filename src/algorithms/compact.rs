//! Trimming of long match runs down to their context.
use log::debug;

use crate::types::{Diff, Op};

/// Compacts an edit script by trimming long matches to `context_len` items.
///
/// This is useful when long runs of matches are noise and only the items
/// around the actual changes are of interest.  Running `compact(diffs, 2)`
/// on a script shaped like
///
/// ```text
/// MMMMIIIMMMMMDDDMMMM
/// ```
///
/// where `M` is a match, `I` an insertion and `D` a deletion gives
///
/// ```text
/// MMIIIMM MMDDDMM
/// ```
///
/// The leading and trailing match only keep the side facing a change.  A
/// match between two changes is split into its first and last
/// `context_len` items when it is longer than `2 * context_len`, leaving a
/// gap in the indexes.  Callers should detect these gaps (see
/// [`group_hunks`](crate::group_hunks)) and render them as skipped items.
///
/// An empty vector is returned when there is nothing to show, that is when
/// the input is empty or a single match.  The input is not modified.
pub fn compact(diffs: &[Diff], context_len: usize) -> Vec<Diff> {
    let rv = match diffs {
        [] => Vec::new(),
        [only] => {
            if only.op == Op::Match {
                Vec::new()
            } else {
                vec![*only]
            }
        }
        [first, second] => {
            if is_long_match(first, context_len) {
                vec![first.tail(context_len), *second]
            } else if is_long_match(second, context_len) {
                vec![*first, second.head(context_len)]
            } else {
                vec![*first, *second]
            }
        }
        [first, middle @ .., last] => {
            let mut rv = Vec::with_capacity(diffs.len() + middle.len());

            if is_long_match(first, context_len) {
                rv.push(first.tail(context_len));
            } else {
                rv.push(*first);
            }

            for diff in middle {
                if is_long_match(diff, context_len.saturating_mul(2)) {
                    rv.push(diff.head(context_len));
                    rv.push(diff.tail(context_len));
                } else {
                    rv.push(*diff);
                }
            }

            if is_long_match(last, context_len) {
                rv.push(last.head(context_len));
            } else {
                rv.push(*last);
            }

            rv
        }
    };

    debug!(
        "compacted {} runs into {} with context {}",
        diffs.len(),
        rv.len(),
        context_len
    );
    rv
}

#[inline(always)]
fn is_long_match(diff: &Diff, threshold: usize) -> bool {
    diff.op == Op::Match && diff.len() > threshold
}

#[cfg(test)]
fn compact_str(left: &str, right: &str) -> Vec<Diff> {
    let diffs = crate::make_slices(left.as_bytes(), right.as_bytes()).unwrap();
    compact(&diffs, 2)
}

#[test]
fn test_identical() {
    assert_eq!(compact_str("abc", "abc"), vec![]);
    assert_eq!(compact_str("abcdef", "abcdef"), vec![]);
    assert_eq!(compact_str("", ""), vec![]);
}

#[test]
fn test_single_change() {
    let only = Diff::new(Op::Insert, 0..0, 0..4);
    assert_eq!(compact(&[only], 0), vec![only]);
}

#[test]
fn test_prefix_suffix() {
    assert_eq!(
        compact_str("dddmmmm", "mmmm"),
        vec![
            Diff::new(Op::Delete, 0..3, 0..0),
            Diff::new(Op::Match, 3..5, 0..2),
        ]
    );
    assert_eq!(
        compact_str("mmmm", "mmmmddd"),
        vec![
            Diff::new(Op::Match, 2..4, 2..4),
            Diff::new(Op::Insert, 4..4, 4..7),
        ]
    );
}

#[test]
fn test_short_runs_untouched() {
    assert_eq!(
        compact_str("aBaCa", "aCaBa"),
        vec![
            Diff::new(Op::Delete, 0..2, 0..0),
            Diff::new(Op::Match, 2..4, 0..2),
            Diff::new(Op::Insert, 4..4, 2..4),
            Diff::new(Op::Match, 4..5, 4..5),
        ]
    );
}

#[test]
fn test_long_runs() {
    assert_eq!(
        compact_str("axxxxxxx", "xxxxxxx"),
        vec![
            Diff::new(Op::Delete, 0..1, 0..0),
            Diff::new(Op::Match, 1..3, 0..2),
        ]
    );
    assert_eq!(
        compact_str("xxxxxxx", "xxxxxxxb"),
        vec![
            Diff::new(Op::Match, 5..7, 5..7),
            Diff::new(Op::Insert, 7..7, 7..8),
        ]
    );
    assert_eq!(
        compact_str("lllllllaaarrrrrrr", "lllllllrrrrrrr"),
        vec![
            Diff::new(Op::Match, 5..7, 5..7),
            Diff::new(Op::Delete, 7..10, 7..7),
            Diff::new(Op::Match, 10..12, 7..9),
        ]
    );
}

#[test]
fn test_interior_gaps() {
    assert_eq!(
        compact_str("abbbbbbbcddddddde", "bbbbbbbddddddd"),
        vec![
            Diff::new(Op::Delete, 0..1, 0..0),
            Diff::new(Op::Match, 1..3, 0..2),
            Diff::new(Op::Match, 6..8, 5..7),
            Diff::new(Op::Delete, 8..9, 7..7),
            Diff::new(Op::Match, 9..11, 7..9),
            Diff::new(Op::Match, 14..16, 12..14),
            Diff::new(Op::Delete, 16..17, 14..14),
        ]
    );
}

#[test]
fn test_interior_at_threshold() {
    // an interior run of exactly `2 * context_len` stays whole
    let diffs = [
        Diff::new(Op::Delete, 0..1, 0..0),
        Diff::new(Op::Match, 1..5, 0..4),
        Diff::new(Op::Insert, 5..5, 4..5),
    ];
    assert_eq!(compact(&diffs, 2), diffs.to_vec());
    assert_eq!(
        compact(&diffs, 1),
        vec![
            Diff::new(Op::Delete, 0..1, 0..0),
            Diff::new(Op::Match, 1..2, 0..1),
            Diff::new(Op::Match, 4..5, 3..4),
            Diff::new(Op::Insert, 5..5, 4..5),
        ]
    );
}

#[test]
fn test_zero_context() {
    let diffs = [
        Diff::new(Op::Match, 0..3, 0..3),
        Diff::new(Op::Delete, 3..4, 3..3),
        Diff::new(Op::Match, 4..6, 3..5),
    ];
    assert_eq!(
        compact(&diffs, 0),
        vec![
            Diff::new(Op::Match, 3..3, 3..3),
            Diff::new(Op::Delete, 3..4, 3..3),
            Diff::new(Op::Match, 4..4, 3..3),
        ]
    );
}

#[test]
fn test_huge_context() {
    let diffs = [
        Diff::new(Op::Delete, 0..1, 0..0),
        Diff::new(Op::Match, 1..9, 0..8),
        Diff::new(Op::Insert, 9..9, 8..9),
    ];
    assert_eq!(compact(&diffs, usize::MAX), diffs.to_vec());
}
