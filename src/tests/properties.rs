use crate::{apply, compact, elided_len, make_slices, Diff, Op};
use proptest::prelude::*;

/// Small alphabet so that random sequences share plenty of items.
fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..24)
}

/// Reference LCS length, computed independently of the engine.
fn lcs_len(left: &[u8], right: &[u8]) -> usize {
    let mut prev = vec![0; right.len() + 1];
    for l in left {
        let mut cur = vec![0; right.len() + 1];
        for (idx, r) in right.iter().enumerate() {
            cur[idx + 1] = if l == r {
                prev[idx] + 1
            } else {
                cur[idx].max(prev[idx + 1])
            };
        }
        prev = cur;
    }
    prev[right.len()]
}

fn match_len(diffs: &[Diff]) -> usize {
    diffs
        .iter()
        .filter(|diff| diff.op == Op::Match)
        .map(Diff::len)
        .sum()
}

proptest! {
    /// Property 1: Coverage
    /// Both sequences are covered once, in order, from (0, 0) to the end.
    #[test]
    fn prop_coverage(left in sequence(), right in sequence()) {
        let diffs = make_slices(&left, &right).unwrap();

        let (mut l, mut r) = (0, 0);
        for diff in &diffs {
            prop_assert_eq!(diff.left_start, l);
            prop_assert_eq!(diff.right_start, r);
            l = diff.left_end;
            r = diff.right_end;
        }
        prop_assert_eq!(l, left.len());
        prop_assert_eq!(r, right.len());
    }

    /// Property 2: Run shapes
    /// Every run is non-empty and has the shape its operation demands.
    #[test]
    fn prop_run_shapes(left in sequence(), right in sequence()) {
        let diffs = make_slices(&left, &right).unwrap();

        for diff in &diffs {
            prop_assert!(!diff.is_empty(), "empty run {}", diff);
            match diff.op {
                Op::Match => {
                    prop_assert_eq!(diff.left_range().len(), diff.right_range().len());
                    prop_assert_eq!(&left[diff.left_range()], &right[diff.right_range()]);
                }
                Op::Delete => {
                    prop_assert_eq!(diff.right_start, diff.right_end);
                }
                Op::Insert => {
                    prop_assert_eq!(diff.left_start, diff.left_end);
                }
            }
        }
    }

    /// Property 3: No adjacent runs share an operation.
    #[test]
    fn prop_coalesced(left in sequence(), right in sequence()) {
        let diffs = make_slices(&left, &right).unwrap();

        for pair in diffs.windows(2) {
            prop_assert_ne!(pair[0].op, pair[1].op);
        }
    }

    /// Property 4: The matches form a longest common subsequence.
    #[test]
    fn prop_longest(left in sequence(), right in sequence()) {
        let diffs = make_slices(&left, &right).unwrap();
        prop_assert_eq!(match_len(&diffs), lcs_len(&left, &right));
    }

    /// Property 5: Replaying the script on the left yields the right.
    #[test]
    fn prop_apply(left in sequence(), right in sequence()) {
        let diffs = make_slices(&left, &right).unwrap();
        prop_assert_eq!(apply(&diffs, &right), right);
    }

    /// Property 6: Identical sequences compact to nothing.
    #[test]
    fn prop_compact_identical(input in sequence(), context_len in 0usize..8) {
        let diffs = make_slices(&input, &input).unwrap();
        prop_assert!(compact(&diffs, context_len).is_empty());
    }

    /// Property 7: Compaction keeps every change and the gaps left behind
    /// are exactly what was trimmed from interior matches.
    #[test]
    fn prop_compact_gaps(left in sequence(), right in sequence(), context_len in 0usize..4) {
        let diffs = make_slices(&left, &right).unwrap();
        let compacted = compact(&diffs, context_len);

        let changes = |diffs: &[Diff]| {
            diffs
                .iter()
                .filter(|diff| diff.op != Op::Match)
                .copied()
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(changes(&compacted), changes(&diffs));

        if diffs.len() < 3 {
            return Ok(());
        }
        for diff in &diffs[1..diffs.len() - 1] {
            if diff.op != Op::Match || diff.len() <= 2 * context_len {
                continue;
            }
            let pos = compacted
                .iter()
                .position(|c| *c == diff.head(context_len))
                .unwrap();
            let (head, tail) = (&compacted[pos], &compacted[pos + 1]);
            prop_assert_eq!(*tail, diff.tail(context_len));
            prop_assert_eq!(elided_len(head, tail), diff.len() - 2 * context_len);
            prop_assert_eq!(tail.right_start - head.right_end, diff.len() - 2 * context_len);
        }
    }
}
