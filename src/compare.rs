/// The comparison contract between two sequences.
///
/// The diff engine never sees the items themselves, only the two lengths
/// and an equality test between an index into the left sequence and an
/// index into the right one.  The left sequence is the base and the right
/// sequence is what it is compared against.
///
/// Both lengths must stay fixed and [`equal`](Compare::equal) must be pure
/// for the duration of a diff: it is called up to `left_len * right_len`
/// times, row by row with the left index in the outer loop.
pub trait Compare {
    /// Number of items in the left sequence.
    fn left_len(&self) -> usize;

    /// Number of items in the right sequence.
    fn right_len(&self) -> usize;

    /// Returns `true` if `left[left_index]` equals `right[right_index]`.
    fn equal(&self, left_index: usize, right_index: usize) -> bool;
}

impl<'a, C: Compare + ?Sized> Compare for &'a C {
    fn left_len(&self) -> usize {
        (**self).left_len()
    }

    fn right_len(&self) -> usize {
        (**self).right_len()
    }

    fn equal(&self, left_index: usize, right_index: usize) -> bool {
        (**self).equal(left_index, right_index)
    }
}

/// Compares two slices item by item with [`PartialEq`].
#[derive(Debug, Clone, Copy)]
pub struct SliceCompare<'left, 'right, L, R> {
    left: &'left [L],
    right: &'right [R],
}

impl<'left, 'right, L, R> SliceCompare<'left, 'right, L, R>
where
    R: PartialEq<L>,
{
    /// Creates a comparison of `left` against `right`.
    pub fn new(left: &'left [L], right: &'right [R]) -> Self {
        SliceCompare { left, right }
    }

    /// Returns the left slice.
    pub fn left(&self) -> &'left [L] {
        self.left
    }

    /// Returns the right slice.
    pub fn right(&self) -> &'right [R] {
        self.right
    }
}

impl<'left, 'right, L, R> Compare for SliceCompare<'left, 'right, L, R>
where
    R: PartialEq<L>,
{
    #[inline(always)]
    fn left_len(&self) -> usize {
        self.left.len()
    }

    #[inline(always)]
    fn right_len(&self) -> usize {
        self.right.len()
    }

    #[inline(always)]
    fn equal(&self, left_index: usize, right_index: usize) -> bool {
        self.right[right_index] == self.left[left_index]
    }
}

/// Adapts two lengths and an equality closure.
///
/// Useful when the sequences are not slices, or when items should be
/// compared by something other than [`PartialEq`]:
///
/// ```rust
/// use gendiff::{make, FnCompare, Op};
///
/// let left = ["Apple", "pear"];
/// let right = ["apple", "Pear", "plum"];
/// let cmp = FnCompare::new(left.len(), right.len(), |l, r| {
///     left[l].eq_ignore_ascii_case(right[r])
/// });
/// let diffs = make(&cmp).unwrap();
/// assert_eq!(diffs[0].op, Op::Match);
/// assert_eq!(diffs[0].len(), 2);
/// ```
pub struct FnCompare<F> {
    left_len: usize,
    right_len: usize,
    equal: F,
}

impl<F> FnCompare<F>
where
    F: Fn(usize, usize) -> bool,
{
    /// Creates a comparison from the two lengths and an equality test.
    pub fn new(left_len: usize, right_len: usize, equal: F) -> Self {
        FnCompare {
            left_len,
            right_len,
            equal,
        }
    }
}

impl<F> Compare for FnCompare<F>
where
    F: Fn(usize, usize) -> bool,
{
    fn left_len(&self) -> usize {
        self.left_len
    }

    fn right_len(&self) -> usize {
        self.right_len
    }

    fn equal(&self, left_index: usize, right_index: usize) -> bool {
        (self.equal)(left_index, right_index)
    }
}

#[test]
fn test_slice_compare() {
    let cmp = SliceCompare::new(b"abc", b"xbz");
    assert_eq!(cmp.left_len(), 3);
    assert_eq!(cmp.right_len(), 3);
    assert!(cmp.equal(1, 1));
    assert!(!cmp.equal(0, 0));
    assert!(!cmp.equal(1, 2));
}

#[test]
fn test_slice_compare_mixed_types() {
    let left = vec![String::from("foo"), String::from("bar")];
    let right = ["bar"];
    let cmp = SliceCompare::new(&left[..], &right[..]);
    assert!(cmp.equal(1, 0));
    assert!(!cmp.equal(0, 0));
}

#[test]
fn test_fn_compare_by_ref() {
    fn lens<C: Compare>(c: C) -> (usize, usize) {
        (c.left_len(), c.right_len())
    }
    let cmp = FnCompare::new(4, 2, |l, r| l == r);
    assert_eq!(lens(&cmp), (4, 2));
    assert!(cmp.equal(1, 1));
}
