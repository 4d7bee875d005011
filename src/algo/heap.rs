//! Implicit binary max-heap and heapsort.
//!
//! The heap lives in the vector's own index space: node `i` has children at
//! `2i + 1` and `2i + 2`. Only the first `n` elements (the active size)
//! belong to the heap; anything at or past `n` is ignored.

use crate::core::NumericVector;
use crate::error::{Result, SortError};

/// Returns `true` if node `i` has no children inside a heap of size `n`.
#[inline]
pub fn is_leaf(i: usize, n: usize) -> bool {
    i.saturating_mul(2).saturating_add(1) >= n
}

/// Restores max-heap order below node `i` within the active size `n`.
///
/// A node moves down only when a child strictly exceeds both the node and
/// its sibling. A child with no sibling inside `n` only has to exceed the
/// node. Two equal children that both exceed the node resolve to the left
/// one.
///
/// # Errors
///
/// [`SortError::IndexOutOfRange`] if `n > v.len()`.
pub fn sift_down(v: &mut NumericVector, i: usize, n: usize) -> Result<()> {
    check_active_size(v, n)?;
    sift(v, i, n);
    Ok(())
}

/// Arranges `v[..n]` into a max-heap by sifting down every index from `n`
/// to `0`.
///
/// # Errors
///
/// [`SortError::IndexOutOfRange`] if `n > v.len()`.
pub fn build_heap(v: &mut NumericVector, n: usize) -> Result<()> {
    check_active_size(v, n)?;
    heapify(v, n);
    Ok(())
}

/// Sorts `v` in ascending order with heapsort.
///
/// Builds a max-heap over the whole vector, then repeatedly swaps the root
/// into the last active slot and re-sifts the shrunken heap from the root.
///
/// # Examples
///
/// ```
/// use sortbench::{NumericVector, heap_sort};
///
/// let mut v = NumericVector::from([4.0, 10.0, 3.0, 5.0, 1.0]);
/// heap_sort(&mut v);
///
/// assert_eq!(v.as_slice(), &[1.0, 3.0, 4.0, 5.0, 10.0]);
/// ```
pub fn heap_sort(v: &mut NumericVector) {
    let n = v.len();
    heapify(v, n);
    for i in (0..n).rev() {
        v.exchange(i, 0);
        sift(v, 0, i);
    }
}

/// Heapsort that rebuilds the whole heap before every extraction.
///
/// `O(n² log n)`; kept as a benchmark baseline for [`heap_sort`].
pub fn heap_sort_rebuild(v: &mut NumericVector) {
    let n = v.len();
    for size in (1..=n).rev() {
        for i in (0..size).rev() {
            sift(v, i, size);
        }
        v.exchange(size - 1, 0);
    }
}

fn check_active_size(v: &NumericVector, n: usize) -> Result<()> {
    if n > v.len() {
        return Err(SortError::IndexOutOfRange {
            index: n,
            len: v.len(),
        });
    }
    Ok(())
}

fn heapify(v: &mut NumericVector, n: usize) {
    for i in (0..=n).rev() {
        sift(v, i, n);
    }
}

fn sift(v: &mut NumericVector, mut node: usize, n: usize) {
    while !is_leaf(node, n) {
        let left = 2 * node + 1;
        let right = left + 1;
        let parent = v.at(node);
        let l = v.at(left);

        let child = if right < n {
            let r = v.at(right);
            if l > parent && l > r {
                left
            } else if r > parent && r > l {
                right
            } else if l > parent && l == r {
                // tie between siblings
                left
            } else {
                break;
            }
        } else if l > parent {
            left
        } else {
            break;
        };

        v.exchange(node, child);
        node = child;
    }
}
