//! Adjacent-exchange bubble sort.

use crate::core::NumericVector;

/// Sorts `v` in ascending order by repeated adjacent exchanges.
///
/// Pass `k` (for `k` in `1..n`) scans the pairs in `[0, n - k]` and swaps any
/// pair found in descending order, so each pass parks the largest remaining
/// value at the end of the unsorted prefix. There is no early exit: a sorted
/// input still costs `n(n-1)/2` comparisons.
///
/// # Examples
///
/// ```
/// use sortbench::{NumericVector, bubble_sort};
///
/// let mut v = NumericVector::from([3.0, 1.0, 2.0]);
/// bubble_sort(&mut v);
///
/// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
/// ```
pub fn bubble_sort(v: &mut NumericVector) {
    let n = v.len();
    for k in 1..n {
        for i in 0..n - k {
            if v.at(i + 1) < v.at(i) {
                v.exchange(i, i + 1);
            }
        }
    }
}

/// Bubble sort that always runs `n` full-width passes.
///
/// Produces the same ordering as [`bubble_sort`] with a larger constant
/// factor. Kept as a benchmark baseline.
pub fn bubble_sort_full_passes(v: &mut NumericVector) {
    let n = v.len();
    for _ in 0..n {
        for i in 0..n.saturating_sub(1) {
            if v.at(i + 1) < v.at(i) {
                v.exchange(i, i + 1);
            }
        }
    }
}
