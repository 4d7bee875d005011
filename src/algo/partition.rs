//! Lomuto partitioning and randomized quicksort.
//!
//! All ranges are inclusive: `[lo, hi]`. The pivot always travels through
//! index `hi`.

use crate::core::NumericVector;
use crate::error::{Result, SortError};
use rand::Rng;

/// Partitions `v[lo..=hi]` around the value currently at `hi`.
///
/// Returns the pivot's final index `p`: afterwards every element in
/// `[lo, p)` is `<=` the pivot, `v[p]` is the pivot, and every element in
/// `(p, hi]` is `>` the pivot. Elements equal to the pivot land on the low
/// side.
///
/// # Errors
///
/// [`SortError::IndexOutOfRange`] if `hi >= v.len()`,
/// [`SortError::DegenerateRange`] if `lo > hi`.
///
/// # Examples
///
/// ```
/// use sortbench::{NumericVector, partition};
///
/// let mut v = NumericVector::from([5.0, 3.0, 8.0, 1.0, 9.0, 2.0]);
/// let p = partition(&mut v, 0, 5).unwrap();
///
/// assert_eq!(p, 1);
/// assert_eq!(v[p], 2.0);
/// ```
pub fn partition(v: &mut NumericVector, lo: usize, hi: usize) -> Result<usize> {
    v.check_index(hi)?;
    if lo > hi {
        return Err(SortError::DegenerateRange { lo, hi });
    }
    Ok(lomuto(v, lo, hi))
}

/// Swaps a pivot drawn uniformly from `[lo, hi - 1]` into `hi`, then
/// [`partition`]s.
///
/// The draw never selects `hi` itself.
///
/// # Errors
///
/// [`SortError::DegenerateRange`] if `hi <= lo`,
/// [`SortError::IndexOutOfRange`] if `hi >= v.len()`.
pub fn random_partition<R: Rng + ?Sized>(
    v: &mut NumericVector,
    lo: usize,
    hi: usize,
    rng: &mut R,
) -> Result<usize> {
    if hi <= lo {
        return Err(SortError::DegenerateRange { lo, hi });
    }
    v.check_index(hi)?;
    Ok(random_lomuto(v, lo, hi, rng))
}

/// Sorts the inclusive range `v[lo..=hi]` with randomized quicksort.
///
/// Ranges with `lo >= hi` are already sorted and are left alone.
///
/// # Errors
///
/// [`SortError::IndexOutOfRange`] if `lo < hi` and `hi >= v.len()`.
pub fn quicksort_range<R: Rng + ?Sized>(
    v: &mut NumericVector,
    lo: usize,
    hi: usize,
    rng: &mut R,
) -> Result<()> {
    if lo < hi {
        v.check_index(hi)?;
        quicksort_in_bounds(v, lo, hi, rng);
    }
    Ok(())
}

/// Sorts `v` in ascending order with randomized quicksort.
///
/// `rng` drives pivot selection; a seeded generator makes the sequence of
/// swaps reproducible.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sortbench::{NumericVector, quick_sort};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut v = NumericVector::from([4.0, 10.0, 3.0, 5.0, 1.0]);
/// quick_sort(&mut v, &mut rng);
///
/// assert_eq!(v.as_slice(), &[1.0, 3.0, 4.0, 5.0, 10.0]);
/// ```
pub fn quick_sort<R: Rng + ?Sized>(v: &mut NumericVector, rng: &mut R) {
    if v.len() > 1 {
        quicksort_in_bounds(v, 0, v.len() - 1, rng);
    }
}

// Pending ranges live on an explicit stack. The right half is pushed first so
// the left half is finished before it, matching depth-first recursion order.
fn quicksort_in_bounds<R: Rng + ?Sized>(v: &mut NumericVector, lo: usize, hi: usize, rng: &mut R) {
    let mut pending = vec![(lo, hi)];
    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }
        let p = random_lomuto(v, lo, hi, rng);
        if p < hi {
            pending.push((p + 1, hi));
        }
        if p > lo {
            pending.push((lo, p - 1));
        }
    }
}

#[inline]
fn random_lomuto<R: Rng + ?Sized>(v: &mut NumericVector, lo: usize, hi: usize, rng: &mut R) -> usize {
    let pick = lo + rng.random_range(0..hi - lo);
    v.exchange(pick, hi);
    lomuto(v, lo, hi)
}

fn lomuto(v: &mut NumericVector, lo: usize, hi: usize) -> usize {
    let pivot = v.at(hi);
    let mut boundary = lo;
    for i in lo..hi {
        if v.at(i) <= pivot {
            v.exchange(i, boundary);
            boundary += 1;
        }
    }
    v.exchange(boundary, hi);
    boundary
}
