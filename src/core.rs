//! Core storage type for the sorting engines.
//!
//! This module defines:
//! - [`NumericVector`]: an owning, fixed-length sequence of `f64` values that
//!   every engine mutates in place.

use crate::error::{Result, SortError};
use cuneiform::cuneiform;
use rand::Rng;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An owning, index-addressable sequence of `f64` values.
///
/// The length is fixed after construction; the engines only read, write and
/// swap elements. Checked accessors ([`get`](Self::get), [`set`](Self::set),
/// [`swap`](Self::swap)) report [`SortError::IndexOutOfRange`]. The engines
/// use internal accessors that skip the check when the `unchecked` feature is
/// enabled; their own index arithmetic keeps every access in bounds.
///
/// # Examples
///
/// ```
/// use sortbench::NumericVector;
///
/// let mut v = NumericVector::from([3.0, 1.0, 2.0]);
/// v.swap(0, 1).unwrap();
///
/// assert_eq!(v.get(0).unwrap(), 1.0);
/// assert_eq!(v.to_string(), "[1, 3, 2]");
/// ```
#[cuneiform]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericVector {
    data: Vec<f64>,
}

impl NumericVector {
    /// Creates a vector of `n` zeros.
    pub fn new(n: usize) -> Self {
        Self::filled(n, 0.0)
    }

    /// Creates a vector of `n` copies of `x`.
    pub fn filled(n: usize, x: f64) -> Self {
        Self { data: vec![x; n] }
    }

    /// Creates a vector of `n` values drawn uniformly from `[xmin, xmax]`.
    pub fn random<R: Rng + ?Sized>(n: usize, xmin: f64, xmax: f64, rng: &mut R) -> Result<Self> {
        let mut v = Self::new(n);
        v.initialise_random(xmin, xmax, rng)?;
        Ok(v)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Reads the element at `index`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(SortError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(SortError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Exchanges the elements at `i` and `j`. A no-op when `i == j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.data.swap(i, j);
        Ok(())
    }

    /// Reads the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> f64 {
        // SAFETY: caller guarantees `index < len`.
        unsafe { *self.data.get_unchecked(index) }
    }

    /// Exchanges two elements without bounds checks.
    ///
    /// # Safety
    ///
    /// Both `i` and `j` must be less than [`len`](Self::len).
    #[inline(always)]
    pub unsafe fn swap_unchecked(&mut self, i: usize, j: usize) {
        let base = self.data.as_mut_ptr();
        // SAFETY: caller guarantees both indices are in bounds; `ptr::swap`
        // tolerates `i == j`.
        unsafe { std::ptr::swap(base.add(i), base.add(j)) }
    }

    /// Overwrites every element with a value drawn uniformly from the closed
    /// interval `[xmin, xmax]`.
    ///
    /// Seeding is the caller's business: pass the same generator to every
    /// call that should share one random stream.
    pub fn initialise_random<R: Rng + ?Sized>(
        &mut self,
        xmin: f64,
        xmax: f64,
        rng: &mut R,
    ) -> Result<()> {
        if !(xmin.is_finite() && xmax.is_finite() && xmin <= xmax && (xmax - xmin).is_finite()) {
            return Err(SortError::InvalidRange {
                min: xmin,
                max: xmax,
            });
        }
        self.data
            .iter_mut()
            .for_each(|x| *x = rng.random_range(xmin..=xmax));
        Ok(())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(SortError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    #[cfg(not(feature = "unchecked"))]
    #[inline(always)]
    pub(crate) fn at(&self, index: usize) -> f64 {
        self.data[index]
    }

    #[cfg(feature = "unchecked")]
    #[inline(always)]
    pub(crate) fn at(&self, index: usize) -> f64 {
        // SAFETY: engine callers only pass indices derived from validated bounds.
        unsafe { self.get_unchecked(index) }
    }

    #[cfg(not(feature = "unchecked"))]
    #[inline(always)]
    pub(crate) fn exchange(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    #[cfg(feature = "unchecked")]
    #[inline(always)]
    pub(crate) fn exchange(&mut self, i: usize, j: usize) {
        // SAFETY: engine callers only pass indices derived from validated bounds.
        unsafe { self.swap_unchecked(i, j) }
    }
}

impl Index<usize> for NumericVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for NumericVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl From<Vec<f64>> for NumericVector {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl From<&[f64]> for NumericVector {
    fn from(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for NumericVector {
    fn from(values: [f64; N]) -> Self {
        Self {
            data: values.to_vec(),
        }
    }
}

impl FromIterator<f64> for NumericVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NumericVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Renders as `[a, b, c]`; an empty vector renders as `[]`.
impl fmt::Display for NumericVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}
