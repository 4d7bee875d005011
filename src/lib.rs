//! # Sortbench
//!
//! `sortbench` implements three classic comparison sorts over a resizable
//! `f64` vector and a small harness for timing them.
//!
//! ## Algorithms
//!
//! - **Bubble sort** ([`bubble_sort`]): repeated adjacent exchanges, `O(n²)`.
//! - **Randomized quicksort** ([`quick_sort`]): Lomuto partitioning around a
//!   pivot drawn from an explicitly passed RNG, `O(n log n)` expected.
//! - **Heapsort** ([`heap_sort`]): implicit max-heap with sift-down,
//!   `O(n log n)`.
//!
//! All three mutate a [`NumericVector`] in place.
//!
//! ## Usage
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sortbench::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut v = NumericVector::random(100, 0.0, 10.0, &mut rng).unwrap();
//!
//! quick_sort(&mut v, &mut rng);
//! assert!(v.as_slice().windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ## Bounds checking
//!
//! The checked accessors on [`NumericVector`] and the range-based entry
//! points ([`partition`], [`random_partition`], [`sift_down`], ...) report
//! [`SortError`] instead of touching memory out of range. With the
//! `unchecked` feature the engines' inner loops skip per-element bounds
//! checks.

pub mod algo;
pub mod bench;
pub mod core;
pub mod error;

pub use algo::{
    Algorithm, bubble_sort, bubble_sort_full_passes, build_heap, heap_sort, heap_sort_rebuild,
    is_leaf, partition, quick_sort, quicksort_range, random_partition, sift_down,
};
pub use core::NumericVector;
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::{Algorithm, bubble_sort, heap_sort, quick_sort};
    pub use crate::core::NumericVector;
    pub use crate::error::SortError;
}
