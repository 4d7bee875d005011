//! In-place sorting engines.
//!
//! - [`bubble`]: adjacent-exchange bubble sort.
//! - [`partition`]: Lomuto partitioning and randomized quicksort.
//! - [`heap`]: implicit max-heap and heapsort.
//!
//! Every entry point takes a `&mut NumericVector` and leaves it in
//! non-decreasing order without allocating a new output vector.

pub mod bubble;
pub mod heap;
pub mod partition;

use crate::core::NumericVector;
use rand::Rng;
use std::fmt;

pub use bubble::{bubble_sort, bubble_sort_full_passes};
pub use heap::{build_heap, heap_sort, heap_sort_rebuild, is_leaf, sift_down};
pub use partition::{partition, quick_sort, quicksort_range, random_partition};

/// Selects one of the sorting strategies at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    /// `n` full-width bubble passes; benchmark baseline.
    BubbleFullPasses,
    Quick,
    Heap,
    /// Heap rebuilt from scratch before every extraction; benchmark baseline.
    HeapRebuild,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::BubbleFullPasses,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::HeapRebuild,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::BubbleFullPasses => "bubble-full-passes",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::HeapRebuild => "heap-rebuild",
        }
    }

    /// Sorts `v` in place. Only [`Algorithm::Quick`] draws from `rng`.
    pub fn sort<R: Rng + ?Sized>(self, v: &mut NumericVector, rng: &mut R) {
        match self {
            Algorithm::Bubble => bubble_sort(v),
            Algorithm::BubbleFullPasses => bubble_sort_full_passes(v),
            Algorithm::Quick => quick_sort(v, rng),
            Algorithm::Heap => heap_sort(v),
            Algorithm::HeapRebuild => heap_sort_rebuild(v),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
