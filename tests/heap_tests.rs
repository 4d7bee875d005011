use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortbench::{NumericVector, SortError, build_heap, heap_sort_rebuild, is_leaf, sift_down};

fn is_max_heap(v: &NumericVector, n: usize) -> bool {
    (0..n).all(|i| {
        let (l, r) = (2 * i + 1, 2 * i + 2);
        (l >= n || v[i] >= v[l]) && (r >= n || v[i] >= v[r])
    })
}

#[test]
fn test_is_leaf() {
    assert!(is_leaf(0, 0));
    assert!(is_leaf(0, 1));
    assert!(!is_leaf(0, 2));
    assert!(!is_leaf(0, 3));
    assert!(!is_leaf(1, 4));
    assert!(is_leaf(1, 3));
    assert!(is_leaf(2, 5));
    assert!(is_leaf(7, 3));
    assert!(is_leaf(usize::MAX, 10));
}

#[test]
fn test_sift_down_follows_larger_child() {
    let mut v = NumericVector::from([1.0, 9.0, 4.0, 7.0, 8.0]);
    sift_down(&mut v, 0, 5).unwrap();
    assert_eq!(v.as_slice(), &[9.0, 8.0, 4.0, 7.0, 1.0]);

    let mut v = NumericVector::from([1.0, 4.0, 9.0]);
    sift_down(&mut v, 0, 3).unwrap();
    assert_eq!(v.as_slice(), &[9.0, 4.0, 1.0]);
}

#[test]
fn test_sift_down_stops_when_parent_dominates() {
    let mut v = NumericVector::from([5.0, 4.0, 5.0]);
    sift_down(&mut v, 0, 3).unwrap();
    assert_eq!(v.as_slice(), &[5.0, 4.0, 5.0]);
}

#[test]
fn test_sift_down_respects_active_size() {
    // Index 2 is outside the active heap, so only the lone left child counts.
    let mut v = NumericVector::from([1.0, 2.0, 9.0]);
    sift_down(&mut v, 0, 2).unwrap();
    assert_eq!(v.as_slice(), &[2.0, 1.0, 9.0]);

    let mut v = NumericVector::from([1.0, 2.0, 9.0]);
    sift_down(&mut v, 0, 1).unwrap();
    assert_eq!(v.as_slice(), &[1.0, 2.0, 9.0]);
}

#[test]
fn test_sift_down_tied_children() {
    let mut v = NumericVector::from([1.0, 5.0, 5.0]);
    sift_down(&mut v, 0, 3).unwrap();
    assert!(is_max_heap(&v, 3));
    assert_eq!(v[0], 5.0);
}

#[test]
fn test_build_heap_invariant_fuzz() {
    let mut rng = StdRng::seed_from_u64(21);

    for _ in 0..1_000 {
        let len = rng.random_range(0..64);
        let mut v: NumericVector = (0..len)
            .map(|_| f64::from(rng.random_range(0i32..6)))
            .collect();
        let n = rng.random_range(0..=len);

        let tail = v.as_slice()[n..].to_vec();
        build_heap(&mut v, n).unwrap();
        assert!(is_max_heap(&v, n), "not a heap: {v}");
        assert_eq!(&v.as_slice()[n..], tail.as_slice());
    }
}

#[test]
fn test_heap_invariant_holds_through_extraction() {
    let mut rng = StdRng::seed_from_u64(22);
    let mut v = NumericVector::random(257, 0.0, 10.0, &mut rng).unwrap();
    let n = v.len();

    build_heap(&mut v, n).unwrap();
    for i in (0..n).rev() {
        v.swap(i, 0).unwrap();
        sift_down(&mut v, 0, i).unwrap();
        assert!(is_max_heap(&v, i), "heap broken at size {i}");
    }
    assert!(v.as_slice().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_heap_sort_rebuild() {
    let mut v = NumericVector::from([4.0, 10.0, 3.0, 5.0, 1.0, 5.0]);
    heap_sort_rebuild(&mut v);
    assert_eq!(v.as_slice(), &[1.0, 3.0, 4.0, 5.0, 5.0, 10.0]);
}

#[test]
fn test_heap_ops_reject_oversized_heap() {
    let mut v = NumericVector::from([1.0, 2.0]);
    assert_eq!(
        sift_down(&mut v, 0, 3),
        Err(SortError::IndexOutOfRange { index: 3, len: 2 })
    );
    assert_eq!(
        build_heap(&mut v, 3),
        Err(SortError::IndexOutOfRange { index: 3, len: 2 })
    );
    assert_eq!(v.as_slice(), &[1.0, 2.0]);
}
