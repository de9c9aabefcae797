//! Bounded top-k selection.
//!
//! Keeps the `k` smallest-distance items seen so far in a max-heap whose
//! root is the current worst (farthest) survivor. Each offered item costs at
//! most one O(log k) heap operation, so selecting from `n` candidates is
//! O(n log k) instead of the O(n log n) of a full sort.
//!
//! Ordering of candidates:
//!
//! - smaller distance ranks first
//! - NaN ranks after every non-NaN distance
//! - equal distances (and NaN vs NaN) rank by arrival order, earlier first
//!
//! Arrival order only ever grows, so a full heap admits a newcomer exactly
//! when its distance is strictly smaller than the root's.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Candidate held in the heap.
#[derive(Debug)]
struct Candidate<T> {
    item: T,
    distance: f64,
    seq: u64,
}

impl<T> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Candidate<T> {}

impl<T> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_distance(self.distance, other.distance).then(self.seq.cmp(&other.seq))
    }
}

/// Total order over distances with NaN treated as farther than anything.
#[inline]
fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Fixed-capacity selector of the `capacity` nearest items.
///
/// # Example
///
/// ```
/// use knn_vector::TopK;
///
/// let mut top = TopK::new(2);
/// for (name, d) in [("a", 0.9), ("b", 0.1), ("c", 0.5), ("d", 0.7)] {
///     top.push(name, d);
/// }
/// assert_eq!(top.into_sorted(), vec![("b", 0.1), ("c", 0.5)]);
/// ```
#[derive(Debug)]
pub struct TopK<T> {
    capacity: usize,
    heap: BinaryHeap<Candidate<T>>,
    seen: u64,
}

impl<T> TopK<T> {
    /// Create a selector keeping at most `capacity` items.
    ///
    /// Space for `capacity` entries is reserved up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
            seen: 0,
        }
    }

    /// Maximum number of items retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Distance of the farthest retained item (the heap root).
    pub fn worst(&self) -> Option<f64> {
        self.heap.peek().map(|c| c.distance)
    }

    /// Offer an item. Returns `true` if it was retained.
    ///
    /// While below capacity every item is retained. At capacity the item
    /// replaces the current worst only if its distance is strictly smaller.
    pub fn push(&mut self, item: T, distance: f64) -> bool {
        if self.capacity == 0 {
            return false;
        }

        let candidate = Candidate {
            item,
            distance,
            seq: self.seen,
        };
        self.seen += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(candidate);
            return true;
        }

        match self.heap.peek_mut() {
            Some(mut worst) if candidate < *worst => {
                // Sifts down when `worst` drops.
                *worst = candidate;
                true
            }
            _ => false,
        }
    }

    /// Consume the selector, returning `(item, distance)` nearest-first.
    pub fn into_sorted(self) -> Vec<(T, f64)> {
        let mut heap = self.heap;
        let mut out = Vec::with_capacity(heap.len());

        // Pops come out farthest-first.
        while let Some(candidate) = heap.pop() {
            out.push((candidate.item, candidate.distance));
        }
        out.reverse();

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<T: Copy>(sorted: &[(T, f64)]) -> Vec<T> {
        sorted.iter().map(|(item, _)| *item).collect()
    }

    #[test]
    fn test_keeps_smallest() {
        let mut top = TopK::new(3);
        for (i, d) in [5.0, 1.0, 4.0, 2.0, 3.0, 0.5].into_iter().enumerate() {
            top.push(i, d);
        }

        assert_eq!(top.len(), 3);
        assert_eq!(top.worst(), Some(2.0));

        let sorted = top.into_sorted();
        assert_eq!(ids(&sorted), vec![5, 1, 3]);
        assert_eq!(sorted[0].1, 0.5);
        assert_eq!(sorted[2].1, 2.0);
    }

    #[test]
    fn test_under_capacity_is_sorted() {
        let mut top = TopK::new(10);
        top.push("far", 3.0);
        top.push("near", 1.0);
        top.push("mid", 2.0);

        assert_eq!(ids(&top.into_sorted()), vec!["near", "mid", "far"]);
    }

    #[test]
    fn test_capacity_zero() {
        let mut top = TopK::new(0);
        assert!(!top.push("a", 0.0));
        assert!(top.is_empty());
        assert_eq!(top.worst(), None);
        assert!(top.into_sorted().is_empty());
    }

    #[test]
    fn test_equal_distance_does_not_evict() {
        let mut top = TopK::new(1);
        assert!(top.push("first", 1.0));
        assert!(!top.push("second", 1.0));
        assert!(top.push("third", 0.5));
        assert_eq!(ids(&top.into_sorted()), vec!["third"]);
    }

    #[test]
    fn test_ties_rank_by_arrival() {
        let mut top = TopK::new(4);
        top.push("a", 1.0);
        top.push("b", 0.0);
        top.push("c", 1.0);
        top.push("d", 0.0);

        assert_eq!(ids(&top.into_sorted()), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_nan_ranks_last() {
        let mut top = TopK::new(3);
        top.push("nan1", f64::NAN);
        top.push("one", 1.0);
        top.push("nan2", f64::NAN);
        assert_eq!(top.worst().map(f64::is_nan), Some(true));

        // A real distance evicts a NaN.
        assert!(top.push("two", 2.0));

        let sorted = top.into_sorted();
        assert_eq!(ids(&sorted), vec!["one", "two", "nan1"]);
        assert!(sorted[2].1.is_nan());
    }

    #[test]
    fn test_nan_never_evicts() {
        let mut top = TopK::new(1);
        top.push("real", 100.0);
        assert!(!top.push("nan", f64::NAN));
        assert_eq!(ids(&top.into_sorted()), vec!["real"]);
    }

    #[test]
    fn test_matches_full_sort() {
        let distances: Vec<f64> = (0..200u64)
            .map(|i| ((i * 7919) % 211) as f64 / 13.0)
            .collect();

        for k in [1, 5, 50, 199, 200, 500] {
            let mut top = TopK::new(k);
            for (i, &d) in distances.iter().enumerate() {
                top.push(i, d);
            }

            let mut expected: Vec<(usize, f64)> = distances.iter().copied().enumerate().collect();
            expected.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap().then(a.0.cmp(&b.0)));
            expected.truncate(k);

            assert_eq!(top.into_sorted(), expected, "k = {}", k);
        }
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let mut top = TopK::new(1);
        top.push("pos", 0.0);
        assert!(!top.push("neg", -0.0));
    }
}
