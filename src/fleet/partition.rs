//! Contiguous partition of requests into carrier groups.
//!
//! # Algorithm
//!
//! Repeatedly takes `ceil(remaining / slots_left)` items off the front of
//! the list. Every group is non-empty, group sizes never increase from one
//! carrier to the next, and no two groups differ by more than one item.
//!
//! # Complexity
//!
//! O(k) for k groups; groups borrow the input.

use crate::models::{DeliveryRequest, RequestSet};

/// The requests assigned to one carrier, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierGroup<'a> {
    index: usize,
    requests: &'a [DeliveryRequest],
}

impl<'a> CarrierGroup<'a> {
    /// Position of this carrier in the fleet, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Assigned requests.
    pub fn requests(&self) -> &'a [DeliveryRequest] {
        self.requests
    }

    /// Number of assigned requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Splits `items` into at most `parts` contiguous, non-empty slices.
///
/// `parts` is clamped to `1..=items.len()`; an empty input yields no slices.
///
/// # Examples
///
/// ```
/// use grid_courier::fleet::split_contiguous;
///
/// let items: Vec<u32> = (1..=10).collect();
/// let parts = split_contiguous(&items, 3);
/// assert_eq!(parts, vec![&items[0..4], &items[4..7], &items[7..10]]);
/// ```
pub fn split_contiguous<T>(items: &[T], parts: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut slots = parts.clamp(1, items.len());
    let mut groups = Vec::with_capacity(slots);
    let mut rest = items;
    while slots > 0 {
        let size = rest.len().div_ceil(slots);
        let (head, tail) = rest.split_at(size);
        groups.push(head);
        rest = tail;
        slots -= 1;
    }
    groups
}

/// Assigns the requests to `carriers` groups.
pub fn partition(requests: &RequestSet, carriers: usize) -> Vec<CarrierGroup<'_>> {
    split_contiguous(requests.requests(), carriers)
        .into_iter()
        .enumerate()
        .map(|(index, requests)| CarrierGroup { index, requests })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridMap;
    use crate::models::RequestInput;

    fn sizes<T>(groups: &[&[T]]) -> Vec<usize> {
        groups.iter().map(|g| g.len()).collect()
    }

    #[test]
    fn test_split_even() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(sizes(&split_contiguous(&items, 2)), vec![4, 4]);
    }

    #[test]
    fn test_split_remainder_front_loaded() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(sizes(&split_contiguous(&items, 2)), vec![3, 2]);
        let items: Vec<u32> = (0..11).collect();
        assert_eq!(sizes(&split_contiguous(&items, 4)), vec![3, 3, 3, 2]);
    }

    #[test]
    fn test_split_preserves_order() {
        let items: Vec<u32> = (0..9).collect();
        let flat: Vec<u32> = split_contiguous(&items, 4).concat();
        assert_eq!(flat, items);
    }

    #[test]
    fn test_split_clamps_parts() {
        let items = [1, 2];
        assert_eq!(sizes(&split_contiguous(&items, 5)), vec![1, 1]);
        assert_eq!(sizes(&split_contiguous(&items, 0)), vec![2]);
        assert!(split_contiguous::<u32>(&[], 3).is_empty());
    }

    #[test]
    fn test_partition_keeps_request_ids() {
        let grid = GridMap::open(3, 3);
        let inputs: Vec<RequestInput> = (0..5).map(|i| RequestInput::new((i % 3, 0), (0, 2))).collect();
        let set = RequestSet::annotate(&grid, &inputs).expect("reachable");
        let groups = partition(&set, 2);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].index(), 0);
        assert_eq!(groups[1].index(), 1);
        let ids: Vec<Vec<usize>> = groups
            .iter()
            .map(|g| g.requests().iter().map(|r| r.id()).collect())
            .collect();
        assert_eq!(ids, vec![vec![1, 2, 3], vec![4, 5]]);
    }
}
