use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::data_structures::{ExtrinsicMinPQ, PriorityNode};
use crate::{Error, Result};

/// Binary heap implementation of [`ExtrinsicMinPQ`] with an item-to-slot index
///
/// The heap is rooted at slot 0 and the children of slot `i` live at `2i + 1`
/// and `2i + 2`. Every structural change goes through [`swap`](Self::swap),
/// which moves two nodes and rewrites both of their index entries together.
///
/// - `add`, `remove_min`, `change_priority`: O(log n)
/// - `contains`, `peek_min`: O(1)
#[derive(Debug, Clone)]
pub struct OptimizedHeapMinPQ<T, P = f64>
where
    T: Eq + Hash,
{
    /// Heap-ordered item-priority pairs
    items: Vec<PriorityNode<T, P>>,

    /// Slot of each item in `items`
    item_to_index: HashMap<T, usize>,
}

impl<T, P> OptimizedHeapMinPQ<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        OptimizedHeapMinPQ {
            items: Vec::new(),
            item_to_index: HashMap::new(),
        }
    }

    /// Creates a new empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        OptimizedHeapMinPQ {
            items: Vec::with_capacity(capacity),
            item_to_index: HashMap::with_capacity(capacity),
        }
    }

    fn parent(index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Smaller of the children of `index` that exist in the heap
    fn smaller_child(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        let right = left + 1;

        if left >= self.items.len() {
            None
        } else if right < self.items.len() && self.less(right, left) {
            Some(right)
        } else {
            Some(left)
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.items[a].priority() < self.items[b].priority()
    }

    /// Exchanges two slots and keeps the index in step with them
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        for slot in [a, b] {
            if let Some(index) = self.item_to_index.get_mut(self.items[slot].item()) {
                *index = slot;
            }
        }
    }

    /// Moves the node at `index` up while its parent has a strictly greater priority.
    /// Returns the final slot.
    fn swim(&mut self, mut index: usize) -> usize {
        while let Some(parent) = Self::parent(index) {
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    /// Moves the node at `index` down while its smaller child has a strictly lesser priority
    fn sink(&mut self, mut index: usize) {
        while let Some(child) = self.smaller_child(index) {
            if !self.less(child, index) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
    }
}

impl<T, P> Default for OptimizedHeapMinPQ<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> ExtrinsicMinPQ<T, P> for OptimizedHeapMinPQ<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    fn add(&mut self, item: T, priority: P) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::DuplicateItem(format!("{:?}", item)));
        }

        let slot = self.items.len();
        self.item_to_index.insert(item.clone(), slot);
        self.items.push(PriorityNode::new(item, priority));
        self.swim(slot);
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.item_to_index.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T> {
        self.items
            .first()
            .map(|node| node.item())
            .ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.items.len() - 1;
        self.swap(0, last);
        let node = self.items.pop().ok_or(Error::EmptyQueue)?;
        self.item_to_index.remove(node.item());

        if !self.items.is_empty() {
            self.sink(0);
        }
        Ok(node.into_item())
    }

    fn change_priority(&mut self, item: &T, priority: P) -> Result<()> {
        let index = *self
            .item_to_index
            .get(item)
            .ok_or_else(|| Error::ItemNotFound(format!("{:?}", item)))?;

        self.items[index].set_priority(priority);
        // At most one of these moves the node
        let index = self.swim(index);
        self.sink(index);
        Ok(())
    }

    fn priority_of(&self, item: &T) -> Option<P> {
        self.item_to_index
            .get(item)
            .map(|&index| self.items[index].priority())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn assert_invariants<T, P>(pq: &OptimizedHeapMinPQ<T, P>)
    where
        T: Eq + Hash + Clone + Debug,
        P: Float + Debug,
    {
        assert_eq!(pq.items.len(), pq.item_to_index.len());
        for (slot, node) in pq.items.iter().enumerate() {
            assert_eq!(pq.item_to_index.get(node.item()), Some(&slot), "index out of step at slot {}", slot);
            if let Some(parent) = OptimizedHeapMinPQ::<T, P>::parent(slot) {
                assert!(
                    pq.items[parent].priority() <= node.priority(),
                    "heap order violated between slots {} and {}",
                    parent,
                    slot
                );
            }
        }
    }

    #[test]
    fn test_peek_min_is_root() {
        let mut pq = OptimizedHeapMinPQ::new();
        pq.add("b", 2.0).unwrap();
        assert_eq!(pq.peek_min(), Ok(&"b"));
        pq.add("a", 1.0).unwrap();
        assert_eq!(pq.peek_min(), Ok(&"a"));
        pq.add("c", 3.0).unwrap();
        assert_eq!(pq.peek_min(), Ok(&"a"));
        assert!(pq.contains(&"c"));
        assert_invariants(&pq);
    }

    #[test]
    fn test_remove_min_drains_in_order() {
        let mut pq = OptimizedHeapMinPQ::with_capacity(8);
        for (item, priority) in [(5, 5.0), (3, 3.0), (8, 8.0), (1, 1.0), (9, 9.0), (2, 2.0), (7, 7.0)] {
            pq.add(item, priority).unwrap();
            assert_invariants(&pq);
        }

        let mut drained = Vec::new();
        while !pq.is_empty() {
            drained.push(pq.remove_min().unwrap());
            assert_invariants(&pq);
        }
        assert_eq!(drained, vec![1, 2, 3, 5, 7, 8, 9]);
        assert!(!pq.contains(&1));
    }

    #[test]
    fn test_single_item_round_trip() {
        let mut pq = OptimizedHeapMinPQ::new();
        pq.add('x', 0.5).unwrap();
        assert_eq!(pq.remove_min(), Ok('x'));
        assert!(pq.is_empty());
        assert!(!pq.contains(&'x'));
        assert_eq!(pq.remove_min(), Err(Error::EmptyQueue));
        assert_eq!(pq.peek_min(), Err(Error::EmptyQueue));
    }

    #[test]
    fn test_change_priority_both_directions() {
        let mut pq = OptimizedHeapMinPQ::new();
        for i in 0..10u32 {
            pq.add(i, f64::from(i)).unwrap();
        }

        pq.change_priority(&9, -1.0).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.peek_min(), Ok(&9));

        pq.change_priority(&9, 100.0).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.peek_min(), Ok(&0));
        assert_eq!(pq.priority_of(&9), Some(100.0));

        pq.change_priority(&0, 4.5).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.peek_min(), Ok(&1));
    }

    #[test]
    fn test_change_priority_among_ties() {
        let mut pq = OptimizedHeapMinPQ::new();
        for i in 0..7u32 {
            pq.add(i, 1.0).unwrap();
        }

        pq.change_priority(&3, 1.0).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.len(), 7);

        pq.change_priority(&5, 0.0).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.remove_min(), Ok(5));

        let mut rest = Vec::new();
        while let Ok(item) = pq.remove_min() {
            assert_invariants(&pq);
            rest.push(item);
        }
        rest.sort_unstable();
        assert_eq!(rest, vec![0, 1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_failed_operations_leave_queue_intact() {
        let mut pq = OptimizedHeapMinPQ::new();
        pq.add("a", 1.0).unwrap();
        pq.add("b", 2.0).unwrap();

        assert_eq!(pq.add("a", 0.0), Err(Error::DuplicateItem("\"a\"".to_string())));
        assert_eq!(
            pq.change_priority(&"z", 0.0),
            Err(Error::ItemNotFound("\"z\"".to_string()))
        );
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.priority_of(&"a"), Some(1.0));
        assert_invariants(&pq);
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pq = OptimizedHeapMinPQ::new();
        let mut next_item = 0u32;

        for _ in 0..2_000 {
            match rng.gen_range(0..3) {
                0 => {
                    pq.add(next_item, rng.gen_range(-50.0..50.0)).unwrap();
                    next_item += 1;
                }
                1 if !pq.is_empty() => {
                    let before = pq.priority_of(pq.peek_min().unwrap()).unwrap();
                    let removed = pq.remove_min().unwrap();
                    assert!(!pq.contains(&removed));
                    if let Ok(next) = pq.peek_min() {
                        assert!(pq.priority_of(next).unwrap() >= before);
                    }
                }
                _ if next_item > 0 => {
                    let item = rng.gen_range(0..next_item);
                    let result = pq.change_priority(&item, rng.gen_range(-50.0..50.0));
                    assert_eq!(result.is_ok(), pq.contains(&item));
                }
                _ => {}
            }
            assert_invariants(&pq);
        }
    }
}
