use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::data_structures::{ExtrinsicMinPQ, PriorityNode};
use crate::{Error, Result};

/// Unsorted vector implementation of [`ExtrinsicMinPQ`]
///
/// Adding is O(1); every other operation scans the whole vector. Useful as a
/// reference implementation when testing faster backends.
#[derive(Debug, Clone)]
pub struct UnsortedArrayMinPQ<T, P = f64> {
    /// Item-priority pairs in insertion order
    items: Vec<PriorityNode<T, P>>,
}

impl<T, P> UnsortedArrayMinPQ<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        UnsortedArrayMinPQ { items: Vec::new() }
    }

    /// Creates a new empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        UnsortedArrayMinPQ {
            items: Vec::with_capacity(capacity),
        }
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|node| node.item() == item)
    }

    /// Index of the first node holding the minimum priority
    fn min_index(&self) -> Option<usize> {
        let mut nodes = self.items.iter().enumerate();
        let (mut best, first) = nodes.next()?;
        let mut best_priority = first.priority();

        for (index, node) in nodes {
            if node.priority() < best_priority {
                best_priority = node.priority();
                best = index;
            }
        }
        Some(best)
    }
}

impl<T, P> Default for UnsortedArrayMinPQ<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> ExtrinsicMinPQ<T, P> for UnsortedArrayMinPQ<T, P>
where
    T: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    fn add(&mut self, item: T, priority: P) -> Result<()> {
        if self.contains(&item) {
            return Err(Error::DuplicateItem(format!("{:?}", item)));
        }
        self.items.push(PriorityNode::new(item, priority));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    fn peek_min(&self) -> Result<&T> {
        let index = self.min_index().ok_or(Error::EmptyQueue)?;
        Ok(self.items[index].item())
    }

    fn remove_min(&mut self) -> Result<T> {
        let index = self.min_index().ok_or(Error::EmptyQueue)?;
        // Order is irrelevant here, so the cheap removal is fine
        Ok(self.items.swap_remove(index).into_item())
    }

    fn change_priority(&mut self, item: &T, priority: P) -> Result<()> {
        let index = self
            .position(item)
            .ok_or_else(|| Error::ItemNotFound(format!("{:?}", item)))?;
        self.items[index].set_priority(priority);
        Ok(())
    }

    fn priority_of(&self, item: &T) -> Option<P> {
        self.position(item).map(|index| self.items[index].priority())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
