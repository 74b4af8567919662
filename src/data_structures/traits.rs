use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Trait representing a min-priority queue whose priorities are supplied by the caller
///
/// Items are never compared to each other; only their associated priorities are
/// ordered. An item can be present at most once. Ties between equal priorities
/// are broken in an implementation-defined way.
pub trait ExtrinsicMinPQ<T, P = f64>
where
    T: Eq + Hash + Clone + Debug,
    P: Float + Debug,
{
    /// Adds an item with the given priority
    ///
    /// Fails with [`Error::DuplicateItem`](crate::Error::DuplicateItem) if the item is already present.
    fn add(&mut self, item: T, priority: P) -> Result<()>;

    /// Returns true if the queue contains the item
    fn contains(&self, item: &T) -> bool;

    /// Returns the item with the minimum priority without removing it
    ///
    /// Fails with [`Error::EmptyQueue`](crate::Error::EmptyQueue) if the queue is empty.
    fn peek_min(&self) -> Result<&T>;

    /// Removes and returns the item with the minimum priority
    ///
    /// Fails with [`Error::EmptyQueue`](crate::Error::EmptyQueue) if the queue is empty.
    fn remove_min(&mut self) -> Result<T>;

    /// Updates the priority of an item already in the queue
    ///
    /// Fails with [`Error::ItemNotFound`](crate::Error::ItemNotFound) if the item is absent.
    fn change_priority(&mut self, item: &T, priority: P) -> Result<()>;

    /// Returns the current priority of an item, if present
    fn priority_of(&self, item: &T) -> Option<P>;

    /// Returns the number of items in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
