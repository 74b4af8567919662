use std::hash::{Hash, Hasher};

/// An item paired with its extrinsic priority
///
/// Equality and hashing look at the item alone, so two nodes holding the same
/// item are the same node regardless of priority.
#[derive(Debug, Clone, Copy)]
pub struct PriorityNode<T, P> {
    item: T,
    priority: P,
}

impl<T, P: Copy> PriorityNode<T, P> {
    /// Creates a new node
    pub fn new(item: T, priority: P) -> Self {
        PriorityNode { item, priority }
    }

    /// Returns the item of this node
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the current priority of this node
    pub fn priority(&self) -> P {
        self.priority
    }

    /// Replaces the priority of this node
    pub fn set_priority(&mut self, priority: P) {
        self.priority = priority;
    }

    /// Consumes the node and returns its item
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T: PartialEq, P> PartialEq for PriorityNode<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<T: Eq, P> Eq for PriorityNode<T, P> {}

impl<T: Hash, P> Hash for PriorityNode<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_ignores_priority() {
        let a = PriorityNode::new("a", 1.0);
        let b = PriorityNode::new("a", 7.5);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_set_priority() {
        let mut node = PriorityNode::new(3usize, 2.0);
        node.set_priority(-1.0);
        assert_eq!(node.priority(), -1.0);
        assert_eq!(node.into_item(), 3);
    }
}
