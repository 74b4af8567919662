pub mod optimized_heap;
pub mod priority_node;
pub mod traits;
pub mod unsorted_array;

pub use optimized_heap::OptimizedHeapMinPQ;
pub use priority_node::PriorityNode;
pub use traits::ExtrinsicMinPQ;
pub use unsorted_array::UnsortedArrayMinPQ;
