pub mod directed;
pub mod edge;
pub mod generators;
pub mod traits;

pub use directed::DirectedGraph;
pub use edge::Edge;
pub use traits::{Graph, MutableGraph};
