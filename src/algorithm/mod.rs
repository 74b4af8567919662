pub mod traits;
pub mod dijkstra;
pub mod toposort_dag;

pub use traits::ShortestPathSolver;
