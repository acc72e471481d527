pub mod traits;
pub mod weighted;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use weighted::{Neighbor, WeightedGraph};
