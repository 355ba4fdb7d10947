//! H3 index types

pub mod bits;
mod cell;
mod edge;
mod iterator;
mod mode;
mod polyfill;
mod undirected_edge;
mod vertex;

pub use cell::CellIndex;
pub use edge::{DirectedEdgeIndex, Edge};
pub use mode::IndexMode;
pub use undirected_edge::UndirectedEdgeIndex;
pub use vertex::{Vertex, VertexIndex};

pub(crate) use iterator::Children;
pub(crate) use polyfill::next_cell;
