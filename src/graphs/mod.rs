use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod ch_graph;
pub mod graph_functions;

pub type Vertex = u32;
pub type Weight = u32;
pub type Rank = u32;

/// Weights arrive pre-scaled by this factor; query results are divided by it
/// before they are handed back to the caller.
pub const WEIGHT_SCALE: f64 = 1000.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    InvalidIndex {
        vertex: Vertex,
        number_of_vertices: u32,
    },
}

/// A half-edge as stored in an adjacency list. `head` is the other endpoint:
/// the edge target in `out_edges`, the edge source in `in_edges`.
///
/// Shortcut edges carry the contracted vertex they bypass in `via`; base
/// edges carry `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChEdge {
    pub head: Vertex,
    pub weight: Weight,
    pub via: Option<Vertex>,
}

impl ChEdge {
    pub fn is_shortcut(&self) -> bool {
        self.via.is_some()
    }
}
