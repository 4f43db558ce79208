use serde::{Deserialize, Serialize};

use crate::graphs::{Vertex, Weight};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Weight,
}

/// Distance and predecessor arrays for a single search, allocated per call
/// so concurrent queries never share state.
pub struct DijkstraDataVec {
    pub predecessors: Vec<Vertex>,
    pub distances: Vec<Weight>,
}

impl DijkstraDataVec {
    pub fn new(number_of_vertices: usize) -> DijkstraDataVec {
        DijkstraDataVec {
            predecessors: vec![Vertex::MAX; number_of_vertices],
            distances: vec![Weight::MAX; number_of_vertices],
        }
    }

    pub fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let predecessor = self.predecessors[vertex as usize];

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    pub fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = predecessor;
    }

    pub fn get_distance(&self, vertex: Vertex) -> Weight {
        self.distances[vertex as usize]
    }

    pub fn set_distance(&mut self, vertex: Vertex, distance: Weight) {
        self.distances[vertex as usize] = distance;
    }

    /// Constructs the path to a target vertex by tracing predecessors back
    /// to the source. Returns `None` if the target is unreachable.
    pub fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Weight::MAX {
            return None;
        }

        let mut vertices = vec![target];

        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
