use serde::{Deserialize, Serialize};

use super::{ChEdge, GraphError, Rank, Vertex, Weight};

/// Directed graph with forward and backward adjacency, contraction flags and
/// vertex ranks.
///
/// Base edges are inserted before preprocessing; contraction appends shortcut
/// edges. Nothing is ever deleted, and parallel edges are kept as-is. After
/// preprocessing the graph is only read, so queries may run concurrently.
#[derive(Clone, Serialize, Deserialize)]
pub struct ChGraph {
    out_edges: Vec<Vec<ChEdge>>,
    in_edges: Vec<Vec<ChEdge>>,
    contracted: Vec<bool>,
    ranks: Vec<Option<Rank>>,
}

/// Serialisable snapshot of the augmented graph, enough to rebuild a
/// query-equivalent [`ChGraph`] via [`ChGraph::from_graph_data`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub edges: Vec<EdgeRecord>,
    pub ranks: Vec<Option<Rank>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Weight,
    pub via: Option<Vertex>,
}

impl ChGraph {
    pub fn new(number_of_vertices: u32) -> ChGraph {
        ChGraph {
            out_edges: vec![Vec::new(); number_of_vertices as usize],
            in_edges: vec![Vec::new(); number_of_vertices as usize],
            contracted: vec![false; number_of_vertices as usize],
            ranks: vec![None; number_of_vertices as usize],
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.out_edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    pub fn out_edges(&self, vertex: Vertex) -> &[ChEdge] {
        self.out_edges
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn in_edges(&self, vertex: Vertex) -> &[ChEdge] {
        self.in_edges
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Rank assigned during contraction, `None` while unassigned. `Option`'s
    /// ordering places unranked vertices below every ranked one, which is how
    /// partial orderings stay queryable.
    pub fn rank(&self, vertex: Vertex) -> Option<Rank> {
        self.ranks[vertex as usize]
    }

    pub fn is_contracted(&self, vertex: Vertex) -> bool {
        self.contracted[vertex as usize]
    }

    /// Append a base edge. Parallel edges and self-loops are preserved.
    pub fn add_edge(&mut self, tail: Vertex, head: Vertex, weight: Weight) -> Result<(), GraphError> {
        self.add_ch_edge(tail, head, weight, None)
    }

    /// Append a prebuilt edge, shortcut or not. Used when loading a
    /// previously computed hierarchy.
    pub fn add_ch_edge(
        &mut self,
        tail: Vertex,
        head: Vertex,
        weight: Weight,
        via: Option<Vertex>,
    ) -> Result<(), GraphError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        if let Some(via) = via {
            self.check_vertex(via)?;
        }

        self.push_edge(tail, head, weight, via);
        Ok(())
    }

    /// Assign a rank directly. Used when loading a previously computed
    /// hierarchy; during preprocessing the builder assigns ranks itself.
    pub fn set_rank(&mut self, vertex: Vertex, rank: Rank) -> Result<(), GraphError> {
        self.check_vertex(vertex)?;
        self.ranks[vertex as usize] = Some(rank);
        Ok(())
    }

    /// Snapshot of all edges and ranks for persistence by the host.
    pub fn graph_data(&self) -> GraphData {
        let edges = (0..self.number_of_vertices())
            .flat_map(|tail| {
                self.out_edges(tail).iter().map(move |edge| EdgeRecord {
                    tail,
                    head: edge.head,
                    weight: edge.weight,
                    via: edge.via,
                })
            })
            .collect();

        GraphData {
            edges,
            ranks: self.ranks.clone(),
        }
    }

    pub fn from_graph_data(data: &GraphData) -> Result<ChGraph, GraphError> {
        let mut graph = ChGraph::new(data.ranks.len() as u32);

        for (vertex, rank) in data.ranks.iter().enumerate() {
            if let Some(rank) = rank {
                graph.set_rank(vertex as Vertex, *rank)?;
            }
        }

        for edge in data.edges.iter() {
            graph.add_ch_edge(edge.tail, edge.head, edge.weight, edge.via)?;
        }

        Ok(graph)
    }

    /// Unchecked insert into both adjacencies, one entry each. The backward
    /// entry stores the edge source in its `head` slot.
    pub(crate) fn push_edge(&mut self, tail: Vertex, head: Vertex, weight: Weight, via: Option<Vertex>) {
        self.out_edges[tail as usize].push(ChEdge {
            head,
            weight,
            via,
        });
        self.in_edges[head as usize].push(ChEdge {
            head: tail,
            weight,
            via,
        });
    }

    pub(crate) fn mark_contracted(&mut self, vertex: Vertex) {
        self.contracted[vertex as usize] = true;
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        if (vertex as usize) < self.out_edges.len() {
            return Ok(());
        }

        Err(GraphError::InvalidIndex {
            vertex,
            number_of_vertices: self.number_of_vertices(),
        })
    }
}
