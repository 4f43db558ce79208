use std::{cmp::Reverse, collections::BinaryHeap};

use super::unpacking::unpack_append;
use crate::{
    graphs::{ch_graph::ChGraph, ChEdge, Vertex, Weight, WEIGHT_SCALE},
    search::dijkstra_data::{DijkstraDataVec, Path},
};

impl ChGraph {
    /// Host-facing point-to-point query. Unreachable pairs and out-of-range
    /// endpoints both collapse into the empty-path sentinel; callers
    /// disambiguate via the path, not the distance. The returned distance is
    /// scaled back into the unit the host used before multiplying by 1000.
    pub fn query(&self, source: Vertex, target: Vertex) -> (Vec<Vertex>, f64) {
        match shortest_path(self, source, target) {
            Some(path) => {
                let distance = path.distance as f64 / WEIGHT_SCALE;
                (path.vertices, distance)
            }
            None => (Vec::new(), 0.0),
        }
    }
}

/// Bidirectional upward Dijkstra over the augmented graph. Forward relaxes
/// `out_edges`, backward relaxes `in_edges`, both only toward strictly
/// higher-ranked vertices. The returned path is fully unpacked into base
/// edges; the distance stays in scaled units.
pub fn shortest_path(graph: &ChGraph, source: Vertex, target: Vertex) -> Option<Path> {
    if source >= graph.number_of_vertices() || target >= graph.number_of_vertices() {
        return None;
    }

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut forward_data = DijkstraDataVec::new(number_of_vertices);
    let mut backward_data = DijkstraDataVec::new(number_of_vertices);
    let mut forward_queue = BinaryHeap::new();
    let mut backward_queue = BinaryHeap::new();

    forward_data.set_distance(source, 0);
    forward_queue.push(Reverse((0, source)));

    backward_data.set_distance(target, 0);
    backward_queue.push(Reverse((0, target)));

    let mut meeting: Option<(Vertex, Weight)> = None;

    while !forward_queue.is_empty() || !backward_queue.is_empty() {
        search_step(
            graph,
            ChGraph::out_edges,
            &mut forward_data,
            &mut forward_queue,
            &backward_data,
            &mut meeting,
        );
        search_step(
            graph,
            ChGraph::in_edges,
            &mut backward_data,
            &mut backward_queue,
            &forward_data,
            &mut meeting,
        );
    }

    let (meeting_vertex, distance) = meeting?;

    // Meeting vertex back to the source, then reversed into source order.
    let mut upward_vertices = Vec::new();
    let mut current = meeting_vertex;
    while current != source {
        upward_vertices.push(current);
        current = forward_data.get_predecessor(current)?;
    }

    let mut vertices = vec![source];
    let mut current = source;
    for &next in upward_vertices.iter().rev() {
        unpack_append(graph, current, next, &mut vertices);
        current = next;
    }

    // Meeting vertex down to the target.
    let mut current = meeting_vertex;
    while current != target {
        let next = backward_data.get_predecessor(current)?;
        unpack_append(graph, current, next, &mut vertices);
        current = next;
    }

    Some(Path { vertices, distance })
}

/// One pop of a single direction: prune against the tentative meeting
/// distance, update the meeting vertex, relax upward edges.
fn search_step(
    graph: &ChGraph,
    edges_of: fn(&ChGraph, Vertex) -> &[ChEdge],
    data: &mut DijkstraDataVec,
    queue: &mut BinaryHeap<Reverse<(Weight, Vertex)>>,
    opposite_data: &DijkstraDataVec,
    meeting: &mut Option<(Vertex, Weight)>,
) {
    let Some(Reverse((weight, vertex))) = queue.pop() else {
        return;
    };

    let meeting_distance = meeting.map(|(_, distance)| distance).unwrap_or(Weight::MAX);
    if weight > meeting_distance {
        // Nothing cheaper is left on this side.
        return;
    }
    if weight > data.get_distance(vertex) {
        return;
    }

    let opposite_distance = opposite_data.get_distance(vertex);
    if opposite_distance != Weight::MAX {
        let total = weight + opposite_distance;
        if total < meeting_distance {
            *meeting = Some((vertex, total));
        }
    }

    let rank = graph.rank(vertex);
    for edge in edges_of(graph, vertex) {
        // Unassigned ranks compare below every assigned rank.
        if graph.rank(edge.head) <= rank {
            continue;
        }

        let alternative = weight + edge.weight;
        if alternative < data.get_distance(edge.head) {
            data.set_distance(edge.head, alternative);
            data.set_predecessor(edge.head, vertex);
            queue.push(Reverse((alternative, edge.head)));
        }
    }
}
