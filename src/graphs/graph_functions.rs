use super::{ch_graph::ChGraph, Vertex, Weight};

/// Total weight of a path over base edges only, taking the cheapest parallel
/// base edge for every consecutive pair. `None` if some pair has no base
/// edge, which means the path still contains a shortcut.
pub fn base_path_distance(graph: &ChGraph, vertices: &[Vertex]) -> Option<Weight> {
    let mut distance = 0;

    for window in vertices.windows(2) {
        let (tail, head) = (window[0], window[1]);
        let weight = graph
            .out_edges(tail)
            .iter()
            .filter(|edge| edge.head == head && !edge.is_shortcut())
            .map(|edge| edge.weight)
            .min()?;
        distance += weight;
    }

    Some(distance)
}

pub fn number_of_shortcuts(graph: &ChGraph) -> u32 {
    (0..graph.number_of_vertices())
        .flat_map(|vertex| graph.out_edges(vertex))
        .filter(|edge| edge.is_shortcut())
        .count() as u32
}
