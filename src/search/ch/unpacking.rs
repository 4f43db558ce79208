use crate::graphs::{ch_graph::ChGraph, Vertex};

/// Expand the edge `tail -> head` into base-graph vertices, appending every
/// intermediate vertex and finally `head` to `path`. Uses an explicit stack;
/// the shortcut structure is acyclic but can nest as deep as the hierarchy.
pub fn unpack_append(graph: &ChGraph, tail: Vertex, head: Vertex, path: &mut Vec<Vertex>) {
    let mut stack = vec![(tail, head)];

    while let Some((tail, head)) = stack.pop() {
        match shortcut_via(graph, tail, head) {
            Some(via) => {
                // Second half first so the first half is expanded first.
                stack.push((via, head));
                stack.push((tail, via));
            }
            None => path.push(head),
        }
    }
}

/// The contracted vertex a shortcut `tail -> head` bypasses. Parallel base
/// and shortcut edges may coexist, so every edge of the pair is inspected
/// and the first shortcut wins; only when none exists is the relation a base
/// edge.
fn shortcut_via(graph: &ChGraph, tail: Vertex, head: Vertex) -> Option<Vertex> {
    graph
        .out_edges(tail)
        .iter()
        .filter(|edge| edge.head == head)
        .find_map(|edge| edge.via)
}
