use std::{cmp::Reverse, collections::BinaryHeap};

use super::dijkstra_data::{DijkstraDataVec, Path};
use crate::graphs::{ch_graph::ChGraph, Vertex};

/// Plain one-to-one Dijkstra over base edges only. Shortcuts are ignored, so
/// this stays a correctness oracle for the hierarchy-based search even on an
/// already preprocessed graph.
pub fn one_to_one(graph: &ChGraph, source: Vertex, target: Vertex) -> Option<Path> {
    if source >= graph.number_of_vertices() || target >= graph.number_of_vertices() {
        return None;
    }

    let mut data = DijkstraDataVec::new(graph.number_of_vertices() as usize);
    let mut queue = BinaryHeap::new();

    data.set_distance(source, 0);
    queue.push(Reverse((0, source)));

    while let Some(Reverse((weight, vertex))) = queue.pop() {
        if weight > data.get_distance(vertex) {
            continue;
        }
        if vertex == target {
            break;
        }

        for edge in graph.out_edges(vertex) {
            if edge.is_shortcut() {
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

    data.get_path(target)
}
