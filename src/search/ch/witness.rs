use std::{cmp::Reverse, collections::BinaryHeap};

use ahash::{HashMap, HashMapExt};

use crate::graphs::{ch_graph::ChGraph, Vertex, Weight};

/// Bounded, hop-limited Dijkstra deciding whether a path from `source` to
/// `target` of weight at most `max_weight` exists that avoids `without`.
///
/// Already contracted vertices are never entered, with one exception: the
/// target itself may be contracted. A missed witness only produces a
/// redundant shortcut, so the hop limit trades preprocessing time for
/// shortcut count without affecting correctness.
pub fn witness_search(
    graph: &ChGraph,
    source: Vertex,
    target: Vertex,
    max_weight: Weight,
    without: Vertex,
    max_hops: u32,
) -> bool {
    // A direct edge settles it without a search.
    if graph
        .out_edges(source)
        .iter()
        .any(|edge| edge.head == target && edge.weight <= max_weight)
    {
        return true;
    }

    let mut queue = BinaryHeap::new();
    let mut weights: HashMap<Vertex, Weight> = HashMap::new();
    let mut hops: HashMap<Vertex, u32> = HashMap::new();

    queue.push(Reverse((0, source)));
    weights.insert(source, 0);
    hops.insert(source, 0);

    while let Some(Reverse((weight, vertex))) = queue.pop() {
        if weight > max_weight {
            return false;
        }
        if vertex == target {
            return true;
        }
        if weight > *weights.get(&vertex).unwrap_or(&Weight::MAX) {
            continue;
        }

        let vertex_hops = hops[&vertex];
        if vertex_hops >= max_hops {
            continue;
        }

        for edge in graph.out_edges(vertex) {
            if edge.head == without {
                continue;
            }
            if graph.is_contracted(edge.head) && edge.head != target {
                continue;
            }

            let alternative = weight + edge.weight;
            if alternative > max_weight {
                continue;
            }
            if alternative < *weights.get(&edge.head).unwrap_or(&Weight::MAX) {
                weights.insert(edge.head, alternative);
                hops.insert(edge.head, vertex_hops + 1);
                queue.push(Reverse((alternative, edge.head)));
            }
        }
    }

    false
}
