use log::info;

use super::witness::witness_search;
use crate::{
    graphs::{ch_graph::ChGraph, ChEdge, GraphError, Rank, Vertex},
    utility::get_contraction_progressbar,
};

/// Above this many in/out edge pairs a vertex counts as complex and gets the
/// reduced witness budget.
const EDGE_PAIR_BUDGET: usize = 500;
const HOP_LIMIT_DEFAULT: u32 = 3;
const HOP_LIMIT_COMPLEX: u32 = 1;

/// Hard cap on insertions per contraction. Skipped shortcuts cost query
/// optimality on adversarial degrees, never correctness of returned paths.
const MAX_SHORTCUTS_PER_VERTEX: u32 = 100;

const PROGRESS_INTERVAL: usize = 5000;

/// Contract `vertex`: for every pair of uncontracted in/out neighbors, insert
/// a shortcut unless a witness path makes it redundant. Returns the number of
/// shortcuts inserted.
pub fn contract(graph: &mut ChGraph, vertex: Vertex) -> u32 {
    // Marked before neighbor enumeration so witness searches cannot route
    // through the vertex being contracted.
    graph.mark_contracted(vertex);

    let in_neighbors: Vec<ChEdge> = graph
        .in_edges(vertex)
        .iter()
        .filter(|edge| !graph.is_contracted(edge.head))
        .copied()
        .collect();
    let out_neighbors: Vec<ChEdge> = graph
        .out_edges(vertex)
        .iter()
        .filter(|edge| !graph.is_contracted(edge.head))
        .copied()
        .collect();

    let hop_limit = if in_neighbors.len() * out_neighbors.len() > EDGE_PAIR_BUDGET {
        HOP_LIMIT_COMPLEX
    } else {
        HOP_LIMIT_DEFAULT
    };

    let mut shortcuts_added = 0;

    for in_edge in in_neighbors.iter() {
        for out_edge in out_neighbors.iter() {
            let (tail, head) = (in_edge.head, out_edge.head);
            if tail == head {
                continue;
            }
            if shortcuts_added >= MAX_SHORTCUTS_PER_VERTEX {
                return shortcuts_added;
            }

            let shortcut_weight = in_edge.weight + out_edge.weight;
            if !witness_search(graph, tail, head, shortcut_weight, vertex, hop_limit) {
                graph.push_edge(tail, head, shortcut_weight, Some(vertex));
                shortcuts_added += 1;
            }
        }
    }

    shortcuts_added
}

/// Contract all vertices of `order` in sequence, assigning ranks 0, 1, 2, ...
/// as it goes. The ordering comes from the host; vertices it omits keep their
/// unassigned rank and stay outside the hierarchy.
pub fn build(graph: &mut ChGraph, order: &[Vertex]) -> Result<(), GraphError> {
    let mut number_of_shortcuts = 0;

    let pb = get_contraction_progressbar(order.len() as u64);
    for (rank, &vertex) in order.iter().enumerate() {
        graph.set_rank(vertex, rank as Rank)?;
        number_of_shortcuts += contract(graph, vertex);

        pb.inc(1);
        if (rank + 1) % PROGRESS_INTERVAL == 0 {
            info!(
                "contracted {}/{} vertices, {} shortcuts so far",
                rank + 1,
                order.len(),
                number_of_shortcuts
            );
        }
    }
    pb.finish_and_clear();

    info!(
        "finished contracting {} vertices, {} shortcuts inserted",
        order.len(),
        number_of_shortcuts
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{build, contract};
    use crate::graphs::{ch_graph::ChGraph, graph_functions::number_of_shortcuts};

    #[test]
    fn line_vertex_gets_a_shortcut() {
        let mut graph = ChGraph::new(3);
        graph.add_edge(0, 1, 2000).unwrap();
        graph.add_edge(1, 2, 3000).unwrap();

        assert_eq!(contract(&mut graph, 1), 1);

        let shortcut = graph
            .out_edges(0)
            .iter()
            .find(|edge| edge.head == 2)
            .unwrap();
        assert_eq!(shortcut.weight, 5000);
        assert_eq!(shortcut.via, Some(1));
        // The matching backward entry exists as well.
        assert!(graph
            .in_edges(2)
            .iter()
            .any(|edge| edge.head == 0 && edge.via == Some(1)));
    }

    #[test]
    fn witness_suppresses_the_shortcut() {
        // Diamond: the upper path 0 -> 1 -> 3 witnesses the candidate
        // shortcut 0 -> 3 when 2 is contracted second.
        let mut graph = ChGraph::new(4);
        graph.add_edge(0, 1, 1000).unwrap();
        graph.add_edge(0, 2, 5000).unwrap();
        graph.add_edge(1, 3, 1000).unwrap();
        graph.add_edge(2, 3, 1000).unwrap();

        assert_eq!(contract(&mut graph, 1), 1);
        assert_eq!(contract(&mut graph, 2), 0);
    }

    #[test]
    fn self_loop_pairs_are_skipped() {
        let mut graph = ChGraph::new(2);
        graph.add_edge(0, 1, 1000).unwrap();
        graph.add_edge(1, 0, 1000).unwrap();

        assert_eq!(contract(&mut graph, 1), 0);
    }

    #[test]
    fn build_assigns_ranks_in_order() {
        let mut graph = ChGraph::new(3);
        graph.add_edge(0, 1, 2000).unwrap();
        graph.add_edge(1, 2, 3000).unwrap();

        build(&mut graph, &[1, 0, 2]).unwrap();

        assert_eq!(graph.rank(1), Some(0));
        assert_eq!(graph.rank(0), Some(1));
        assert_eq!(graph.rank(2), Some(2));
        assert_eq!(number_of_shortcuts(&graph), 1);
        assert!(graph.is_contracted(0) && graph.is_contracted(1) && graph.is_contracted(2));
    }

    #[test]
    fn build_rejects_out_of_range_vertices() {
        let mut graph = ChGraph::new(2);
        graph.add_edge(0, 1, 1000).unwrap();

        assert!(build(&mut graph, &[0, 7]).is_err());
    }
}
