use shortcut_paths::{
    graphs::{ch_graph::ChGraph, graph_functions::base_path_distance},
    search::ch::{contraction::build, pathfinding::shortest_path},
    utility::{generate_test_cases, random_graph, random_order},
};

const NUMBER_OF_VERTICES: u32 = 150;
const NUMBER_OF_EDGES: u32 = 450;
const MAX_WEIGHT: u32 = 10_000;
const NUMBER_OF_TEST_CASES: u32 = 200;

fn preprocessed_random_graph(seed: u64) -> ChGraph {
    let mut graph = random_graph(NUMBER_OF_VERTICES, NUMBER_OF_EDGES, MAX_WEIGHT, seed);
    build(&mut graph, &random_order(NUMBER_OF_VERTICES, seed ^ 0xc0ffee)).unwrap();
    graph
}

#[test]
fn queries_match_the_reference_dijkstra() {
    for seed in [42, 1337, 9001] {
        let graph = preprocessed_random_graph(seed);
        // The oracle ignores shortcuts, so it can run on the built graph.
        let test_cases = generate_test_cases(&graph, NUMBER_OF_TEST_CASES, seed + 1);

        for test_case in test_cases {
            let path = shortest_path(&graph, test_case.source, test_case.target);
            let distance = path.as_ref().map(|path| path.distance);
            assert_eq!(
                test_case.distance, distance,
                "wrong distance for {} -> {} (seed {})",
                test_case.source, test_case.target, seed
            );
        }
    }
}

#[test]
fn unpacked_paths_are_base_paths_with_the_reported_weight() {
    let graph = preprocessed_random_graph(7);
    let test_cases = generate_test_cases(&graph, NUMBER_OF_TEST_CASES, 8);

    for test_case in test_cases {
        if let Some(path) = shortest_path(&graph, test_case.source, test_case.target) {
            assert_eq!(*path.vertices.first().unwrap(), test_case.source);
            assert_eq!(*path.vertices.last().unwrap(), test_case.target);

            // Every consecutive pair must be a base edge; the cheapest base
            // rendition of the path must cost exactly the reported distance.
            assert_eq!(base_path_distance(&graph, &path.vertices), Some(path.distance));
        }
    }
}

#[test]
fn shortcut_vias_rank_below_both_endpoints() {
    // The via vertex was contracted before either endpoint, so unpacking
    // always descends into the hierarchy and terminates.
    let graph = preprocessed_random_graph(21);

    for tail in 0..graph.number_of_vertices() {
        for edge in graph.out_edges(tail) {
            if let Some(via) = edge.via {
                assert!(graph.rank(via) < graph.rank(tail).min(graph.rank(edge.head)));
            }
        }
    }
}

#[test]
fn adjacency_stays_symmetric_after_preprocessing() {
    let graph = preprocessed_random_graph(13);

    let mut forward: Vec<(u32, u32, u32, Option<u32>)> = (0..graph.number_of_vertices())
        .flat_map(|tail| {
            graph
                .out_edges(tail)
                .iter()
                .map(move |edge| (tail, edge.head, edge.weight, edge.via))
        })
        .collect();
    let mut backward: Vec<(u32, u32, u32, Option<u32>)> = (0..graph.number_of_vertices())
        .flat_map(|head| {
            graph
                .in_edges(head)
                .iter()
                .map(move |edge| (edge.head, head, edge.weight, edge.via))
        })
        .collect();

    forward.sort_unstable();
    backward.sort_unstable();
    assert_eq!(forward, backward);
}

#[test]
fn reloading_graph_data_is_query_equivalent() {
    let graph = preprocessed_random_graph(99);
    let test_cases = generate_test_cases(&graph, NUMBER_OF_TEST_CASES, 100);

    // Rebuild through the loading surface only, no contraction.
    let data = graph.graph_data();
    let mut reloaded = ChGraph::new(data.ranks.len() as u32);
    for (vertex, rank) in data.ranks.iter().enumerate() {
        if let Some(rank) = rank {
            reloaded.set_rank(vertex as u32, *rank).unwrap();
        }
    }
    for edge in data.edges.iter() {
        reloaded
            .add_ch_edge(edge.tail, edge.head, edge.weight, edge.via)
            .unwrap();
    }

    for test_case in test_cases {
        assert_eq!(
            graph.query(test_case.source, test_case.target),
            reloaded.query(test_case.source, test_case.target)
        );
    }
}

#[test]
fn graph_data_survives_bincode() {
    let graph = preprocessed_random_graph(3);

    let data = graph.graph_data();
    let bytes = bincode::serialize(&data).unwrap();
    let decoded = bincode::deserialize(&bytes).unwrap();

    assert_eq!(data, decoded);
}
