use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    graphs::{ch_graph::ChGraph, Vertex, Weight},
    search::dijkstra,
};

/// Progress bar for the contraction loop, one tick per contracted vertex.
pub fn get_contraction_progressbar(number_of_vertices: u64) -> ProgressBar {
    let bar = ProgressBar::new(number_of_vertices);
    bar.set_style(
        ProgressStyle::with_template(
            " contracting {pos}/{len} vertices {wide_bar} {per_sec} eta {eta}",
        )
        .unwrap(),
    );
    bar
}

#[derive(Clone, Debug)]
pub struct ShortestPathTestCase {
    pub source: Vertex,
    pub target: Vertex,
    pub distance: Option<Weight>,
}

/// Random directed graph with the given number of base edges. Seeded so test
/// failures reproduce.
pub fn random_graph(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
    seed: u64,
) -> ChGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = ChGraph::new(number_of_vertices);

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..=max_weight);
        graph
            .add_edge(tail, head, weight)
            .expect("generated vertices are in range");
    }

    graph
}

/// Random source/target pairs with their base-edge Dijkstra distance as the
/// expected outcome. Distances are computed in parallel, the pairs up front
/// so the seed alone fixes them.
pub fn generate_test_cases(
    graph: &ChGraph,
    number_of_test_cases: u32,
    seed: u64,
) -> Vec<ShortestPathTestCase> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs = (0..number_of_test_cases)
        .map(|_| {
            (
                rng.gen_range(0..graph.number_of_vertices()),
                rng.gen_range(0..graph.number_of_vertices()),
            )
        })
        .collect_vec();

    pairs
        .into_par_iter()
        .map(|(source, target)| {
            let distance = dijkstra::one_to_one(graph, source, target).map(|path| path.distance);

            ShortestPathTestCase {
                source,
                target,
                distance,
            }
        })
        .collect()
}

/// Contraction ordering for tests: a seeded shuffle of all vertices. Ordering
/// quality only affects shortcut count, never query correctness.
pub fn random_order(number_of_vertices: u32, seed: u64) -> Vec<Vertex> {
    use rand::seq::SliceRandom;

    let mut order = (0..number_of_vertices).collect_vec();
    order.shuffle(&mut StdRng::seed_from_u64(seed));
    order
}
