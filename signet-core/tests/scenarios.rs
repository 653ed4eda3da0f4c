//! End-to-end scenarios combining generation with the analysis operations.

mod common;

use std::collections::HashMap;

use rstest::rstest;
use signet_core::{
    AdjacencyMatrix, BarabasiAlbertGenerator, ErdosRenyiGenerator, GraphError, Sign,
};

use common::{edge_set, seeded};

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn complete_negative_erdos_renyi_graph(#[case] seed: u64) {
    let graph = ErdosRenyiGenerator::new(4, 1.0, 0.0)
        .expect("valid parameters")
        .generate(&mut seeded(seed));

    assert_eq!(graph.number_of_edges(), 6);
    assert!(graph.edges().iter().all(|e| e.sign() == Sign::Negative));
    assert_eq!(graph.q_rate(), Some(0.0));

    let partition: HashMap<usize, usize> = [(0, 0), (1, 0), (2, 1), (3, 1)].into_iter().collect();
    assert_eq!(graph.conflicts(&partition), Ok(2));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
fn small_positive_barabasi_albert_graph(#[case] seed: u64) {
    let graph = BarabasiAlbertGenerator::new(5, 1.0, 3, 2)
        .expect("valid parameters")
        .generate(&mut seeded(seed));

    assert_eq!(graph.number_of_edges(), 7);
    assert_eq!(graph.positive_count(), 7);
    assert_eq!(graph.q_rate(), Some(1.0));
    assert_eq!(graph.degrees().iter().sum::<usize>(), 14);
}

#[test]
fn recolouring_moves_the_q_rate_towards_one() {
    let mut rng = seeded(10);
    let mut graph = ErdosRenyiGenerator::new(60, 0.3, 0.4)
        .expect("valid parameters")
        .generate(&mut rng);
    let before = graph.q_rate().expect("graph has edges");
    let negatives = graph.negative_count();

    assert_eq!(graph.recolor(&mut rng, negatives / 2), negatives / 2);
    let halfway = graph.q_rate().expect("graph has edges");
    assert!(halfway > before);

    graph.recolor(&mut rng, usize::MAX);
    assert_eq!(graph.q_rate(), Some(1.0));
    assert_eq!(graph.negative_count(), 0);
}

#[test]
fn conflicts_require_every_endpoint_to_be_labelled() {
    let graph = edge_set(4, &[(0, 1, 1), (2, 3, -1)]);
    let partial: Vec<usize> = vec![0, 0, 1];
    assert_eq!(
        graph.conflicts(&partial),
        Err(GraphError::UnlabelledNode { node: 3 })
    );
}

#[test]
fn adjacency_rendering_matches_driver_layout() {
    let graph = edge_set(3, &[(0, 1, 1), (1, 2, -1)]);
    let mut out = Vec::new();
    AdjacencyMatrix::from_edge_set(&graph)
        .write_to(&mut out)
        .expect("writing to a vector succeeds");
    assert_eq!(
        String::from_utf8(out).expect("output is UTF-8"),
        "3\n0 1 0\n1 0 2\n0 2 0\n"
    );
}
