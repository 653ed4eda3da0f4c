//! Property-based checks for the generators and edge-set operations.

mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use signet_core::{BarabasiAlbertGenerator, ErdosRenyiGenerator, SignedEdge, SignedEdgeSet};

use common::seeded;

fn erdos_renyi_graph() -> impl Strategy<Value = SignedEdgeSet> {
    (1_usize..=40, 0.0..=1.0_f64, 0.0..=1.0_f64, any::<u64>()).prop_map(|(n, p, q, seed)| {
        ErdosRenyiGenerator::new(n, p, q)
            .expect("strategy yields valid parameters")
            .generate(&mut seeded(seed))
    })
}

fn barabasi_albert_params() -> impl Strategy<Value = (usize, usize, usize, f64, u64)> {
    (1_usize..=6)
        .prop_flat_map(|core| (Just(core), 1..=core, core..=80))
        .prop_flat_map(|(core, m, n)| (Just(n), Just(core), Just(m), 0.0..=1.0_f64, any::<u64>()))
}

fn assert_simple(graph: &SignedEdgeSet) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for edge in graph {
        prop_assert_ne!(edge.source(), edge.target());
        prop_assert!(edge.source() < graph.node_count());
        prop_assert!(edge.target() < graph.node_count());
        prop_assert!(seen.insert(edge.key()), "duplicate pair {:?}", edge.key());
        prop_assert!(matches!(edge.sign().value(), 1 | -1));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn erdos_renyi_graphs_are_simple(graph in erdos_renyi_graph()) {
        let n = graph.node_count();
        prop_assert!(graph.number_of_edges() <= n * (n - 1) / 2);
        assert_simple(&graph)?;
    }

    #[test]
    fn barabasi_albert_edge_count_is_exact((n, core, m, q, seed) in barabasi_albert_params()) {
        let generator = BarabasiAlbertGenerator::new(n, q, core, m)
            .expect("strategy yields valid parameters");
        let graph = generator.generate(&mut seeded(seed));
        prop_assert_eq!(graph.number_of_edges(), core * (core - 1) / 2 + m * (n - core));
        prop_assert_eq!(graph.degrees().iter().sum::<usize>(), 2 * graph.number_of_edges());
        assert_simple(&graph)?;
    }

    #[test]
    fn conflicts_ignore_group_relabelling(
        graph in erdos_renyi_graph(),
        labels in prop::collection::vec(0_usize..4, 40),
        offset in 1_usize..100,
    ) {
        let relabelled: Vec<usize> = labels.iter().map(|&l| (3 - l) * 7 + offset).collect();
        prop_assert_eq!(graph.conflicts(&labels), graph.conflicts(&relabelled));
    }

    #[test]
    fn moving_a_node_changes_conflicts_by_its_incident_edges(
        graph in erdos_renyi_graph(),
        labels in prop::collection::vec(0_usize..2, 40),
        node in 0_usize..40,
    ) {
        prop_assume!(node < graph.node_count());
        let mut moved = labels.clone();
        if let Some(label) = moved.get_mut(node) {
            *label = 1 - *label;
        }
        let incident: Vec<&SignedEdge> = graph
            .edges()
            .iter()
            .filter(|e| e.source() == node || e.target() == node)
            .collect();
        let before = graph.conflicts(&labels).expect("labels cover every node");
        let after = graph.conflicts(&moved).expect("labels cover every node");
        let incident_before = incident.len()
            - incident
                .iter()
                .filter(|e| {
                    let same = labels.get(e.source()) == labels.get(e.target());
                    same == e.sign().is_positive()
                })
                .count();
        // Every incident edge toggles between satisfied and conflicting.
        prop_assert_eq!(after, before - incident_before + (incident.len() - incident_before));
    }

    #[test]
    fn recolor_only_removes_negatives(graph in erdos_renyi_graph(), count in 0_usize..60, seed in any::<u64>()) {
        let mut recoloured = graph.clone();
        let negatives = graph.negative_count();
        let flipped = recoloured.recolor(&mut seeded(seed), count);

        prop_assert_eq!(flipped, count.min(negatives));
        prop_assert_eq!(recoloured.negative_count(), negatives.saturating_sub(count));
        prop_assert!(recoloured.positive_count() >= graph.positive_count());
        prop_assert_eq!(recoloured.number_of_edges(), graph.number_of_edges());
        let keys: Vec<(usize, usize)> = graph.edges().iter().map(SignedEdge::key).collect();
        let recoloured_keys: Vec<(usize, usize)> =
            recoloured.edges().iter().map(SignedEdge::key).collect();
        prop_assert_eq!(keys, recoloured_keys);
    }

    #[test]
    fn full_recolor_yields_unit_q_rate(graph in erdos_renyi_graph(), seed in any::<u64>()) {
        prop_assume!(!graph.is_empty());
        let mut recoloured = graph;
        let negatives = recoloured.negative_count();
        recoloured.recolor(&mut seeded(seed), negatives);
        prop_assert_eq!(recoloured.q_rate(), Some(1.0));
    }
}
