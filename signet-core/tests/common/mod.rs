use rand::{SeedableRng, rngs::SmallRng};
use signet_core::{Sign, SignedEdge, SignedEdgeSet};

/// Deterministic generator shared by the integration suites.
#[must_use]
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Builds an edge set from `(u, v, ±1)` triples.
///
/// # Panics
/// Panics when the triples do not form a valid edge set.
#[must_use]
pub fn edge_set(node_count: usize, triples: &[(usize, usize, i8)]) -> SignedEdgeSet {
    let edges = triples
        .iter()
        .map(|&(u, v, value)| {
            let sign = if value > 0 {
                Sign::Positive
            } else {
                Sign::Negative
            };
            SignedEdge::new(u, v, sign)
        })
        .collect();
    SignedEdgeSet::from_edges(node_count, edges).expect("test edges must be valid")
}
