//! Erdős–Rényi signed graph generation.
//!
//! Every unordered pair of nodes is joined independently with probability
//! `p`, and every included edge is signed positive with probability `q`.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    edge::{SignedEdge, sign},
    edge_set::SignedEdgeSet,
    error::{Result, check_node_count, check_probability},
};

/// Validated parameters for the `G(N, p)` model with signed edges.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use signet_core::ErdosRenyiGenerator;
///
/// let generator = ErdosRenyiGenerator::new(4, 1.0, 0.0)?;
/// let mut rng = SmallRng::seed_from_u64(42);
/// let edges = generator.generate(&mut rng);
/// assert_eq!(edges.number_of_edges(), 6);
/// assert_eq!(edges.q_rate(), Some(0.0));
/// # Ok::<(), signet_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErdosRenyiGenerator {
    node_count: usize,
    edge_probability: f64,
    positive_probability: f64,
}

impl ErdosRenyiGenerator {
    /// Creates a generator for `node_count` nodes.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidNodeCount`] when `node_count` is
    /// zero and [`crate::GraphError::InvalidProbability`] when either
    /// probability is non-finite or outside `[0, 1]`.
    pub fn new(node_count: usize, edge_probability: f64, positive_probability: f64) -> Result<Self> {
        Ok(Self {
            node_count: check_node_count(node_count)?,
            edge_probability: check_probability("edge_probability", edge_probability)?,
            positive_probability: check_probability("positive_probability", positive_probability)?,
        })
    }

    /// Returns the number of nodes in generated graphs.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the probability that a given pair is joined.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Returns the probability that an edge is signed positive.
    #[must_use]
    pub const fn positive_probability(&self) -> f64 {
        self.positive_probability
    }

    /// Returns the largest edge count this generator can produce.
    #[must_use]
    pub const fn max_edges(&self) -> usize {
        self.node_count * (self.node_count - 1) / 2
    }

    /// Draws a fresh signed graph from `rng`.
    ///
    /// Pairs are visited in lexicographic `(i, j)` order with `i < j`, so a
    /// seeded `rng` reproduces the same edge sequence.
    #[instrument(
        level = "debug",
        skip(self, rng),
        fields(
            nodes = self.node_count,
            p = self.edge_probability,
            q = self.positive_probability,
        )
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SignedEdgeSet {
        let mut edges = Vec::new();
        for i in 0..self.node_count {
            for j in (i + 1)..self.node_count {
                if rng.gen_bool(self.edge_probability) {
                    edges.push(SignedEdge::new(i, j, sign(rng, self.positive_probability)));
                }
            }
        }
        debug!(edges = edges.len(), "generated Erdős–Rényi graph");
        SignedEdgeSet::from_generated(self.node_count, edges)
    }
}
