//! The canonical signed edge list and its analysis operations.
//!
//! A [`SignedEdgeSet`] is produced fully formed by a generator. Afterwards
//! the only permitted mutation is [`SignedEdgeSet::recolor`], which flips
//! signs but never adds or removes edges.

use std::collections::HashSet;

use rand::{Rng, seq::index};
use tracing::debug;

use crate::{
    edge::{Sign, SignedEdge},
    error::{GraphError, Result, check_node_count},
    partition::Partition,
};

/// Ordered sequence of signed edges over the nodes `0..node_count`.
///
/// Insertion order matches generation order. No self-loops and no repeated
/// unordered pairs are stored.
///
/// # Examples
/// ```
/// use signet_core::{Sign, SignedEdge, SignedEdgeSet};
///
/// let edges = SignedEdgeSet::from_edges(
///     3,
///     vec![
///         SignedEdge::new(0, 1, Sign::Positive),
///         SignedEdge::new(1, 2, Sign::Negative),
///     ],
/// )?;
/// assert_eq!(edges.number_of_edges(), 2);
/// assert_eq!(edges.q_rate(), Some(0.5));
/// # Ok::<(), signet_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedEdgeSet {
    node_count: usize,
    edges: Vec<SignedEdge>,
}

impl SignedEdgeSet {
    pub(crate) const fn from_generated(node_count: usize, edges: Vec<SignedEdge>) -> Self {
        Self { node_count, edges }
    }

    /// Builds an edge set from caller-supplied edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeCount`] when `node_count` is zero,
    /// [`GraphError::SelfLoop`] for an edge joining a node to itself,
    /// [`GraphError::NodeOutOfRange`] for endpoints outside `0..node_count`,
    /// and [`GraphError::DuplicateEdge`] when an unordered pair repeats.
    pub fn from_edges(node_count: usize, edges: Vec<SignedEdge>) -> Result<Self> {
        check_node_count(node_count)?;
        let mut seen = HashSet::with_capacity(edges.len());
        for edge in &edges {
            let (first, second) = edge.key();
            if first == second {
                return Err(GraphError::SelfLoop { node: first });
            }
            if second >= node_count {
                return Err(GraphError::NodeOutOfRange {
                    node: second,
                    node_count,
                });
            }
            if !seen.insert((first, second)) {
                return Err(GraphError::DuplicateEdge { first, second });
            }
        }
        Ok(Self { node_count, edges })
    }

    /// Returns the edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[SignedEdge] {
        &self.edges
    }

    /// Consumes the set and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<SignedEdge> {
        self.edges
    }

    /// Returns the number of nodes the edges are drawn from.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edges are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Counts edges carrying [`Sign::Positive`].
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.edges.iter().filter(|e| e.sign().is_positive()).count()
    }

    /// Counts edges carrying [`Sign::Negative`].
    #[must_use]
    pub fn negative_count(&self) -> usize {
        self.edges.iter().filter(|e| e.sign().is_negative()).count()
    }

    /// Returns the degree of every node in `0..node_count`.
    ///
    /// The degrees always sum to twice [`Self::number_of_edges`].
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count];
        for edge in &self.edges {
            for node in [edge.source(), edge.target()] {
                if let Some(degree) = degrees.get_mut(node) {
                    *degree += 1;
                }
            }
        }
        degrees
    }

    /// Counts edges that violate structural balance under `partition`.
    ///
    /// A positive edge whose endpoints sit in different groups, or a negative
    /// edge whose endpoints share a group, is a conflict.
    ///
    /// # Errors
    /// Returns [`GraphError::UnlabelledNode`] when `partition` has no label
    /// for an endpoint of any edge.
    ///
    /// # Examples
    /// ```
    /// use signet_core::{Sign, SignedEdge, SignedEdgeSet};
    ///
    /// let edges = SignedEdgeSet::from_edges(
    ///     3,
    ///     vec![
    ///         SignedEdge::new(0, 1, Sign::Negative),
    ///         SignedEdge::new(1, 2, Sign::Positive),
    ///     ],
    /// )?;
    /// let split: [usize; 3] = [0, 0, 1];
    /// let aligned: [usize; 3] = [0, 1, 1];
    /// assert_eq!(edges.conflicts(&split)?, 2);
    /// assert_eq!(edges.conflicts(&aligned)?, 0);
    /// # Ok::<(), signet_core::GraphError>(())
    /// ```
    pub fn conflicts<P: Partition + ?Sized>(&self, partition: &P) -> Result<usize> {
        let lookup = |node: usize| {
            partition
                .label(node)
                .ok_or(GraphError::UnlabelledNode { node })
        };
        let mut count = 0;
        for edge in &self.edges {
            let same_group = lookup(edge.source())? == lookup(edge.target())?;
            let conflicting = match edge.sign() {
                Sign::Positive => !same_group,
                Sign::Negative => same_group,
            };
            if conflicting {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Flips up to `count` randomly chosen negative edges to positive.
    ///
    /// Negative edges are sampled uniformly without replacement; when fewer
    /// than `count` exist, all of them are flipped. Selection is keyed by the
    /// unordered node pair so each edge flips at most once. Returns the number
    /// of edges flipped.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use signet_core::{Sign, SignedEdge, SignedEdgeSet};
    ///
    /// let mut edges = SignedEdgeSet::from_edges(
    ///     3,
    ///     vec![
    ///         SignedEdge::new(0, 1, Sign::Negative),
    ///         SignedEdge::new(1, 2, Sign::Negative),
    ///     ],
    /// )?;
    /// let mut rng = SmallRng::seed_from_u64(1);
    /// assert_eq!(edges.recolor(&mut rng, 1), 1);
    /// assert_eq!(edges.negative_count(), 1);
    /// # Ok::<(), signet_core::GraphError>(())
    /// ```
    pub fn recolor<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let negatives: Vec<(usize, usize)> = self
            .edges
            .iter()
            .filter(|e| e.sign().is_negative())
            .map(SignedEdge::key)
            .collect();

        let chosen: HashSet<(usize, usize)> = if negatives.len() > count {
            index::sample(rng, negatives.len(), count)
                .into_iter()
                .filter_map(|i| negatives.get(i).copied())
                .collect()
        } else {
            negatives.into_iter().collect()
        };

        let mut flipped = 0;
        for edge in &mut self.edges {
            if edge.sign().is_negative() && chosen.contains(&edge.key()) {
                edge.set_sign(Sign::Positive);
                flipped += 1;
            }
        }
        debug!(requested = count, flipped, "recoloured negative edges");
        flipped
    }

    /// Returns the fraction of edges that are positive.
    ///
    /// The ratio is undefined for an empty edge set, which yields `None`.
    ///
    /// # Examples
    /// ```
    /// use signet_core::{Sign, SignedEdge, SignedEdgeSet};
    ///
    /// let empty = SignedEdgeSet::from_edges(2, Vec::new())?;
    /// assert_eq!(empty.q_rate(), None);
    ///
    /// let single = SignedEdgeSet::from_edges(2, vec![SignedEdge::new(0, 1, Sign::Positive)])?;
    /// assert_eq!(single.q_rate(), Some(1.0));
    /// # Ok::<(), signet_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn q_rate(&self) -> Option<f64> {
        if self.edges.is_empty() {
            return None;
        }
        Some(self.positive_count() as f64 / self.edges.len() as f64)
    }
}

impl<'a> IntoIterator for &'a SignedEdgeSet {
    type Item = &'a SignedEdge;
    type IntoIter = std::slice::Iter<'a, SignedEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
