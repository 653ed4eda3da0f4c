//! Barabási–Albert signed graph generation.
//!
//! Node labels are shuffled into a random arrival order. The first `m0`
//! arrivals form a complete core; every later arrival attaches to `m`
//! distinct earlier nodes chosen with probability proportional to their
//! current degree. Each edge is signed positive with probability `q`.

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    degree::DegreeTable,
    edge::{SignedEdge, sign},
    edge_set::SignedEdgeSet,
    error::{GraphError, Result, check_node_count, check_probability},
};

/// Default size of the initial complete graph.
pub const DEFAULT_CORE_SIZE: usize = 3;
/// Default number of edges each arriving node attaches.
pub const DEFAULT_ATTACHMENTS_PER_NODE: usize = 2;

/// Configures and validates [`BarabasiAlbertGenerator`] instances.
///
/// # Examples
/// ```
/// use signet_core::BarabasiAlbertBuilder;
///
/// let generator = BarabasiAlbertBuilder::new(100, 0.5)
///     .with_core_size(5)
///     .with_attachments_per_node(3)
///     .build()?;
/// assert_eq!(generator.core_size(), 5);
/// assert_eq!(generator.expected_edges(), 10 + 3 * 95);
/// # Ok::<(), signet_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarabasiAlbertBuilder {
    node_count: usize,
    positive_probability: f64,
    core_size: usize,
    attachments_per_node: usize,
}

impl BarabasiAlbertBuilder {
    /// Creates a builder using the default core size and attachment count.
    #[must_use]
    pub const fn new(node_count: usize, positive_probability: f64) -> Self {
        Self {
            node_count,
            positive_probability,
            core_size: DEFAULT_CORE_SIZE,
            attachments_per_node: DEFAULT_ATTACHMENTS_PER_NODE,
        }
    }

    /// Overrides the size of the initial complete graph (`m0`).
    #[must_use]
    pub const fn with_core_size(mut self, core_size: usize) -> Self {
        self.core_size = core_size;
        self
    }

    /// Overrides the number of edges each arriving node attaches (`m`).
    #[must_use]
    pub const fn with_attachments_per_node(mut self, attachments: usize) -> Self {
        self.attachments_per_node = attachments;
        self
    }

    /// Validates the configuration and constructs the generator.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeCount`] for zero nodes,
    /// [`GraphError::InvalidProbability`] when `q` lies outside `[0, 1]`,
    /// [`GraphError::EmptyCore`] for a zero core size,
    /// [`GraphError::CoreLargerThanGraph`] when the core exceeds the node
    /// count, and [`GraphError::InvalidAttachmentCount`] when the attachment
    /// count is zero or exceeds the core size.
    pub fn build(self) -> Result<BarabasiAlbertGenerator> {
        let node_count = check_node_count(self.node_count)?;
        let positive_probability =
            check_probability("positive_probability", self.positive_probability)?;
        if self.core_size == 0 {
            return Err(GraphError::EmptyCore);
        }
        if self.core_size > node_count {
            return Err(GraphError::CoreLargerThanGraph {
                core_size: self.core_size,
                node_count,
            });
        }
        if self.attachments_per_node == 0 || self.attachments_per_node > self.core_size {
            return Err(GraphError::InvalidAttachmentCount {
                got: self.attachments_per_node,
                core_size: self.core_size,
            });
        }
        Ok(BarabasiAlbertGenerator {
            node_count,
            positive_probability,
            core_size: self.core_size,
            attachments_per_node: self.attachments_per_node,
        })
    }
}

/// Validated parameters for preferential attachment with signed edges.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use signet_core::BarabasiAlbertGenerator;
///
/// let generator = BarabasiAlbertGenerator::new(5, 1.0, 3, 2)?;
/// let edges = generator.generate(&mut SmallRng::seed_from_u64(42));
/// assert_eq!(edges.number_of_edges(), 7);
/// assert_eq!(edges.q_rate(), Some(1.0));
/// # Ok::<(), signet_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarabasiAlbertGenerator {
    node_count: usize,
    positive_probability: f64,
    core_size: usize,
    attachments_per_node: usize,
}

impl BarabasiAlbertGenerator {
    /// Creates a generator with an explicit core size and attachment count.
    ///
    /// # Errors
    /// See [`BarabasiAlbertBuilder::build`].
    pub fn new(
        node_count: usize,
        positive_probability: f64,
        core_size: usize,
        attachments_per_node: usize,
    ) -> Result<Self> {
        BarabasiAlbertBuilder::new(node_count, positive_probability)
            .with_core_size(core_size)
            .with_attachments_per_node(attachments_per_node)
            .build()
    }

    /// Returns the final node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the probability that an edge is signed positive.
    #[must_use]
    pub const fn positive_probability(&self) -> f64 {
        self.positive_probability
    }

    /// Returns the size of the initial complete graph (`m0`).
    #[must_use]
    pub const fn core_size(&self) -> usize {
        self.core_size
    }

    /// Returns the number of edges each arriving node attaches (`m`).
    #[must_use]
    pub const fn attachments_per_node(&self) -> usize {
        self.attachments_per_node
    }

    /// Returns the exact edge count of every generated graph:
    /// `m0 (m0 - 1) / 2 + m (N - m0)`.
    #[must_use]
    pub const fn expected_edges(&self) -> usize {
        self.core_size * (self.core_size - 1) / 2
            + self.attachments_per_node * (self.node_count - self.core_size)
    }

    /// Grows a fresh signed graph using `rng` for the arrival order, the
    /// attachment targets, and the edge signs.
    #[instrument(
        level = "debug",
        skip(self, rng),
        fields(
            nodes = self.node_count,
            q = self.positive_probability,
            m0 = self.core_size,
            m = self.attachments_per_node,
        )
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SignedEdgeSet {
        let mut growth = Growth::seed_core(self, rng);
        while growth.attach_next(rng) {}
        debug!(
            edges = growth.edges.len(),
            total_degree = growth.degrees.total(),
            "generated Barabási–Albert graph"
        );
        growth.finish()
    }
}

/// In-progress preferential attachment state.
///
/// `degrees` is indexed by arrival position; `arrivals` maps each position
/// to its node label.
struct Growth<'a> {
    params: &'a BarabasiAlbertGenerator,
    arrivals: Vec<usize>,
    degrees: DegreeTable,
    edges: Vec<SignedEdge>,
    next: usize,
}

impl<'a> Growth<'a> {
    fn seed_core<R: Rng + ?Sized>(params: &'a BarabasiAlbertGenerator, rng: &mut R) -> Self {
        let mut arrivals: Vec<usize> = (0..params.node_count).collect();
        arrivals.shuffle(rng);

        let mut edges = Vec::with_capacity(params.expected_edges());
        let mut degrees = DegreeTable::with_capacity(params.node_count);
        let core = arrivals.get(..params.core_size).unwrap_or(&[]);
        for (i, &u) in core.iter().enumerate() {
            for &v in core.iter().skip(i + 1) {
                edges.push(SignedEdge::new(u, v, sign(rng, params.positive_probability)));
            }
            degrees.push(params.core_size - 1);
        }

        Self {
            params,
            arrivals,
            degrees,
            edges,
            next: params.core_size,
        }
    }

    /// Attaches the next arrival. Returns `false` once every node has joined.
    fn attach_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(&label) = self.arrivals.get(self.next) else {
            return false;
        };

        let mut targets = Vec::with_capacity(self.params.attachments_per_node);
        while targets.len() < self.params.attachments_per_node {
            let Some(slot) = self.degrees.sample_excluding(rng, &targets) else {
                break;
            };
            targets.push(slot);
        }

        for &slot in &targets {
            if let Some(&target) = self.arrivals.get(slot) {
                self.edges.push(SignedEdge::new(
                    label,
                    target,
                    sign(rng, self.params.positive_probability),
                ));
            }
            self.degrees.increment(slot);
        }
        self.degrees.push(targets.len());
        self.next += 1;

        debug_assert_eq!(self.degrees.total(), 2 * self.edges.len());
        true
    }

    fn finish(self) -> SignedEdgeSet {
        SignedEdgeSet::from_generated(self.params.node_count, self.edges)
    }
}
