//! Signet core library.
//!
//! Generates random graphs with signed edges under the Erdős–Rényi and
//! Barabási–Albert models and analyses the resulting edge lists against
//! structural balance.
//!
//! All randomness is injected: generators and [`SignedEdgeSet::recolor`]
//! take any [`rand::Rng`], so a seeded generator such as
//! `rand::rngs::SmallRng` reproduces results exactly.
//!
//! # Examples
//! ```
//! use rand::{SeedableRng, rngs::SmallRng};
//! use signet_core::ErdosRenyiGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let graph = ErdosRenyiGenerator::new(4, 1.0, 0.0)?.generate(&mut rng);
//! let partition: [usize; 4] = [0, 0, 1, 1];
//! assert_eq!(graph.conflicts(&partition)?, 2);
//! # Ok::<(), signet_core::GraphError>(())
//! ```

mod adjacency;
mod barabasi_albert;
mod degree;
mod edge;
mod edge_set;
mod erdos_renyi;
mod error;
mod partition;

pub use crate::{
    adjacency::{AdjacencyMatrix, NEGATIVE_EDGE, NO_EDGE, POSITIVE_EDGE},
    barabasi_albert::{
        BarabasiAlbertBuilder, BarabasiAlbertGenerator, DEFAULT_ATTACHMENTS_PER_NODE,
        DEFAULT_CORE_SIZE,
    },
    edge::{Sign, SignedEdge, sign},
    edge_set::SignedEdgeSet,
    erdos_renyi::ErdosRenyiGenerator,
    error::{GraphError, GraphErrorCode, Result},
    partition::Partition,
};
