//! Error types for the signet core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Every code, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$CodeVariant),+];

            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring generators or inspecting edge sets.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// Graphs must contain at least one node.
    #[error("node count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// A probability parameter was non-finite or outside `[0, 1]`.
    #[error("{parameter} must lie within [0, 1] (got {value})")]
    InvalidProbability {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The preferential attachment core must contain at least one node.
    #[error("core size must be at least 1")]
    EmptyCore,
    /// The preferential attachment core was larger than the whole graph.
    #[error("core size {core_size} exceeds node count {node_count}")]
    CoreLargerThanGraph {
        /// Requested size of the initial complete graph.
        core_size: usize,
        /// Requested final node count.
        node_count: usize,
    },
    /// Each arriving node must attach to between one and `core_size` nodes.
    #[error("attachments per node must lie within [1, {core_size}] (got {got})")]
    InvalidAttachmentCount {
        /// The rejected attachment count.
        got: usize,
        /// Size of the initial complete graph bounding the attachment count.
        core_size: usize,
    },
    /// A partition did not assign a group to a node referenced by an edge.
    #[error("partition has no group label for node {node}")]
    UnlabelledNode {
        /// Node missing from the partition.
        node: usize,
    },
    /// An edge connected a node to itself.
    #[error("self-loop on node {node} is not a valid edge")]
    SelfLoop {
        /// Node appearing at both ends of the edge.
        node: usize,
    },
    /// An edge referenced a node outside `0..node_count`.
    #[error("node {node} is outside the graph of {node_count} nodes")]
    NodeOutOfRange {
        /// The out-of-range endpoint.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// The same unordered pair appeared more than once.
    #[error("edge ({first}, {second}) appears more than once")]
    DuplicateEdge {
        /// Smaller endpoint of the repeated pair.
        first: usize,
        /// Larger endpoint of the repeated pair.
        second: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Graphs must contain at least one node.
        InvalidNodeCount => InvalidNodeCount { .. } => "GRAPH_INVALID_NODE_COUNT",
        /// A probability parameter was outside `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "GRAPH_INVALID_PROBABILITY",
        /// The preferential attachment core was empty.
        EmptyCore => EmptyCore => "GRAPH_EMPTY_CORE",
        /// The preferential attachment core was larger than the graph.
        CoreLargerThanGraph => CoreLargerThanGraph { .. } => "GRAPH_CORE_LARGER_THAN_GRAPH",
        /// The attachment count was zero or exceeded the core size.
        InvalidAttachmentCount => InvalidAttachmentCount { .. } => "GRAPH_INVALID_ATTACHMENT_COUNT",
        /// A partition lookup missed a referenced node.
        UnlabelledNode => UnlabelledNode { .. } => "GRAPH_UNLABELLED_NODE",
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge referenced a node outside the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// The same unordered pair appeared more than once.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
    }
}

impl GraphError {
    /// Returns `true` when the error stems from invalid generator parameters.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidNodeCount { .. }
                | Self::InvalidProbability { .. }
                | Self::EmptyCore
                | Self::CoreLargerThanGraph { .. }
                | Self::InvalidAttachmentCount { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Validates that `value` is a finite probability.
pub(crate) fn check_probability(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GraphError::InvalidProbability { parameter, value })
    }
}

/// Validates that a graph has at least one node.
pub(crate) const fn check_node_count(node_count: usize) -> Result<usize> {
    if node_count == 0 {
        Err(GraphError::InvalidNodeCount { got: node_count })
    } else {
        Ok(node_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(1.0)]
    fn accepts_probabilities_in_unit_interval(#[case] value: f64) {
        assert_eq!(check_probability("p", value), Ok(value));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.000_001)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_probabilities_outside_unit_interval(#[case] value: f64) {
        let err = check_probability("q", value).expect_err("value must be rejected");
        assert_eq!(err.code(), GraphErrorCode::InvalidProbability);
        assert!(err.is_configuration());
    }

    #[test]
    fn zero_nodes_is_rejected() {
        assert_eq!(
            check_node_count(0),
            Err(GraphError::InvalidNodeCount { got: 0 })
        );
        assert_eq!(check_node_count(1), Ok(1));
    }

    #[test]
    fn codes_are_unique_and_prefixed() {
        let raw: std::collections::HashSet<&str> =
            GraphErrorCode::ALL.iter().map(|code| code.as_str()).collect();
        assert_eq!(raw.len(), GraphErrorCode::ALL.len());
        assert!(raw.iter().all(|code| code.starts_with("GRAPH_")));
    }

    #[test]
    fn lookup_failures_are_not_configuration_errors() {
        assert!(!GraphError::UnlabelledNode { node: 3 }.is_configuration());
    }
}
