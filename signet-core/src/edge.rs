//! Signed edge primitives.
//!
//! An edge joins two distinct nodes and carries a [`Sign`]: positive edges
//! model agreement, negative edges model conflict. Edges are undirected, so
//! `(u, v)` and `(v, u)` share the same [`SignedEdge::key`].

use std::fmt;

use rand::{Rng, distributions::Standard};

/// Polarity attached to an edge.
///
/// # Examples
/// ```
/// use signet_core::Sign;
///
/// assert_eq!(Sign::Positive.value(), 1);
/// assert_eq!(Sign::Negative.value(), -1);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    /// Balanced relation (`+1`).
    Positive,
    /// Conflicting relation (`-1`).
    Negative,
}

impl Sign {
    /// Returns the numeric value of the sign, `+1` or `-1`.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    /// Returns `true` for [`Sign::Positive`].
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }

    /// Returns `true` for [`Sign::Negative`].
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("+1"),
            Self::Negative => f.write_str("-1"),
        }
    }
}

/// Draws a sign that is positive with probability `q`.
///
/// Each call consumes one uniform draw from `rng`. A `q` of `0.0` always
/// yields [`Sign::Negative`] and a `q` of `1.0` always yields
/// [`Sign::Positive`]. Callers are expected to pass `q` within `[0, 1]`;
/// the generators validate it before drawing.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use signet_core::{Sign, sign};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// assert_eq!(sign(&mut rng, 1.0), Sign::Positive);
/// assert_eq!(sign(&mut rng, 0.0), Sign::Negative);
/// ```
pub fn sign<R: Rng + ?Sized>(rng: &mut R, q: f64) -> Sign {
    let draw: f64 = rng.sample(Standard);
    if draw < q {
        Sign::Positive
    } else {
        Sign::Negative
    }
}

/// Undirected edge between two distinct nodes, annotated with a [`Sign`].
///
/// Endpoint order is preserved as generated; equality of node pairs should
/// be checked through [`SignedEdge::key`].
///
/// # Examples
/// ```
/// use signet_core::{Sign, SignedEdge};
///
/// let edge = SignedEdge::new(4, 1, Sign::Negative);
/// assert_eq!(edge.key(), (1, 4));
/// assert!(edge.sign().is_negative());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SignedEdge {
    source: usize,
    target: usize,
    sign: Sign,
}

impl SignedEdge {
    /// Creates an edge from `source` to `target` with the given sign.
    #[must_use]
    pub const fn new(source: usize, target: usize, sign: Sign) -> Self {
        Self {
            source,
            target,
            sign,
        }
    }

    /// Returns the first endpoint as generated.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns the second endpoint as generated.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Returns the edge polarity.
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the unordered pair identity `(min, max)` of the endpoints.
    #[must_use]
    pub const fn key(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    pub(crate) const fn set_sign(&mut self, sign: Sign) {
        self.sign = sign;
    }
}

impl From<SignedEdge> for (usize, usize, i8) {
    fn from(edge: SignedEdge) -> Self {
        (edge.source, edge.target, edge.sign.value())
    }
}
