//! Dense adjacency rendering for signed edge sets.
//!
//! Cells encode `0` for a missing edge, `1` for a positive edge, and `2` for
//! a negative edge. The matrix is always symmetric.

use std::io::{self, Write};

use crate::{
    edge::{Sign, SignedEdge},
    edge_set::SignedEdgeSet,
};

/// Cell value for an absent edge.
pub const NO_EDGE: u8 = 0;
/// Cell value for a positive edge.
pub const POSITIVE_EDGE: u8 = 1;
/// Cell value for a negative edge.
pub const NEGATIVE_EDGE: u8 = 2;

/// Symmetric `N x N` matrix of edge codes.
///
/// # Examples
/// ```
/// use signet_core::{AdjacencyMatrix, Sign, SignedEdge, SignedEdgeSet};
///
/// let edges = SignedEdgeSet::from_edges(3, vec![SignedEdge::new(0, 2, Sign::Negative)])?;
/// let matrix = AdjacencyMatrix::from_edge_set(&edges);
/// assert_eq!(matrix.get(2, 0), Some(2));
///
/// let mut out = Vec::new();
/// matrix.write_to(&mut out)?;
/// assert_eq!(String::from_utf8(out)?, "3\n0 0 2\n0 0 0\n2 0 0\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Renders `edges` into a dense matrix sized by its node count.
    #[must_use]
    pub fn from_edge_set(edges: &SignedEdgeSet) -> Self {
        let size = edges.node_count();
        let mut matrix = Self {
            size,
            cells: vec![NO_EDGE; size * size],
        };
        for edge in edges {
            matrix.set(edge);
        }
        matrix
    }

    fn set(&mut self, edge: &SignedEdge) {
        let code = match edge.sign() {
            Sign::Positive => POSITIVE_EDGE,
            Sign::Negative => NEGATIVE_EDGE,
        };
        let (u, v) = (edge.source(), edge.target());
        for index in [u * self.size + v, v * self.size + u] {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = code;
            }
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the code stored at `(row, column)`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.cells.get(row * self.size + column).copied()
    }

    /// Iterates over the matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Writes a header line holding the node count followed by one line of
    /// space-delimited codes per row.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by `writer`.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        writeln!(writer, "{}", self.size)?;
        for row in self.rows() {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(writer, "{first}")?;
            }
            for cell in cells {
                write!(writer, " {cell}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};

    use crate::ErdosRenyiGenerator;

    #[test]
    fn matrix_is_symmetric_and_matches_edges() {
        let mut rng = SmallRng::seed_from_u64(21);
        let graph = ErdosRenyiGenerator::new(12, 0.4, 0.5)
            .expect("valid parameters")
            .generate(&mut rng);
        let matrix = AdjacencyMatrix::from_edge_set(&graph);

        for row in 0..12 {
            assert_eq!(matrix.get(row, row), Some(NO_EDGE));
            for column in 0..12 {
                assert_eq!(matrix.get(row, column), matrix.get(column, row));
            }
        }
        let filled = (0..12)
            .flat_map(|r| (0..12).map(move |c| (r, c)))
            .filter(|&(r, c)| r < c && matrix.get(r, c) != Some(NO_EDGE))
            .count();
        assert_eq!(filled, graph.number_of_edges());
        for edge in &graph {
            let expected = if edge.sign().is_positive() {
                POSITIVE_EDGE
            } else {
                NEGATIVE_EDGE
            };
            assert_eq!(matrix.get(edge.source(), edge.target()), Some(expected));
        }
    }

    #[test]
    fn out_of_range_cells_are_absent() {
        let graph = SignedEdgeSet::from_edges(2, Vec::new()).expect("empty set is valid");
        let matrix = AdjacencyMatrix::from_edge_set(&graph);
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.rows().count(), 2);
    }

    #[test]
    fn single_node_renders_header_and_one_row() {
        let graph = SignedEdgeSet::from_edges(1, Vec::new()).expect("empty set is valid");
        let mut out = Vec::new();
        AdjacencyMatrix::from_edge_set(&graph)
            .write_to(&mut out)
            .expect("writing to a vector succeeds");
        assert_eq!(out, b"1\n0\n");
    }
}
