//! Node-to-group lookups consumed by conflict counting.
//!
//! A partition is supplied by the caller (for example a community detection
//! result) and must label every node referenced by the edges it is checked
//! against.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Maps node identifiers to integer group labels.
///
/// # Examples
/// ```
/// use signet_core::Partition;
///
/// let groups: Vec<usize> = vec![0, 0, 1];
/// assert_eq!(groups.label(2), Some(1));
/// assert_eq!(groups.label(3), None);
/// ```
pub trait Partition {
    /// Returns the group label for `node`, or `None` when it is unlabelled.
    fn label(&self, node: usize) -> Option<usize>;
}

impl Partition for [usize] {
    fn label(&self, node: usize) -> Option<usize> {
        self.get(node).copied()
    }
}

impl Partition for Vec<usize> {
    fn label(&self, node: usize) -> Option<usize> {
        self.as_slice().label(node)
    }
}

impl<const N: usize> Partition for [usize; N] {
    fn label(&self, node: usize) -> Option<usize> {
        self.as_slice().label(node)
    }
}

impl<S: BuildHasher> Partition for HashMap<usize, usize, S> {
    fn label(&self, node: usize) -> Option<usize> {
        self.get(&node).copied()
    }
}

impl Partition for BTreeMap<usize, usize> {
    fn label(&self, node: usize) -> Option<usize> {
        self.get(&node).copied()
    }
}

impl<P: Partition + ?Sized> Partition for &P {
    fn label(&self, node: usize) -> Option<usize> {
        (**self).label(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_and_slices_agree() {
        let dense: [usize; 3] = [3, 3, 7];
        let sparse: HashMap<usize, usize> = [(0, 3), (1, 3), (2, 7)].into_iter().collect();
        let ordered: BTreeMap<usize, usize> = sparse.iter().map(|(&k, &v)| (k, v)).collect();
        for node in 0..4 {
            assert_eq!(dense.label(node), sparse.label(node));
            assert_eq!(dense.label(node), ordered.label(node));
        }
    }
}
