//! Live degree distribution used for preferential attachment.
//!
//! Slots are indexed by arrival order, not by node label. Weights are only
//! ever appended or incremented, and [`DegreeTable::total`] tracks their
//! running sum so weighted draws do not need to rescan for the normaliser.

use rand::Rng;

/// Degree weights for every node that has joined the graph so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DegreeTable {
    weights: Vec<usize>,
    total: usize,
}

impl DegreeTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            total: 0,
        }
    }

    /// Appends a new slot holding `weight` and returns its index.
    pub(crate) fn push(&mut self, weight: usize) -> usize {
        self.weights.push(weight);
        self.total += weight;
        self.weights.len() - 1
    }

    /// Adds one to the weight stored in `slot`.
    pub(crate) fn increment(&mut self, slot: usize) {
        if let Some(weight) = self.weights.get_mut(slot) {
            *weight += 1;
            self.total += 1;
        }
    }

    pub(crate) const fn total(&self) -> usize {
        self.total
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.weights.len()
    }

    #[cfg(test)]
    pub(crate) fn weight(&self, slot: usize) -> Option<usize> {
        self.weights.get(slot).copied()
    }

    /// Draws a slot with probability proportional to its weight, treating
    /// every slot in `exclude` as weightless.
    ///
    /// Falls back to a uniform draw over the non-excluded slots when their
    /// combined weight is zero. Returns `None` only when every slot is
    /// excluded.
    pub(crate) fn sample_excluding<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        exclude: &[usize],
    ) -> Option<usize> {
        let excluded_weight: usize = exclude
            .iter()
            .filter_map(|&slot| self.weights.get(slot))
            .sum();
        let available = self.total.saturating_sub(excluded_weight);
        if available == 0 {
            return self.sample_uniform_excluding(rng, exclude);
        }

        let threshold = rng.gen_range(0..available);
        let mut cumulative = 0;
        for (slot, &weight) in self.weights.iter().enumerate() {
            if exclude.contains(&slot) {
                continue;
            }
            cumulative += weight;
            if threshold < cumulative {
                return Some(slot);
            }
        }
        None
    }

    fn sample_uniform_excluding<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        exclude: &[usize],
    ) -> Option<usize> {
        let candidates: Vec<usize> = (0..self.weights.len())
            .filter(|slot| !exclude.contains(slot))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        candidates.get(rng.gen_range(0..candidates.len())).copied()
    }
}
