//! Pareto label store.
//!
//! Each `(node, time_bin)` key owns a small set of `(cost, resource)` labels
//! in which no label weakly dominates another.  Sets stay short in practice
//! (a handful of entries), so insertion is a linear scan.

use rustc_hash::FxHashMap;

use fp_core::{NodeId, TimeBin};

/// Accumulated cost and remaining resource of one retained state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Label {
    pub cost:     f64,
    pub resource: f64,
}

impl Label {
    pub fn new(cost: f64, resource: f64) -> Self {
        Self { cost, resource }
    }

    /// Weak dominance: no more expensive and at least as much resource left.
    #[inline]
    pub fn dominates(&self, other: &Label) -> bool {
        self.cost <= other.cost && self.resource >= other.resource
    }
}

#[derive(Default)]
pub struct LabelStore {
    sets: FxHashMap<(NodeId, TimeBin), Vec<Label>>,
    len:  usize,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `label` to the set at `(node, bin)`.
    ///
    /// Returns `false` (and leaves the set untouched) if an existing label
    /// dominates it.  Otherwise every label it dominates is evicted, the new
    /// label is retained and `true` is returned.
    pub fn insert(&mut self, node: NodeId, bin: TimeBin, label: Label) -> bool {
        let set = self.sets.entry((node, bin)).or_default();
        if set.iter().any(|l| l.dominates(&label)) {
            return false;
        }
        let before = set.len();
        set.retain(|l| !label.dominates(l));
        self.len -= before - set.len();
        set.push(label);
        self.len += 1;
        true
    }

    /// Labels currently retained at `(node, bin)`.
    pub fn labels(&self, node: NodeId, bin: TimeBin) -> &[Label] {
        self.sets.get(&(node, bin)).map_or(&[], Vec::as_slice)
    }

    /// Total retained labels across all keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of `(node, bin)` keys seen.
    pub fn key_count(&self) -> usize {
        self.sets.len()
    }
}
