use crate::types::{FilterSpec, Item};

impl FilterSpec {
    /// Whether an item satisfies the spec: AND of three predicates, each
    /// vacuously true when its set is empty. All sets empty matches
    /// everything — the default state.
    pub fn matches(&self, item: &Item) -> bool {
        let intersection = self.intersect_all().is_empty()
            || self
                .intersect_all()
                .iter()
                .all(|c| item.categories.contains(c));
        let union = self.union_any().is_empty()
            || self.union_any().iter().any(|c| item.categories.contains(c));
        let difference = self.exclude_any().is_empty()
            || !self
                .exclude_any()
                .iter()
                .any(|c| item.categories.contains(c));
        intersection && union && difference
    }
}

/// Filter a collection against a spec, preserving relative order.
pub fn evaluate(items: &[Item], spec: &FilterSpec) -> Vec<Item> {
    items.iter().filter(|i| spec.matches(i)).cloned().collect()
}
