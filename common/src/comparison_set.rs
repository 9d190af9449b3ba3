//! The bounded, order-preserving set of colleges picked for comparison.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::catalog_const::MAX_COMPARE_ITEMS;
use crate::college::{College, CollegeId};

/// Outcome of [`ComparisonSet::toggle`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareToggle {
    Added,
    Removed,
    /// The set was full; nothing changed.
    CapacityExceeded,
}

impl CompareToggle {
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, CompareToggle::CapacityExceeded)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonSet {
    ids: Vec<CollegeId>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `id` if present, otherwise appends it when capacity remains.
    pub fn toggle(&mut self, id: CollegeId) -> CompareToggle {
        if let Some(position) = self.ids.iter().position(|existing| existing == &id) {
            self.ids.remove(position);
            tracing::debug!("Removed {} from comparison: {:?}", id, self.ids);
            return CompareToggle::Removed;
        }
        if self.is_full() {
            tracing::info!("Comparison set full, rejected {}", id);
            return CompareToggle::CapacityExceeded;
        }
        tracing::debug!("Added {} to comparison", id);
        self.ids.push(id);
        CompareToggle::Added
    }

    /// Idempotent; absent ids are ignored.
    pub fn remove(&mut self, id: &CollegeId) {
        self.ids.retain(|existing| existing != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[CollegeId] {
        &self.ids
    }

    pub fn contains(&self, id: &CollegeId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE_ITEMS
    }

    /// Selected colleges in selection order. Ids missing from `catalog` are
    /// skipped.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a College> {
        self.ids
            .iter()
            .filter_map(|id| {
                let college = catalog.get(id);
                if college.is_none() {
                    tracing::warn!("Comparison entry {} no longer in catalog", id);
                }
                college
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::test_catalog::abc_catalog;

    fn set_of(ids: &[&str]) -> ComparisonSet {
        let mut set = ComparisonSet::new();
        for id in ids {
            assert_eq!(set.toggle((*id).into()), CompareToggle::Added);
        }
        set
    }

    fn raw(set: &ComparisonSet) -> Vec<&str> {
        set.ids().iter().map(|id| id.0.as_str()).collect()
    }

    #[test]
    fn fourth_toggle_is_rejected() {
        let mut set = ComparisonSet::new();
        assert_eq!(set.toggle("a".into()), CompareToggle::Added);
        assert_eq!(raw(&set), vec!["a"]);
        assert_eq!(set.toggle("b".into()), CompareToggle::Added);
        assert_eq!(set.toggle("c".into()), CompareToggle::Added);
        assert_eq!(raw(&set), vec!["a", "b", "c"]);

        let outcome = set.toggle("d".into());
        assert!(outcome.is_capacity_exceeded());
        assert_eq!(raw(&set), vec!["a", "b", "c"]);
    }

    #[test]
    fn toggling_a_member_of_a_full_set_removes_it() {
        let mut set = set_of(&["a", "b", "c"]);
        assert_eq!(set.toggle("b".into()), CompareToggle::Removed);
        assert_eq!(raw(&set), vec!["a", "c"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut set = set_of(&["a", "b"]);
        set.remove(&"a".into());
        set.remove(&"a".into());
        set.remove(&"zzz".into());
        assert_eq!(raw(&set), vec!["b"]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = set_of(&["a", "b", "c"]);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.toggle("d".into()), CompareToggle::Added);
    }

    #[test]
    fn resolve_drops_ids_missing_from_catalog() {
        let catalog = abc_catalog();
        let set = set_of(&["a", "b"]);
        assert_eq!(set.resolve(&catalog).len(), 2);

        let shrunk = catalog.without(&"b".into());
        let resolved = set.resolve(&shrunk);
        assert_eq!(resolved.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["Apex"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn resolve_keeps_selection_order() {
        let catalog = abc_catalog();
        let set = set_of(&["c", "a"]);
        let names = set.resolve(&catalog).iter().map(|c| c.name.clone()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Crest", "Apex"]);
    }

    fn arb_id() -> impl Strategy<Value = CollegeId> {
        prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(CollegeId::from)
    }

    proptest! {
        #[test]
        fn toggles_never_exceed_capacity_or_duplicate(sequence in prop::collection::vec(arb_id(), 0..40)) {
            let mut set = ComparisonSet::new();
            for id in sequence {
                let _ = set.toggle(id);
                prop_assert!(set.len() <= MAX_COMPARE_ITEMS);
                let mut seen = set.ids().to_vec();
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), set.len());
            }
        }

        #[test]
        fn double_toggle_restores_prior_state(
            prefix in prop::collection::vec(arb_id(), 0..10),
            id in arb_id(),
        ) {
            let mut set = ComparisonSet::new();
            for existing in prefix {
                let _ = set.toggle(existing);
            }
            prop_assume!(!set.contains(&id) && !set.is_full());
            let before = set.clone();
            prop_assert_eq!(set.toggle(id.clone()), CompareToggle::Added);
            prop_assert_eq!(set.toggle(id), CompareToggle::Removed);
            prop_assert_eq!(set, before);
        }

        #[test]
        fn full_set_rejects_every_newcomer(id in arb_id()) {
            let mut set = set_of(&["x", "y", "z"]);
            let before = set.clone();
            prop_assert_eq!(set.toggle(id), CompareToggle::CapacityExceeded);
            prop_assert_eq!(set, before);
        }
    }
}
