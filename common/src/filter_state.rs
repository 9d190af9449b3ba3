//! Filter state and the controller that mutates it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::facets::{FacetName, FacetRegistry};

/// Free-text query plus per-facet selections. An absent or empty selection
/// means "do not filter on this facet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub query_string: String,
    pub facet_filters: BTreeMap<FacetName, BTreeSet<String>>,
}

impl FilterState {
    pub fn has_active_filters(&self) -> bool {
        !self.query_string.is_empty() || self.facet_filters.values().any(|values| !values.is_empty())
    }

    /// Non-empty selection for `facet`, if any.
    pub fn selected(&self, facet: FacetName) -> Option<&BTreeSet<String>> {
        self.facet_filters.get(&facet).filter(|values| !values.is_empty())
    }

    pub fn is_selected(&self, facet: FacetName, value: &str) -> bool {
        self.facet_filters.get(&facet).map(|values| values.contains(value)).unwrap_or(false)
    }

    /// Copy of this state with `facet`'s own selection dropped.
    pub fn without_facet(&self, facet: FacetName) -> Self {
        let mut state = self.clone();
        state.facet_filters.remove(&facet);
        state
    }
}

/// Owns a [`FilterState`] and only admits values legal under its registry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterController {
    facets: FacetRegistry,
    state: FilterState,
}

impl FilterController {
    pub fn new(facets: FacetRegistry) -> Self {
        Self { facets, state: FilterState::default() }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query_string = text.into();
        tracing::debug!("Filter query set to {:?}", self.state.query_string);
    }

    /// Adds `value` to the facet's selection, or removes it if present.
    /// Returns false and leaves the state untouched when `value` is not legal
    /// for `facet`.
    pub fn toggle_facet_value(&mut self, facet: FacetName, value: &str) -> bool {
        if !self.facets.is_legal(facet, value) {
            tracing::warn!("Ignoring toggle of illegal value {:?} for facet {:?}", value, facet);
            return false;
        }
        let entry = self.state.facet_filters.entry(facet).or_default();
        if !entry.remove(value) {
            entry.insert(value.to_string());
        }
        if entry.is_empty() {
            self.state.facet_filters.remove(&facet);
        }
        tracing::debug!("Facet {:?} selection: {:?}", facet, self.state.facet_filters.get(&facet));
        true
    }

    pub fn clear_all(&mut self) {
        self.state = FilterState::default();
        tracing::debug!("Filters cleared");
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }
}
