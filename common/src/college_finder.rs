//! Page-level controller for college discovery and comparison.
//!
//! Owns the catalog, the filter state and the comparison set. Filter changes
//! never touch the comparison set, so a compared college stays pinned even
//! when it no longer matches the active filters.

use crate::catalog::Catalog;
use crate::college::{College, CollegeId};
use crate::comparison_matrix::{ComparisonMatrix, default_parameters, render_comparison};
use crate::comparison_set::{CompareToggle, ComparisonSet};
use crate::facets::{FacetName, FacetValueCount};
use crate::filter_state::{FilterController, FilterState};
use crate::query_engine::{evaluate, facet_counts};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollegeFinder {
    catalog: Catalog,
    filters: FilterController,
    comparison: ComparisonSet,
}

impl CollegeFinder {
    pub fn new(catalog: Catalog) -> Self {
        let filters = FilterController::new(catalog.facets().clone());
        Self { catalog, filters, comparison: ComparisonSet::new() }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn results(&self) -> Vec<&College> {
        evaluate(&self.catalog, self.filters.state())
    }

    pub fn hit_count(&self) -> usize {
        self.results().len()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filters.set_query(text);
    }

    pub fn toggle_facet_value(&mut self, facet: FacetName, value: &str) -> bool {
        self.filters.toggle_facet_value(facet, value)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters()
    }

    pub fn facet_counts(&self, facet: FacetName) -> Vec<FacetValueCount> {
        facet_counts(&self.catalog, self.filters.state(), facet)
    }

    /// `None` when `id` is not in the catalog; the set is left untouched.
    pub fn toggle_compare(&mut self, id: &CollegeId) -> Option<CompareToggle> {
        if !self.catalog.contains(id) {
            tracing::warn!("Ignoring compare toggle for unknown college {}", id);
            return None;
        }
        Some(self.comparison.toggle(id.clone()))
    }

    pub fn remove_compare(&mut self, id: &CollegeId) {
        self.comparison.remove(id);
    }

    pub fn clear_compare(&mut self) {
        self.comparison.clear();
    }

    pub fn is_compared(&self, id: &CollegeId) -> bool {
        self.comparison.contains(id)
    }

    pub fn compare_count(&self) -> usize {
        self.comparison.len()
    }

    pub fn compared_colleges(&self) -> Vec<&College> {
        self.comparison.resolve(&self.catalog)
    }

    pub fn comparison_matrix(&self) -> ComparisonMatrix {
        render_comparison(&default_parameters(), &self.compared_colleges())
    }
}
