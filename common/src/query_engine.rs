//! Linear in-memory evaluation of a [`FilterState`] against the catalog.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::college::College;
use crate::facets::{FacetName, FacetValueCount};
use crate::filter_state::FilterState;

/// Colleges passing the text filter and every active facet filter, in
/// catalog order. Facets combine with AND, values within a facet with OR.
pub fn evaluate<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a College> {
    let needle = state.query_string.to_lowercase();
    let active_facets = catalog
        .facets()
        .definitions()
        .iter()
        .filter(|definition| definition.name.is_evaluated())
        .filter_map(|definition| state.selected(definition.name).map(|values| (definition.name, values)))
        .collect::<Vec<_>>();

    let results = catalog
        .colleges()
        .iter()
        .filter(|college| needle.is_empty() || college.matches_text(&needle))
        .filter(|college| active_facets.iter().all(|(facet, selected)| matches_facet(college, *facet, selected)))
        .collect::<Vec<_>>();
    tracing::debug!("Evaluated {} of {} colleges for {:?}", results.len(), catalog.len(), state);
    results
}

fn matches_facet(college: &College, facet: FacetName, selected: &BTreeSet<String>) -> bool {
    match college.facet_values(facet) {
        Some(values) => values.iter().any(|value| selected.contains(*value)),
        None => true,
    }
}

/// Per-value counts for one facet's checkbox list, in definition order.
///
/// Each count is taken with every other active filter applied but with this
/// facet's own selection dropped, so unselected values still show how many
/// colleges selecting them would add.
pub fn facet_counts(catalog: &Catalog, state: &FilterState, facet: FacetName) -> Vec<FacetValueCount> {
    let Some(definition) = catalog.facets().get(facet) else {
        return Vec::new();
    };
    let base = if facet.is_evaluated() {
        evaluate(catalog, &state.without_facet(facet))
    } else {
        Vec::new()
    };

    definition
        .values
        .iter()
        .map(|value| {
            let count = facet.is_evaluated().then(|| {
                base.iter()
                    .filter(|college| {
                        college.facet_values(facet).map(|values| values.contains(&value.as_str())).unwrap_or(false)
                    })
                    .count() as u64
            });
            FacetValueCount { value: value.clone(), count, selected: state.is_selected(facet, value) }
        })
        .collect()
}
