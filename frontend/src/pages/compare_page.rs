use dioxus::prelude::*;

use common::{catalog::Catalog, college::CollegeId, college_finder::CollegeFinder, comparison_matrix::ComparisonMatrix};
use crate::{
    api::catalog_api::load_catalog_snapshot,
    components::{college_components::comparison_table::ComparisonTable, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    data_definitions::url_param::UrlParam,
    routes::Route,
};


/// Shareable full-page comparison for the colleges named in the URL.
#[component]
pub fn ComparePage(colleges: UrlParam<Vec<CollegeId>>) -> Element {
    rsx! {
        Title { "Compare Colleges" }
        SuspendWrapper { ComparePageLoader { colleges: colleges.0.clone() } }
    }
}

#[component]
fn ComparePageLoader(colleges: ReadSignal<Vec<CollegeId>>) -> Element {
    let snapshot = use_resource(move || load_catalog_snapshot()).suspend()?.cloned();
    let snapshot = match snapshot {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(s) => s,
    };
    let catalog = match Catalog::from_snapshot(snapshot) {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#}", e) }},
        Ok(c) => c,
    };
    let matrix = comparison_for(catalog, &colleges.read());

    rsx! {
        div {
            class: "x-compare-page",
            h1 { "Compare colleges" }
            ComparisonTable {
                matrix,
                on_add_another: move |_| {
                    navigator().push(Route::FindCollegesPage {});
                },
            }
        }
    }
}

/// Repeated ids, ids past capacity and ids missing from the catalog are skipped.
fn comparison_for(catalog: Catalog, ids: &[CollegeId]) -> ComparisonMatrix {
    let mut finder = CollegeFinder::new(catalog);
    for id in ids {
        if finder.is_compared(id) {
            continue;
        }
        if let Some(outcome) = finder.toggle_compare(id) {
            if outcome.is_capacity_exceeded() {
                dioxus::logger::tracing::warn!("Compare link lists more colleges than fit, dropping {}", id);
            }
        }
    }
    finder.comparison_matrix()
}
