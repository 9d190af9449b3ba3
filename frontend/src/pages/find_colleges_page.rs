use dioxus::prelude::*;

use common::{catalog::Catalog, college_finder::CollegeFinder};
use crate::{
    api::catalog_api::load_catalog_snapshot,
    components::{college_components::{college_card::CollegeCard, compare_bar::CompareFloatingBar, comparison_table::CompareModal, search_input_top_bar::SearchInputTopBar}, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    data_definitions::finder_context::FinderContext,
};


/// Find Colleges page
#[component]
pub fn FindCollegesPage() -> Element {
    rsx! {
        Title { "Find Colleges" }
        SuspendWrapper { FindCollegesLoader {} }
    }
}

#[component]
fn FindCollegesLoader() -> Element {
    let snapshot = use_resource(move || load_catalog_snapshot()).suspend()?.cloned();
    let snapshot = match snapshot {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(s) => s,
    };
    let catalog = match Catalog::from_snapshot(snapshot) {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#}", e) }},
        Ok(c) => c,
    };
    rsx! {
        FindCollegesRootComponent { catalog }
    }
}

/// Owns the finder for as long as the page is mounted.
#[component]
fn FindCollegesRootComponent(catalog: Catalog) -> Element {
    let finder = use_signal(move || CollegeFinder::new(catalog.clone()));
    let show_comparison = use_signal(|| false);
    use_context_provider(move || FinderContext { finder, show_comparison });

    let results = use_memo(move || finder.read().results().into_iter().cloned().collect::<Vec<_>>());
    let catalog_size = use_memo(move || finder.read().catalog().len());

    rsx! {
        div {
            id: "x-find-colleges-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                class: "x-search-top-bar",
                SearchInputTopBar {}
            }

            div {
                id: "x-search-results",
                class: "x-search-results",
                h1 {
                    class: "x-search-results-count",
                    "Showing {results.read().len()} of {catalog_size} colleges"
                }
                if results.read().is_empty() {
                    div { class: "x-search-results-empty", "No colleges match these filters." }
                }
                for (item_index, college) in results().into_iter().enumerate() {
                    CollegeCard {
                        key: "{college.id}",
                        college,
                        item_index,
                    }
                }
            }

            CompareFloatingBar {}
            CompareModal {}
        }
    }
}
