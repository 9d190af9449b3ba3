use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::components::college_components::facet_filters::FacetButtonStrip;
use crate::data_definitions::finder_context::FinderContext;


/// Free-text box plus facet chips. Every keystroke re-evaluates the results.
#[component]
pub fn SearchInputTopBar() -> Element {
    let mut finder = use_context::<FinderContext>().finder;
    let query_string = use_memo(move || finder.read().filter_state().query_string.clone());
    let has_active_filters = use_memo(move || finder.read().has_active_filters());

    rsx! {
        div {
            id: "x-search-input-search-box",
            class: "x-search-box",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search colleges by name or city",
                class: "x-search-input",
                value: "{query_string}",
                oninput: move |event: Event<FormData>| {
                    finder.write().set_query(event.value());
                },
            }
        }
        FacetButtonStrip {}
        if has_active_filters() {
            button {
                class: "x-clear-filters-button",
                onclick: move |_| {
                    finder.write().clear_filters();
                },
                Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                "Clear filters"
            }
        }
    }
}
