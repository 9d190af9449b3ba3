//! Floating bar listing the colleges picked for comparison.

use common::catalog_const::MAX_COMPARE_ITEMS;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdCompareArrows, md_navigation_icons::MdClose}};

use crate::data_definitions::finder_context::FinderContext;
use crate::routes::Route;

#[component]
pub fn CompareFloatingBar() -> Element {
    let context = use_context::<FinderContext>();
    let mut finder = context.finder;
    let mut show_comparison = context.show_comparison;
    let compared = use_memo(move || {
        finder.read().compared_colleges().into_iter().map(|c| (c.id.clone(), c.name.clone())).collect::<Vec<_>>()
    });
    let compare_count = use_memo(move || finder.read().compare_count());

    if compare_count() == 0 {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-compare-floating-bar",
            class: "x-compare-bar",
            span { class: "x-compare-bar-count", "Compare ({compare_count}/{MAX_COMPARE_ITEMS})" }
            {compared().into_iter().map(move |(id, name)| {
                let remove_id = id.clone();
                rsx! {
                    span {
                        key: "{id}",
                        class: "x-compare-chip",
                        "{name}"
                        button {
                            class: "x-compare-chip-remove",
                            onclick: move |_| {
                                finder.write().remove_compare(&remove_id);
                            },
                            Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                        }
                    }
                }
            })}
            div { style: "flex: 1 1 auto;" }
            button {
                class: "x-compare-bar-secondary",
                onclick: move |_| {
                    finder.write().clear_compare();
                },
                "Clear"
            }
            Link {
                class: "x-compare-bar-secondary",
                to: Route::compare_page_from_ids(finder.read().compared_colleges().iter().map(|c| c.id.clone()).collect()),
                "Share"
            }
            button {
                class: "x-compare-bar-primary",
                onclick: move |_| show_comparison.set(true),
                Icon { icon: MdCompareArrows, style: "width: 20px; height: 20px;" }
                "Compare now"
            }
        }
    }
}
