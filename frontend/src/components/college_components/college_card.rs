//! Result card for one college.

use common::{college::College, comparison_set::CompareToggle};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdCompareArrows, md_communication_icons::MdLocationOn, md_toggle_icons::{MdCheckBox, MdStar}}};

use crate::data_definitions::finder_context::FinderContext;
use common::catalog_const::MAX_COMPARE_ITEMS;

#[component]
pub fn CollegeCard(college: ReadSignal<College>, item_index: usize) -> Element {
    let college_name = use_memo(move || college.read().name.clone());
    let location = use_memo(move || format!("{}, {}", college.read().location, college.read().country));
    let fees = use_memo(move || college.read().fees.clone());
    let rating = use_memo(move || college.read().rating.map(|r| format!("{r:.1}")).unwrap_or_default());
    let courses = use_memo(move || college.read().courses.join(" · "));

    rsx! {
        div {
            class: "x-college-card",
            // Row 1: INDEX - NAME - RATING
            div {
                class: "x-college-card-row",
                span { class: "x-college-card-index", "{item_index + 1}." }
                div { class: "x-college-card-title", "{college_name}" }
                div { style: "flex: 1 1 auto;" }
                if !rating().is_empty() {
                    span {
                        class: "x-college-card-rating",
                        Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #F5A623;" }
                        "{rating}"
                    }
                }
            }
            // Row 2: LOCATION - FEES
            div {
                class: "x-college-card-row x-college-card-muted",
                Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                span { "{location}" }
                div { style: "flex: 1 1 auto;" }
                span { "{fees}" }
            }
            // Row 3: COURSES - COMPARE
            div {
                class: "x-college-card-row",
                span { class: "x-college-card-courses", "{courses}" }
                div { style: "flex: 1 1 auto;" }
                CompareToggleButton { college }
            }
        }
    }
}


#[component]
fn CompareToggleButton(college: ReadSignal<College>) -> Element {
    let mut finder = use_context::<FinderContext>().finder;
    let is_compared = use_memo(move || finder.read().is_compared(&college.read().id));
    let toggle_class = use_memo(move || if is_compared() { "x-compare-toggle x-compare-toggle-active" } else { "x-compare-toggle" });

    let do_toggle = use_callback(move |_: ()| {
        let id = college.read().id.clone();
        let outcome = finder.write().toggle_compare(&id);
        if outcome == Some(CompareToggle::CapacityExceeded) {
            dioxus::logger::tracing::info!("Comparison full, {} not added", id);
            let description = format!("You can compare up to {MAX_COMPARE_ITEMS} colleges. Remove one to add another.");
            let toast_api = dioxus_primitives::toast::consume_toast();
            toast_api.info(
                "Comparison list is full.".to_string(),
                dioxus_primitives::toast::ToastOptions::new()
                    .description(&description)
                    .duration(std::time::Duration::from_secs(8))
                    .permanent(false),
            );
        }
    });

    rsx! {
        button {
            class: "{toggle_class}",
            onclick: move |_| do_toggle(()),
            if is_compared() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px;" }
                "Added to compare"
            } else {
                Icon { icon: MdCompareArrows, style: "width: 20px; height: 20px;" }
                "Compare"
            }
        }
    }
}
