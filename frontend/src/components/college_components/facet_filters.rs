//! Facet chips with drop-down checkbox lists.

use dioxus::prelude::*;
use common::facets::FacetName;
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdBusiness, md_editor_icons::MdAttachMoney, md_navigation_icons::MdArrowDropDown, md_social_icons::{MdPublic, MdSchool}, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::data_definitions::finder_context::FinderContext;


#[derive(Clone, Copy)]
struct FacetStripContext {
    expanded_facet: Signal<Option<FacetName>>,
}

#[component]
pub fn FacetButtonStrip() -> Element {
    let finder = use_context::<FinderContext>().finder;
    let expanded_facet = use_signal(|| None::<FacetName>);
    use_context_provider(|| FacetStripContext { expanded_facet });
    let is_registered = move |facet: FacetName| finder.read().catalog().facets().get(facet).is_some();

    rsx! {
        div {
            id: "x-search-input-facet-chips-wrapper",
            class: "x-facet-strip",

            if is_registered(FacetName::Country) {
                FacetButton { facet: FacetName::Country, facet_icon: MdPublic }
            }
            if is_registered(FacetName::CollegeType) {
                FacetButton { facet: FacetName::CollegeType, facet_icon: MdBusiness }
            }
            if is_registered(FacetName::FeeRange) {
                FacetButton { facet: FacetName::FeeRange, facet_icon: MdAttachMoney }
            }
            if is_registered(FacetName::Course) {
                FacetButton { facet: FacetName::Course, facet_icon: MdSchool }
            }
        }
    }
}

#[component]
fn FacetButton<I: dioxus_free_icons::IconShape+'static+Clone+PartialEq>(
    facet: FacetName,
    facet_icon: I,
) -> Element {
    let mut expanded_facet = use_context::<FacetStripContext>().expanded_facet;
    let finder = use_context::<FinderContext>().finder;

    let is_expanded = use_memo(move || *expanded_facet.read() == Some(facet));
    let selected_count = use_memo(move || finder.read().filter_state().selected(facet).map(|v| v.len()).unwrap_or(0));
    let border_color = use_memo(move || if selected_count() > 0 { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" });

    rsx! {
        if is_expanded() {
            div {
                style: "position: relative; width: 0px; height: 0px; top: 0px; left: 0px;",
                div {
                    class: "x-facet-popup",
                    FacetSelectorList { facet }
                }
            }
            div {
                class: "x-facet-backdrop",
                onclick: move |_| {
                    expanded_facet.set(None);
                },
            }
        }

        button {
            class: "x-facet-button",
            style: "border: 2px solid {border_color()};",
            onclick: move |_| {
                let next = if is_expanded() { None } else { Some(facet) };
                expanded_facet.set(next);
            },
            Icon { icon: facet_icon, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
            "{facet.display_name()}"
            if selected_count() > 0 {
                span { class: "x-facet-badge", "{selected_count}" }
            }
            Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
        }
    }
}


#[component]
fn FacetSelectorList(facet: FacetName) -> Element {
    let finder = use_context::<FinderContext>().finder;
    let counts = use_memo(move || finder.read().facet_counts(facet));

    rsx! {
        ul {
            for entry in counts() {
                li {
                    key: "{entry.value}",
                    FacetCheckbox {
                        facet,
                        value: entry.value.clone(),
                        count_txt: entry.count.map(|c| c.to_string()).unwrap_or_default(),
                        selected: entry.selected,
                    }
                }
            }
        }
    }
}


#[component]
fn FacetCheckbox(facet: FacetName, value: String, count_txt: String, selected: bool) -> Element {
    let mut finder = use_context::<FinderContext>().finder;
    let toggled_value = value.clone();

    rsx! {
        div {
            class: "x-facet-list-item",
            onclick: move |_e| {
                finder.write().toggle_facet_value(facet, &toggled_value);
            },

            if selected {
                Icon { icon: MdCheckBox, style: "width: 26px; height: 26px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 26px; height: 26px; color: black; flex-shrink: 0;" }
            }
            div { class: "x-facet-value", "{value}" }
            div { style: "flex: 1 1 auto;", }
            div { class: "x-facet-count", "{count_txt}" }
        }
    }
}
