//! Renders a comparison matrix as a table, and the modal hosting it.

use common::catalog_const::ADD_ANOTHER_LABEL;
use common::comparison_matrix::{ComparisonCell, ComparisonColumn, ComparisonMatrix};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdAdd, md_navigation_icons::MdClose}};

use crate::data_definitions::finder_context::FinderContext;

/// The header row comes from `matrix.columns`; the placeholder column, when
/// present, gets an "add another" call to action.
#[component]
pub fn ComparisonTable(matrix: ReadSignal<ComparisonMatrix>, on_add_another: Callback<()>) -> Element {
    let columns = use_memo(move || matrix.read().columns.clone());
    let rows = use_memo(move || matrix.read().rows.clone());

    rsx! {
        table {
            class: "x-comparison-table",
            thead {
                tr {
                    th { class: "x-comparison-label", "Parameter" }
                    {columns().into_iter().enumerate().map(move |(i, column)| match column {
                        ComparisonColumn::College { id, name } => rsx! {
                            th { key: "{id}", "{name}" }
                        },
                        ComparisonColumn::AddAnother => rsx! {
                            th {
                                key: "add-another-{i}",
                                class: "x-comparison-placeholder",
                                button {
                                    class: "x-compare-bar-secondary",
                                    onclick: move |_| on_add_another.call(()),
                                    Icon { icon: MdAdd, style: "width: 18px; height: 18px;" }
                                    "{ADD_ANOTHER_LABEL}"
                                }
                            }
                        },
                    })}
                }
            }
            tbody {
                for row in rows() {
                    tr {
                        key: "{row.label}",
                        td { class: "x-comparison-label", "{row.label}" }
                        {row.cells.clone().into_iter().enumerate().map(|(i, cell)| match cell {
                            ComparisonCell::Value(text) => rsx! { td { key: "{i}", "{text}" } },
                            ComparisonCell::Placeholder => rsx! { td { key: "{i}", class: "x-comparison-placeholder" } },
                        })}
                    }
                }
            }
        }
    }
}


#[component]
pub fn CompareModal() -> Element {
    let context = use_context::<FinderContext>();
    let finder = context.finder;
    let mut show_comparison = context.show_comparison;
    let matrix = use_memo(move || finder.read().comparison_matrix());

    if !show_comparison() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "x-modal-backdrop",
            onclick: move |_| show_comparison.set(false),
        }
        div {
            id: "x-compare-modal",
            class: "x-modal",
            div {
                class: "x-modal-title-row",
                h2 { "Compare colleges" }
                div { style: "flex: 1 1 auto;" }
                button {
                    class: "x-compare-chip-remove",
                    onclick: move |_| show_comparison.set(false),
                    Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                }
            }
            ComparisonTable {
                matrix: matrix(),
                on_add_another: move |_| show_comparison.set(false),
            }
        }
    }
}
