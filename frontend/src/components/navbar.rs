//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdCompareArrows;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id:"x-nav-topbar",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 32px;
                    height: 64px;
                    flex-shrink: 0;
                    background-color: #1C212D;
                    padding: 0px 24px;
                ",

                NavbarBrand{},
                IconLink { to: Route::FindCollegesPage { }, icon: MdSearch, label: "Find Colleges" }
                IconLink { to: Route::compare_page_from_ids(Vec::new()), icon: MdCompareArrows, label: "Compare" }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarBrand() -> Element {
    rsx! {
        Link {
            to: Route::FindCollegesPage { },
            span {
                style: "display:flex; align-items:center; gap: 8px; color:white; font-size: 22px; font-weight: 500;",
                Icon { icon: MdSchool, style: "width: 30px; height: 30px;" }
                "College Finder"
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "display:flex; align-items:center; gap: 6px; color:white; font-size: 16px;",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
                "{label}"
            }
        }
    }
}
