use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shows a loading indicator while a child resource is suspended.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    class: "x-centered-fill",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            "Loading colleges..."
        }
    }
}
