//! Error boundaries for rendering failures and failed catalog loads.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    div {
                        class: "x-error-panel",
                        h1 { "Something went wrong" }
                        p { "Boundary: {boundary_name}" }
                        Link { to: Route::FindCollegesPage {}, class: "x-error-link", "Back to Find Colleges" }
                        pre { "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

/// Catches errors below it and offers a retry that clears them.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-error-link",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-panel x-error-panel-inline",
            h2 { "Could not load colleges" }
            pre { "{error_txt}" }
            {children}
        }
    }
}
