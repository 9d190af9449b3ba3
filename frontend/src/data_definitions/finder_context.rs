//! Page-scoped handle to the college finder state.

use common::college_finder::CollegeFinder;
use dioxus::prelude::*;

/// Provided by the find-colleges page; dropped with it, which also drops the
/// comparison set.
#[derive(Clone, Copy)]
pub struct FinderContext {
    pub finder: Signal<CollegeFinder>,
    pub show_comparison: Signal<bool>,
}
