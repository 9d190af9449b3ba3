//! Catalog API handlers and module exports.

mod load_catalog;
pub use load_catalog::{load_catalog_snapshot, load_catalog_snapshot_from};
