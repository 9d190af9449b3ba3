//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog_const;
pub mod college;
pub mod facets;
pub mod catalog;
pub mod filter_state;
pub mod query_engine;
pub mod comparison_set;
pub mod comparison_matrix;
pub mod college_finder;

#[cfg(test)]
pub(crate) mod test_catalog;
