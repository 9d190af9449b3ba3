//! Server-side adapters feeding the college catalog to the frontend.

pub mod api;
pub mod source_utils;
