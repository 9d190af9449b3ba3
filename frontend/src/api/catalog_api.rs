//! Client API calls for catalog endpoints.

use common::catalog::CatalogSnapshot;
use dioxus::prelude::*;


#[server]
pub async fn load_catalog_snapshot() -> Result<CatalogSnapshot, ServerFnError> {
    let x = backend::api::catalog::load_catalog_snapshot().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
