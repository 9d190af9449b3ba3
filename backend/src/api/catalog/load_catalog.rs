//! Loads and validates the catalog snapshot handed to the find-colleges page.

use common::catalog::{Catalog, CatalogSnapshot};

use crate::source_utils::catalog_source::CatalogSource;

pub async fn load_catalog_snapshot() -> anyhow::Result<CatalogSnapshot> {
    load_catalog_snapshot_from(&CatalogSource::from_env()).await
}

/// Snapshots that fail validation are rejected here so the client never
/// builds a catalog from them.
pub async fn load_catalog_snapshot_from(source: &CatalogSource) -> anyhow::Result<CatalogSnapshot> {
    let t0 = std::time::Instant::now();
    let json = source.fetch_json().await?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&json)
        .map_err(|e| anyhow::anyhow!("Malformed catalog snapshot from {:?}: {}", source, e))?;
    Catalog::from_snapshot(snapshot.clone())?;
    tracing::info!(
        "Catalog snapshot loaded from {:?}: {} colleges in {}ms",
        source,
        snapshot.colleges.len(),
        t0.elapsed().as_millis(),
    );
    Ok(snapshot)
}
