//! Bulk catalog fetch.
//!
//! One listing request, then one primary-record request per reference,
//! scheduled in batches. A failed listing aborts the build. A failed item
//! is logged and dropped; everything else keeps listing order.

use pokedex_types::{CatalogEntry, EntryReference};
use tracing::{info, warn};

use crate::batch::{BatchSchedule, run_batched};
use crate::client::PokeApiClient;
use crate::error::FetchError;

/// Fetch the listing and every entry it names.
///
/// # Errors
///
/// Returns the listing failure. Per-item failures are never errors.
pub async fn fetch_catalog(
    client: &PokeApiClient,
    limit: u32,
    schedule: BatchSchedule,
    move_limit: usize,
) -> Result<Vec<CatalogEntry>, FetchError> {
    let references = client.fetch_listing(limit).await?;
    info!(count = references.len(), "found entries, fetching details");
    Ok(fetch_entries(client, &references, schedule, move_limit).await)
}

/// Fetch the primary record of every reference, dropping failures.
pub async fn fetch_entries(
    client: &PokeApiClient,
    references: &[EntryReference],
    schedule: BatchSchedule,
    move_limit: usize,
) -> Vec<CatalogEntry> {
    let results = run_batched(references, schedule, |reference| {
        fetch_entry(client, reference, move_limit)
    })
    .await;

    let entries: Vec<CatalogEntry> = results.into_iter().flatten().collect();
    info!(
        fetched = entries.len(),
        dropped = references.len().saturating_sub(entries.len()),
        "catalog fetch complete"
    );
    entries
}

async fn fetch_entry(
    client: &PokeApiClient,
    reference: &EntryReference,
    move_limit: usize,
) -> Option<CatalogEntry> {
    client
        .fetch_pokemon(&reference.url)
        .await
        .map(|record| CatalogEntry::from_api(reference.url.clone(), record, Some(move_limit)))
        .inspect_err(|e| warn!(name = %reference.name, error = %e, "dropping entry"))
        .ok()
}
