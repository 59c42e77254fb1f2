//! Per-entry detail fetch.
//!
//! The primary record and the species record are requested concurrently.
//! Only the primary one is required: if it fails the entry is reported as
//! not found, while a failed species request just leaves the description
//! empty.

use pokedex_types::{CatalogEntry, DetailRecord, EntryId};
use tracing::{debug, warn};

use crate::batch::{BatchSchedule, run_batched};
use crate::client::PokeApiClient;
use crate::error::FetchError;

/// Fetch the detail record for `id`.
///
/// `language` selects the flavor text used as the description.
///
/// # Errors
///
/// Returns [`FetchError::NotFound`] when the primary record cannot be
/// fetched for any reason.
pub async fn fetch_detail(
    client: &PokeApiClient,
    id: EntryId,
    language: &str,
) -> Result<DetailRecord, FetchError> {
    let url = client.entry_url(id);
    let (primary, species) = tokio::join!(client.fetch_pokemon(&url), client.fetch_species(id));

    let record = primary.map_err(|e| {
        debug!(%id, error = %e, "primary record unavailable");
        FetchError::NotFound(id)
    })?;

    let description = species
        .inspect_err(|e| warn!(%id, error = %e, "species record unavailable, no description"))
        .ok()
        .and_then(|species| species.description(language));

    Ok(DetailRecord {
        entry: CatalogEntry::from_api(url, record, None),
        description,
    })
}

/// Fetch detail records for every id, batch by batch.
///
/// Each id is paired with its own outcome, in input order.
pub async fn fetch_details(
    client: &PokeApiClient,
    ids: &[EntryId],
    schedule: BatchSchedule,
    language: &str,
) -> Vec<(EntryId, Result<DetailRecord, FetchError>)> {
    run_batched(ids, schedule, move |id| async move {
        (*id, fetch_detail(client, *id, language).await)
    })
    .await
}
