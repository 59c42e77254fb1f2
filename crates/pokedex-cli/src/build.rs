//! `pokedex build`: fetch everything, then write the site.

use std::path::Path;

use pokedex_core::PokedexConfig;
use pokedex_fetch::bulk::fetch_entries;
use pokedex_fetch::detail::fetch_details;
use pokedex_fetch::{BatchSchedule, PokeApiClient};
use pokedex_site::{BuildReport, SiteOptions, SiteRenderer, generate_site};
use pokedex_types::{DetailRecord, EntryId};
use tracing::{info, warn};

use crate::error::CliError;

/// Run a full build.
///
/// # Errors
///
/// Fails when the listing request fails, templates do not load, or the
/// output cannot be written. Individual entries never fail the build.
pub async fn run(config: &PokedexConfig) -> Result<BuildReport, CliError> {
    // Templates first so a broken template set fails before any network work.
    let renderer = SiteRenderer::new(Path::new(&config.site.templates_dir))?;

    let client = PokeApiClient::new(&config.api)?;
    let schedule = BatchSchedule::from_config(&config.fetch);

    info!(
        base_url = client.base_url(),
        limit = config.api.catalog_limit,
        batch_size = schedule.size,
        "fetching catalog listing"
    );
    let references = client.fetch_listing(config.api.catalog_limit).await?;
    info!(count = references.len(), "found entries, fetching details");

    let catalog = fetch_entries(&client, &references, schedule, config.fetch.move_limit).await;

    let ids: Vec<EntryId> = references
        .iter()
        .filter_map(|reference| {
            let id = reference.id();
            if id.is_none() {
                warn!(url = %reference.url, "reference has no numeric id, no route generated");
            }
            id
        })
        .collect();

    info!(routes = ids.len(), "fetching detail pages");
    let details: Vec<(EntryId, Option<DetailRecord>)> =
        fetch_details(&client, &ids, schedule, &config.fetch.description_language)
            .await
            .into_iter()
            .map(|(id, outcome)| {
                let detail = outcome
                    .inspect_err(|e| warn!(%id, error = %e, "detail unavailable, writing not-found page"))
                    .ok();
                (id, detail)
            })
            .collect();

    let report = generate_site(
        &renderer,
        &SiteOptions::from_config(&config.site),
        &catalog,
        &details,
    )?;
    Ok(report)
}
