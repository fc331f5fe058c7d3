//! The directory pipeline: locations → search → details → rows → CSV.
//!
//! Everything runs sequentially, one location, term and detail request at a
//! time. Remote failures are logged where they happen and never abort the
//! run; only local file errors and client construction reach the caller.

mod assemble;
mod keywords;
mod locations;
mod locklist;
mod output;
mod search;

use affinity_core::{AppConfig, Column};
use affinity_places::{PlacesClient, TranslateClient};
use anyhow::Context;

use assemble::{assign_ids, build_record, dedup_by_place_id};
use keywords::KeywordTranslator;
use locklist::Locklist;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    /// No API key; nothing was touched.
    MissingCredential,
    /// Locations file missing or empty; no timestamp written.
    NoLocations,
    /// Searches found nothing usable; timestamp written, no CSV.
    NoData,
    /// CSV written with this many rows, timestamp written.
    Written { rows: usize },
}

/// Runs the full pipeline with the paths, mode and endpoints in `config`.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built or an output file
/// cannot be written. Per-request API failures are logged, not returned.
pub(crate) async fn run_directory(config: &AppConfig) -> anyhow::Result<RunOutcome> {
    let Some(api_key) = config.google_api_key.as_deref() else {
        tracing::error!("GOOGLE_API_KEY is not set; cannot run");
        return Ok(RunOutcome::MissingCredential);
    };

    let locations = match locations::load_locations(&config.city_list_path) {
        Ok(locations) => locations,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::error!(
                path = %config.city_list_path.display(),
                "location list not found; please create it"
            );
            Vec::new()
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to read {}", config.city_list_path.display())
            })
        }
    };
    if locations.is_empty() {
        tracing::warn!("no locations to process; exiting");
        return Ok(RunOutcome::NoLocations);
    }

    let multilingual = config.mode.is_multilingual();
    tracing::info!(
        mode = %config.mode,
        locations = locations.len(),
        keywords = ?config.brand_keywords,
        "starting directory run"
    );

    let places = PlacesClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )
    .context("failed to build Places client")?;

    let mut translator = if multilingual {
        let client = TranslateClient::with_endpoint(
            api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.translate_base_url,
        )
        .context("failed to build Translate client")?;
        Some(KeywordTranslator::new(client))
    } else {
        None
    };

    let mut records = Vec::new();
    for location in &locations {
        let terms = match translator.as_mut() {
            Some(t) => t.search_terms(&config.brand_keywords, location).await,
            None => config.brand_keywords.clone(),
        };

        let hits = search::search_location(&places, location, &terms, config.mode).await;
        for hit in hits {
            let Some(place_id) = hit.place_id.as_deref() else {
                tracing::debug!(location = %location, name = ?hit.name, "search hit without place_id");
                continue;
            };
            match places.place_details(place_id, multilingual).await {
                Ok(Some(detail)) => records.push(build_record(place_id, &detail, multilingual)),
                Ok(None) => {
                    tracing::debug!(place_id, "no details returned; skipping");
                }
                Err(e) => {
                    tracing::warn!(place_id, error = %e, "details request failed; skipping");
                }
            }
        }
    }

    if records.is_empty() {
        tracing::info!("no business data found; exiting");
        output::write_run_marker(&config.timestamp_path)?;
        return Ok(RunOutcome::NoData);
    }

    let fetched = records.len();
    let mut records = dedup_by_place_id(records);
    assign_ids(&mut records);
    tracing::info!(fetched, unique = records.len(), "deduplicated by place_id");

    match Locklist::load(&config.locklist_path) {
        Ok(Some(locklist)) => {
            let applied = locklist.apply(&mut records);
            tracing::info!(applied, "applied manual overrides from locklist");
        }
        Ok(None) => {
            tracing::info!(
                path = %config.locklist_path.display(),
                "locklist not found; skipping manual overrides"
            );
        }
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "locklist unusable; skipping manual overrides");
        }
    }

    output::write_directory_csv(
        &config.output_path,
        &records,
        &Column::output_order(multilingual),
    )?;
    tracing::info!(
        rows = records.len(),
        path = %config.output_path.display(),
        "process complete; saved unique businesses"
    );
    output::write_run_marker(&config.timestamp_path)?;

    Ok(RunOutcome::Written {
        rows: records.len(),
    })
}

#[cfg(test)]
#[path = "run/pipeline_test.rs"]
mod pipeline_test;
