//! Text search across keyword terms for one location.

use affinity_core::PipelineMode;
use affinity_places::{PlacesClient, PlacesError, RawPlace};

/// Query text for one keyword term in one location.
pub(crate) fn search_query(term: &str, location: &str) -> String {
    format!("business named {term} in {location}")
}

/// Runs every term's paginated search for `location` and concatenates the hits.
///
/// No dedup happens here; the same place may appear under several terms.
/// Failures are logged and contained:
/// - An API status on an HTTP 200 reply (`INVALID_REQUEST`,
///   `OVER_QUERY_LIMIT`, ...) ends that term's pagination in either mode;
///   pages it already returned are kept.
/// - `Basic`: the first request failure (transport, HTTP status, decode)
///   abandons the location, including results already gathered for it.
/// - `Multilingual`: a request failure ends only that term's pagination;
///   pages it already returned are kept and the remaining terms still run.
pub(crate) async fn search_location(
    client: &PlacesClient,
    location: &str,
    terms: &[String],
    mode: PipelineMode,
) -> Vec<RawPlace> {
    let mut places = Vec::new();

    for term in terms {
        tracing::info!(location, term = %term, "searching");
        let search = client.text_search_all(&search_query(term, location)).await;

        match (search.error, mode) {
            (None, _) => places.extend(search.places),
            (Some(e @ PlacesError::Api { .. }), _) => {
                tracing::warn!(
                    location,
                    term = %term,
                    kept = search.places.len(),
                    error = %e,
                    "search stopped by API status; keeping pages already fetched"
                );
                places.extend(search.places);
            }
            (Some(e), PipelineMode::Basic) => {
                tracing::warn!(
                    location,
                    term = %term,
                    error = %e,
                    "search failed; skipping location"
                );
                return Vec::new();
            }
            (Some(e), PipelineMode::Multilingual) => {
                tracing::warn!(
                    location,
                    term = %term,
                    kept = search.places.len(),
                    error = %e,
                    "search failed; skipping rest of this term"
                );
                places.extend(search.places);
            }
        }
    }

    tracing::info!(location, found = places.len(), "search complete");
    places
}
