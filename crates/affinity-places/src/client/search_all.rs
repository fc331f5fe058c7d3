//! Multi-page text-search loop for `PlacesClient`.

use std::time::Duration;

use crate::error::PlacesError;
use crate::types::RawPlace;

use super::{PlacesClient, SearchPage};

/// How long a `next_page_token` needs before the API accepts it.
///
/// The token is issued before it becomes valid; using it sooner returns
/// `INVALID_REQUEST`.
pub const PAGE_TOKEN_DELAY: Duration = Duration::from_secs(2);

/// Upper bound on pages per query. Places stops at three pages; this only
/// guards against a token that never runs out.
pub(super) const MAX_PAGES: usize = 20;

/// Everything one paginated text search produced.
///
/// `places` holds every page fetched before the loop ended. `error` is set
/// when a request failed part-way; callers decide whether the partial
/// `places` are still worth keeping.
#[derive(Debug, Default)]
pub struct TextSearch {
    pub places: Vec<RawPlace>,
    pub pages: usize,
    pub error: Option<PlacesError>,
}

impl PlacesClient {
    /// Runs a text search and follows `next_page_token` until it runs out.
    ///
    /// Waits [`PAGE_TOKEN_DELAY`] before each follow-up request. A failed
    /// request stops the loop and is reported in [`TextSearch::error`]; it is
    /// never returned as `Err`.
    pub async fn text_search_all(&self, query: &str) -> TextSearch {
        let mut search = TextSearch::default();
        let mut token: Option<String> = None;

        loop {
            if search.pages >= MAX_PAGES {
                tracing::warn!(
                    query,
                    max_pages = MAX_PAGES,
                    "text search page limit reached; stopping pagination"
                );
                break;
            }

            let page = match token.as_deref() {
                None => SearchPage::Query(query),
                Some(t) => {
                    tokio::time::sleep(self.page_token_delay).await;
                    SearchPage::Token(t)
                }
            };

            let response = match self.text_search_page(page).await {
                Ok(response) => response,
                Err(e) => {
                    search.error = Some(e);
                    break;
                }
            };

            search.pages += 1;
            search.places.extend(response.results);

            token = response.next_page_token.filter(|t| !t.is_empty());
            if token.is_none() {
                break;
            }
        }

        search
    }
}
