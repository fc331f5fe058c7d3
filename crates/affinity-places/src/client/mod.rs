//! HTTP client for the Google Places `textsearch` and `details` endpoints.
//!
//! Wraps `reqwest` with API key management, `status` checking, and typed
//! response deserialization. Errors never carry the request URL because the
//! key is part of it.

mod search_all;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsResponse, PlaceDetail, TextSearchResponse};

pub use search_all::{TextSearch, PAGE_TOKEN_DELAY};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Fields requested from the details endpoint in every mode.
const DETAIL_FIELDS: &str = "name,place_id,formatted_address,geometry,website,international_phone_number,types,address_components";

/// Client for the Google Places web service.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    page_token_delay: Duration,
}

/// What one text-search request asks for: a fresh query, or the next page of
/// an earlier one.
#[derive(Debug, Clone, Copy)]
pub enum SearchPage<'a> {
    Query(&'a str),
    Token(&'a str),
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(PlacesError::http)?;

        // Exactly one trailing slash, so `join` appends endpoint paths instead
        // of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            page_token_delay: PAGE_TOKEN_DELAY,
        })
    }

    #[cfg(test)]
    fn with_page_token_delay(mut self, delay: Duration) -> Self {
        self.page_token_delay = delay;
        self
    }

    /// Fetches one page of text-search results.
    ///
    /// A [`SearchPage::Token`] request sends only the page token and the key,
    /// as the API requires.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if `status` is anything but `OK`/`ZERO_RESULTS`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn text_search_page(
        &self,
        page: SearchPage<'_>,
    ) -> Result<TextSearchResponse, PlacesError> {
        let url = match page {
            SearchPage::Query(query) => self.build_url("textsearch/json", &[("query", query)])?,
            SearchPage::Token(token) => {
                self.build_url("textsearch/json", &[("pagetoken", token)])?
            }
        };
        let body = self.request_json(url).await?;
        let response: TextSearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: "textsearch".to_string(),
                source: e,
            })?;

        match response.status.as_deref() {
            None | Some("OK" | "ZERO_RESULTS") => Ok(response),
            Some(status) => Err(PlacesError::Api {
                status: status.to_string(),
                message: response.error_message.unwrap_or_default(),
            }),
        }
    }

    /// Fetches structured details for one place.
    ///
    /// `with_reviews` adds the `reviews` field to the fixed field set.
    /// Returns `Ok(None)` when the API has nothing for the id: a missing or
    /// empty `result`, or a `NOT_FOUND`/`ZERO_RESULTS` status.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] on any other non-`OK` status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the result does not match [`PlaceDetail`].
    pub async fn place_details(
        &self,
        place_id: &str,
        with_reviews: bool,
    ) -> Result<Option<PlaceDetail>, PlacesError> {
        let fields = if with_reviews {
            format!("{DETAIL_FIELDS},reviews")
        } else {
            DETAIL_FIELDS.to_string()
        };
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", &fields)],
        )?;
        let body = self.request_json(url).await?;
        let envelope: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        match envelope.status.as_deref() {
            None | Some("OK") => {}
            Some("NOT_FOUND" | "ZERO_RESULTS") => return Ok(None),
            Some(status) => {
                return Err(PlacesError::Api {
                    status: status.to_string(),
                    message: envelope.error_message.unwrap_or_default(),
                })
            }
        }

        let result = match envelope.result {
            Some(value) if !is_empty_json(&value) => value,
            _ => return Ok(None),
        };
        let detail: PlaceDetail =
            serde_json::from_value(result).map_err(|e| PlacesError::Deserialize {
                context: format!("details result (place_id={place_id})"),
                source: e,
            })?;
        Ok(Some(detail))
    }

    /// Builds an endpoint URL with the key and percent-encoded parameters.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(&self, url: Url) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PlacesError::http)?;
        let response = response.error_for_status().map_err(PlacesError::http)?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(PlacesError::http)
    }
}

fn is_empty_json(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
