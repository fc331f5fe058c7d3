//! HTTP client for the Google Cloud Translation v2 REST API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::PlacesError;
use crate::types::{GoogleErrorEnvelope, TranslateResponse};

const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a [String],
    target: &'a str,
    format: &'static str,
}

/// Batch translator backed by `translate/v2`.
pub struct TranslateClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl TranslateClient {
    /// Creates a client pointed at the production Translate endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_endpoint(api_key, timeout_secs, user_agent, DEFAULT_ENDPOINT)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`PlacesError::InvalidBaseUrl`] if `endpoint` does not parse.
    pub fn with_endpoint(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        endpoint: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(PlacesError::http)?;
        let endpoint = Url::parse(endpoint).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Translates `texts` into `target` in one request.
    ///
    /// The output has one entry per input, in input order. An empty input
    /// returns an empty output without a request.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] when the API returns an error envelope, or a
    ///   different number of translations than inputs.
    /// - [`PlacesError::Http`] on network failure or a non-2xx status without
    ///   a readable error body.
    /// - [`PlacesError::Deserialize`] if a 2xx body has the wrong shape.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target: &str,
    ) -> Result<Vec<String>, PlacesError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let request = TranslateRequest {
            q: texts,
            target,
            format: "text",
        };
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(PlacesError::http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<GoogleErrorEnvelope>(&body) {
                Ok(envelope) => PlacesError::Api {
                    status: envelope
                        .error
                        .status
                        .or_else(|| envelope.error.code.map(|c| c.to_string()))
                        .unwrap_or_else(|| status.as_u16().to_string()),
                    message: envelope.error.message.unwrap_or_default(),
                },
                Err(_) => PlacesError::Api {
                    status: status.as_u16().to_string(),
                    message: "translate request failed".to_string(),
                },
            });
        }

        let body = response.text().await.map_err(PlacesError::http)?;
        let parsed: TranslateResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("translate(target={target})"),
                source: e,
            })?;

        let translations: Vec<String> = parsed
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();
        if translations.len() != texts.len() {
            return Err(PlacesError::Api {
                status: "MISMATCH".to_string(),
                message: format!(
                    "expected {} translations, got {}",
                    texts.len(),
                    translations.len()
                ),
            });
        }
        Ok(translations)
    }
}
