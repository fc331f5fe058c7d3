//! Per-country keyword translation with a run-scoped cache.

use std::collections::HashMap;

use affinity_core::{country_of_location, language_for_country, DEFAULT_LANGUAGE};
use affinity_places::TranslateClient;

/// Translates the base brand keywords into each country's language.
///
/// Results are cached by country name for the lifetime of the translator, so
/// a country listed for several cities costs one translate call. Failed
/// translations are not cached.
pub(crate) struct KeywordTranslator {
    client: TranslateClient,
    cache: HashMap<String, Vec<String>>,
}

impl KeywordTranslator {
    pub(crate) fn new(client: TranslateClient) -> Self {
        Self {
            client,
            cache: HashMap::new(),
        }
    }

    /// Base keywords followed by their translations for the location's country.
    ///
    /// Translations identical to a base keyword are dropped so no term is
    /// searched twice.
    pub(crate) async fn search_terms(&mut self, base: &[String], location: &str) -> Vec<String> {
        let country = country_of_location(location).unwrap_or_default();
        let translated = self.translated_keywords(country, base).await;

        let mut terms = base.to_vec();
        for term in translated {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
        terms
    }

    /// Translations of `base` for `country`; empty when the country's
    /// language is the default or the translate call fails.
    pub(crate) async fn translated_keywords(&mut self, country: &str, base: &[String]) -> Vec<String> {
        if let Some(cached) = self.cache.get(country) {
            return cached.clone();
        }

        let language = language_for_country(country);
        if language == DEFAULT_LANGUAGE {
            tracing::debug!(country, "default language; keyword translation skipped");
            self.cache.insert(country.to_string(), Vec::new());
            return Vec::new();
        }

        match self.client.translate_batch(base, language).await {
            Ok(translated) => {
                tracing::info!(country, language, terms = ?translated, "translated keywords");
                self.cache.insert(country.to_string(), translated.clone());
                translated
            }
            Err(e) => {
                tracing::warn!(
                    country,
                    language,
                    error = %e,
                    "keyword translation failed; searching base keywords only"
                );
                Vec::new()
            }
        }
    }
}
