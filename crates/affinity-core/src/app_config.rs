use std::path::PathBuf;

/// Which flavour of the directory pipeline to run.
///
/// `Multilingual` adds keyword translation per country, per-term failure
/// isolation during search, review text in place details, and the
/// `description` output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineMode {
    #[default]
    Basic,
    Multilingual,
}

impl PipelineMode {
    #[must_use]
    pub fn is_multilingual(self) -> bool {
        matches!(self, PipelineMode::Multilingual)
    }
}

impl std::fmt::Display for PipelineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineMode::Basic => write!(f, "basic"),
            PipelineMode::Multilingual => write!(f, "multilingual"),
        }
    }
}

impl std::str::FromStr for PipelineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(PipelineMode::Basic),
            "multilingual" => Ok(PipelineMode::Multilingual),
            other => Err(format!(
                "unknown pipeline mode '{other}' (expected 'basic' or 'multilingual')"
            )),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Key for the Places and Translate APIs. Optional at load time so that
    /// offline subcommands work; the `run` pipeline refuses to start without it.
    pub google_api_key: Option<String>,
    pub log_level: String,
    pub mode: PipelineMode,
    pub brand_keywords: Vec<String>,
    pub city_list_path: PathBuf,
    pub locklist_path: PathBuf,
    pub output_path: PathBuf,
    pub timestamp_path: PathBuf,
    pub places_base_url: String,
    pub translate_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("mode", &self.mode)
            .field("brand_keywords", &self.brand_keywords)
            .field("city_list_path", &self.city_list_path)
            .field("locklist_path", &self.locklist_path)
            .field("output_path", &self.output_path)
            .field("timestamp_path", &self.timestamp_path)
            .field("places_base_url", &self.places_base_url)
            .field("translate_base_url", &self.translate_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
