//! Google Places and Translate response types.
//!
//! Places responses carry a `status` string next to the payload; Translate
//! wraps its payload in `{"data": ...}`.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Text Search
// ---------------------------------------------------------------------------

/// One page of a `textsearch/json` response.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<RawPlace>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A text-search hit. Only the identifier is used downstream; everything else
/// the API sends is kept in `other`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Place Details
// ---------------------------------------------------------------------------

/// Envelope of a `details/json` response. `result` is kept raw so an empty
/// object can be told apart from a populated one.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

/// Structured attributes of one place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub text: Option<String>,
}

impl PlaceDetail {
    /// City and country from the address components.
    ///
    /// Every `locality` component overwrites the city and every `country`
    /// component overwrites the country, so the last match wins. Missing
    /// parts come back empty.
    #[must_use]
    pub fn city_and_country(&self) -> (String, String) {
        let mut city = String::new();
        let mut country = String::new();
        for component in &self.address_components {
            if component.types.iter().any(|t| t == "locality") {
                city.clone_from(&component.long_name);
            }
            if component.types.iter().any(|t| t == "country") {
                country.clone_from(&component.long_name);
            }
        }
        (city, country)
    }

    /// `(lat, lng)` when the geometry carries a location.
    #[must_use]
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        self.geometry
            .as_ref()
            .and_then(|g| g.location)
            .map(|loc| (loc.lat, loc.lng))
    }

    /// Text of the first review, if any review has text.
    #[must_use]
    pub fn first_review_text(&self) -> Option<&str> {
        self.reviews
            .first()
            .and_then(|r| r.text.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Translate v2
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

#[derive(Debug, Deserialize)]
pub struct TranslateData {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
}

/// `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`
#[derive(Debug, Deserialize)]
pub struct GoogleErrorEnvelope {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GoogleErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
