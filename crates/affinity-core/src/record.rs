//! The directory row and its output columns.

use thiserror::Error;

use crate::category::Category;

/// One business in the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessRecord {
    /// Upstream place identifier; the dedup and locklist join key. Not an
    /// output column.
    pub place_id: String,
    /// 1-based row number, assigned after dedup. Zero until assigned.
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub city: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub website: String,
    /// Never extracted from place data; only the locklist fills it.
    pub email: String,
    pub phone: String,
    /// Never extracted from place data; only the locklist fills it.
    pub social: String,
    /// First review text. Only populated in multilingual runs.
    pub description: Option<String>,
    pub verified: bool,
}

impl BusinessRecord {
    /// Creates a record with the fetch-time defaults: no id yet, empty
    /// email/social, unverified.
    #[must_use]
    pub fn new(place_id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            place_id: place_id.into(),
            id: 0,
            name: name.into(),
            category,
            city: String::new(),
            country: String::new(),
            latitude: None,
            longitude: None,
            website: String::new(),
            email: String::new(),
            phone: String::new(),
            social: String::new(),
            description: None,
            verified: false,
        }
    }

    /// Renders the value for one output column.
    #[must_use]
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Id => self.id.to_string(),
            Column::Name => self.name.clone(),
            Column::Category => self.category.label().to_string(),
            Column::City => self.city.clone(),
            Column::Country => self.country.clone(),
            Column::Latitude => self.latitude.map(|v| v.to_string()).unwrap_or_default(),
            Column::Longitude => self.longitude.map(|v| v.to_string()).unwrap_or_default(),
            Column::Website => self.website.clone(),
            Column::Email => self.email.clone(),
            Column::Phone => self.phone.clone(),
            Column::Social => self.social.clone(),
            Column::Description => self.description.clone().unwrap_or_default(),
            Column::Verified => if self.verified { "True" } else { "False" }.to_string(),
        }
    }

    /// Overwrites one field with a locklist value.
    ///
    /// Blank values are ignored and leave the field untouched. Typed columns
    /// (`id`, `latitude`, `longitude`, `verified`, `category`) must parse.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError`] when a typed column's value does not parse;
    /// the record is unchanged in that case.
    pub fn apply_override(&mut self, column: Column, raw: &str) -> Result<(), OverrideError> {
        let value = raw.trim();
        if value.is_empty() {
            return Ok(());
        }
        let invalid = |reason: String| OverrideError {
            column,
            value: value.to_string(),
            reason,
        };

        match column {
            Column::Id => self.id = value.parse::<u64>().map_err(|e| invalid(format!("{e}")))?,
            Column::Name => self.name = value.to_string(),
            Column::Category => self.category = value.parse::<Category>().map_err(invalid)?,
            Column::City => self.city = value.to_string(),
            Column::Country => self.country = value.to_string(),
            Column::Latitude => {
                self.latitude = Some(value.parse::<f64>().map_err(|e| invalid(format!("{e}")))?);
            }
            Column::Longitude => {
                self.longitude = Some(value.parse::<f64>().map_err(|e| invalid(format!("{e}")))?);
            }
            Column::Website => self.website = value.to_string(),
            Column::Email => self.email = value.to_string(),
            Column::Phone => self.phone = value.to_string(),
            Column::Social => self.social = value.to_string(),
            Column::Description => self.description = Some(value.to_string()),
            Column::Verified => self.verified = parse_bool(value).ok_or_else(|| {
                invalid("expected true/false, yes/no or 1/0".to_string())
            })?,
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// A locklist cell that could not be applied.
#[derive(Debug, Error, PartialEq)]
#[error("invalid locklist value {value:?} for column '{}': {reason}", .column.header())]
pub struct OverrideError {
    pub column: Column,
    pub value: String,
    pub reason: String,
}

/// Output columns, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Category,
    City,
    Country,
    Latitude,
    Longitude,
    Website,
    Email,
    Phone,
    Social,
    Description,
    Verified,
}

impl Column {
    const ALL: [Column; 13] = [
        Column::Id,
        Column::Name,
        Column::Category,
        Column::City,
        Column::Country,
        Column::Latitude,
        Column::Longitude,
        Column::Website,
        Column::Email,
        Column::Phone,
        Column::Social,
        Column::Description,
        Column::Verified,
    ];

    /// The fixed output column order. `description` is only present in
    /// multilingual runs.
    #[must_use]
    pub fn output_order(with_description: bool) -> Vec<Column> {
        Self::ALL
            .into_iter()
            .filter(|c| with_description || *c != Column::Description)
            .collect()
    }

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Category => "category",
            Column::City => "city",
            Column::Country => "country",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::Website => "website",
            Column::Email => "email",
            Column::Phone => "phone",
            Column::Social => "social",
            Column::Description => "description",
            Column::Verified => "verified",
        }
    }

    /// Looks up a column by its header name (case-insensitive).
    #[must_use]
    pub fn from_header(header: &str) -> Option<Column> {
        let wanted = header.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.header().eq_ignore_ascii_case(wanted))
    }
}
