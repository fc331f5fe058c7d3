//! Turning place details into directory rows.

use std::collections::HashSet;

use affinity_core::{categorize, BusinessRecord};
use affinity_places::PlaceDetail;

/// Builds the directory row for one place.
///
/// `searched_id` stands in when the detail omits its own `place_id`.
/// `with_description` copies the first review text into `description`.
pub(crate) fn build_record(
    searched_id: &str,
    detail: &PlaceDetail,
    with_description: bool,
) -> BusinessRecord {
    let name = detail.name.clone().unwrap_or_default();
    let place_id = detail.place_id.as_deref().unwrap_or(searched_id);

    let category = categorize(detail.types.as_slice(), &name);

    let mut record = BusinessRecord::new(place_id, name.as_str(), category);
    let (city, country) = detail.city_and_country();
    record.city = city;
    record.country = country;
    if let Some((lat, lng)) = detail.lat_lng() {
        record.latitude = Some(lat);
        record.longitude = Some(lng);
    }
    record.website = detail.website.clone().unwrap_or_default();
    record.phone = detail
        .international_phone_number
        .clone()
        .unwrap_or_default();
    if with_description {
        record.description = detail.first_review_text().map(str::to_string);
    }
    record
}

/// Keeps the first record for every `place_id`, preserving order.
pub(crate) fn dedup_by_place_id(records: Vec<BusinessRecord>) -> Vec<BusinessRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.place_id.clone()))
        .collect()
}

/// Numbers rows 1..=N in their current order.
pub(crate) fn assign_ids(records: &mut [BusinessRecord]) {
    for (id, record) in (1u64..).zip(records.iter_mut()) {
        record.id = id;
    }
}
