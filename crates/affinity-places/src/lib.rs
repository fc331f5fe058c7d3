pub mod client;
pub mod error;
pub mod translate;
pub mod types;

pub use client::{PlacesClient, SearchPage, TextSearch, PAGE_TOKEN_DELAY};
pub use error::PlacesError;
pub use translate::TranslateClient;
pub use types::{AddressComponent, PlaceDetail, RawPlace, Review};
