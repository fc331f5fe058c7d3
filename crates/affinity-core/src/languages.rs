//! Country name to ISO 639-1 language code lookup.
//!
//! Keyword translation needs one target language per country. Countries with
//! several co-official languages (Switzerland, Belgium, Canada, India, ...)
//! have no single answer and resolve to [`DEFAULT_LANGUAGE`], as do names the
//! table does not know.

/// Language the base brand keywords are written in.
pub const DEFAULT_LANGUAGE: &str = "en";

/// `(lowercase country name, language code)`. A `None` code marks a country
/// whose language is ambiguous.
const COUNTRY_LANGUAGES: &[(&str, Option<&str>)] = &[
    ("argentina", Some("es")),
    ("australia", Some("en")),
    ("austria", Some("de")),
    ("belgium", None),
    ("bolivia", Some("es")),
    ("brazil", Some("pt")),
    ("bulgaria", Some("bg")),
    ("canada", None),
    ("chile", Some("es")),
    ("china", Some("zh")),
    ("colombia", Some("es")),
    ("costa rica", Some("es")),
    ("croatia", Some("hr")),
    ("cyprus", None),
    ("czech republic", Some("cs")),
    ("czechia", Some("cs")),
    ("denmark", Some("da")),
    ("ecuador", Some("es")),
    ("egypt", Some("ar")),
    ("estonia", Some("et")),
    ("finland", None),
    ("france", Some("fr")),
    ("germany", Some("de")),
    ("greece", Some("el")),
    ("hong kong", None),
    ("hungary", Some("hu")),
    ("iceland", Some("is")),
    ("india", None),
    ("indonesia", Some("id")),
    ("ireland", Some("en")),
    ("israel", Some("he")),
    ("italy", Some("it")),
    ("japan", Some("ja")),
    ("jordan", Some("ar")),
    ("kenya", None),
    ("latvia", Some("lv")),
    ("lithuania", Some("lt")),
    ("luxembourg", None),
    ("malaysia", Some("ms")),
    ("malta", None),
    ("mexico", Some("es")),
    ("morocco", Some("ar")),
    ("netherlands", Some("nl")),
    ("new zealand", Some("en")),
    ("norway", Some("no")),
    ("peru", Some("es")),
    ("philippines", None),
    ("poland", Some("pl")),
    ("portugal", Some("pt")),
    ("qatar", Some("ar")),
    ("romania", Some("ro")),
    ("russia", Some("ru")),
    ("saudi arabia", Some("ar")),
    ("serbia", Some("sr")),
    ("singapore", None),
    ("slovakia", Some("sk")),
    ("slovenia", Some("sl")),
    ("south africa", None),
    ("south korea", Some("ko")),
    ("spain", Some("es")),
    ("sri lanka", None),
    ("sweden", Some("sv")),
    ("switzerland", None),
    ("taiwan", Some("zh-TW")),
    ("thailand", Some("th")),
    ("turkey", Some("tr")),
    ("ukraine", Some("uk")),
    ("united arab emirates", Some("ar")),
    ("united kingdom", Some("en")),
    ("united states", Some("en")),
    ("uruguay", Some("es")),
    ("venezuela", Some("es")),
    ("vietnam", Some("vi")),
];

/// Alternate spellings mapped to the canonical table key.
const ALIASES: &[(&str, &str)] = &[
    ("usa", "united states"),
    ("us", "united states"),
    ("united states of america", "united states"),
    ("uk", "united kingdom"),
    ("great britain", "united kingdom"),
    ("england", "united kingdom"),
    ("scotland", "united kingdom"),
    ("uae", "united arab emirates"),
    ("the netherlands", "netherlands"),
    ("holland", "netherlands"),
    ("korea", "south korea"),
    ("republic of korea", "south korea"),
    ("türkiye", "turkey"),
    ("turkiye", "turkey"),
    ("viet nam", "vietnam"),
    ("russian federation", "russia"),
    ("deutschland", "germany"),
    ("españa", "spain"),
    ("italia", "italy"),
];

/// Resolves a country name to the language its keywords should be searched in.
///
/// Case and surrounding whitespace are ignored. Unknown and multilingual
/// countries return [`DEFAULT_LANGUAGE`].
#[must_use]
pub fn language_for_country(country: &str) -> &'static str {
    let key = country.trim().to_lowercase();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key.as_str(), |(_, target)| *target);

    COUNTRY_LANGUAGES
        .iter()
        .find(|(name, _)| *name == canonical)
        .and_then(|(_, code)| *code)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Extracts the country part of a `"city[, country]"` location string.
///
/// The country is the text after the last comma. Returns `None` when the
/// location has no comma or the trailing part is blank.
#[must_use]
pub fn country_of_location(location: &str) -> Option<&str> {
    let (_, country) = location.rsplit_once(',')?;
    let country = country.trim();
    (!country.is_empty()).then_some(country)
}
