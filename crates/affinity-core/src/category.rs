//! Keyword-heuristic taxonomy for directory entries.
//!
//! Categories overlap by keyword (a "design hotel" matches both accommodation
//! and creative keywords), so rules are evaluated top-down and the first hit
//! wins. The order of [`RULES`] and the keyword sets are fixed business policy.

/// One of the seven directory taxonomy labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Accommodation,
    HealthWellbeing,
    CreativeIndustries,
    EventManagement,
    CitiesDevelopments,
    Blockchain,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Accommodation,
        Category::HealthWellbeing,
        Category::CreativeIndustries,
        Category::EventManagement,
        Category::CitiesDevelopments,
        Category::Blockchain,
        Category::Other,
    ];

    /// The label written to the output CSV.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Accommodation => "Accommodation",
            Category::HealthWellbeing => "Health & Wellbeing",
            Category::CreativeIndustries => "Creative Industries",
            Category::EventManagement => "Event Management",
            Category::CitiesDevelopments => "Cities & Developments",
            Category::Blockchain => "Blockchain",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Parses a label exactly as written to the CSV, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category '{wanted}'"))
    }
}

/// Ordered (category, keywords) rules. Evaluated top-down, first match wins.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Accommodation,
        &[
            "hotel",
            "resort",
            "apartments",
            "accommodation",
            "villa",
            "guesthouse",
            "lodging",
            "inn",
            "suites",
        ],
    ),
    (
        Category::HealthWellbeing,
        &[
            "spa", "health", "clinic", "wellness", "yoga", "beauty", "salon", "therapies",
        ],
    ),
    (
        Category::CreativeIndustries,
        &[
            "design",
            "studio",
            "gallery",
            "art",
            "media",
            "productions",
            "creative",
            "photography",
            "fashion",
        ],
    ),
    (
        Category::EventManagement,
        &["events", "planning", "entertainment", "lounge", "nightclub"],
    ),
    (
        Category::CitiesDevelopments,
        &[
            "real estate",
            "properties",
            "developments",
            "condominium",
            "building",
            "display village",
        ],
    ),
    (Category::Blockchain, &["blockchain", "crypto", "web3"]),
];

/// Assigns a category from a place's type tags and display name.
///
/// Matching is plain lowercase substring search over `"{name} {types}"`, so
/// short keywords such as `inn` or `art` also match inside longer words.
#[must_use]
pub fn categorize<S: AsRef<str>>(types: &[S], name: &str) -> Category {
    let types_text = types
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let text = format!("{} {}", name.to_lowercase(), types_text.to_lowercase());

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
        .map_or(Category::Other, |(category, _)| *category)
}
