//! Culture and country reference data.
//!
//! The record types here are shared by the bundled default tables and any
//! tables a host injects; both sides use the same serde shape. Matching is
//! case-insensitive everywhere and never performs any other normalization.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{ Deserialize, Serialize };

/// A single culture (language) record in a catalog.
///
/// # Example
///
/// ```rust
/// use media_intl::CultureEntry;
///
/// let english = CultureEntry::new("English", "English", "en", &["eng"]);
/// assert!(english.matches_code("ENG"));
/// assert!(!english.matches_code("en-GB"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureEntry {
    /// Canonical English name, unique within a catalog.
    pub name: String,
    /// Name rendered in the locale's own language or script.
    pub display_name: String,
    /// Region-aware short code, e.g. `en` or `pt-BR`.
    pub primary_code: String,
    /// Longer codes associated with this entry, e.g. ISO 639-2 variants.
    /// Not globally unique across entries in override tables.
    #[serde(default)]
    pub alternate_codes: Vec<String>,
}

impl CultureEntry {
    pub fn new(name: &str, display_name: &str, primary_code: &str, alternate_codes: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            primary_code: primary_code.to_string(),
            alternate_codes: alternate_codes.iter().map(|code| code.to_string()).collect(),
        }
    }

    /// True when `token` equals the primary code or any alternate code.
    pub fn matches_code(&self, token: &str) -> bool {
        eq_ignore_case(&self.primary_code, token)
            || self.alternate_codes.iter().any(|code| eq_ignore_case(code, token))
    }

    /// True when `token` matches the display name, the name, or any code.
    pub fn matches_token(&self, token: &str) -> bool {
        eq_ignore_case(&self.display_name, token)
            || eq_ignore_case(&self.name, token)
            || self.alternate_codes.iter().any(|code| eq_ignore_case(code, token))
            || eq_ignore_case(&self.primary_code, token)
    }
}

impl fmt::Display for CultureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, DisplayName: {}, Primary: {}, Alternates: [{}]",
            self.name,
            self.display_name,
            self.primary_code,
            self.alternate_codes.join(", ")
        )
    }
}

/// A single country record. Flat data, no special cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Canonical English name.
    pub name: String,
    /// ISO 3166-1 alpha-2 region code, e.g. `US`.
    pub two_letter_code: String,
    /// ISO 3166-1 alpha-3 region code, e.g. `USA`.
    pub three_letter_code: String,
}

impl CountryEntry {
    pub fn new(name: &str, two_letter_code: &str, three_letter_code: &str) -> Self {
        Self {
            name: name.to_string(),
            two_letter_code: two_letter_code.to_string(),
            three_letter_code: three_letter_code.to_string(),
        }
    }

    /// True when `token` matches the name or either region code.
    pub fn matches(&self, token: &str) -> bool {
        eq_ignore_case(&self.name, token)
            || eq_ignore_case(&self.two_letter_code, token)
            || eq_ignore_case(&self.three_letter_code, token)
    }
}

impl fmt::Display for CountryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, TwoLetter: {}, ThreeLetter: {}",
            self.name,
            self.two_letter_code,
            self.three_letter_code
        )
    }
}

// Codes are plain ASCII so take the allocation-free path for them; display
// names can carry non-ASCII letters and need real case folding.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

// ---------- Bundled defaults ----------

static CULTURES: Lazy<Vec<CultureEntry>> = Lazy::new(|| {
    serde_json
        ::from_str(include_str!(concat!(env!("OUT_DIR"), "/cultures.json")))
        .expect("bundled culture data is validated at build time")
});

static COUNTRIES: Lazy<Vec<CountryEntry>> = Lazy::new(|| {
    serde_json
        ::from_str(include_str!(concat!(env!("OUT_DIR"), "/countries.json")))
        .expect("bundled country data is validated at build time")
});

/// The crate's bundled default culture list, used when the host does not
/// supply its own.
pub fn default_cultures() -> &'static [CultureEntry] {
    &CULTURES
}

/// The crate's bundled default country list.
pub fn default_countries() -> &'static [CountryEntry] {
    &COUNTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matching_ignores_ascii_case() {
        let english = CultureEntry::new("English", "English", "en", &["eng"]);
        assert!(english.matches_code("en"));
        assert!(english.matches_code("EN"));
        assert!(english.matches_code("Eng"));
        assert!(!english.matches_code("english"));
    }

    #[test]
    fn token_matching_covers_names_and_codes() {
        let french = CultureEntry::new("French", "Français", "fr", &["fra", "fre"]);
        assert!(french.matches_token("french"));
        assert!(french.matches_token("FRANÇAIS"));
        assert!(french.matches_token("fre"));
        assert!(french.matches_token("FR"));
        assert!(!french.matches_token("francais"));
    }

    #[test]
    fn non_ascii_comparison_folds_case() {
        assert!(eq_ignore_case("Íslenska", "íslenska"));
        assert!(eq_ignore_case("Čeština", "čeština"));
        assert!(!eq_ignore_case("Čeština", "Cestina"));
    }

    #[test]
    fn country_matches_all_three_fields() {
        let us = CountryEntry::new("United States", "US", "USA");
        assert!(us.matches("united states"));
        assert!(us.matches("us"));
        assert!(us.matches("usa"));
        assert!(!us.matches("u.s.a."));
    }

    #[test]
    fn bundled_cultures_are_well_formed() {
        let cultures = default_cultures();
        assert!(!cultures.is_empty());

        for culture in cultures {
            assert!(!culture.primary_code.is_empty(), "{} has no primary code", culture.name);
        }

        // Names are the unique key within the catalog.
        for (i, culture) in cultures.iter().enumerate() {
            for other in &cultures[i + 1..] {
                assert_ne!(culture.name, other.name);
            }
        }

        let french = cultures.iter().find(|c| c.name == "French").expect("French is bundled");
        assert!(french.matches_code("fra"));
        assert!(french.matches_code("fre"));
    }

    #[test]
    fn bundled_countries_are_well_formed() {
        let countries = default_countries();
        assert!(!countries.is_empty());

        for country in countries {
            assert_eq!(country.two_letter_code.len(), 2, "{}", country.name);
            assert_eq!(country.three_letter_code.len(), 3, "{}", country.name);
        }
    }

    #[test]
    fn display_dump_lists_every_field() {
        let english = CultureEntry::new("English", "English", "en", &["eng"]);
        assert_eq!(
            english.to_string(),
            "Name: English, DisplayName: English, Primary: en, Alternates: [eng]"
        );

        let us = CountryEntry::new("United States", "US", "USA");
        assert_eq!(us.to_string(), "Name: United States, TwoLetter: US, ThreeLetter: USA");
    }
}
