//! Special-case mappings between the server catalog and the provider's
//! coding scheme.
//!
//! The provider's three-letter codes for a handful of locales collide with or
//! diverge from the catalog's ISO 639-2 assignments, so a plain catalog scan
//! would either miss them or land on the wrong regional variant. The entries
//! here are layered in front of the catalog during lookup; they never mutate
//! it.

use std::fmt;

use crate::catalog::CultureEntry;

/// A catalog correction for one locale the provider codes differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedCulture {
    /// The culture this mapping resolves to.
    pub culture: CultureEntry,
    /// When true, the entry only applies when translating a server-side token
    /// toward the provider's code. Lookups going the other way (provider code
    /// to server culture) must skip it so the catalog's own entry is found.
    pub one_way: bool,
}

impl MappedCulture {
    pub fn new(culture: CultureEntry, one_way: bool) -> Self {
        Self { culture, one_way }
    }
}

impl fmt::Display for MappedCulture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, OneWay: {}", self.culture, self.one_way)
    }
}

/// Map 'French (Canada)' to French: the provider has no French variant and
/// `frc` is not a valid ISO 639-2 code.
fn french_canada() -> MappedCulture {
    MappedCulture::new(
        CultureEntry::new("French (Canada)", "Français (Canada)", "fr-CA", &["fra"]),
        true
    )
}

/// The provider uses a different ISO 639-2 code for Portuguese (Brazil), and
/// image results coded `pt` must label back to 'Portuguese (Brazil)'.
fn portuguese_brazil() -> MappedCulture {
    MappedCulture::new(
        CultureEntry::new("Portuguese (Brazil)", "Português (Brasil)", "pt-BR", &["pt"]),
        false
    )
}

/// Lets provider results coded `por` label back to 'Portuguese (Portugal)'.
fn portuguese_portugal() -> MappedCulture {
    MappedCulture::new(
        CultureEntry::new("Portuguese (Portugal)", "Português (Portugal)", "pt-PT", &["por"]),
        false
    )
}

/// The provider uses a different ISO 639-2 code for Chinese (Taiwan).
fn chinese_taiwan() -> MappedCulture {
    MappedCulture::new(
        CultureEntry::new("Chinese (Taiwan)", "漢語 (繁體字)", "zh-TW", &["zhtw"]),
        false
    )
}

/// Builds the override table for the known disagreements with the provider's
/// coding scheme.
///
/// The order is fixed and the function is pure: the resolver re-invokes it
/// whenever the `collapse_french_canada` flag changes and swaps the result in
/// wholesale. The French (Canada) entry is one-way and only present when the
/// collapse is enabled.
///
/// # Example
///
/// ```rust
/// use media_intl::provider_overrides;
///
/// let table = provider_overrides(true);
/// assert_eq!(table.len(), 4);
/// assert_eq!(table[3].culture.primary_code, "fr-CA");
/// assert!(table[3].one_way);
/// ```
pub fn provider_overrides(collapse_french_canada: bool) -> Vec<MappedCulture> {
    let mut mapped = vec![portuguese_portugal(), portuguese_brazil(), chinese_taiwan()];

    if collapse_french_canada {
        mapped.push(french_canada());
    }

    mapped
}
