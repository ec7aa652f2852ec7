#![doc = include_str!("../README.md")]

//! # media-intl
//!
//! Reconciles locale identifiers between a media server's internal culture
//! catalog and an external metadata provider's language/region coding scheme:
//!
//! - **Provider-code lookup**: resolve a provider language code to the
//!   matching server culture
//! - **Token lookup**: resolve a name, display name, or code from either
//!   system to a server culture
//! - **Country lookup**: resolve a country name or region code
//! - **Special-case overrides**: a small fixed table corrects the locales the
//!   two systems code differently (`pt-PT`, `pt-BR`, `zh-TW`, and optionally
//!   `fr-CA`)
//! - **Bundled defaults**: a built-in culture/country catalog when the host
//!   supplies none
//!
//! ## Quick Start
//!
//! ```rust
//! use media_intl::{CultureResolver, IntlConfig};
//!
//! let resolver = CultureResolver::new(IntlConfig::default());
//!
//! // The provider codes Portuguese (Brazil) as plain `pt`.
//! let culture = resolver.culture_for_provider_code(Some("pt")).unwrap();
//! assert_eq!(culture.primary_code, "pt-BR");
//! ```

mod catalog;
mod overrides;

pub use catalog::{ CountryEntry, CultureEntry, default_countries, default_cultures };
pub use overrides::{ MappedCulture, provider_overrides };

use std::sync::Arc;

use tracing::{ debug, trace };

/// Configuration for the resolver.
///
/// # Example
///
/// ```rust
/// use media_intl::IntlConfig;
///
/// let config = IntlConfig {
///     collapse_french_canada: true,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntlConfig {
    /// Collapse French (Canada) into French when translating toward the
    /// provider. Adds a one-way override entry; the provider has no French
    /// regional variant, so `fr-CA` requests would otherwise miss entirely.
    /// Default: `false`
    pub collapse_french_canada: bool,
}

// ---------- Resolver ----------

/// Resolves culture and country tokens against three reference tables: the
/// server's culture catalog, the provider special-case overrides, and the
/// country list.
///
/// Tables are immutable snapshots. Replacing one (a catalog setter or an
/// override rebuild) swaps in a freshly built table wholesale; clones of the
/// resolver keep reading the snapshot they were created with, so a reader
/// never observes a half-populated table.
///
/// # Example
///
/// ```rust
/// use media_intl::{CultureResolver, IntlConfig};
///
/// let resolver = CultureResolver::new(IntlConfig::default());
///
/// let culture = resolver.culture_for_token(Some("Deutsch")).unwrap();
/// assert_eq!(culture.primary_code, "de");
///
/// let country = resolver.country_for_token(Some("USA")).unwrap();
/// assert_eq!(country.two_letter_code, "US");
/// ```
#[derive(Debug, Clone)]
pub struct CultureResolver {
    cultures: Arc<[CultureEntry]>,
    overrides: Arc<[MappedCulture]>,
    countries: Arc<[CountryEntry]>,
    config: IntlConfig,
}

impl Default for CultureResolver {
    fn default() -> Self {
        Self::new(IntlConfig::default())
    }
}

impl CultureResolver {
    /// Builds a resolver over the bundled default culture and country lists.
    pub fn new(config: IntlConfig) -> Self {
        Self::with_catalog(
            catalog::default_cultures().to_vec(),
            catalog::default_countries().to_vec(),
            config
        )
    }

    /// Builds a resolver over host-supplied culture and country lists.
    ///
    /// The lists are taken as-is: no deduplication or reordering, since table
    /// order is the lookup tie-break.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_intl::{CultureEntry, CultureResolver, IntlConfig};
    ///
    /// let cultures = vec![CultureEntry::new("English", "English", "en", &["eng"])];
    /// let resolver = CultureResolver::with_catalog(cultures, Vec::new(), IntlConfig::default());
    ///
    /// assert!(resolver.culture_for_provider_code(Some("eng")).is_some());
    /// assert!(resolver.culture_for_provider_code(Some("deu")).is_none());
    /// ```
    pub fn with_catalog(
        cultures: Vec<CultureEntry>,
        countries: Vec<CountryEntry>,
        config: IntlConfig
    ) -> Self {
        Self {
            cultures: cultures.into(),
            countries: countries.into(),
            overrides: overrides::provider_overrides(config.collapse_french_canada).into(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> IntlConfig {
        self.config
    }

    /// Replaces the culture catalog wholesale.
    pub fn set_cultures(&mut self, cultures: Vec<CultureEntry>) {
        self.cultures = cultures.into();
    }

    /// Replaces the country list wholesale.
    pub fn set_countries(&mut self, countries: Vec<CountryEntry>) {
        self.countries = countries.into();
    }

    /// Rebuilds the override table for a new collapse setting and swaps it in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_intl::CultureResolver;
    ///
    /// let mut resolver = CultureResolver::default();
    /// assert!(resolver.culture_for_token(Some("fr-CA")).is_none());
    ///
    /// resolver.set_collapse_french_canada(true);
    /// let culture = resolver.culture_for_token(Some("fr-CA")).unwrap();
    /// assert_eq!(culture.name, "French (Canada)");
    /// ```
    pub fn set_collapse_french_canada(&mut self, enabled: bool) {
        if enabled {
            debug!("French (Canada) collapse enabled");
        }
        self.config.collapse_french_canada = enabled;
        self.overrides = overrides::provider_overrides(enabled).into();
    }

    // ---------- Lookups ----------

    /// Resolves a language code in the provider's coding scheme (two- or
    /// three-letter form) to a server culture.
    ///
    /// Overrides are scanned first. A one-way override never satisfies this
    /// direction: a matching one is skipped (logged at debug) and the scan
    /// continues over the remaining overrides before falling back to the
    /// catalog. First match by table order wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_intl::{CultureResolver, IntlConfig};
    ///
    /// let resolver = CultureResolver::new(IntlConfig::default());
    ///
    /// // `zhtw` is the provider's code for Chinese (Taiwan).
    /// let culture = resolver.culture_for_provider_code(Some("zhtw")).unwrap();
    /// assert_eq!(culture.primary_code, "zh-TW");
    ///
    /// assert!(resolver.culture_for_provider_code(None).is_none());
    /// ```
    pub fn culture_for_provider_code(&self, code: Option<&str>) -> Option<&CultureEntry> {
        let code = code?;

        for mapped in self.overrides.iter() {
            if mapped.culture.matches_code(code) {
                if mapped.one_way {
                    debug!(
                        code,
                        mapping = %mapped.culture.name,
                        "skip: special mapping found for provider code, but it is one-way"
                    );
                    trace!(entry = %mapped, "one-way mapping entry");
                    continue;
                }

                debug!(code, mapping = %mapped.culture.name, "special mapping found for provider code");
                return Some(&mapped.culture);
            }
        }

        self.culture_by_code(code)
    }

    /// Resolves any name, display name, or code from either system to a
    /// server culture.
    ///
    /// Overrides are scanned first on codes only, and match regardless of the
    /// one-way flag; the one-way exclusion applies only to
    /// [`culture_for_provider_code`](Self::culture_for_provider_code). The
    /// catalog fallback matches display name, name, alternate codes, and
    /// primary code. Comparison is exact apart from case: no accent or
    /// punctuation normalization.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_intl::{CultureResolver, IntlConfig};
    ///
    /// let resolver = CultureResolver::new(IntlConfig::default());
    ///
    /// let culture = resolver.culture_for_token(Some("Français")).unwrap();
    /// assert_eq!(culture.name, "French");
    /// ```
    pub fn culture_for_token(&self, token: Option<&str>) -> Option<&CultureEntry> {
        let token = token?;

        self.overrides
            .iter()
            .find(|mapped| mapped.culture.matches_code(token))
            .map(|mapped| &mapped.culture)
            .or_else(|| self.cultures.iter().find(|culture| culture.matches_token(token)))
    }

    /// Resolves a country name or ISO 3166-1 region code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use media_intl::{CultureResolver, IntlConfig};
    ///
    /// let resolver = CultureResolver::new(IntlConfig::default());
    ///
    /// let country = resolver.country_for_token(Some("taiwan")).unwrap();
    /// assert_eq!(country.three_letter_code, "TWN");
    /// ```
    pub fn country_for_token(&self, token: Option<&str>) -> Option<&CountryEntry> {
        let token = token?;
        self.countries.iter().find(|country| country.matches(token))
    }

    fn culture_by_code(&self, code: &str) -> Option<&CultureEntry> {
        let found = self.cultures.iter().find(|culture| culture.matches_code(code));

        if let Some(culture) = found {
            debug!(code, culture = %culture.name, "catalog entry found for code");
            trace!(entry = %culture, "catalog entry");
        }

        found
    }
}
