//! Country domain models.
//!
//! Read-only records sourced from the upstream country-data API. They are
//! never persisted or mutated beyond in-memory display state; each fetch
//! replaces the previous value wholesale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder shown when a country has no capital or currency data.
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// The two name forms a country is known by upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// The common, everyday name (e.g. "Germany"). Used for listing and lookup.
    pub common: String,
    /// The official long-form name (e.g. "Federal Republic of Germany").
    pub official: String,
}

/// Minimal record used for the selectable country list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: CountryName,
}

/// A single currency entry, keyed by its ISO code in [`CountryDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// References to the country's flag imagery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Raster image URL.
    pub png: String,
    /// Vector image URL (the form shown in the detail panel).
    pub svg: String,
    /// Upstream-provided alt text. May be empty.
    pub alt: String,
}

/// Full record used for the detail panel.
///
/// Lifetime is exactly one request/response cycle; a new selection replaces
/// the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub name: CountryName,
    /// Capital city names. Zero or more; only the first is displayed.
    pub capital: Vec<String>,
    /// Currencies keyed by code (e.g. "EUR").
    pub currencies: BTreeMap<String, Currency>,
    pub flags: Flags,
}

impl CountryDetail {
    /// Alt text for the flag image, falling back to a generated phrase when
    /// the upstream data carries none.
    pub fn flag_alt(&self) -> String {
        if self.flags.alt.trim().is_empty() {
            format!("Flag of {}", self.name.common)
        } else {
            self.flags.alt.clone()
        }
    }

    /// The first capital city, or the placeholder when the list is empty.
    pub fn capital_display(&self) -> &str {
        self.capital
            .first()
            .map(String::as_str)
            .unwrap_or(MISSING_FIELD_PLACEHOLDER)
    }

    /// Currencies rendered as "name (symbol)" joined by commas, or the
    /// placeholder when no currency data exists.
    pub fn currency_display(&self) -> String {
        if self.currencies.is_empty() {
            return MISSING_FIELD_PLACEHOLDER.to_string();
        }

        self.currencies
            .values()
            .map(|currency| format!("{} ({})", currency.name, currency.symbol))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Sorts summaries in place by common name, case-insensitively.
pub fn sort_by_common_name(summaries: &mut [CountrySummary]) {
    summaries.sort_by_cached_key(|summary| summary.name.common.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(common: &str) -> CountryDetail {
        CountryDetail {
            name: CountryName {
                common: common.to_string(),
                official: format!("Republic of {common}"),
            },
            capital: Vec::new(),
            currencies: BTreeMap::new(),
            flags: Flags::default(),
        }
    }

    fn summary(common: &str) -> CountrySummary {
        CountrySummary {
            name: CountryName {
                common: common.to_string(),
                official: common.to_string(),
            },
        }
    }

    #[test]
    fn test_flag_alt_falls_back_to_generated_phrase() {
        let country = detail("Testland");
        assert_eq!(country.flag_alt(), "Flag of Testland");
    }

    #[test]
    fn test_flag_alt_prefers_upstream_text() {
        let mut country = detail("Testland");
        country.flags.alt = "A green field".to_string();
        assert_eq!(country.flag_alt(), "A green field");
    }

    #[test]
    fn test_capital_display_placeholder_when_empty() {
        let country = detail("Testland");
        assert_eq!(country.capital_display(), MISSING_FIELD_PLACEHOLDER);
    }

    #[test]
    fn test_capital_display_uses_first_entry() {
        let mut country = detail("Testland");
        country.capital = vec!["Alpha".to_string(), "Beta".to_string()];
        assert_eq!(country.capital_display(), "Alpha");
    }

    #[test]
    fn test_currency_display_placeholder_when_empty() {
        let country = detail("Testland");
        assert_eq!(country.currency_display(), MISSING_FIELD_PLACEHOLDER);
    }

    #[test]
    fn test_currency_display_joins_entries() {
        let mut country = detail("Testland");
        country.currencies.insert(
            "EUR".to_string(),
            Currency {
                name: "Euro".to_string(),
                symbol: "€".to_string(),
            },
        );
        country.currencies.insert(
            "USD".to_string(),
            Currency {
                name: "United States dollar".to_string(),
                symbol: "$".to_string(),
            },
        );
        assert_eq!(
            country.currency_display(),
            "Euro (€), United States dollar ($)"
        );
    }

    #[test]
    fn test_sort_by_common_name_is_case_insensitive() {
        let mut list = vec![summary("zimbabwe"), summary("Albania"), summary("france")];
        sort_by_common_name(&mut list);

        let names: Vec<&str> = list.iter().map(|s| s.name.common.as_str()).collect();
        assert_eq!(names, vec!["Albania", "france", "zimbabwe"]);
    }
}
