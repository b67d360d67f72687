//! Data Transfer Objects for the REST Countries wire format.
//!
//! These DTOs mirror the upstream v3.1 JSON schema and are private to the
//! infrastructure layer. Every field the API may omit carries a serde
//! default so a sparse record still parses.

use std::collections::HashMap;

use facts_core::country::{CountryDetail, CountryName, CountrySummary, Currency, Flags};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct NameDto {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

impl NameDto {
    fn into_domain(self) -> CountryName {
        CountryName {
            common: self.common,
            official: self.official,
        }
    }
}

/// One element of the bulk listing response (`/all?fields=name`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CountrySummaryDto {
    pub name: NameDto,
}

impl CountrySummaryDto {
    pub(crate) fn into_domain(self) -> CountrySummary {
        CountrySummary {
            name: self.name.into_domain(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CurrencyDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FlagsDto {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: String,
}

/// One element of the per-name lookup response
/// (`/name/{name}?fields=name,capital,currencies,flags`).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CountryDetailDto {
    pub name: NameDto,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub currencies: HashMap<String, CurrencyDto>,
    #[serde(default)]
    pub flags: FlagsDto,
}

impl CountryDetailDto {
    pub(crate) fn into_domain(self) -> CountryDetail {
        CountryDetail {
            name: self.name.into_domain(),
            capital: self.capital,
            currencies: self
                .currencies
                .into_iter()
                .map(|(code, currency)| {
                    (
                        code,
                        Currency {
                            name: currency.name,
                            symbol: currency.symbol,
                        },
                    )
                })
                .collect(),
            flags: Flags {
                png: self.flags.png,
                svg: self.flags.svg,
                alt: self.flags.alt,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_listing() {
        let json = r#"[
            {"name": {"common": "Iceland", "official": "Iceland"}},
            {"name": {"common": "Japan", "official": "Japan"}}
        ]"#;

        let dtos: Vec<CountrySummaryDto> = serde_json::from_str(json).unwrap();
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].name.common, "Iceland");
    }

    #[test]
    fn test_parse_full_detail() {
        let json = r#"[{
            "name": {"common": "Japan", "official": "Japan"},
            "capital": ["Tokyo"],
            "currencies": {"JPY": {"name": "Japanese yen", "symbol": "¥"}},
            "flags": {
                "png": "https://flagcdn.com/w320/jp.png",
                "svg": "https://flagcdn.com/jp.svg",
                "alt": "The flag of Japan features a crimson-red circle."
            }
        }]"#;

        let dtos: Vec<CountryDetailDto> = serde_json::from_str(json).unwrap();
        let detail = dtos.into_iter().next().unwrap().into_domain();

        assert_eq!(detail.name.common, "Japan");
        assert_eq!(detail.capital, vec!["Tokyo"]);
        assert_eq!(detail.currencies["JPY"].symbol, "¥");
        assert!(detail.flags.svg.ends_with("jp.svg"));
    }

    #[test]
    fn test_parse_sparse_detail() {
        // Territories may lack capital, currencies, and flag alt text.
        let json = r#"[{
            "name": {"common": "Antarctica", "official": "Antarctica"},
            "flags": {"png": "", "svg": ""}
        }]"#;

        let dtos: Vec<CountryDetailDto> = serde_json::from_str(json).unwrap();
        let detail = dtos.into_iter().next().unwrap().into_domain();

        assert!(detail.capital.is_empty());
        assert!(detail.currencies.is_empty());
        assert!(detail.flags.alt.is_empty());
    }
}
