//! RestCountriesRepository - HTTP implementation of the country repository.
//!
//! Talks to the REST Countries v3.1 API. Both endpoints are narrowed with the
//! `fields` query parameter to keep payloads small.

use std::time::Duration;

use async_trait::async_trait;
use facts_core::config::ApiConfig;
use facts_core::country::{CountryDetail, CountryRepository, CountrySummary};
use facts_core::error::{FactsError, Result};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::dto::{CountryDetailDto, CountrySummaryDto};

const LIST_FIELDS: &str = "name";
const DETAIL_FIELDS: &str = "name,capital,currencies,flags";

/// Repository implementation backed by the REST Countries HTTP API.
#[derive(Debug, Clone)]
pub struct RestCountriesRepository {
    client: Client,
    base_url: Url,
}

impl RestCountriesRepository {
    /// Creates a repository from API settings.
    ///
    /// Fails when the base URL does not parse or cannot carry path segments.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| FactsError::config(format!("failed to build HTTP client: {err}")))?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|err| FactsError::config(format!("invalid base URL: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FactsError::config(format!(
                "base URL '{base_url}' cannot carry path segments"
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/{segments..}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| FactsError::internal("base URL lost its path"))?;
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl CountryRepository for RestCountriesRepository {
    async fn list_summaries(&self) -> Result<Vec<CountrySummary>> {
        let url = self.endpoint(&["all"])?;
        debug!(%url, "fetching country listing");

        let response = self
            .client
            .get(url)
            .query(&[("fields", LIST_FIELDS)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FactsError::http(format!(
                "country listing request failed with status {}",
                response.status()
            )));
        }

        let dtos: Vec<CountrySummaryDto> = response.json().await?;
        Ok(dtos
            .into_iter()
            .map(CountrySummaryDto::into_domain)
            .collect())
    }

    async fn find_by_name(&self, common_name: &str) -> Result<CountryDetail> {
        let url = self.endpoint(&["name", common_name])?;
        debug!(%url, "fetching country detail");

        let response = self
            .client
            .get(url)
            .query(&[("fields", DETAIL_FIELDS)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FactsError::not_found("country", common_name));
        }
        if !response.status().is_success() {
            return Err(FactsError::http(format!(
                "country detail request failed with status {}",
                response.status()
            )));
        }

        // The API may match more than one country; only the first is used.
        let dtos: Vec<CountryDetailDto> = response.json().await?;
        dtos.into_iter()
            .next()
            .map(CountryDetailDto::into_domain)
            .ok_or_else(|| FactsError::not_found("country", common_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository(base_url: &str) -> Result<RestCountriesRepository> {
        RestCountriesRepository::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let repo = repository("https://restcountries.com/v3.1").unwrap();
        let url = repo.endpoint(&["all"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/all");
    }

    #[test]
    fn test_endpoint_percent_encodes_names() {
        let repo = repository("https://restcountries.com/v3.1").unwrap();
        let url = repo.endpoint(&["name", "Côte d'Ivoire"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://restcountries.com/v3.1/name/C%C3%B4te%20d'Ivoire"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let repo = repository("https://restcountries.com/v3.1/").unwrap();
        let url = repo.endpoint(&["all"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/all");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = repository("not a url").unwrap_err();
        assert!(matches!(err, FactsError::Config(_)));
    }
}
