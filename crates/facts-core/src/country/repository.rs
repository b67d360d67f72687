//! Country repository trait.
//!
//! Defines the interface for fetching country data from the upstream source.

use super::model::{CountryDetail, CountrySummary};
use crate::error::Result;

/// An abstract repository for the upstream country-data source.
///
/// This trait decouples the application's view logic from the specific data
/// source (e.g., a remote HTTP API, a canned fixture in tests).
#[async_trait::async_trait]
pub trait CountryRepository: Send + Sync {
    /// Retrieves every country summary the source knows about.
    ///
    /// Ordering is unspecified; callers sort for display.
    async fn list_summaries(&self) -> Result<Vec<CountrySummary>>;

    /// Retrieves the detail record for a country by its common name.
    ///
    /// The upstream lookup may match more than one country; implementations
    /// return the first match and report [`FactsError::NotFound`] when there
    /// is none.
    ///
    /// [`FactsError::NotFound`]: crate::error::FactsError::NotFound
    async fn find_by_name(&self, common_name: &str) -> Result<CountryDetail>;
}
