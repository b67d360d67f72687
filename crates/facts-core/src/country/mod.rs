//! Country domain: models and the repository seam.

pub mod model;
pub mod repository;

pub use model::{
    CountryDetail, CountryName, CountrySummary, Currency, Flags, MISSING_FIELD_PLACEHOLDER,
    sort_by_common_name,
};
pub use repository::CountryRepository;
