pub mod config;
pub mod country;
pub mod error;

// Re-export common error type
pub use error::{FactsError, Result};
