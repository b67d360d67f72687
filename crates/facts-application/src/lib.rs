pub mod browser;

pub use browser::{BrowserState, CountryBrowser, DetailOutcome, SelectionTicket};
