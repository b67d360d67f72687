//! CountryBrowser - application service for the country facts view.
//!
//! Owns the in-memory view state (country list, selected detail, loading
//! flag) and the selection logic. Fetch failures are logged and otherwise
//! swallowed: the list stays empty, a previously shown detail stays on
//! screen, and the loading flag is always cleared.
//!
//! Selection uses a generation counter so the detail shown always
//! corresponds to the most recently selected name. Every selection (or
//! clear) bumps the generation; a fetch result is only applied when the
//! generation it was issued under is still current. An in-flight fetch is
//! not cancelled, its result is simply discarded on arrival.

use std::sync::Arc;

use facts_core::country::{CountryDetail, CountryRepository, CountrySummary, sort_by_common_name};
use facts_core::error::Result;
use tracing::{debug, error};

/// View state for the country facts screen. Single-owner, replaced (never
/// merged) on each update.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    /// Summaries sorted by common name, case-insensitively.
    pub countries: Vec<CountrySummary>,
    /// Detail for the most recently resolved selection, if any.
    pub detail: Option<CountryDetail>,
    /// True while a detail fetch for the current selection is outstanding.
    pub loading: bool,
    generation: u64,
}

/// A pending selection: which name to fetch and under which generation the
/// fetch was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    pub name: String,
    generation: u64,
}

/// The result of a detail fetch, tagged with its issuing generation.
#[derive(Debug)]
pub struct DetailOutcome {
    generation: u64,
    result: Result<CountryDetail>,
}

/// Application service driving the country facts view.
pub struct CountryBrowser {
    repository: Arc<dyn CountryRepository>,
    state: BrowserState,
}

impl CountryBrowser {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self {
            repository,
            state: BrowserState::default(),
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Clone of the repository handle, for spawning fetch tasks.
    pub fn repository(&self) -> Arc<dyn CountryRepository> {
        Arc::clone(&self.repository)
    }

    /// Loads and sorts the country list. One-shot, run once at startup.
    ///
    /// On failure the error is logged and the list stays empty; there is no
    /// user-visible error state.
    pub async fn load_countries(&mut self) {
        let summaries = Self::fetch_summaries(self.repository()).await;
        self.set_countries(summaries);
    }

    /// Fetches and sorts the country list without touching view state, so
    /// the fetch can run inside a spawned task. A failure is logged and
    /// yields an empty list.
    pub async fn fetch_summaries(repository: Arc<dyn CountryRepository>) -> Vec<CountrySummary> {
        match repository.list_summaries().await {
            Ok(mut summaries) => {
                sort_by_common_name(&mut summaries);
                debug!(count = summaries.len(), "country list loaded");
                summaries
            }
            Err(err) => {
                error!(error = %err, "failed to fetch country list");
                Vec::new()
            }
        }
    }

    /// Replaces the displayed country list.
    pub fn set_countries(&mut self, countries: Vec<CountrySummary>) {
        self.state.countries = countries;
    }

    /// Starts a selection.
    ///
    /// An empty name clears the detail panel and returns `None`: no fetch is
    /// performed. Otherwise the loading flag is set and a ticket for the new
    /// generation is returned; the caller resolves it with [`fetch_detail`]
    /// and feeds the outcome back through [`apply_outcome`].
    ///
    /// [`fetch_detail`]: CountryBrowser::fetch_detail
    /// [`apply_outcome`]: CountryBrowser::apply_outcome
    pub fn begin_selection(&mut self, name: &str) -> Option<SelectionTicket> {
        // Bumping on clear too invalidates any fetch still in flight.
        self.state.generation += 1;

        if name.is_empty() {
            self.state.detail = None;
            self.state.loading = false;
            return None;
        }

        self.state.loading = true;
        Some(SelectionTicket {
            name: name.to_string(),
            generation: self.state.generation,
        })
    }

    /// Resolves a ticket against the repository.
    ///
    /// An associated function rather than a method so it can run inside a
    /// spawned task while the browser itself stays with the UI loop.
    pub async fn fetch_detail(
        repository: Arc<dyn CountryRepository>,
        ticket: SelectionTicket,
    ) -> DetailOutcome {
        let result = repository.find_by_name(&ticket.name).await;
        DetailOutcome {
            generation: ticket.generation,
            result,
        }
    }

    /// Applies a fetch outcome to the view state.
    ///
    /// Outcomes from a superseded generation are discarded, leaving both the
    /// detail and the loading flag untouched. For the current generation the
    /// loading flag is always cleared; on failure the error is logged and
    /// the previously shown detail (if any) stays on screen.
    pub fn apply_outcome(&mut self, outcome: DetailOutcome) {
        if outcome.generation != self.state.generation {
            debug!(
                stale = outcome.generation,
                current = self.state.generation,
                "discarding stale detail fetch"
            );
            return;
        }

        self.state.loading = false;
        match outcome.result {
            Ok(detail) => {
                self.state.detail = Some(detail);
            }
            Err(err) => {
                error!(error = %err, "failed to fetch country details");
            }
        }
    }
}
