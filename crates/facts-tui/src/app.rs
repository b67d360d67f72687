//! Interactive event loop for the country facts screen.
//!
//! Single UI loop on the main task. Terminal input is read on a dedicated
//! thread and every fetch runs in a spawned tokio task; both deliver
//! [`AppEvent`]s over one unbounded channel, so the loop never blocks on the
//! network.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use facts_application::{CountryBrowser, DetailOutcome};
use facts_core::country::{CountryRepository, CountrySummary};
use facts_core::error::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::widgets::ListState;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::debug;

use crate::ui;

/// Events driving the UI loop.
pub enum AppEvent {
    /// Raw terminal input.
    Input(Event),
    /// The startup country listing resolved.
    Countries(Vec<CountrySummary>),
    /// A detail fetch resolved.
    Detail(DetailOutcome),
}

pub struct App {
    pub(crate) browser: CountryBrowser,
    pub(crate) list_state: ListState,
    should_quit: bool,
}

impl App {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            browser: CountryBrowser::new(repository),
            list_state,
            should_quit: false,
        }
    }

    /// Runs the event loop until the user quits or the event channel closes.
    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_input_reader(tx.clone());

        // List load happens once, off the UI loop, like every other fetch.
        {
            let repository = self.browser.repository();
            let tx = tx.clone();
            tokio::spawn(async move {
                let summaries = CountryBrowser::fetch_summaries(repository).await;
                let _ = tx.send(AppEvent::Countries(summaries));
            });
        }

        loop {
            terminal.draw(|frame| ui::render(frame, &mut self))?;

            let Some(app_event) = rx.recv().await else {
                break;
            };
            match app_event {
                AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.on_key(key, &tx);
                }
                AppEvent::Input(_) => {}
                AppEvent::Countries(summaries) => self.browser.set_countries(summaries),
                AppEvent::Detail(outcome) => self.browser.apply_outcome(outcome),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent, tx: &UnboundedSender<AppEvent>) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.confirm_selection(tx),
            _ => {}
        }
    }

    /// Number of selectable rows: the empty option plus one per country.
    fn option_count(&self) -> usize {
        self.browser.state().countries.len() + 1
    }

    fn move_selection(&mut self, delta: i64) {
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let last = (self.option_count() - 1) as i64;
        let next = (current + delta).clamp(0, last);
        self.list_state.select(Some(next as usize));
    }

    fn confirm_selection(&mut self, tx: &UnboundedSender<AppEvent>) {
        let index = self.list_state.selected().unwrap_or(0);
        let name = option_name(&self.browser.state().countries, index);
        debug!(index, name = %name, "selection confirmed");

        if let Some(ticket) = self.browser.begin_selection(&name) {
            let repository = self.browser.repository();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = CountryBrowser::fetch_detail(repository, ticket).await;
                let _ = tx.send(AppEvent::Detail(outcome));
            });
        }
    }
}

/// Maps a list row index to a selection value. Row 0 is the empty option.
fn option_name(countries: &[CountrySummary], index: usize) -> String {
    index
        .checked_sub(1)
        .and_then(|i| countries.get(i))
        .map(|summary| summary.name.common.clone())
        .unwrap_or_default()
}

/// Reads terminal events on a dedicated thread. Exits when the UI loop drops
/// the receiving side.
fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(200)).unwrap_or(false) {
                match event::read() {
                    Ok(terminal_event) => {
                        if tx.send(AppEvent::Input(terminal_event)).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use facts_core::country::CountryName;

    use super::*;

    fn summaries(names: &[&str]) -> Vec<CountrySummary> {
        names
            .iter()
            .map(|name| CountrySummary {
                name: CountryName {
                    common: name.to_string(),
                    official: name.to_string(),
                },
            })
            .collect()
    }

    #[test]
    fn test_option_name_row_zero_is_empty() {
        let countries = summaries(&["Albania", "France"]);
        assert_eq!(option_name(&countries, 0), "");
    }

    #[test]
    fn test_option_name_maps_rows_to_countries() {
        let countries = summaries(&["Albania", "France"]);
        assert_eq!(option_name(&countries, 1), "Albania");
        assert_eq!(option_name(&countries, 2), "France");
    }

    #[test]
    fn test_option_name_out_of_range_is_empty() {
        let countries = summaries(&["Albania"]);
        assert_eq!(option_name(&countries, 5), "");
    }
}
