//! Rendering for the country facts screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::app::App;

const EMPTY_OPTION_LABEL: &str = "Select a country";

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(frame.size());

    render_country_list(frame, app, chunks[0]);
    render_detail_panel(frame, app, chunks[1]);
}

fn render_country_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = app.browser.state();

    let mut items = Vec::with_capacity(state.countries.len() + 1);
    items.push(ListItem::new(EMPTY_OPTION_LABEL));
    items.extend(
        state
            .countries
            .iter()
            .map(|summary| ListItem::new(summary.name.common.clone())),
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Countries"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.browser.state();
    let block = Block::default().borders(Borders::ALL).title("Country Facts");

    // The loading indicator replaces the detail, matching the select flow:
    // it is cleared on success and failure alike.
    let paragraph = if state.loading {
        Paragraph::new("Loading...").block(block)
    } else if let Some(detail) = &state.detail {
        let label = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(detail.name.common.clone(), label)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Flag: ", label),
                Span::raw(detail.flags.svg.clone()),
            ]),
            Line::from(format!("      {}", detail.flag_alt())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Capital: ", label),
                Span::raw(detail.capital_display().to_string()),
            ]),
            Line::from(vec![
                Span::styled("Currency: ", label),
                Span::raw(detail.currency_display()),
            ]),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block)
    } else {
        Paragraph::new("Pick a country to see its capital, currency, and flag.").block(block)
    };

    frame.render_widget(paragraph, area);
}
