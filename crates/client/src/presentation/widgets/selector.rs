//! Tier and word-count selection screen.

use game_core::Tier;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;

use crate::state::{COUNT_OPTIONS, SelectState};

pub fn render(frame: &mut Frame, area: Rect, select: &SelectState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Tier list
            Constraint::Length(3), // Word count row
            Constraint::Length(1), // Error line
        ])
        .split(area);

    render_tiers(frame, chunks[0], select);
    render_counts(frame, chunks[1], select);

    if let Some(error) = &select.error {
        let line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(line, chunks[2]);
    }
}

fn render_tiers(frame: &mut Frame, area: Rect, select: &SelectState) {
    let items: Vec<ListItem> = Tier::iter()
        .enumerate()
        .map(|(index, tier)| {
            let selected = index == select.tier_cursor;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}", tier.label()), style),
                Span::styled(
                    format!("  {}", tier.lexile_range()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("  {}", tier.description()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Reading Level "),
    );
    frame.render_widget(list, area);
}

fn render_counts(frame: &mut Frame, area: Rect, select: &SelectState) {
    let mut spans = vec![Span::raw(" ")];
    for (index, count) in COUNT_OPTIONS.iter().enumerate() {
        let style = if index == select.count_cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {count} "), style));
        spans.push(Span::raw(" "));
    }

    let row = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Words "));
    frame.render_widget(row, area);
}
