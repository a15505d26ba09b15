//! Active round view: letter slots, pool tiles, and the exit dialog.

use game_core::{EngineSnapshot, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::PlayingState;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    playing: &PlayingState,
    snapshot: Option<&EngineSnapshot>,
) {
    let Some(snapshot) = snapshot else {
        let waiting = Paragraph::new("Preparing session...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(waiting, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Status line
            Constraint::Length(3), // Slots
            Constraint::Length(3), // Pool
            Constraint::Min(0),    // Definition hint
        ])
        .split(area);

    render_status(frame, chunks[0], snapshot);
    render_slots(frame, chunks[1], snapshot);
    render_pool(frame, chunks[2], snapshot);
    render_definition(frame, chunks[3], snapshot);

    if playing.exit_confirm {
        render_exit_dialog(frame, area);
    }
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot) {
    let (text, style) = match snapshot.phase {
        Phase::Rejecting => (
            "Not quite. Try again!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Phase::Advancing => (
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        _ if snapshot.has_failed => (
            "Listen and spell the word (retry)",
            Style::default().fg(Color::Yellow),
        ),
        _ => (
            "Listen and spell the word",
            Style::default().fg(Color::Gray),
        ),
    };
    let status = Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn render_slots(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot) {
    let rejecting = snapshot.phase == Phase::Rejecting;
    let solved = snapshot.phase == Phase::Advancing;

    let mut spans = Vec::with_capacity(snapshot.slots.len() * 2);
    for slot in &snapshot.slots {
        let (text, style) = match slot {
            Some(letter) => {
                let color = if rejecting {
                    Color::Red
                } else if solved {
                    Color::Green
                } else {
                    Color::White
                };
                (
                    format!("[{}]", letter.to_ascii_uppercase()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            }
            None => ("[_]".to_string(), Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    let row = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Your Answer "));
    frame.render_widget(row, area);
}

fn render_pool(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot) {
    let mut spans = Vec::with_capacity(snapshot.pool.len() * 2);
    for letter in &snapshot.pool {
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(" "));
    }

    let row = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Letters "));
    frame.render_widget(row, area);
}

fn render_definition(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot) {
    let Some(definition) = &snapshot.definition else {
        return;
    };
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Hint: ", Style::default().fg(Color::DarkGray)),
        Span::styled(definition.as_str(), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

fn render_exit_dialog(frame: &mut Frame, area: Rect) {
    let dialog = centered_rect(40, 5, area);
    frame.render_widget(Clear, dialog);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Leave this session? Progress is lost.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "y Confirm   n Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Exit ")
            .style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(body, dialog);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
