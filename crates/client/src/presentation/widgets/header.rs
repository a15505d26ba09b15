//! Title banner with session progress.

use game_core::EngineSnapshot;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use crate::state::Screen;

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen, snapshot: Option<&EngineSnapshot>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "LEXILE MASTER",
            Style::default()
                .fg(Color::Indexed(63))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Spelling Assessment",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Progress bar only makes sense while a session is live.
    if let (Screen::Playing(_), Some(snapshot)) = (screen, snapshot) {
        let ratio = snapshot.word_index as f64 / snapshot.total_words.max(1) as f64;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Indexed(63)))
            .label(format!(
                "{} / {}",
                snapshot.word_index + 1,
                snapshot.total_words
            ))
            .ratio(ratio.clamp(0.0, 1.0));
        frame.render_widget(gauge, chunks[1]);
    }
}
