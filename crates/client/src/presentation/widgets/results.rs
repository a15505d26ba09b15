//! Final score screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::ResultsState;

pub fn render(frame: &mut Frame, area: Rect, results: &ResultsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Score card
            Constraint::Length(3), // Feedback
            Constraint::Min(0),
        ])
        .split(area);

    let score = &results.score;
    let card = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}", score.total_score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            results.rank.title(),
            Style::default().fg(Color::Indexed(63)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} of {} words spelled right on the first try",
                score.correct_first_try, score.total_words
            ),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Results "));
    frame.render_widget(card, chunks[0]);

    let feedback = Paragraph::new(Line::from(Span::styled(
        results.feedback,
        Style::default().fg(Color::Green),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(feedback, chunks[1]);
}
