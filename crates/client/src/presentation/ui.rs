//! Frame layout and screen dispatch.

use anyhow::Result;
use game_core::EngineSnapshot;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::terminal::Tui;
use crate::presentation::widgets;
use crate::state::Screen;

pub fn render(terminal: &mut Tui, screen: &Screen, snapshot: Option<&EngineSnapshot>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, screen, snapshot))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, screen: &Screen, snapshot: Option<&EngineSnapshot>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title banner + progress
            Constraint::Min(0),    // Active screen
            Constraint::Length(2), // Key hints
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], screen, snapshot);

    match screen {
        Screen::Select(select) => widgets::selector::render(frame, chunks[1], select),
        Screen::Playing(playing) => {
            widgets::game_area::render(frame, chunks[1], playing, snapshot)
        }
        Screen::Results(results) => widgets::results::render(frame, chunks[1], results),
    }

    widgets::footer::render(frame, chunks[2], screen);
}
