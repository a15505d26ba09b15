//! Key-hint footer, varying per screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Screen;

pub fn render(frame: &mut Frame, area: Rect, screen: &Screen) {
    let hints = match screen {
        Screen::Select(_) => "↑/↓ Level  ←/→ Words  Enter Start  q/Esc Quit",
        Screen::Playing(playing) if playing.exit_confirm => "y/Enter Confirm  n/Esc Cancel",
        Screen::Playing(_) => "a-z Place  Backspace Undo  Tab Replay  Esc Exit",
        Screen::Results(_) => "Enter/r Play Again  q/Esc Quit",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
