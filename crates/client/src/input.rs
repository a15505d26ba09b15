//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-intent mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::Screen;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Exit the application.
    Quit,
    /// Move the tier cursor on the selection screen.
    TierCursor(isize),
    /// Move the word-count cursor on the selection screen.
    CountCursor(isize),
    /// Start a session with the current selection.
    StartSession,
    /// Place the first pool tile showing this letter.
    Place(char),
    /// Undo the most recently filled slot.
    UndoLast,
    /// Replay the pronunciation for the current word.
    Replay,
    /// Open the exit-confirmation dialog.
    RequestExit,
    /// Confirm leaving the session.
    ConfirmExit,
    /// Dismiss the exit-confirmation dialog.
    CancelExit,
    /// Leave the results screen for a new selection.
    Restart,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a screen-appropriate intent.
pub fn map_key(screen: &Screen, key: KeyEvent) -> Intent {
    match screen {
        Screen::Select(_) => select_key(key),
        Screen::Playing(playing) if playing.exit_confirm => dialog_key(key),
        Screen::Playing(_) => playing_key(key),
        Screen::Results(_) => results_key(key),
    }
}

fn select_key(key: KeyEvent) -> Intent {
    match key.code {
        KeyCode::Up => Intent::TierCursor(-1),
        KeyCode::Down => Intent::TierCursor(1),
        KeyCode::Left => Intent::CountCursor(-1),
        KeyCode::Right => Intent::CountCursor(1),
        KeyCode::Enter => Intent::StartSession,
        KeyCode::Esc => Intent::Quit,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'k' => Intent::TierCursor(-1),
            'j' => Intent::TierCursor(1),
            'h' => Intent::CountCursor(-1),
            'l' => Intent::CountCursor(1),
            'q' => Intent::Quit,
            _ => Intent::None,
        },
        _ => Intent::None,
    }
}

fn playing_key(key: KeyEvent) -> Intent {
    match key.code {
        // Tab replays audio; every letter key is reserved for spelling.
        KeyCode::Tab => Intent::Replay,
        KeyCode::Backspace => Intent::UndoLast,
        KeyCode::Esc => Intent::RequestExit,
        KeyCode::Char(ch) if ch.is_ascii_alphabetic() => Intent::Place(ch.to_ascii_lowercase()),
        _ => Intent::None,
    }
}

fn dialog_key(key: KeyEvent) -> Intent {
    match key.code {
        KeyCode::Enter => Intent::ConfirmExit,
        KeyCode::Esc => Intent::CancelExit,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'y' => Intent::ConfirmExit,
            'n' => Intent::CancelExit,
            _ => Intent::None,
        },
        _ => Intent::None,
    }
}

fn results_key(key: KeyEvent) -> Intent {
    match key.code {
        KeyCode::Enter => Intent::Restart,
        KeyCode::Esc => Intent::Quit,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'r' => Intent::Restart,
            'q' => Intent::Quit,
            _ => Intent::None,
        },
        _ => Intent::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PlayingState, Screen};
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use game_core::ScoreData;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn letters_place_tiles_while_playing() {
        let screen = Screen::playing();
        assert_eq!(map_key(&screen, key(KeyCode::Char('A'))), Intent::Place('a'));
        assert_eq!(map_key(&screen, key(KeyCode::Char('z'))), Intent::Place('z'));
        assert_eq!(map_key(&screen, key(KeyCode::Char('3'))), Intent::None);
    }

    #[test]
    fn playing_reserves_non_letter_keys_for_commands() {
        let screen = Screen::playing();
        assert_eq!(map_key(&screen, key(KeyCode::Tab)), Intent::Replay);
        assert_eq!(map_key(&screen, key(KeyCode::Backspace)), Intent::UndoLast);
        assert_eq!(map_key(&screen, key(KeyCode::Esc)), Intent::RequestExit);
    }

    #[test]
    fn exit_dialog_captures_input() {
        let screen = Screen::Playing(PlayingState { exit_confirm: true });
        assert_eq!(map_key(&screen, key(KeyCode::Char('y'))), Intent::ConfirmExit);
        assert_eq!(map_key(&screen, key(KeyCode::Char('n'))), Intent::CancelExit);
        assert_eq!(map_key(&screen, key(KeyCode::Char('x'))), Intent::None);
        // A letter never reaches the round while the dialog is open.
        assert_ne!(map_key(&screen, key(KeyCode::Char('c'))), Intent::Place('c'));
    }

    #[test]
    fn selection_screen_navigates_and_starts() {
        let screen = Screen::select();
        assert_eq!(map_key(&screen, key(KeyCode::Up)), Intent::TierCursor(-1));
        assert_eq!(map_key(&screen, key(KeyCode::Right)), Intent::CountCursor(1));
        assert_eq!(map_key(&screen, key(KeyCode::Enter)), Intent::StartSession);
        assert_eq!(map_key(&screen, key(KeyCode::Char('q'))), Intent::Quit);
    }

    #[test]
    fn results_screen_restarts_or_quits() {
        let screen = Screen::results(ScoreData {
            total_score: 50,
            correct_first_try: 1,
            total_words: 2,
        });
        assert_eq!(map_key(&screen, key(KeyCode::Enter)), Intent::Restart);
        assert_eq!(map_key(&screen, key(KeyCode::Char('q'))), Intent::Quit);
    }
}
