//! Raw-mode terminal lifecycle.
//!
//! [`enter`] flips the host terminal into raw mode on the alternate screen
//! and hands back a guard that owns it. Dropping the guard restores the
//! host state, so early returns and panics cannot leave the shell raw.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen, yielding the owned terminal.
pub fn enter() -> Result<TerminalGuard> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(TerminalGuard { terminal })
}

fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Owns the live terminal and restores the host state on drop.
///
/// Derefs to [`Tui`] so rendering code takes `&mut Tui` and stays unaware
/// of the lifecycle.
pub struct TerminalGuard {
    terminal: Tui,
}

impl Deref for TerminalGuard {
    type Target = Tui;

    fn deref(&self) -> &Tui {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::warn!("failed to restore terminal: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_is_safe_without_a_prior_enter() {
        // Restoring a terminal that was never switched must not panic,
        // whatever the host (tty or not) answers.
        let _ = restore();
        let _ = restore();
    }
}
