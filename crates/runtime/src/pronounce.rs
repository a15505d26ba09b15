//! Best-effort pronunciation adapter.
//!
//! The engine's only contract with audio is "fire and forget": a call must
//! never block, never panic, and never surface an error into the score
//! flow. Platform probing and fallback selection live entirely behind the
//! [`Pronouncer`] trait so the rest of the system is testable without any
//! audio capability.

use std::ffi::OsString;
use std::process::Stdio;
use std::sync::OnceLock;

use tracing::debug;

/// Fire-and-forget pronunciation of a word.
///
/// Implementations must return immediately and swallow every failure.
pub trait Pronouncer: Send + Sync {
    fn pronounce(&self, word: &str);
}

/// No-op adapter for tests and `--no-audio` runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentPronouncer;

impl Pronouncer for SilentPronouncer {
    fn pronounce(&self, _word: &str) {}
}

/// Speech command resolved from the host system.
#[derive(Clone, Debug)]
struct SpeechCommand {
    program: &'static str,
    args: &'static [&'static str],
}

/// Candidate text-to-speech programs, tried in order.
const CANDIDATES: &[SpeechCommand] = &[
    SpeechCommand {
        program: "say",
        args: &[],
    },
    SpeechCommand {
        program: "espeak-ng",
        args: &["-v", "en-us", "-s", "140"],
    },
    SpeechCommand {
        program: "espeak",
        args: &["-v", "en-us", "-s", "140"],
    },
];

/// Process-wide cache of the resolved speech command.
///
/// Lazily initialized on first use; `None` means no candidate was found and
/// every subsequent call is a cheap no-op.
static RESOLVED: OnceLock<Option<SpeechCommand>> = OnceLock::new();

/// Local text-to-speech via whichever system synthesizer is installed.
///
/// Must run inside a tokio runtime; the spawned child is reaped by a
/// detached task so playback never delays the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemSpeech;

impl SystemSpeech {
    fn resolved() -> Option<&'static SpeechCommand> {
        RESOLVED
            .get_or_init(|| {
                let found = CANDIDATES.iter().find(|c| in_path(c.program)).cloned();
                match &found {
                    Some(cmd) => debug!(program = cmd.program, "speech synthesizer resolved"),
                    None => debug!("no speech synthesizer found; audio disabled"),
                }
                found
            })
            .as_ref()
    }
}

impl Pronouncer for SystemSpeech {
    fn pronounce(&self, word: &str) {
        let Some(cmd) = Self::resolved() else {
            return;
        };

        let spawned = tokio::process::Command::new(cmd.program)
            .args(cmd.args)
            .arg(word.trim().to_ascii_lowercase())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                // Reap off to the side; the game never waits on audio.
                tokio::spawn(async move {
                    let _ = child.wait().await;
                });
            }
            Err(e) => debug!("speech synthesis failed silently: {e}"),
        }
    }
}

/// Checks whether `program` is an executable on the search path.
fn in_path(program: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| {
        let mut candidate = OsString::from(program);
        if cfg!(windows) {
            candidate.push(".exe");
        }
        dir.join(&candidate).is_file()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_pronouncer_never_blocks() {
        SilentPronouncer.pronounce("anything");
    }

    #[test]
    fn unknown_program_is_not_in_path() {
        assert!(!in_path("definitely-not-a-real-synthesizer"));
    }
}
