//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration required to bootstrap the client runtime and UI.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub timing: TimingConfig,
    pub channels: ChannelConfig,
    pub audio: AudioConfig,
    /// Optional path to a custom word bank RON file.
    pub word_bank_path: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `LEXILE_REJECT_MS` / `LEXILE_ADVANCE_MS`
    /// - `LEXILE_COMMAND_BUFFER` / `LEXILE_EVENT_BUFFER`
    /// - `LEXILE_AUDIO` (`0`/`false` disables speech)
    /// - `LEXILE_WORD_BANK` (path to a custom bank)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("LEXILE_REJECT_MS") {
            config.timing.reject_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("LEXILE_ADVANCE_MS") {
            config.timing.advance_delay = Duration::from_millis(ms);
        }
        if let Some(capacity) = read_env::<usize>("LEXILE_COMMAND_BUFFER") {
            config.channels.command_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("LEXILE_EVENT_BUFFER") {
            config.channels.event_buffer = capacity.max(1);
        }
        if let Ok(raw) = env::var("LEXILE_AUDIO") {
            config.audio.enabled = !matches!(raw.trim(), "0" | "false" | "off");
        }
        if let Some(path) = env::var_os("LEXILE_WORD_BANK") {
            config.word_bank_path = Some(PathBuf::from(path));
        }

        config
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TimingConfig {
    /// How long the "wrong answer" flash lasts.
    pub reject_delay: Duration,
    /// Pause after a correct completion before the next round.
    pub advance_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reject_delay: Duration::from_millis(800),
            advance_delay: Duration::from_millis(600),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ChannelConfig {
    pub command_buffer: usize,
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            command_buffer: 32,
            event_buffer: 100,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AudioConfig {
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn read_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.trim().parse().ok())
}
