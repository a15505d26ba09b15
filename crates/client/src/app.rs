//! Application wiring and the main event loop.
//!
//! Pumps runtime events, keyboard input, and rendering; screen transitions
//! follow the runtime's event stream rather than local guesses.

use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use game_core::EngineSnapshot;
use runtime::{
    GameEvent, Pronouncer, Runtime, RuntimeConfig, RuntimeError, RuntimeHandle, SilentPronouncer,
    SystemSpeech,
};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{self, Duration};

use game_content::{WordBank, WordBankLoader};

use crate::config::CliConfig;
use crate::input::{self, Intent};
use crate::presentation::{
    terminal::{self, Tui},
    ui,
};
use crate::state::Screen;

const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    runtime: Runtime,
    handle: RuntimeHandle,
    event_rx: broadcast::Receiver<GameEvent>,
    screen: Screen,
    snapshot: Option<EngineSnapshot>,
}

impl App {
    pub fn new(config: CliConfig) -> Result<Self> {
        let bank = match &config.word_bank_path {
            Some(path) => WordBankLoader::load(path)
                .with_context(|| format!("loading word bank from {}", path.display()))?,
            None => WordBank::builtin(),
        };

        let pronouncer: Arc<dyn Pronouncer> = if config.audio.enabled {
            Arc::new(SystemSpeech)
        } else {
            Arc::new(SilentPronouncer)
        };

        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                event_buffer_size: config.channels.event_buffer,
                command_buffer_size: config.channels.command_buffer,
                reject_delay: config.timing.reject_delay,
                advance_delay: config.timing.advance_delay,
            })
            .word_bank(Arc::new(bank))
            .pronouncer(pronouncer)
            .build();

        let handle = runtime.handle();
        let event_rx = runtime.subscribe_events();

        Ok(Self {
            runtime,
            handle,
            event_rx,
            screen: Screen::select(),
            snapshot: None,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        let mut terminal = terminal::enter()?;

        ui::render(&mut terminal, &self.screen, self.snapshot.as_ref())?;

        loop {
            tokio::select! {
                result = self.event_rx.recv() => {
                    if self.handle_runtime_channel(result, &mut terminal).await? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(&mut terminal).await? {
                        break;
                    }
                }
            }
        }

        drop(terminal);
        self.runtime.shutdown().await?;
        Ok(())
    }

    async fn handle_runtime_channel(
        &mut self,
        result: std::result::Result<GameEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                self.apply_event(event).await?;
                while let Ok(event) = self.event_rx.try_recv() {
                    self.apply_event(event).await?;
                }
                self.render(terminal)?;
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("dropped {skipped} stale events");
                self.refresh_snapshot().await?;
                Ok(false)
            }
        }
    }

    async fn apply_event(&mut self, event: GameEvent) -> Result<()> {
        match event {
            GameEvent::SessionStarted => {
                self.screen = Screen::playing();
                self.refresh_snapshot().await?;
            }
            GameEvent::SessionCompleted(score) => {
                self.screen = Screen::results(score);
                self.snapshot = None;
            }
            GameEvent::SessionExited => {
                self.screen = Screen::select();
                self.snapshot = None;
            }
            GameEvent::RoundStarted { .. }
            | GameEvent::StateChanged
            | GameEvent::WordRejected
            | GameEvent::WordSolved { .. } => {
                self.refresh_snapshot().await?;
            }
        }
        Ok(())
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let intent = input::map_key(&self.screen, key);
                let quit = self.apply_intent(intent).await?;
                self.render(terminal)?;
                Ok(quit)
            }
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn apply_intent(&mut self, intent: Intent) -> Result<bool> {
        match intent {
            Intent::Quit => return Ok(true),
            Intent::TierCursor(delta) => {
                if let Screen::Select(select) = &mut self.screen {
                    select.move_tier(delta);
                }
            }
            Intent::CountCursor(delta) => {
                if let Screen::Select(select) = &mut self.screen {
                    select.move_count(delta);
                }
            }
            Intent::StartSession => self.start_session().await?,
            Intent::Place(letter) => {
                // Resolved against the cached snapshot; the worker drops the
                // pair if a rescramble moved the pool underneath us.
                let pool_index = self
                    .snapshot
                    .as_ref()
                    .and_then(|snapshot| snapshot.pool.iter().position(|&c| c == letter));
                if let Some(pool_index) = pool_index {
                    self.handle.place_letter(pool_index, letter).await?;
                }
            }
            Intent::UndoLast => {
                let slot_index = self
                    .snapshot
                    .as_ref()
                    .and_then(|snapshot| snapshot.slots.iter().rposition(Option::is_some));
                if let Some(slot_index) = slot_index {
                    self.handle.undo_letter(slot_index).await?;
                }
            }
            Intent::Replay => self.handle.replay_audio().await?,
            Intent::RequestExit => {
                if let Screen::Playing(playing) = &mut self.screen {
                    playing.exit_confirm = true;
                }
            }
            Intent::ConfirmExit => {
                self.handle.exit_session().await?;
            }
            Intent::CancelExit => {
                if let Screen::Playing(playing) = &mut self.screen {
                    playing.exit_confirm = false;
                }
            }
            Intent::Restart => {
                self.screen = Screen::select();
                self.snapshot = None;
            }
            Intent::None => {}
        }
        Ok(false)
    }

    async fn start_session(&mut self) -> Result<()> {
        let Screen::Select(select) = &mut self.screen else {
            return Ok(());
        };
        select.error = None;
        let (tier, count) = (select.tier(), select.count());

        match self.handle.start_session(tier, count).await {
            // The SessionStarted event moves us to the playing screen.
            Ok(()) => Ok(()),
            Err(RuntimeError::Session(error)) => {
                if let Screen::Select(select) = &mut self.screen {
                    select.error = Some(error.to_string());
                }
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn refresh_snapshot(&mut self) -> Result<()> {
        self.snapshot = self.handle.query_snapshot().await?;
        Ok(())
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &self.screen, self.snapshot.as_ref())
    }
}
