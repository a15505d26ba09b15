//! Session worker that owns the authoritative [`game_core::SpellingEngine`].
//!
//! Receives commands from [`RuntimeHandle`], mutates the engine, publishes
//! events, and schedules the deferred callbacks that resolve the transient
//! `Rejecting`/`Advancing` phases.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::debug;

use game_content::WordBank;
use game_core::{
    EngineSnapshot, PlaceOutcome, RoundAdvance, Session, SpellingEngine, Tier, UndoOutcome,
};

use crate::error::Result;
use crate::event::GameEvent;
use crate::pronounce::Pronouncer;
use crate::runtime::RuntimeConfig;

/// Commands that can be sent to the session worker.
pub(crate) enum Command {
    /// Create a session for `tier`/`count` and begin its first round.
    StartSession {
        tier: Tier,
        count: usize,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Place the pool letter at `pool_index` into the first empty slot.
    /// `letter` is what the client saw at that index; a mismatch marks the
    /// view stale and the placement is dropped.
    PlaceLetter { pool_index: usize, letter: char },
    /// Return the letter in `slot_index` to the pool.
    UndoLetter { slot_index: usize },
    /// Replay audio for the current word.
    ReplayAudio,
    /// Discard the session immediately.
    ExitSession,
    /// Read-only snapshot of the current session, if any.
    QuerySnapshot {
        reply: oneshot::Sender<Option<EngineSnapshot>>,
    },
}

/// Deferred phase resolutions sent back to the worker by timer tasks.
///
/// Each carries the session generation it was scheduled under; a stale
/// generation means the session was exited or replaced in the meantime and
/// the callback must not touch the current one.
enum TimerEvent {
    ResolveReject { generation: u64 },
    ResolveAdvance { generation: u64 },
}

/// Background task that processes session commands.
pub(crate) struct SessionWorker {
    bank: Arc<WordBank>,
    config: RuntimeConfig,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
    pronouncer: Arc<dyn Pronouncer>,
    timer_tx: mpsc::Sender<TimerEvent>,
    timer_rx: mpsc::Receiver<TimerEvent>,
    engine: Option<SpellingEngine<SmallRng>>,
    generation: u64,
}

impl SessionWorker {
    pub(crate) fn new(
        bank: Arc<WordBank>,
        config: RuntimeConfig,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
        pronouncer: Arc<dyn Pronouncer>,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::channel(8);
        Self {
            bank,
            config,
            command_rx,
            event_tx,
            pronouncer,
            timer_tx,
            timer_rx,
            engine: None,
            generation: 0,
        }
    }

    /// Main worker loop; ends when every [`RuntimeHandle`] is dropped.
    pub(crate) async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(timer) = self.timer_rx.recv() => self.handle_timer(timer),
            }
        }
        debug!("session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::StartSession { tier, count, reply } => {
                let result = self.start_session(tier, count);
                if reply.send(result).is_err() {
                    debug!("StartSession reply channel closed (caller dropped)");
                }
            }
            Command::PlaceLetter { pool_index, letter } => self.place_letter(pool_index, letter),
            Command::UndoLetter { slot_index } => self.undo_letter(slot_index),
            Command::ReplayAudio => {
                if let Some(engine) = &self.engine {
                    self.pronouncer.pronounce(engine.current_word().text());
                }
            }
            Command::ExitSession => self.exit_session(),
            Command::QuerySnapshot { reply } => {
                let snapshot = self.engine.as_ref().map(|engine| engine.snapshot());
                if reply.send(snapshot).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn start_session(&mut self, tier: Tier, count: usize) -> Result<()> {
        let mut rng = SmallRng::from_entropy();
        let session = Session::draw(self.bank.pool(tier), count, &mut rng)?;
        let engine = SpellingEngine::new(session, rng)?;

        // Replacing a session invalidates every pending timer. A failed draw
        // leaves the previous session (and its timers) untouched.
        self.generation += 1;

        tracing::info!(%tier, count, "session started");
        self.pronouncer.pronounce(engine.current_word().text());
        let total_words = engine.snapshot().total_words;
        self.engine = Some(engine);

        self.publish(GameEvent::SessionStarted);
        self.publish(GameEvent::RoundStarted {
            word_index: 0,
            total_words,
        });
        Ok(())
    }

    fn exit_session(&mut self) {
        // Bump the generation even if no session is live so any straggling
        // timer from a just-replaced session is orphaned.
        self.generation += 1;
        if self.engine.take().is_some() {
            tracing::info!("session exited");
            self.publish(GameEvent::SessionExited);
        }
    }

    fn place_letter(&mut self, pool_index: usize, letter: char) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        match engine.place_letter(pool_index, letter) {
            PlaceOutcome::Ignored => {}
            PlaceOutcome::Placed => self.publish(GameEvent::StateChanged),
            PlaceOutcome::Rejected => {
                debug!("submission rejected");
                self.publish(GameEvent::WordRejected);
                self.publish(GameEvent::StateChanged);
                self.schedule(TimerKind::Reject);
            }
            PlaceOutcome::Solved { first_try } => {
                debug!(first_try, "word solved");
                self.publish(GameEvent::WordSolved { first_try });
                self.publish(GameEvent::StateChanged);
                self.schedule(TimerKind::Advance);
            }
        }
    }

    fn undo_letter(&mut self, slot_index: usize) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if engine.undo_letter(slot_index) == UndoOutcome::Returned {
            self.publish(GameEvent::StateChanged);
        }
    }

    fn handle_timer(&mut self, timer: TimerEvent) {
        match timer {
            TimerEvent::ResolveReject { generation } => {
                if generation != self.generation {
                    debug!("dropping stale reject timer");
                    return;
                }
                if let Some(engine) = self.engine.as_mut() {
                    engine.resolve_rejection();
                    self.publish(GameEvent::StateChanged);
                }
            }
            TimerEvent::ResolveAdvance { generation } => {
                if generation != self.generation {
                    debug!("dropping stale advance timer");
                    return;
                }
                self.advance_round();
            }
        }
    }

    fn advance_round(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        match engine.advance_round() {
            Some(RoundAdvance::NextWord) => {
                let snapshot = engine.snapshot();
                self.pronouncer.pronounce(&snapshot.target);
                self.publish(GameEvent::RoundStarted {
                    word_index: snapshot.word_index,
                    total_words: snapshot.total_words,
                });
                self.publish(GameEvent::StateChanged);
            }
            Some(RoundAdvance::Complete(score)) => {
                tracing::info!(
                    total_score = score.total_score,
                    correct_first_try = score.correct_first_try,
                    "session complete"
                );
                self.publish(GameEvent::SessionCompleted(score));
            }
            None => {}
        }
    }

    /// Schedules the deferred resolution for the current transient phase.
    ///
    /// At most one transition is in flight at a time: the engine's phase
    /// guard locks input until the matching resolve lands.
    fn schedule(&self, kind: TimerKind) {
        let generation = self.generation;
        let (delay, event) = match kind {
            TimerKind::Reject => (
                self.config.reject_delay,
                TimerEvent::ResolveReject { generation },
            ),
            TimerKind::Advance => (
                self.config.advance_delay,
                TimerEvent::ResolveAdvance { generation },
            ),
        };

        let timer_tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = timer_tx.send(event).await;
        });
    }

    fn publish(&self, event: GameEvent) {
        // A send error only means no subscriber is currently listening.
        let _ = self.event_tx.send(event);
    }
}

enum TimerKind {
    Reject,
    Advance,
}
