//! Client-facing handle to interact with the runtime.

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{EngineSnapshot, Tier};

use crate::error::{Result, RuntimeError};
use crate::event::GameEvent;
use crate::worker::Command;

/// Cloneable façade over the session worker.
///
/// Mis-action commands (placing into a full row, undoing an empty slot)
/// succeed at this level and are absorbed as no-ops by the engine; only
/// configuration problems and a closed runtime surface as errors.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Start a session for `tier` with `count` words.
    pub async fn start_session(&self, tier: Tier, count: usize) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::StartSession {
            tier,
            count,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Place the pool letter at `pool_index` into the first empty slot.
    ///
    /// `letter` is the letter the caller saw at that index. The worker may
    /// have re-scrambled the pool since the caller's last snapshot; when the
    /// pair no longer matches, the placement is silently dropped instead of
    /// placing whatever letter moved there.
    pub async fn place_letter(&self, pool_index: usize, letter: char) -> Result<()> {
        self.send(Command::PlaceLetter { pool_index, letter }).await
    }

    /// Return the letter in `slot_index` to the pool.
    pub async fn undo_letter(&self, slot_index: usize) -> Result<()> {
        self.send(Command::UndoLetter { slot_index }).await
    }

    /// Replay audio for the current word.
    pub async fn replay_audio(&self) -> Result<()> {
        self.send(Command::ReplayAudio).await
    }

    /// Discard the current session and cancel its pending transitions.
    pub async fn exit_session(&self) -> Result<()> {
        self.send(Command::ExitSession).await
    }

    /// Read-only snapshot of the current session, `None` when idle.
    pub async fn query_snapshot(&self) -> Result<Option<EngineSnapshot>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::QuerySnapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}
