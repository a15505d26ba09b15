//! Runtime error types.

use game_core::SessionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced to clients of the runtime.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Session configuration was rejected before a session was created.
    #[error("session could not be started: {0}")]
    Session(#[from] SessionError),

    /// The worker task is gone; the runtime is shutting down.
    #[error("runtime channel closed")]
    ChannelClosed,

    #[error("worker task failed to join: {0}")]
    WorkerJoin(#[from] tokio::task::JoinError),
}
