//! High-level runtime orchestrator.
//!
//! The runtime owns the background session worker, wires up command/event
//! channels, and exposes a builder-based API for clients.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_content::WordBank;

use crate::error::Result;
use crate::event::GameEvent;
use crate::handle::RuntimeHandle;
use crate::pronounce::{Pronouncer, SystemSpeech};
use crate::worker::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// How long the "wrong answer" flash locks the letters.
    pub reject_delay: Duration,
    /// Pause between a correct completion and the next round.
    pub advance_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            reject_delay: Duration::from_millis(800),
            advance_delay: Duration::from_millis(600),
        }
    }
}

/// Main runtime that orchestrates spelling sessions.
///
/// Design: the runtime owns the worker task; [`RuntimeHandle`] provides a
/// cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Dropping the last handle closes the command channel, which ends the
    /// worker loop.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await?;
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    bank: Option<Arc<WordBank>>,
    pronouncer: Option<Arc<dyn Pronouncer>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            bank: None,
            pronouncer: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the word bank sessions sample from.
    pub fn word_bank(mut self, bank: Arc<WordBank>) -> Self {
        self.bank = Some(bank);
        self
    }

    /// Set the pronunciation adapter (defaults to [`SystemSpeech`]).
    pub fn pronouncer(mut self, pronouncer: Arc<dyn Pronouncer>) -> Self {
        self.pronouncer = Some(pronouncer);
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called within a tokio runtime.
    pub fn build(self) -> Runtime {
        let bank = self.bank.unwrap_or_else(|| Arc::new(WordBank::builtin()));
        let pronouncer = self
            .pronouncer
            .unwrap_or_else(|| Arc::new(SystemSpeech) as Arc<dyn Pronouncer>);

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let (event_tx, _event_rx) =
            broadcast::channel::<GameEvent>(self.config.event_buffer_size.max(1));

        let handle = RuntimeHandle::new(command_tx, event_tx.clone());

        let worker = SessionWorker::new(bank, self.config, command_rx, event_tx, pronouncer);
        let worker_handle = tokio::spawn(worker.run());

        Runtime {
            handle,
            worker_handle,
        }
    }
}
