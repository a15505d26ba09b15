//! Async session orchestration on top of [`game_core`].
//!
//! The runtime owns the spelling engine for the lifetime of a session,
//! realizes the transient `Rejecting`/`Advancing` phases as deferred timer
//! callbacks, publishes [`GameEvent`]s on a broadcast channel, and drives
//! the pronunciation adapter. Clients interact exclusively through the
//! cloneable [`RuntimeHandle`].

mod error;
mod event;
mod handle;
mod pronounce;
mod runtime;
mod worker;

pub use error::{Result, RuntimeError};
pub use event::GameEvent;
pub use handle::RuntimeHandle;
pub use pronounce::{Pronouncer, SilentPronouncer, SystemSpeech};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
