//! Static word-bank content and loaders.
//!
//! This crate houses the per-tier word pools the session selector samples
//! from. The built-in bank ships as an embedded RON asset; the `loaders`
//! feature additionally reads custom banks from disk in the same format.
//!
//! Content is consumed by the runtime and never appears in engine state;
//! the engine only ever sees the `Session` drawn from a pool.

pub mod bank;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bank::WordBank;

#[cfg(feature = "loaders")]
pub use loaders::WordBankLoader;
