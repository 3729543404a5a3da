//! Hunter Logic
//!
//! Pattern-detecting strategies for the Iterated Prisoner's Dilemma.
//! Each hunter inspects the opponent's recorded moves, defects against a
//! predictable opponent and cooperates otherwise.
//! This crate is compiled to:
//! - Native (for tournament runners)
//! - WASM (for frontend decision replay)

mod config;
mod constant;
mod cycle;
mod error;
mod history;
mod stats;
mod strategy;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::DetectorConfig;
pub use constant::{alternator_hunter, cooperator_hunter, defector_hunter};
pub use cycle::{cycle_hunter, detect_cycle, detect_eventual_cycle, eventual_cycle_hunter, tile};
pub use error::HunterError;
pub use history::{History, MatchView};
pub use stats::{math_constant_hunter, random_hunter};
pub use strategy::{
    describe_hunter, execute_hunter, registry, Classifier, DecideFn, Hunter, HunterKind,
    MemoryDepth, Move, RegistryEntry,
};
