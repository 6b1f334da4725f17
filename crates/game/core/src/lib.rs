//! Deterministic pair-matching game logic shared by every frontend.
//!
//! `pairs-core` defines the canonical rules (deck, actions, engine) and
//! exposes pure APIs with no I/O, no clock, and no ambient randomness.
//! All state mutation flows through [`engine::GameEngine`], and deferred
//! work (the mismatch clear) comes back out as an explicit
//! [`engine::Effect`] the host schedules on the engine's behalf.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;

pub use action::{
    Action, ActionError, ActionOutcome, ActionTransition, IgnoreReason, ResetAction,
    ResolveMismatchAction, SelectAction,
};
pub use config::GameConfig;
pub use engine::{Effect, ExecutionOutcome, GameEngine};
pub use env::{GameEnv, PcgRng, RngOracle, compute_seed};
pub use state::{Card, CardId, CardPhase, Deck, DeckError, Face, GameState, MatchedSet, Selection};
