//! Core engine types: players, notebooks, state, RNG, configuration, errors.
//!
//! Nothing here knows the rules of play. The rule operations in
//! `crate::rules` are the only code that changes a `GameState`.

pub mod config;
pub mod error;
pub mod event;
pub mod notebook;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::ClueError;
pub use event::GameEvent;
pub use notebook::{Notebook, Source};
pub use player::{Controller, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
