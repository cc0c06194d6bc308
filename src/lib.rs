//! # clue-engine
//!
//! A deterministic engine for Clue-style deduction games.
//!
//! ## Design Principles
//!
//! 1. **Synchronous state machine**: every operation runs to completion and
//!    returns. The engine never waits on a person; when a human must choose
//!    which card to show, the suggestion suspends and the caller resumes it.
//!
//! 2. **Seeded**: one seed fixes the envelope, the deal, the seating, the
//!    dice, fallback moves and automated card choices.
//!
//! 3. **Information hiding**: the envelope is only readable once the game
//!    is over, and a shown card reaches only the suggester's notebook.
//!
//! ## Modules
//!
//! - `core`: players, notebooks, game state, RNG, configuration, errors
//! - `cards`: suspect, weapon and room vocabularies; envelope and deal
//! - `board`: the room graph and its shortest-path distance table
//! - `rules`: setup, movement, suggestions, accusations
//! - `agents`: automated decision makers
//! - `driver`: a turn loop that plays agents against each other
//! - `tools`: text commands for conversational players
//!
//! ```
//! use clue_engine::rules::setup_game;
//!
//! let mut game = setup_game("Miss Scarlet", 42).unwrap();
//! game.start_turn().unwrap();
//! let reply = game.move_player("Miss Scarlet", "Conservatory");
//! assert!(reply.contains("Conservatory"));
//! ```

pub mod agents;
pub mod board;
pub mod cards;
pub mod core;
pub mod driver;
pub mod rules;
pub mod tools;

// Re-export commonly used types
pub use crate::core::{
    ClueError, Controller, GameConfig, GameEvent, GameRng, GameRngState, GameState, Notebook,
    Player, PlayerId, PlayerMap, Source,
};

pub use crate::board::{Distance, DistanceTable, RoomGraph};

pub use crate::cards::{Card, Room, Solution, Suspect, Weapon};

pub use crate::rules::{
    setup_game, AccusationOutcome, GameBuilder, GameResult, MoveOutcome, PendingRefutation,
    SuggestionOutcome, Triple,
};

pub use crate::agents::{Agent, DeductionAgent, PlayerView, RandomAgent};
pub use crate::driver::TurnDriver;
pub use crate::tools::ClueTools;
