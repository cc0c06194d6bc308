//! Game rules.
//!
//! Each rule is an `impl GameState` block next to the types it returns:
//! - `setup`: envelope, seating and deal
//! - `movement`: dice-limited moves with random fallback
//! - `suggestion`: clockwise refutation search
//! - `accusation`: the terminal win/elimination check
//!
//! Every typed operation returns `Result<_, ClueError>` and makes no change
//! on error. The `handle_*` variants render the result as a message.

pub mod accusation;
pub mod movement;
pub mod setup;
pub mod suggestion;
pub mod vocabulary;

pub use accusation::AccusationOutcome;
pub use movement::MoveOutcome;
pub use setup::{setup_game, GameBuilder};
pub use suggestion::{PendingRefutation, SuggestionOutcome};
pub use vocabulary::Triple;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player named the envelope.
    Winner(PlayerId),
    /// Every player accused wrongly.
    Unsolved,
}

