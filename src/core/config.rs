//! Game configuration.
//!
//! `GameConfig` holds the table-level knobs: how many seats, whether one of
//! them is a person, hand size, starting room and seed. The board itself is
//! supplied separately to `GameBuilder` (see `board::RoomGraph`).
//!
//! Configs are plain serde data so a driver can load them from JSON.

use serde::{Deserialize, Serialize};
use strum::EnumCount;

use super::error::ClueError;
use crate::cards::{Room, Suspect};

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats, 2 to 6 (one per suspect at most).
    pub player_count: usize,

    /// Character played by the person at the table, seated first.
    /// `None` seats only automated players.
    pub human: Option<Suspect>,

    /// Cards dealt to each seat. Fewer if the deck runs out.
    pub hand_size: usize,

    /// Room every player starts in.
    pub starting_room: Room,

    /// Seed for every random decision in the game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            human: None,
            hand_size: 4,
            starting_room: Room::Lounge,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Standard four-seat game with a person playing `human`.
    #[must_use]
    pub fn with_human(human: Suspect, seed: u64) -> Self {
        Self {
            human: Some(human),
            seed,
            ..Self::default()
        }
    }

    /// Reject a configuration no game can be built from.
    pub fn check(&self) -> Result<(), ClueError> {
        if !(2..=Suspect::COUNT).contains(&self.player_count) {
            return Err(ClueError::InvalidConfig(format!(
                "Player count must be 2-{}",
                Suspect::COUNT
            )));
        }
        if self.hand_size == 0 {
            return Err(ClueError::InvalidConfig(
                "Hand size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// `check`, panicking on failure.
    pub fn validate(&self) {
        if let Err(err) = self.check() {
            panic!("{err}");
        }
    }
}
