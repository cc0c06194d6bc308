//! Suspect/weapon/room triples and their validation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cards::{Card, Room, Solution, Suspect, Weapon};
use crate::core::ClueError;

/// A suspect, weapon and room named together in a suggestion or
/// accusation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub suspect: Suspect,
    pub weapon: Weapon,
    pub room: Room,
}

impl Triple {
    #[must_use]
    pub const fn new(suspect: Suspect, weapon: Weapon, room: Room) -> Self {
        Self {
            suspect,
            weapon,
            room,
        }
    }

    /// Validate three caller-supplied names against the official lists.
    ///
    /// Checks suspect, then weapon, then room, and reports the first name
    /// that is not recognised.
    pub fn parse(suspect: &str, weapon: &str, room: &str) -> Result<Self, ClueError> {
        let suspect =
            Suspect::from_str(suspect).map_err(|_| ClueError::UnknownSuspect(suspect.to_string()))?;
        let weapon =
            Weapon::from_str(weapon).map_err(|_| ClueError::UnknownWeapon(weapon.to_string()))?;
        let room = Room::from_str(room).map_err(|_| ClueError::UnknownRoom(room.to_string()))?;
        Ok(Self::new(suspect, weapon, room))
    }

    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Suspect(self.suspect),
            Card::Weapon(self.weapon),
            Card::Room(self.room),
        ]
    }

    /// Exact three-way match against the envelope.
    #[must_use]
    pub fn matches(&self, solution: &Solution) -> bool {
        self.suspect == solution.suspect && self.weapon == solution.weapon && self.room == solution.room
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in the {}", self.suspect, self.weapon, self.room)
    }
}
