//! The envelope and the deck.
//!
//! At game start one suspect, one weapon and one room go into the envelope
//! (the `Solution`). Every other card forms the deck, which is shuffled and
//! dealt round-robin. Cards left after the deal are set aside face down.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::IntoEnumIterator;

use super::card::{Card, Room, Suspect, Weapon};
use crate::core::rng::GameRng;

/// The hidden suspect, weapon and room.
///
/// Immutable once a game is set up. `GameState` never hands it out before
/// the game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    pub suspect: Suspect,
    pub weapon: Weapon,
    pub room: Room,
}

impl Solution {
    #[must_use]
    pub const fn new(suspect: Suspect, weapon: Weapon, room: Room) -> Self {
        Self {
            suspect,
            weapon,
            room,
        }
    }

    /// Draw each component uniformly at random.
    pub fn random(rng: &mut GameRng) -> Self {
        let suspects: Vec<_> = Suspect::iter().collect();
        let weapons: Vec<_> = Weapon::iter().collect();
        let rooms: Vec<_> = Room::iter().collect();
        Self {
            suspect: suspects[rng.gen_range_usize(0..suspects.len())],
            weapon: weapons[rng.gen_range_usize(0..weapons.len())],
            room: rooms[rng.gen_range_usize(0..rooms.len())],
        }
    }

    /// The three envelope cards.
    #[must_use]
    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Suspect(self.suspect),
            Card::Weapon(self.weapon),
            Card::Room(self.room),
        ]
    }

    /// Check if a card is in the envelope.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in the {}", self.suspect, self.weapon, self.room)
    }
}

/// Cards available for dealing.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every card except the envelope, in canonical order.
    #[must_use]
    pub fn without(solution: &Solution) -> Self {
        Self {
            cards: Card::all().filter(|c| !solution.contains(*c)).collect(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal round-robin, one card per hand per pass, until every hand has
    /// `hand_size` cards or the deck runs out.
    ///
    /// Returns the hands and the leftover cards.
    #[must_use]
    pub fn deal(mut self, hands: usize, hand_size: usize) -> (Vec<Hand>, Vec<Card>) {
        let mut dealt = vec![Hand::new(); hands];
        for _ in 0..hand_size {
            for hand in &mut dealt {
                if let Some(card) = self.cards.pop() {
                    hand.push(card);
                }
            }
        }
        (dealt, self.cards)
    }
}

/// A player's hand. Four cards in the standard game.
pub type Hand = SmallVec<[Card; 4]>;
