//! A player's private notebook.
//!
//! Records every card the player knows is *not* in the envelope, together
//! with where that knowledge came from: the player's own hand, or a
//! refutation shown by another player. Cards the player has never seen have
//! no entry.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::cards::{Card, Room, Suspect, Weapon};

/// Where a notebook entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The card is in the player's own hand.
    Own,
    /// The card was shown by this character during a refutation.
    ShownBy(Suspect),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Own => write!(f, "Self"),
            Source::ShownBy(who) => who.fmt(f),
        }
    }
}

/// Mapping from card to source.
///
/// Backed by a persistent ordered map so clones are cheap and iteration
/// order is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    entries: OrdMap<Card, Source>,
}

impl Notebook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a card. A later record for the same card replaces the source.
    pub fn record(&mut self, card: Card, source: Source) {
        self.entries.insert(card, source);
    }

    #[must_use]
    pub fn source(&self, card: Card) -> Option<Source> {
        self.entries.get(&card).copied()
    }

    #[must_use]
    pub fn knows(&self, card: Card) -> bool {
        self.entries.contains_key(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (card, source) pairs in card order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, Source)> + '_ {
        self.entries.iter().map(|(c, s)| (*c, *s))
    }

    // === Deduction helpers ===

    /// Suspects not yet ruled out.
    #[must_use]
    pub fn unknown_suspects(&self) -> Vec<Suspect> {
        Suspect::iter().filter(|s| !self.knows(Card::Suspect(*s))).collect()
    }

    /// Weapons not yet ruled out.
    #[must_use]
    pub fn unknown_weapons(&self) -> Vec<Weapon> {
        Weapon::iter().filter(|w| !self.knows(Card::Weapon(*w))).collect()
    }

    /// Rooms not yet ruled out.
    #[must_use]
    pub fn unknown_rooms(&self) -> Vec<Room> {
        Room::iter().filter(|r| !self.knows(Card::Room(*r))).collect()
    }
}
