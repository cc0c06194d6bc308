//! Card vocabularies.
//!
//! Suspects, weapons and rooms are closed enumerations. Parsing a name
//! through `FromStr` is the vocabulary check: anything outside the official
//! lists is rejected before it can reach game state.
//!
//! Each suspect also accepts its bare surname (`"Plum"` for
//! `Professor Plum`), but no other synonyms (`"Knife"` is not a weapon).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// A suspect card. Player characters are drawn from this list.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum Suspect {
    #[strum(to_string = "Miss Scarlet", serialize = "Scarlet")]
    MissScarlet,
    #[strum(to_string = "Colonel Mustard", serialize = "Mustard")]
    ColonelMustard,
    #[strum(to_string = "Mrs. Peacock", serialize = "Peacock")]
    MrsPeacock,
    #[strum(to_string = "Professor Plum", serialize = "Plum")]
    ProfessorPlum,
    #[strum(to_string = "Mr. Green", serialize = "Green")]
    MrGreen,
    #[strum(to_string = "Mrs. White", serialize = "White")]
    MrsWhite,
}

/// A weapon card.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum Weapon {
    Candlestick,
    Dagger,
    #[strum(to_string = "Lead Pipe")]
    LeadPipe,
    Revolver,
    Rope,
    Wrench,
}

/// A room card. Rooms double as board locations.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum Room {
    Kitchen,
    Ballroom,
    Conservatory,
    #[strum(to_string = "Dining Room")]
    DiningRoom,
    Lounge,
    Hall,
    Study,
    Library,
    #[strum(to_string = "Billiard Room")]
    BilliardRoom,
}

impl Room {
    /// Dense index for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Any card in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Suspect(Suspect),
    Weapon(Weapon),
    Room(Room),
}

impl Card {
    /// Total number of distinct cards.
    pub const COUNT: usize = Suspect::COUNT + Weapon::COUNT + Room::COUNT;

    /// Every card, suspects first, then weapons, then rooms.
    pub fn all() -> impl Iterator<Item = Card> {
        Suspect::iter()
            .map(Card::Suspect)
            .chain(Weapon::iter().map(Card::Weapon))
            .chain(Room::iter().map(Card::Room))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Suspect(s) => s.fmt(f),
            Card::Weapon(w) => w.fmt(f),
            Card::Room(r) => r.fmt(f),
        }
    }
}

impl From<Suspect> for Card {
    fn from(suspect: Suspect) -> Self {
        Card::Suspect(suspect)
    }
}

impl From<Weapon> for Card {
    fn from(weapon: Weapon) -> Self {
        Card::Weapon(weapon)
    }
}

impl From<Room> for Card {
    fn from(room: Room) -> Self {
        Card::Room(room)
    }
}

/// Comma-separated official names, used in vocabulary error messages.
pub(crate) fn official_names<T: IntoEnumIterator + std::fmt::Display>() -> String {
    T::iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
