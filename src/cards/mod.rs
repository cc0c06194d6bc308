//! Cards: the three vocabularies, the envelope, and the deck.
//!
//! - `Suspect`, `Weapon`, `Room`: closed enumerations parsed from names
//! - `Card`: any one of the above
//! - `Solution`: the envelope triple
//! - `Deck`: everything else, shuffled and dealt

pub mod card;
pub mod deck;

pub use card::{Card, Room, Suspect, Weapon};
pub use deck::{Deck, Hand, Solution};
