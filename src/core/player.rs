//! Players: seat identifiers, per-seat storage, and player data.
//!
//! ## PlayerId
//!
//! Seat index in turn order. Seat 0 plays first; "clockwise" means
//! increasing seat index, wrapping around.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Character, controller, hand, location, elimination flag and notebook.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::notebook::{Notebook, Source};
use crate::cards::{Card, Hand, Room, Suspect};

/// Seat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat clockwise.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Every other seat exactly once, clockwise, starting with the seat
    /// immediately after this one.
    ///
    /// ```
    /// use clue_engine::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::new(2).others_clockwise(4).collect();
    /// assert_eq!(order, vec![PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn others_clockwise(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let start = self.index();
        (1..player_count).map(move |i| PlayerId(((start + i) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use clue_engine::core::{PlayerId, PlayerMap};
///
/// let mut turns: PlayerMap<u32> = PlayerMap::from_vec(vec![0; 4]);
/// turns[PlayerId::new(1)] += 1;
/// assert_eq!(turns[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build from values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Find the first seat whose data matches.
    pub fn position(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<PlayerId> {
        self.data
            .iter()
            .position(|v| predicate(v))
            .map(|i| PlayerId(i as u8))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Who makes a player's decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// A person at the table. Card reveals suspend for their choice.
    Human,
    /// A program. Card reveals are picked at random by the engine.
    Automated,
}

/// One seat at the table.
///
/// The hand is fixed after the deal and elimination is one-way, so both are
/// only readable from outside the crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub character: Suspect,
    pub controller: Controller,
    pub location: Room,
    hand: Hand,
    eliminated: bool,
    notebook: Notebook,
}

impl Player {
    /// Create a player holding `hand`. Every held card goes into the
    /// notebook with source `Own`.
    #[must_use]
    pub fn new(character: Suspect, controller: Controller, location: Room, hand: Hand) -> Self {
        let mut notebook = Notebook::new();
        for card in &hand {
            notebook.record(*card, Source::Own);
        }
        Self {
            character,
            controller,
            location,
            hand,
            eliminated: false,
            notebook,
        }
    }

    /// Display name: the character's official name.
    #[must_use]
    pub fn name(&self) -> String {
        self.character.to_string()
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    #[must_use]
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.controller == Controller::Human
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }

    pub(crate) fn notebook_mut(&mut self) -> &mut Notebook {
        &mut self.notebook
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Weapon;
    use smallvec::smallvec;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Seat 0");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(PlayerId::new(2).next(4), PlayerId::new(3));
        assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    }

    #[test]
    fn test_others_clockwise_excludes_self() {
        let order: Vec<_> = PlayerId::new(0).others_clockwise(4).collect();
        assert_eq!(order, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);

        let order: Vec<_> = PlayerId::new(3).others_clockwise(4).collect();
        assert_eq!(order, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);

        assert_eq!(PlayerId::new(0).others_clockwise(1).count(), 0);
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec![0, 10, 20, 30]);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_position() {
        let map = PlayerMap::from_vec(vec!["a", "b", "c"]);
        assert_eq!(map.position(|v| *v == "c"), Some(PlayerId::new(2)));
        assert_eq!(map.position(|v| *v == "z"), None);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_new_player_knows_own_hand() {
        let hand: Hand = smallvec![Card::Weapon(Weapon::Rope), Card::Room(Room::Hall)];
        let player = Player::new(Suspect::MrGreen, Controller::Automated, Room::Lounge, hand);

        assert_eq!(player.name(), "Mr. Green");
        assert_eq!(player.notebook().len(), 2);
        assert_eq!(player.notebook().source(Card::Room(Room::Hall)), Some(Source::Own));
        assert!(player.holds(Card::Weapon(Weapon::Rope)));
        assert!(!player.is_eliminated());
        assert!(!player.is_human());
    }

    #[test]
    fn test_elimination_is_sticky() {
        let mut player = Player::new(Suspect::MrsWhite, Controller::Human, Room::Lounge, Hand::new());
        player.eliminate();
        player.eliminate();
        assert!(player.is_eliminated());
    }
}
