//! Decision makers for seats.
//!
//! The engine never decides anything for a player except which card an
//! automated refuter shows. Everything else (where to go, what to suggest,
//! whether to accuse) comes from outside. An [`Agent`] is that outside
//! decision maker in a form [`crate::driver::TurnDriver`] can call.
//!
//! Agents see the game through a [`PlayerView`]: their own seat, hand and
//! notebook plus public information. They never see other hands or the
//! envelope.

pub mod deduction;
pub mod random;

pub use deduction::DeductionAgent;
pub use random::RandomAgent;

use im::Vector;

use crate::board::Distance;
use crate::cards::{Card, Room};
use crate::core::{GameEvent, GameState, Notebook, Player, PlayerId};
use crate::rules::{SuggestionOutcome, Triple};

/// What one seat is allowed to know.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    state: &'a GameState,
    seat: PlayerId,
}

impl<'a> PlayerView<'a> {
    #[must_use]
    pub fn new(state: &'a GameState, seat: PlayerId) -> Self {
        Self { state, seat }
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    #[must_use]
    pub fn me(&self) -> &'a Player {
        self.state.player(self.seat)
    }

    #[must_use]
    pub fn location(&self) -> Room {
        self.me().location
    }

    #[must_use]
    pub fn hand(&self) -> &'a [Card] {
        self.me().hand()
    }

    #[must_use]
    pub fn notebook(&self) -> &'a Notebook {
        self.me().notebook()
    }

    #[must_use]
    pub fn dice_roll(&self) -> Option<u8> {
        self.state.current_dice_roll()
    }

    #[must_use]
    pub fn distance(&self, from: Room, to: Room) -> Distance {
        self.state.distance(from, to)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// Cards nobody holds and nobody will ever show.
    #[must_use]
    pub fn undealt_count(&self) -> usize {
        self.state.undealt_count()
    }

    #[must_use]
    pub fn events(&self) -> &'a Vector<GameEvent> {
        self.state.events()
    }
}

/// A decision maker for one seat.
pub trait Agent {
    /// Pick a destination from the rooms within this turn's roll, or
    /// `None` to stay where you are.
    fn choose_destination(&mut self, view: PlayerView<'_>, reachable: &[Room]) -> Option<Room>;

    /// Pick a suggestion. The driver always replaces the room with the
    /// seat's current room.
    fn choose_suggestion(&mut self, view: PlayerView<'_>) -> Triple;

    /// Accuse now, or `None` to keep playing.
    fn choose_accusation(&mut self, view: PlayerView<'_>) -> Option<Triple>;

    /// Pick which of `matches` to show to another player's suggestion.
    /// Returns an index into `matches`.
    fn choose_card_to_show(&mut self, view: PlayerView<'_>, matches: &[Card]) -> usize;

    /// Learn from the result of your own suggestion.
    fn observe_suggestion(&mut self, _view: PlayerView<'_>, _triple: Triple, _outcome: &SuggestionOutcome) {}
}

/// The agents `clue-sim` can field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AgentKind {
    Random,
    Deduction,
}

impl AgentKind {
    /// Build an agent with its own seed.
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
            AgentKind::Deduction => Box::new(DeductionAgent::new(seed)),
        }
    }
}
