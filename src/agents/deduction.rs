//! An agent that keeps a notebook-driven candidate list.
//!
//! Candidates per category are the cards missing from the notebook. On top
//! of that, when every card is dealt and a suggestion goes unrefuted, any
//! suggested card the agent does not hold must be in the envelope.

use super::{Agent, PlayerView};
use crate::cards::{Card, Room, Suspect, Weapon};
use crate::core::GameRng;
use crate::rules::{SuggestionOutcome, Triple};

/// Suggests only cards it has not seen and accuses once every category is
/// down to one candidate.
#[derive(Clone, Debug)]
pub struct DeductionAgent {
    rng: GameRng,
    suspect: Option<Suspect>,
    weapon: Option<Weapon>,
    room: Option<Room>,
}

impl DeductionAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            suspect: None,
            weapon: None,
            room: None,
        }
    }

    fn suspects(&self, view: PlayerView<'_>) -> Vec<Suspect> {
        self.suspect
            .map_or_else(|| view.notebook().unknown_suspects(), |s| vec![s])
    }

    fn weapons(&self, view: PlayerView<'_>) -> Vec<Weapon> {
        self.weapon
            .map_or_else(|| view.notebook().unknown_weapons(), |w| vec![w])
    }

    fn rooms(&self, view: PlayerView<'_>) -> Vec<Room> {
        self.room
            .map_or_else(|| view.notebook().unknown_rooms(), |r| vec![r])
    }

    fn pick<T: Copy>(&mut self, candidates: &[T], fallback: T) -> T {
        self.rng.choose(candidates).copied().unwrap_or(fallback)
    }
}

impl Agent for DeductionAgent {
    fn choose_destination(&mut self, view: PlayerView<'_>, reachable: &[Room]) -> Option<Room> {
        let candidates = self.rooms(view);
        if candidates.contains(&view.location()) && candidates.len() == 1 {
            return None;
        }
        let unseen: Vec<Room> = reachable
            .iter()
            .copied()
            .filter(|r| candidates.contains(r))
            .collect();
        match self.rng.choose(&unseen) {
            Some(room) => Some(*room),
            None => self.rng.choose(reachable).copied(),
        }
    }

    fn choose_suggestion(&mut self, view: PlayerView<'_>) -> Triple {
        let suspects = self.suspects(view);
        let weapons = self.weapons(view);
        let suspect = self.pick(&suspects, Suspect::MissScarlet);
        let weapon = self.pick(&weapons, Weapon::Candlestick);
        Triple::new(suspect, weapon, view.location())
    }

    fn choose_accusation(&mut self, view: PlayerView<'_>) -> Option<Triple> {
        match (
            self.suspects(view).as_slice(),
            self.weapons(view).as_slice(),
            self.rooms(view).as_slice(),
        ) {
            ([suspect], [weapon], [room]) => Some(Triple::new(*suspect, *weapon, *room)),
            _ => None,
        }
    }

    fn choose_card_to_show(&mut self, _view: PlayerView<'_>, matches: &[Card]) -> usize {
        if matches.is_empty() {
            return 0;
        }
        self.rng.gen_range_usize(0..matches.len())
    }

    fn observe_suggestion(&mut self, view: PlayerView<'_>, triple: Triple, outcome: &SuggestionOutcome) {
        if *outcome != SuggestionOutcome::Unrefuted || view.undealt_count() > 0 {
            return;
        }
        let me = view.me();
        if !me.holds(Card::Suspect(triple.suspect)) {
            self.suspect = Some(triple.suspect);
        }
        if !me.holds(Card::Weapon(triple.weapon)) {
            self.weapon = Some(triple.weapon);
        }
        if !me.holds(Card::Room(triple.room)) {
            self.room = Some(triple.room);
        }
    }
}
