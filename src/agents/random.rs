use strum::IntoEnumIterator;

use super::{Agent, PlayerView};
use crate::cards::{Card, Room, Suspect, Weapon};
use crate::core::GameRng;
use crate::rules::Triple;

/// Plays without thinking: random reachable room, random suspect and
/// weapon, never accuses.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_destination(&mut self, _view: PlayerView<'_>, reachable: &[Room]) -> Option<Room> {
        self.rng.choose(reachable).copied()
    }

    fn choose_suggestion(&mut self, view: PlayerView<'_>) -> Triple {
        let suspects: Vec<Suspect> = Suspect::iter().collect();
        let weapons: Vec<Weapon> = Weapon::iter().collect();
        let suspect = suspects[self.rng.gen_range_usize(0..suspects.len())];
        let weapon = weapons[self.rng.gen_range_usize(0..weapons.len())];
        Triple::new(suspect, weapon, view.location())
    }

    fn choose_accusation(&mut self, _view: PlayerView<'_>) -> Option<Triple> {
        None
    }

    fn choose_card_to_show(&mut self, _view: PlayerView<'_>, matches: &[Card]) -> usize {
        if matches.is_empty() {
            return 0;
        }
        self.rng.gen_range_usize(0..matches.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayerId};
    use crate::rules::GameBuilder;

    #[test]
    fn test_destination_is_reachable() {
        let state = GameBuilder::new(GameConfig::default()).build();
        let view = PlayerView::new(&state, PlayerId::new(0));
        let mut agent = RandomAgent::new(1);

        let reachable = [Room::Conservatory, Room::Ballroom];
        for _ in 0..20 {
            let room = agent.choose_destination(view, &reachable).unwrap();
            assert!(reachable.contains(&room));
        }
        assert_eq!(agent.choose_destination(view, &[]), None);
    }

    #[test]
    fn test_suggests_current_room_and_never_accuses() {
        let state = GameBuilder::new(GameConfig::default()).build();
        let view = PlayerView::new(&state, PlayerId::new(1));
        let mut agent = RandomAgent::new(2);

        assert_eq!(agent.choose_suggestion(view).room, Room::Lounge);
        assert_eq!(agent.choose_accusation(view), None);
    }
}
