//! Game setup: fill the envelope, seat the players, deal the cards.
//!
//! ## Order of random draws
//!
//! For a given seed the builder always draws in the same order: the
//! envelope (suspect, weapon, room), the deck shuffle, then the automated
//! seats. Fixing any of these with the builder skips its draws.

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::board::RoomGraph;
use crate::cards::{Card, Deck, Hand, Solution, Suspect};
use crate::core::{ClueError, Controller, GameConfig, GameRng, GameState, Player, PlayerMap};

/// Builder for a new game.
///
/// ```
/// use clue_engine::cards::Suspect;
/// use clue_engine::core::GameConfig;
/// use clue_engine::rules::GameBuilder;
///
/// let state = GameBuilder::new(GameConfig::with_human(Suspect::MrGreen, 7)).build();
/// assert_eq!(state.player_count(), 4);
/// assert!(state.player_by_name("Mr. Green").unwrap().is_human());
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    graph: RoomGraph,
    solution: Option<Solution>,
    seats: Option<Vec<Suspect>>,
    hands: Option<Vec<Vec<Card>>>,
}

impl GameBuilder {
    /// Start from a config on the standard mansion.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            graph: RoomGraph::mansion(),
            solution: None,
            seats: None,
            hands: None,
        }
    }

    /// Play on a different board.
    #[must_use]
    pub fn graph(mut self, graph: RoomGraph) -> Self {
        self.graph = graph;
        self
    }

    /// Fix the envelope instead of drawing it.
    #[must_use]
    pub fn solution(mut self, solution: Solution) -> Self {
        self.solution = Some(solution);
        self
    }

    /// Fix which character sits in each seat, in turn order.
    ///
    /// With a human configured, the human's character must come first.
    #[must_use]
    pub fn seats(mut self, seats: Vec<Suspect>) -> Self {
        self.seats = Some(seats);
        self
    }

    /// Fix each seat's hand instead of dealing.
    ///
    /// Cards in no hand and not in the envelope are set aside.
    #[must_use]
    pub fn hands(mut self, hands: Vec<Vec<Card>>) -> Self {
        self.hands = Some(hands);
        self
    }

    /// Build the game.
    ///
    /// Panics on an inconsistent setup: bad player count, starting room
    /// off the board, duplicate seats, or hands that overlap each other or
    /// the envelope.
    #[must_use]
    pub fn build(self) -> GameState {
        let config = self.config;
        config.validate();
        assert!(
            self.graph.contains(config.starting_room),
            "Starting room {} is not on the board",
            config.starting_room
        );

        let mut rng = GameRng::new(config.seed);
        let solution = self.solution.unwrap_or_else(|| Solution::random(&mut rng));

        let (hands, undealt) = match self.hands {
            Some(hands) => fixed_hands(hands, &solution, config.player_count),
            None => {
                let mut deck = Deck::without(&solution);
                deck.shuffle(&mut rng);
                deck.deal(config.player_count, config.hand_size)
            }
        };

        let seats = match self.seats {
            Some(seats) => {
                check_seats(&seats, &config);
                seats
            }
            None => draw_seats(&config, &mut rng),
        };

        let players = seats
            .into_iter()
            .zip(hands)
            .enumerate()
            .map(|(seat, (character, hand))| {
                let controller = if seat == 0 && config.human.is_some() {
                    Controller::Human
                } else {
                    Controller::Automated
                };
                Player::new(character, controller, config.starting_room, hand)
            })
            .collect();
        let players = PlayerMap::from_vec(players);

        tracing::info!(
            players = config.player_count,
            human = ?config.human,
            undealt = undealt.len(),
            "game set up"
        );

        GameState::from_parts(config, self.graph, solution, players, undealt, rng)
    }
}

/// Standard four-seat game on the mansion with a person playing the named
/// character.
pub fn setup_game(human_character_name: &str, seed: u64) -> Result<GameState, ClueError> {
    let human = Suspect::from_str(human_character_name)
        .map_err(|_| ClueError::UnknownSuspect(human_character_name.to_string()))?;
    Ok(GameBuilder::new(GameConfig::with_human(human, seed)).build())
}

/// Human first, then automated seats drawn at random from the remaining
/// suspects.
fn draw_seats(config: &GameConfig, rng: &mut GameRng) -> Vec<Suspect> {
    let mut seats: Vec<Suspect> = config.human.into_iter().collect();
    let mut others: Vec<Suspect> = Suspect::iter()
        .filter(|s| Some(*s) != config.human)
        .collect();
    rng.shuffle(&mut others);
    seats.extend(others.into_iter().take(config.player_count - seats.len()));
    seats
}

fn check_seats(seats: &[Suspect], config: &GameConfig) {
    assert_eq!(seats.len(), config.player_count, "One character per seat");
    for (i, s) in seats.iter().enumerate() {
        assert!(!seats[..i].contains(s), "{s} is seated twice");
    }
    if let Some(human) = config.human {
        assert_eq!(seats[0], human, "The human's character must take the first seat");
    }
}

fn fixed_hands(hands: Vec<Vec<Card>>, solution: &Solution, player_count: usize) -> (Vec<Hand>, Vec<Card>) {
    assert_eq!(hands.len(), player_count, "One hand per seat");
    let mut seen: Vec<Card> = Vec::new();
    for card in hands.iter().flatten() {
        assert!(!solution.contains(*card), "{card} is in the envelope");
        assert!(!seen.contains(card), "{card} is dealt twice");
        seen.push(*card);
    }
    let undealt = Card::all()
        .filter(|c| !solution.contains(*c) && !seen.contains(c))
        .collect();
    let hands = hands.into_iter().map(Hand::from_vec).collect();
    (hands, undealt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Room, Weapon};
    use crate::core::{PlayerId, Source};

    fn plum_rope_study() -> Solution {
        Solution::new(Suspect::ProfessorPlum, Weapon::Rope, Room::Study)
    }

    fn all_dealt_cards(state: &GameState) -> Vec<Card> {
        state
            .players()
            .flat_map(|(_, p)| p.hand().to_vec())
            .collect()
    }

    #[test]
    fn test_setup_game_seats_human_first() {
        let state = setup_game("Mrs. Peacock", 1).unwrap();
        let (_, first) = state.players().next().unwrap();
        assert_eq!(first.character, Suspect::MrsPeacock);
        assert!(first.is_human());
        assert!(state.players().skip(1).all(|(_, p)| !p.is_human()));
    }

    #[test]
    fn test_setup_game_rejects_unknown_character() {
        assert_eq!(
            setup_game("Mr. Boddy", 1).err(),
            Some(ClueError::UnknownSuspect("Mr. Boddy".to_string()))
        );
    }

    #[test]
    fn test_seats_are_distinct_suspects() {
        let state = setup_game("Miss Scarlet", 5).unwrap();
        let mut characters: Vec<_> = state.players().map(|(_, p)| p.character).collect();
        characters.sort();
        characters.dedup();
        assert_eq!(characters.len(), 4);
    }

    #[test]
    fn test_deal_partitions_cards() {
        let state = setup_game("Miss Scarlet", 11).unwrap();
        let dealt = all_dealt_cards(&state);

        assert_eq!(dealt.len(), 16);
        assert_eq!(state.undealt_count(), 2);

        let mut everything = dealt.clone();
        everything.extend(state.solution().cards());
        everything.extend(state.undealt().iter().copied());
        everything.sort();

        let mut universe: Vec<_> = Card::all().collect();
        universe.sort();
        assert_eq!(everything, universe);

        for card in state.solution().cards() {
            assert!(!dealt.contains(&card));
        }
    }

    #[test]
    fn test_own_hand_in_notebook() {
        let state = setup_game("Mr. Green", 3).unwrap();
        for (_, player) in state.players() {
            assert_eq!(player.notebook().len(), player.hand().len());
            for card in player.hand() {
                assert_eq!(player.notebook().source(*card), Some(Source::Own));
            }
        }
    }

    #[test]
    fn test_everyone_starts_in_lounge() {
        let state = setup_game("Mr. Green", 3).unwrap();
        assert!(state.players().all(|(_, p)| p.location == Room::Lounge));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = setup_game("Miss Scarlet", 99).unwrap();
        let b = setup_game("Miss Scarlet", 99).unwrap();
        assert_eq!(a.solution(), b.solution());
        for ((_, pa), (_, pb)) in a.players().zip(b.players()) {
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn test_fixed_solution_and_hands() {
        let hands = vec![
            vec![Card::Room(Room::Hall)],
            vec![Card::Weapon(Weapon::Dagger), Card::Suspect(Suspect::MrGreen)],
        ];
        let state = GameBuilder::new(GameConfig {
            player_count: 2,
            ..GameConfig::default()
        })
        .solution(plum_rope_study())
        .seats(vec![Suspect::MissScarlet, Suspect::MrsWhite])
        .hands(hands)
        .build();

        assert_eq!(*state.solution(), plum_rope_study());
        assert_eq!(state.player(PlayerId::new(0)).character, Suspect::MissScarlet);
        assert_eq!(state.player(PlayerId::new(1)).hand().len(), 2);
        assert_eq!(state.undealt_count(), 21 - 3 - 3);
    }

    #[test]
    fn test_six_players_run_out_of_cards() {
        let state = GameBuilder::new(GameConfig {
            player_count: 6,
            ..GameConfig::default()
        })
        .build();
        assert_eq!(all_dealt_cards(&state).len(), 18);
        assert_eq!(state.undealt_count(), 0);
        assert!(state.players().all(|(_, p)| !p.is_human()));
    }

    #[test]
    #[should_panic(expected = "is in the envelope")]
    fn test_hand_overlapping_solution_rejected() {
        let _ = GameBuilder::new(GameConfig {
            player_count: 2,
            ..GameConfig::default()
        })
        .solution(plum_rope_study())
        .hands(vec![vec![Card::Weapon(Weapon::Rope)], vec![]])
        .build();
    }

    #[test]
    #[should_panic(expected = "is not on the board")]
    fn test_starting_room_must_be_on_board() {
        let mut graph = RoomGraph::new();
        graph.connect_both(Room::Kitchen, Room::Study, 1);
        let _ = GameBuilder::new(GameConfig::default()).graph(graph).build();
    }
}
