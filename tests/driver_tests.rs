//! Full games played by agents through the turn driver.

use clue_engine::agents::{Agent, AgentKind, DeductionAgent, PlayerView, RandomAgent};
use clue_engine::cards::{Card, Room, Solution, Suspect, Weapon};
use clue_engine::core::{GameConfig, GameEvent, GameState, PlayerId};
use clue_engine::driver::TurnDriver;
use clue_engine::rules::{GameBuilder, GameResult, Triple};

fn agents(kind: AgentKind, count: usize) -> Vec<Box<dyn Agent>> {
    (0..count).map(|i| kind.build(100 + i as u64)).collect()
}

fn six_player_game(seed: u64) -> GameState {
    GameBuilder::new(GameConfig {
        player_count: 6,
        hand_size: 3,
        seed,
        ..GameConfig::default()
    })
    .build()
}

/// Accuses a fixed triple on its first turn.
struct Reckless(Triple);

impl Agent for Reckless {
    fn choose_destination(&mut self, _view: PlayerView<'_>, _reachable: &[Room]) -> Option<Room> {
        None
    }

    fn choose_suggestion(&mut self, view: PlayerView<'_>) -> Triple {
        Triple::new(Suspect::MrGreen, Weapon::Dagger, view.location())
    }

    fn choose_accusation(&mut self, _view: PlayerView<'_>) -> Option<Triple> {
        Some(self.0)
    }

    fn choose_card_to_show(&mut self, _view: PlayerView<'_>, _matches: &[Card]) -> usize {
        0
    }
}

#[test]
fn test_random_agents_hit_turn_limit() {
    let state = GameBuilder::new(GameConfig::default()).build();
    let mut driver = TurnDriver::new(state, agents(AgentKind::Random, 4)).with_max_turns(40);

    assert_eq!(driver.play(), Ok(None));
    let state = driver.state();
    assert_eq!(state.turn_number(), 41);
    assert!(!state.is_game_over());
    assert_eq!(state.revealed_solution(), None);
}

#[test]
fn test_each_turn_rolls_then_suggests() {
    let state = GameBuilder::new(GameConfig::default()).build();
    let mut driver = TurnDriver::new(state, agents(AgentKind::Random, 4));
    driver.play_turn().unwrap();

    let events = driver.state().events();
    assert!(matches!(events.front(), Some(GameEvent::DiceRolled { .. })));
    assert!(matches!(events.back(), Some(GameEvent::Suggested { .. })));
    assert_eq!(driver.state().current_player(), PlayerId::new(1));
}

#[test]
fn test_deduction_agents_solve_full_deal() {
    for seed in [1, 2, 3] {
        let state = six_player_game(seed);
        let mut driver = TurnDriver::new(state, agents(AgentKind::Deduction, 6));

        let result = driver.play().unwrap();
        let winner = match result {
            Some(GameResult::Winner(seat)) => seat,
            other => panic!("seed {seed}: expected a winner, got {other:?}"),
        };

        let state = driver.state();
        assert!(state.is_game_over());
        assert!(!state.player(winner).is_eliminated());
        assert!(state.players().all(|(_, p)| !p.is_eliminated()));
    }
}

#[test]
fn test_all_wrong_accusations_end_unsolved() {
    let state = GameBuilder::new(GameConfig {
        player_count: 3,
        ..GameConfig::default()
    })
    .solution(Solution::new(Suspect::ProfessorPlum, Weapon::Rope, Room::Study))
    .build();
    let wrong = Triple::new(Suspect::MrGreen, Weapon::Dagger, Room::Hall);
    let agents: Vec<Box<dyn Agent>> = (0..3).map(|_| Box::new(Reckless(wrong)) as Box<dyn Agent>).collect();

    let mut driver = TurnDriver::new(state, agents);
    assert_eq!(driver.play(), Ok(Some(GameResult::Unsolved)));
    assert_eq!(driver.state().turn_number(), 3);
}

#[test]
fn test_eliminated_seats_are_skipped() {
    let state = GameBuilder::new(GameConfig {
        player_count: 3,
        ..GameConfig::default()
    })
    .solution(Solution::new(Suspect::ProfessorPlum, Weapon::Rope, Room::Study))
    .build();
    let wrong = Triple::new(Suspect::MrGreen, Weapon::Dagger, Room::Hall);
    let agents: Vec<Box<dyn Agent>> = vec![
        Box::new(Reckless(wrong)),
        Box::new(RandomAgent::new(1)),
        Box::new(RandomAgent::new(2)),
    ];

    let mut driver = TurnDriver::new(state, agents);
    for _ in 0..3 {
        driver.play_turn().unwrap();
    }
    let rolls_before = dice_rolls(driver.state());
    driver.play_turn().unwrap();

    assert!(driver.state().player(PlayerId::new(0)).is_eliminated());
    assert_eq!(dice_rolls(driver.state()), rolls_before);
    assert_eq!(driver.state().current_player(), PlayerId::new(1));
}

#[test]
fn test_human_refuter_is_asked() {
    let state = GameBuilder::new(GameConfig {
        player_count: 2,
        ..GameConfig::with_human(Suspect::MissScarlet, 4)
    })
    .solution(Solution::new(Suspect::ProfessorPlum, Weapon::Rope, Room::Study))
    .seats(vec![Suspect::MissScarlet, Suspect::MrGreen])
    .hands(vec![
        vec![Card::Suspect(Suspect::MrGreen), Card::Weapon(Weapon::Dagger)],
        vec![Card::Room(Room::Hall)],
    ])
    .build();
    let agents: Vec<Box<dyn Agent>> = vec![
        Box::new(DeductionAgent::new(1)),
        Box::new(Reckless(Triple::new(Suspect::MrGreen, Weapon::Dagger, Room::Hall))),
    ];

    let mut driver = TurnDriver::new(state, agents);
    driver.play_turn().unwrap();
    driver.play_turn().unwrap();

    let state = driver.state();
    assert!(state.pending_refutation().is_none());
    let green = state.player(PlayerId::new(1));
    assert_eq!(green.notebook().len(), 2);
    assert!(green.is_eliminated());
}

fn dice_rolls(state: &GameState) -> usize {
    state
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::DiceRolled { .. }))
        .count()
}
