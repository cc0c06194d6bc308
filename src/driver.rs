//! Turn loop.
//!
//! The engine itself never asks anybody anything. `TurnDriver` is the
//! caller that does: each turn it rolls for the current seat, asks that
//! seat's agent where to go, what to suggest and whether to accuse, and
//! passes every card-choice request to the refuting seat's agent.

use crate::agents::{Agent, PlayerView};
use crate::core::{ClueError, GameState, PlayerMap};
use crate::rules::{GameResult, SuggestionOutcome, Triple};

/// Turn limit used when none is given.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Plays a game by asking one agent per seat.
pub struct TurnDriver {
    state: GameState,
    agents: PlayerMap<Box<dyn Agent>>,
    max_turns: u32,
}

impl TurnDriver {
    /// One agent per seat, in seat order.
    #[must_use]
    pub fn new(state: GameState, agents: Vec<Box<dyn Agent>>) -> Self {
        assert_eq!(
            agents.len(),
            state.player_count(),
            "Need exactly one agent per seat"
        );
        Self {
            state,
            agents: PlayerMap::from_vec(agents),
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Stop after this many turns even without a result.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play until the game ends or the turn limit is reached.
    ///
    /// Returns `None` if the limit was reached first.
    pub fn play(&mut self) -> Result<Option<GameResult>, ClueError> {
        while !self.state.is_game_over() && self.state.turn_number() <= self.max_turns {
            self.play_turn()?;
        }
        if self.state.result().is_none() {
            tracing::info!(turns = self.max_turns, "turn limit reached");
        }
        Ok(self.state.result())
    }

    /// Play the current seat's turn, then pass the turn on.
    ///
    /// An eliminated seat's turn is skipped.
    pub fn play_turn(&mut self) -> Result<(), ClueError> {
        let seat = self.state.current_player();
        if self.state.player(seat).is_eliminated() {
            self.state.end_turn()?;
            return Ok(());
        }

        let roll = self.state.start_turn()?;
        let from = self.state.player(seat).location;
        let reachable = self.state.reachable_rooms(from, roll);
        let destination =
            self.agents[seat].choose_destination(PlayerView::new(&self.state, seat), &reachable);
        if let Some(room) = destination {
            self.state.move_to_room(seat, room)?;
        }

        let proposed = self.agents[seat].choose_suggestion(PlayerView::new(&self.state, seat));
        let triple = Triple {
            room: self.state.player(seat).location,
            ..proposed
        };
        let mut outcome = self.state.suggest(seat, triple)?;
        if let SuggestionOutcome::AwaitingChoice { .. } = outcome {
            outcome = self.resolve_pending()?;
        }
        self.agents[seat].observe_suggestion(PlayerView::new(&self.state, seat), triple, &outcome);

        if let Some(accusation) =
            self.agents[seat].choose_accusation(PlayerView::new(&self.state, seat))
        {
            self.state.accuse(seat, accusation)?;
        }

        self.state.end_turn()?;
        Ok(())
    }

    fn resolve_pending(&mut self) -> Result<SuggestionOutcome, ClueError> {
        let (refuter, matches) = match self.state.pending_refutation() {
            Some(pending) => (pending.refuter(), pending.matches().to_vec()),
            None => return Err(ClueError::NoPendingRefutation),
        };
        let choice = self.agents[refuter]
            .choose_card_to_show(PlayerView::new(&self.state, refuter), &matches);
        self.state.resolve_refutation(Some(choice))
    }
}

