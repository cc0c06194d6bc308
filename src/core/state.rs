//! The game session.
//!
//! `GameState` owns everything about one game: the distance oracle for its
//! board, the envelope, the seats, the turn pointer, the current dice roll,
//! the public event log and the RNG. It is built by `rules::GameBuilder` and
//! mutated only through the rule operations (`move_player`, `suggest`,
//! `accuse`, ...), which live next to their rules in `crate::rules`.
//!
//! ## Information hiding
//!
//! The envelope is private. `revealed_solution` returns it only after the
//! game is over. Hands and notebooks are readable per player; a driver
//! that serves several players is responsible for showing each player only
//! their own.
//!
//! ## Game over
//!
//! Once the game is over every mutating operation fails with
//! `ClueError::GameOver` and leaves the state untouched.

use im::Vector;
use std::str::FromStr;

use super::config::GameConfig;
use super::error::ClueError;
use super::event::GameEvent;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::{GameRng, GameRngState};
use crate::board::{Distance, DistanceTable, RoomGraph};
use crate::cards::{Card, Room, Solution, Suspect};
use crate::rules::suggestion::PendingRefutation;
use crate::rules::GameResult;

/// One game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    distances: DistanceTable,
    solution: Solution,
    players: PlayerMap<Player>,
    undealt: Vec<Card>,

    // === Turn ===
    turn: PlayerId,
    turn_number: u32,
    dice_roll: Option<u8>,

    // === Outcome ===
    game_over: bool,
    winner: Option<PlayerId>,

    pub(crate) pending: Option<PendingRefutation>,
    events: Vector<GameEvent>,
    pub(crate) rng: GameRng,
}

impl GameState {
    pub(crate) fn from_parts(
        config: GameConfig,
        graph: RoomGraph,
        solution: Solution,
        players: PlayerMap<Player>,
        undealt: Vec<Card>,
        rng: GameRng,
    ) -> Self {
        let distances = DistanceTable::compute(&graph);
        Self {
            config,
            distances,
            solution,
            players,
            undealt,
            turn: PlayerId::new(0),
            turn_number: 1,
            dice_roll: None,
            game_over: false,
            winner: None,
            pending: None,
            events: Vector::new(),
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Players ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over seats in turn order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Seat played by a character, if that character is at the table.
    #[must_use]
    pub fn seat_of(&self, character: Suspect) -> Option<PlayerId> {
        self.players.position(|p| p.character == character)
    }

    /// Seat of the player with this name. Accepts the same names as
    /// `Suspect::from_str`.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        Suspect::from_str(name)
            .ok()
            .and_then(|character| self.seat_of(character))
    }

    /// The player with this name.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.player_id(name).map(|id| self.player(id))
    }

    pub(crate) fn require_player(&self, name: &str) -> Result<PlayerId, ClueError> {
        self.player_id(name)
            .ok_or_else(|| ClueError::PlayerNotFound(name.to_string()))
    }

    /// Seats that have not been eliminated.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of cards set aside after the deal.
    #[must_use]
    pub fn undealt_count(&self) -> usize {
        self.undealt.len()
    }

    pub(crate) fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    // === Board ===

    #[must_use]
    pub fn distance(&self, from: Room, to: Room) -> Distance {
        self.distances.get(from, to)
    }

    /// Every room other than `room` within `roll` steps.
    #[must_use]
    pub fn reachable_rooms(&self, room: Room, roll: u8) -> Vec<Room> {
        self.distances.reachable(room, roll)
    }

    // === Turn ===

    /// Seat whose turn it is. Eliminated seats still get a turn pointer;
    /// the driver skips them.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn
    }

    /// Turns started so far, counting from 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Roll two dice for the current turn and make the sum the active roll.
    pub fn start_turn(&mut self) -> Result<u8, ClueError> {
        self.ensure_open()?;
        let roll = self.rng.roll_die() + self.rng.roll_die();
        self.dice_roll = Some(roll);

        let player = self.players[self.turn].character;
        tracing::debug!(%player, roll, "dice rolled");
        self.record(GameEvent::DiceRolled { player, roll });
        Ok(roll)
    }

    /// The active roll. Set by `start_turn`, cleared by `end_turn`; moves
    /// read it without spending it.
    #[must_use]
    pub fn current_dice_roll(&self) -> Option<u8> {
        self.dice_roll
    }

    /// Pass the turn pointer to the next seat clockwise.
    ///
    /// Any unused roll is discarded. Does nothing once the game is over.
    pub fn end_turn(&mut self) -> Result<PlayerId, ClueError> {
        if let Some(pending) = &self.pending {
            return Err(ClueError::RefutationPending(pending.refuter_character));
        }
        if !self.game_over {
            self.dice_roll = None;
            self.turn = self.turn.next(self.player_count());
            self.turn_number += 1;
        }
        Ok(self.turn)
    }

    // === Outcome ===

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// How the game ended, or `None` while it continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.game_over {
            return None;
        }
        Some(match self.winner {
            Some(winner) => GameResult::Winner(winner),
            None => GameResult::Unsolved,
        })
    }

    /// The envelope, once the game is over.
    #[must_use]
    pub fn revealed_solution(&self) -> Option<Solution> {
        self.game_over.then_some(self.solution)
    }

    pub(crate) fn solution(&self) -> &Solution {
        &self.solution
    }

    pub(crate) fn finish(&mut self, winner: Option<PlayerId>) {
        self.game_over = true;
        self.winner = winner;
        self.dice_roll = None;
        match winner {
            Some(id) => tracing::info!(winner = %self.players[id].character, "game over"),
            None => tracing::info!("game over: every player was eliminated"),
        }
    }

    // === Refutation ===

    /// A refutation waiting for a person to pick the card to show.
    #[must_use]
    pub fn pending_refutation(&self) -> Option<&PendingRefutation> {
        self.pending.as_ref()
    }

    // === Event log ===

    /// Public events, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    // === RNG ===

    /// Snapshot of the RNG, for replaying the rest of the game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue from a snapshot taken with `rng_state`. Every later dice
    /// roll, fallback move and automated reveal repeats what followed the
    /// snapshot.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Guards ===

    /// Fail if the game is over or a refutation is waiting.
    pub(crate) fn ensure_open(&self) -> Result<(), ClueError> {
        if self.game_over {
            return Err(ClueError::GameOver);
        }
        if let Some(pending) = &self.pending {
            return Err(ClueError::RefutationPending(pending.refuter_character));
        }
        Ok(())
    }

    /// `ensure_open`, and the player must not have accused wrongly.
    pub(crate) fn ensure_can_accuse(&self, player: PlayerId) -> Result<(), ClueError> {
        self.ensure_open()?;
        let player = &self.players[player];
        if player.is_eliminated() {
            return Err(ClueError::Eliminated(player.character));
        }
        Ok(())
    }
}
