//! Movement.
//!
//! A move is measured against the active dice roll. If the requested
//! destination is within the roll the player goes there. Otherwise the
//! request is replaced by a uniformly random room that *is* within the
//! roll, and if there is no such room the player stays put. Every path
//! leaves the player somewhere legal, so a bad request (an unknown room
//! name, a room too far away) is never an error.
//!
//! Moving does not touch the roll or the turn pointer. With no roll active
//! the budget is zero and the player stays where they are.

use std::str::FromStr;

use crate::board::Distance;
use crate::cards::{Room, Suspect};
use crate::core::{ClueError, GameEvent, GameState, PlayerId};

/// What a move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The requested destination was within the roll.
    Moved {
        player: Suspect,
        from: Room,
        to: Room,
        distance: Distance,
        roll: u8,
    },
    /// The requested destination was out of range; a random reachable
    /// room was used instead.
    Substituted {
        player: Suspect,
        from: Room,
        requested: String,
        requested_distance: Distance,
        to: Room,
        roll: u8,
    },
    /// Nothing was reachable.
    StayedPut { player: Suspect, room: Room, roll: u8 },
}

impl MoveOutcome {
    /// Where the player ended up.
    #[must_use]
    pub fn destination(&self) -> Room {
        match self {
            MoveOutcome::Moved { to, .. } | MoveOutcome::Substituted { to, .. } => *to,
            MoveOutcome::StayedPut { room, .. } => *room,
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved {
                player,
                from,
                to,
                distance,
                roll,
            } => write!(
                f,
                "{player} moved from {from} to {to} (Distance: {distance}, Roll: {roll})."
            ),
            MoveOutcome::Substituted {
                requested,
                requested_distance,
                to,
                roll,
                ..
            } => write!(
                f,
                "Invalid move ({requested} is {requested_distance} steps away, roll was {roll}). Moved to {to} instead."
            ),
            MoveOutcome::StayedPut { player, room, roll } => write!(
                f,
                "No rooms reachable with roll {roll}. {player} stays in {room}."
            ),
        }
    }
}

impl GameState {
    /// Move a player by name, reporting the outcome or error as text.
    pub fn move_player(&mut self, player_name: &str, destination: &str) -> String {
        match self.try_move_player(player_name, destination) {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Move a player by name toward a caller-supplied destination.
    ///
    /// The destination need not be a real room; an unrecognised name is
    /// treated as infinitely far away.
    pub fn try_move_player(
        &mut self,
        player_name: &str,
        destination: &str,
    ) -> Result<MoveOutcome, ClueError> {
        let player = self.require_player(player_name)?;
        let target = Room::from_str(destination).ok();
        self.resolve_move(player, target, destination)
    }

    /// Move a seat toward a known room.
    pub fn move_to_room(&mut self, player: PlayerId, destination: Room) -> Result<MoveOutcome, ClueError> {
        self.resolve_move(player, Some(destination), &destination.to_string())
    }

    fn resolve_move(
        &mut self,
        player: PlayerId,
        target: Option<Room>,
        requested: &str,
    ) -> Result<MoveOutcome, ClueError> {
        self.ensure_open()?;
        let roll = self.current_dice_roll().unwrap_or(0);

        let character = self.player(player).character;
        let from = self.player(player).location;
        let distance = target.map_or(Distance::INFINITE, |to| self.distance(from, to));

        let outcome = match target {
            Some(to) if distance.within(roll) => MoveOutcome::Moved {
                player: character,
                from,
                to,
                distance,
                roll,
            },
            _ => {
                let reachable = self.reachable_rooms(from, roll);
                match self.rng.choose(&reachable).copied() {
                    Some(to) => {
                        tracing::warn!(
                            player = %character,
                            requested,
                            %distance,
                            roll,
                            substitute = %to,
                            "move out of range, substituting"
                        );
                        MoveOutcome::Substituted {
                            player: character,
                            from,
                            requested: requested.to_string(),
                            requested_distance: distance,
                            to,
                            roll,
                        }
                    }
                    None => MoveOutcome::StayedPut {
                        player: character,
                        room: from,
                        roll,
                    },
                }
            }
        };

        let to = outcome.destination();
        self.player_mut(player).location = to;
        tracing::debug!(player = %character, %from, %to, roll, "moved");
        self.record(match &outcome {
            MoveOutcome::StayedPut { .. } => GameEvent::StayedPut {
                player: character,
                room: from,
            },
            MoveOutcome::Moved { .. } => GameEvent::Moved {
                player: character,
                from,
                to,
                substituted: false,
            },
            MoveOutcome::Substituted { .. } => GameEvent::Moved {
                player: character,
                from,
                to,
                substituted: true,
            },
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RoomGraph;
    use crate::cards::Weapon;
    use crate::cards::Solution;
    use crate::core::GameConfig;
    use crate::rules::GameBuilder;

    fn game() -> GameState {
        GameBuilder::new(GameConfig::with_human(Suspect::MissScarlet, 42))
            .solution(Solution::new(Suspect::ProfessorPlum, Weapon::Rope, Room::Study))
            .build()
    }

    /// Roll until the active roll satisfies `accept`.
    fn roll_until(state: &mut GameState, accept: impl Fn(u8) -> bool) -> u8 {
        loop {
            let roll = state.start_turn().unwrap();
            if accept(roll) {
                return roll;
            }
        }
    }

    #[test]
    fn test_valid_move() {
        let mut state = game();
        let roll = roll_until(&mut state, |r| r >= 7);

        let message = state.move_player("Miss Scarlet", "Ballroom");
        assert_eq!(
            message,
            format!("Miss Scarlet moved from Lounge to Ballroom (Distance: 7, Roll: {roll}).")
        );
        assert_eq!(state.player_by_name("Miss Scarlet").unwrap().location, Room::Ballroom);
    }

    #[test]
    fn test_move_keeps_roll() {
        let mut state = game();
        let roll = roll_until(&mut state, |r| r >= 2);
        state.move_player("Miss Scarlet", "Conservatory");
        assert_eq!(state.current_dice_roll(), Some(roll));

        let message = state.move_player("Miss Scarlet", "Lounge");
        assert_eq!(
            message,
            format!("Miss Scarlet moved from Conservatory to Lounge (Distance: 1, Roll: {roll}).")
        );
        assert_eq!(state.current_dice_roll(), Some(roll));
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_move_without_roll_stays_put() {
        let mut state = game();
        let outcome = state.try_move_player("Miss Scarlet", "Conservatory").unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::StayedPut {
                player: Suspect::MissScarlet,
                room: Room::Lounge,
                roll: 0,
            }
        );
        assert_eq!(
            outcome.to_string(),
            "No rooms reachable with roll 0. Miss Scarlet stays in Lounge."
        );
        assert_eq!(state.current_dice_roll(), None);
    }

    #[test]
    fn test_eliminated_player_can_still_move() {
        let mut state = game();
        state.handle_accusation("Miss Scarlet", "Plum", "Rope", "Hall");
        state.start_turn().unwrap();

        let outcome = state.try_move_player("Miss Scarlet", "Conservatory").unwrap();
        assert_eq!(outcome.destination(), Room::Conservatory);
    }

    #[test]
    fn test_out_of_range_move_substitutes() {
        let mut state = game();
        let roll = roll_until(&mut state, |r| r < 12);

        let outcome = state.try_move_player("Miss Scarlet", "Billiard Room").unwrap();
        match &outcome {
            MoveOutcome::Substituted {
                requested_distance,
                to,
                ..
            } => {
                assert_eq!(*requested_distance, Distance::new(13));
                assert!(state.distance(Room::Lounge, *to).within(roll));
            }
            other => panic!("expected substitution, got {other:?}"),
        }
        assert_eq!(
            state.player_by_name("Miss Scarlet").unwrap().location,
            outcome.destination()
        );
        assert!(outcome.to_string().starts_with("Invalid move (Billiard Room is 13 steps away"));
    }

    #[test]
    fn test_unknown_room_substitutes() {
        let mut state = game();
        state.start_turn().unwrap();

        let outcome = state.try_move_player("Miss Scarlet", "Attic").unwrap();
        assert!(matches!(
            outcome,
            MoveOutcome::Substituted {
                requested_distance: Distance::INFINITE,
                ..
            }
        ));
        assert!(outcome.to_string().starts_with("Invalid move (Attic is inf steps away"));
    }

    #[test]
    fn test_nothing_reachable_stays_put() {
        let mut graph = RoomGraph::new();
        graph.connect_both(Room::Lounge, Room::Hall, 20);
        let mut state = GameBuilder::new(GameConfig::default()).graph(graph).build();
        let roll = state.start_turn().unwrap();
        let name = state.player(PlayerId::new(0)).name();

        let message = state.move_player(&name, "Hall");
        assert_eq!(
            message,
            format!("No rooms reachable with roll {roll}. {name} stays in Lounge.")
        );
        assert_eq!(state.player(PlayerId::new(0)).location, Room::Lounge);
    }

    #[test]
    fn test_unknown_player() {
        let mut state = game();
        state.start_turn().unwrap();
        assert_eq!(
            state.move_player("Mr. Boddy", "Hall"),
            "Error: player 'Mr. Boddy' not found."
        );
        // The roll is still available.
        assert!(state.current_dice_roll().is_some());
    }

    #[test]
    fn test_moves_are_logged() {
        let mut state = game();
        state.start_turn().unwrap();
        state.move_player("Miss Scarlet", "Conservatory");

        assert_eq!(
            state.events().back(),
            Some(&GameEvent::Moved {
                player: Suspect::MissScarlet,
                from: Room::Lounge,
                to: Room::Conservatory,
                substituted: false,
            })
        );
    }
}
