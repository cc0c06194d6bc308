//! Text commands for conversational players.
//!
//! `ClueTools` wraps a game with the commands a chat-driven player issues:
//! read your notebook, look at your hand, see where you can go, move,
//! suggest, accuse, and read the table log. Every command takes the
//! player's name and answers with a message; nothing here panics or
//! returns an error value.

use std::str::FromStr;

use crate::cards::Room;
use crate::core::{ClueError, GameState, Player};

/// Text command façade over a game.
pub struct ClueTools<'a> {
    state: &'a mut GameState,
}

impl<'a> ClueTools<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &*self.state
    }

    fn lookup(&self, player_name: &str) -> Result<&Player, ClueError> {
        self.state
            .player_by_name(player_name)
            .ok_or_else(|| ClueError::PlayerNotFound(player_name.to_string()))
    }

    /// Every card the player knows is not in the envelope, with its source.
    #[must_use]
    pub fn consult_notebook(&self, player_name: &str) -> String {
        let player = match self.lookup(player_name) {
            Ok(player) => player,
            Err(err) => return err.to_string(),
        };
        let notebook = player.notebook();
        if notebook.is_empty() {
            return "Your notebook is empty.".to_string();
        }
        let lines: Vec<String> = notebook
            .iter()
            .map(|(card, source)| format!("- {card} (Source: {source})"))
            .collect();
        format!("--- CONFIDENTIAL NOTEBOOK ---\n{}", lines.join("\n"))
    }

    #[must_use]
    pub fn look_at_hand(&self, player_name: &str) -> String {
        match self.lookup(player_name) {
            Ok(player) => format!("Your hand contains: {}", join(player.hand())),
            Err(err) => err.to_string(),
        }
    }

    /// Current room, active roll, and the rooms within it.
    #[must_use]
    pub fn get_moves(&self, player_name: &str) -> String {
        let player = match self.lookup(player_name) {
            Ok(player) => player,
            Err(err) => return err.to_string(),
        };
        let Some(roll) = self.state.current_dice_roll() else {
            return ClueError::NoActiveRoll.to_string();
        };
        let current = player.location;
        let moves = self.state.reachable_rooms(current, roll);
        let moves = if moves.is_empty() {
            "nowhere".to_string()
        } else {
            join(&moves)
        };
        format!("You are in the {current}. You rolled a {roll}. You can move to: {moves}.")
    }

    pub fn move_player(&mut self, player_name: &str, room_name: &str) -> String {
        self.state.move_player(player_name, room_name)
    }

    /// Suggest in the room the player is standing in.
    pub fn suggest(&mut self, player_name: &str, suspect: &str, weapon: &str, room: &str) -> String {
        let location = match self.lookup(player_name) {
            Ok(player) => player.location,
            Err(err) => return err.to_string(),
        };
        if Room::from_str(room).ok() != Some(location) {
            return ClueError::WrongRoom(location).to_string();
        }
        self.state.handle_suggestion(player_name, suspect, weapon, room)
    }

    pub fn accuse(&mut self, player_name: &str, suspect: &str, weapon: &str, room: &str) -> String {
        self.state.handle_accusation(player_name, suspect, weapon, room)
    }

    /// Everything said at the table so far, one event per line.
    #[must_use]
    pub fn public_log(&self) -> String {
        if self.state.events().is_empty() {
            return "Nothing has happened yet.".to_string();
        }
        self.state
            .events()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
