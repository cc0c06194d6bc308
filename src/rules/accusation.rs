//! Accusations.
//!
//! An accusation is checked against the envelope exactly. A correct
//! accusation wins and ends the game. A wrong one eliminates the accuser
//! for good; the envelope stays hidden and play goes on, unless nobody is
//! left to play, in which case the game ends unsolved.

use super::vocabulary::Triple;
use crate::cards::Suspect;
use crate::core::{ClueError, GameEvent, GameState, PlayerId};

/// What an accusation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccusationOutcome {
    Correct { accuser: Suspect },
    Wrong { accuser: Suspect },
}

impl std::fmt::Display for AccusationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccusationOutcome::Correct { accuser } => {
                write!(f, "CORRECT! {accuser} has solved the murder! The game is over.")
            }
            AccusationOutcome::Wrong { accuser } => {
                write!(f, "WRONG! {accuser} has been eliminated. The truth remains hidden.")
            }
        }
    }
}

impl GameState {
    /// Accuse on behalf of `accuser`.
    pub fn accuse(&mut self, accuser: PlayerId, triple: Triple) -> Result<AccusationOutcome, ClueError> {
        self.ensure_can_accuse(accuser)?;
        let character = self.player(accuser).character;
        let correct = triple.matches(self.solution());
        tracing::debug!(accuser = %character, %triple, correct, "accusation");

        self.record(GameEvent::Accused {
            accuser: character,
            triple,
            correct,
        });

        if correct {
            self.finish(Some(accuser));
            return Ok(AccusationOutcome::Correct { accuser: character });
        }

        self.player_mut(accuser).eliminate();
        if self.active_players().is_empty() {
            self.finish(None);
        }
        Ok(AccusationOutcome::Wrong { accuser: character })
    }

    /// Accuse by names, rendering the result or error as a message.
    pub fn handle_accusation(&mut self, accuser_name: &str, suspect: &str, weapon: &str, room: &str) -> String {
        let result = Triple::parse(suspect, weapon, room).and_then(|triple| {
            let accuser = self.require_player(accuser_name)?;
            self.accuse(accuser, triple)
        });
        match result {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        }
    }
}
