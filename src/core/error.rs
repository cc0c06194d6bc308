//! Gameplay errors.
//!
//! Every variant is a recoverable condition: the operation that produced it
//! made no change to game state. The `Display` text is the message handed
//! back to whoever issued the command.

use crate::cards::card::official_names;
use crate::cards::{Room, Suspect, Weapon};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("Error: '{0}' is not a valid suspect. Valid options: {}", official_names::<Suspect>())]
    UnknownSuspect(String),
    #[error("Error: '{0}' is not a valid weapon. Valid options: {}", official_names::<Weapon>())]
    UnknownWeapon(String),
    #[error("Error: '{0}' is not a valid room. Valid options: {}", official_names::<Room>())]
    UnknownRoom(String),
    #[error("Error: player '{0}' not found.")]
    PlayerNotFound(String),
    #[error("Error: the game is over.")]
    GameOver,
    #[error("Error: {0} has been eliminated and cannot accuse again.")]
    Eliminated(Suspect),
    #[error("Error: waiting for {0} to choose a card to show.")]
    RefutationPending(Suspect),
    #[error("Error: no refutation is waiting for a choice.")]
    NoPendingRefutation,
    #[error("Error: no dice roll is active. Start a turn first.")]
    NoActiveRoll,
    #[error("Error: invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid suggestion: You must suggest the room you are currently in ({0}).")]
    WrongRoom(Room),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_messages_list_options() {
        let err = ClueError::UnknownWeapon("Knife".to_string());
        assert_eq!(
            err.to_string(),
            "Error: 'Knife' is not a valid weapon. Valid options: Candlestick, Dagger, Lead Pipe, Revolver, Rope, Wrench"
        );

        let err = ClueError::UnknownSuspect("Mr. Boddy".to_string());
        assert!(err.to_string().contains("Miss Scarlet, Colonel Mustard"));
    }

    #[test]
    fn test_wrong_room_message() {
        assert_eq!(
            ClueError::WrongRoom(Room::Lounge).to_string(),
            "Invalid suggestion: You must suggest the room you are currently in (Lounge)."
        );
    }
}
