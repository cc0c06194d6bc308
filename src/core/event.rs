//! Public game events.
//!
//! Everything in the event log is table talk: any player may read it.
//! Private information (the envelope, which card a refuter showed) never
//! appears here.

use serde::{Deserialize, Serialize};

use crate::cards::{Room, Suspect};
use crate::rules::vocabulary::Triple;

/// One publicly observable thing that happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    DiceRolled {
        player: Suspect,
        roll: u8,
    },
    Moved {
        player: Suspect,
        from: Room,
        to: Room,
        /// The requested destination was out of range and replaced.
        substituted: bool,
    },
    StayedPut {
        player: Suspect,
        room: Room,
    },
    /// A suggested character was summoned into the suggested room.
    Summoned {
        player: Suspect,
        room: Room,
    },
    Suggested {
        suggester: Suspect,
        triple: Triple,
        /// Who showed a card, if anyone. The card itself stays private.
        refuted_by: Option<Suspect>,
    },
    Accused {
        accuser: Suspect,
        triple: Triple,
        correct: bool,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::DiceRolled { player, roll } => write!(f, "{player} rolled a {roll}."),
            GameEvent::Moved {
                player,
                from,
                to,
                substituted,
            } => {
                write!(f, "{player} moved from {from} to {to}")?;
                if *substituted {
                    write!(f, " (requested move was out of range)")?;
                }
                write!(f, ".")
            }
            GameEvent::StayedPut { player, room } => write!(f, "{player} stayed in the {room}."),
            GameEvent::Summoned { player, room } => {
                write!(f, "{player} was summoned to the {room}.")
            }
            GameEvent::Suggested {
                suggester,
                triple,
                refuted_by,
            } => {
                write!(f, "{suggester} suggested {triple}. ")?;
                match refuted_by {
                    Some(who) => write!(f, "{who} showed a card."),
                    None => write!(f, "No one could refute."),
                }
            }
            GameEvent::Accused {
                accuser,
                triple,
                correct,
            } => {
                let verdict = if *correct { "correct" } else { "wrong" };
                write!(f, "{accuser} accused {triple}: {verdict}.")
            }
        }
    }
}
