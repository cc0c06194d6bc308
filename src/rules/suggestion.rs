//! Suggestions and refutation.
//!
//! A suggestion summons the named suspect's player into the named room,
//! then asks the other players clockwise, starting after the suggester,
//! whether they hold any of the three cards. The first player who does
//! shows exactly one of them to the suggester alone. That card goes into
//! the suggester's notebook; nothing else learns which card it was.
//!
//! ## Choosing the card
//!
//! An automated refuter picks uniformly at random among its matches. A
//! human refuter is asked: `suggest` returns
//! [`SuggestionOutcome::AwaitingChoice`] and the game waits until the
//! caller passes the chosen index to [`GameState::resolve_refutation`].
//! Until then every other mutating operation fails with
//! `ClueError::RefutationPending`.

use smallvec::SmallVec;

use super::vocabulary::Triple;
use crate::cards::{Card, Suspect};
use crate::core::{ClueError, Controller, GameEvent, GameState, PlayerId, Source};

/// Cards a refuter could show.
pub type Matches = SmallVec<[Card; 3]>;

/// A refutation waiting on a person to choose which card to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRefutation {
    suggester: PlayerId,
    refuter: PlayerId,
    pub(crate) refuter_character: Suspect,
    triple: Triple,
    matches: Matches,
}

impl PendingRefutation {
    #[must_use]
    pub fn suggester(&self) -> PlayerId {
        self.suggester
    }

    #[must_use]
    pub fn refuter(&self) -> PlayerId {
        self.refuter
    }

    #[must_use]
    pub fn triple(&self) -> Triple {
        self.triple
    }

    /// The refuter's cards that match the suggestion, in hand order.
    #[must_use]
    pub fn matches(&self) -> &[Card] {
        &self.matches
    }
}

/// What a suggestion did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// `refuter` showed `card` to the suggester.
    Refuted {
        refuter: Suspect,
        card: Card,
        /// Who the card was shown to; changes only the wording.
        suggester: Controller,
    },
    /// Nobody held any of the three cards.
    Unrefuted,
    /// A human refuter must pick one of `matches`.
    AwaitingChoice { refuter: Suspect, matches: Matches },
}

impl std::fmt::Display for SuggestionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionOutcome::Refuted {
                refuter,
                card,
                suggester: Controller::Automated,
            } => write!(f, "{refuter} showed you a card privately: {card}"),
            SuggestionOutcome::Refuted {
                refuter,
                card,
                suggester: Controller::Human,
            } => write!(f, "{refuter} whispers and shows you: {card}"),
            SuggestionOutcome::Unrefuted => write!(f, "No one could refute your suggestion."),
            SuggestionOutcome::AwaitingChoice { refuter, matches } => {
                write!(
                    f,
                    "{refuter}, you have conflicting evidence. Which card do you want to show secretly?"
                )?;
                for (i, card) in matches.iter().enumerate() {
                    write!(f, "\n   {}. {card}", i + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl GameState {
    /// Make a suggestion on behalf of `suggester`.
    ///
    /// The suggested room is not checked against the suggester's location;
    /// that is a table rule enforced by `ClueTools::suggest`.
    pub fn suggest(&mut self, suggester: PlayerId, triple: Triple) -> Result<SuggestionOutcome, ClueError> {
        self.ensure_open()?;
        tracing::debug!(
            suggester = %self.player(suggester).character,
            %triple,
            "suggestion"
        );

        if let Some(summoned) = self.seat_of(triple.suspect) {
            self.player_mut(summoned).location = triple.room;
            self.record(GameEvent::Summoned {
                player: triple.suspect,
                room: triple.room,
            });
        }

        let cards = triple.cards();
        let refutation = suggester
            .others_clockwise(self.player_count())
            .find_map(|seat| {
                let matches: Matches = self
                    .player(seat)
                    .hand()
                    .iter()
                    .copied()
                    .filter(|card| cards.contains(card))
                    .collect();
                (!matches.is_empty()).then_some((seat, matches))
            });

        let Some((refuter, matches)) = refutation else {
            self.record(GameEvent::Suggested {
                suggester: self.player(suggester).character,
                triple,
                refuted_by: None,
            });
            tracing::debug!("no one could refute");
            return Ok(SuggestionOutcome::Unrefuted);
        };

        let refuter_character = self.player(refuter).character;
        if self.player(refuter).is_human() {
            tracing::debug!(refuter = %refuter_character, "waiting for refuter to choose");
            self.pending = Some(PendingRefutation {
                suggester,
                refuter,
                refuter_character,
                triple,
                matches: matches.clone(),
            });
            return Ok(SuggestionOutcome::AwaitingChoice {
                refuter: refuter_character,
                matches,
            });
        }

        let card = matches[self.rng.gen_range_usize(0..matches.len())];
        Ok(self.reveal(suggester, refuter, triple, card))
    }

    /// Finish a suspended refutation with the refuter's chosen card.
    ///
    /// `choice` is a 0-based index into the pending matches. A missing or
    /// out-of-range choice shows the first match.
    pub fn resolve_refutation(&mut self, choice: Option<usize>) -> Result<SuggestionOutcome, ClueError> {
        let pending = self.pending.take().ok_or(ClueError::NoPendingRefutation)?;
        let card = choice
            .and_then(|i| pending.matches.get(i))
            .copied()
            .unwrap_or(pending.matches[0]);
        Ok(self.reveal(pending.suggester, pending.refuter, pending.triple, card))
    }

    /// Suggest by names, rendering the result or error as a message.
    ///
    /// The three names are validated before anything else; an unknown
    /// name leaves the game untouched.
    pub fn handle_suggestion(&mut self, suggester_name: &str, suspect: &str, weapon: &str, room: &str) -> String {
        let result = Triple::parse(suspect, weapon, room).and_then(|triple| {
            let suggester = self.require_player(suggester_name)?;
            self.suggest(suggester, triple)
        });
        match result {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Answer a pending refutation with a 1-based number as typed by a
    /// person. Anything that is not a listed number shows the first match.
    pub fn handle_refutation_choice(&mut self, input: &str) -> String {
        let choice = input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1));
        match self.resolve_refutation(choice) {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        }
    }

    fn reveal(&mut self, suggester: PlayerId, refuter: PlayerId, triple: Triple, card: Card) -> SuggestionOutcome {
        let refuter_character = self.player(refuter).character;
        let suggester_player = self.player_mut(suggester);
        suggester_player
            .notebook_mut()
            .record(card, Source::ShownBy(refuter_character));
        let suggester_character = suggester_player.character;
        let controller = suggester_player.controller;

        tracing::debug!(
            suggester = %suggester_character,
            refuter = %refuter_character,
            "card shown"
        );
        self.record(GameEvent::Suggested {
            suggester: suggester_character,
            triple,
            refuted_by: Some(refuter_character),
        });

        SuggestionOutcome::Refuted {
            refuter: refuter_character,
            card,
            suggester: controller,
        }
    }
}
