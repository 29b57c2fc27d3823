//! Error types

use crate::{Card, Phase, Seat};

/// Reasons an intent is turned away. A rejected intent leaves the state as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    /// The intent doesn't apply to the current phase.
    #[error("cannot {intent} while {phase}")]
    WrongPhase { intent: &'static str, phase: Phase },

    /// Somebody other than the seat to act tried to play.
    #[error("{seat} played out of turn, expected {expected}")]
    NotYourTurn { seat: Seat, expected: Seat },

    /// The player doesn't actually hold the card they attempted to play.
    #[error("{0} does not hold {1}")]
    CardNotHeld(Seat, Card),

    /// The card is held, but the player must follow or trump instead.
    #[error("{0} may not play {1} here")]
    IllegalCard(Seat, Card),

    /// The requested settings are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Invalid match settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("win threshold must be positive")]
    ZeroThreshold,
    #[error("name for {0} is empty")]
    EmptyName(Seat),
    #[error("name for {seat} is longer than {max} characters")]
    NameTooLong { seat: Seat, max: usize },
    #[error("expected 4 names, got {0}")]
    NameCount(usize),
}

/// A deck that cannot be dealt. This is a bug in whoever built the deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DealError {
    #[error("deck is missing cards")]
    IncompleteDeck,
    #[error("deck contains duplicate card")]
    DuplicateCard,
}
