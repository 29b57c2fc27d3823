//! The game of Belka.
//!
//! A four-player trick-taking card game with a 36-card deck, played in fixed
//! partnerships. The engine is a pure state machine: a [`GameState`] snapshot
//! takes an [`Intent`] and returns the next snapshot. Robot seats and the
//! cosmetic pauses between automatic moves are handled by the [`Autopilot`].

mod autopilot;
mod card;
mod deal;
mod deck;
mod error;
mod intent;
mod robot;
mod rules;
mod scoring;
mod seat;
mod settings;
mod state;
mod trick;
mod trump;

pub use self::autopilot::{Autopilot, Pace, Scheduled};
pub use self::card::{create_deck, sort_hand, Card, Deck, ParseCardError, Rank, Suit};
pub use self::deal::{Deal, RandomShoe, Shoe, StackedShoe, DECK_SIZE, HAND_SIZE};
pub use self::error::{ConfigError, DealError, IntentError};
pub use self::intent::Intent;
pub use self::robot::choose_card;
pub use self::rules::{Rules, SuitClass};
pub use self::scoring::{check_threshold, score_round, MatchOutcome, RoundResult, TRICKS_PER_ROUND};
pub use self::seat::{PerTeam, Seat, Team};
pub use self::settings::{
    default_names, parse_names, Settings, DEFAULT_THRESHOLD, MAX_NAME_LEN, THRESHOLD_PRESETS,
};
pub use self::state::{GameState, Phase, Tricks};
pub use self::trick::{Trick, TRICK_SIZE};
pub use self::trump::{call_trump, Partnership, TrumpCall, FIRST_ROUND_TRUMP};
