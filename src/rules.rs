//! Legal plays and trick resolution.
//!
//! Two rule sets are supported. A match is played under exactly one of them,
//! and each one bundles its own partnership scheme, trick comparison and
//! scoring, so the pieces never mix:
//!
//!  - [`Rules::Classic`]: fixed partnerships, trump from the reveal card, plain
//!    trick comparison and the two-point card-points scoring.
//!  - [`Rules::Belka`]: partnerships fixed by the Jack of Clubs, all four Jacks
//!    are permanent trumps (clubs, spades, hearts, diamonds, strongest first),
//!    and rounds are scored in eyes.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Card, Seat, Suit, Trick};

/// The rule set for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rules {
    /// Fixed partnerships, points scoring, no Jack hierarchy.
    Classic,
    /// Jack of Clubs partnerships, eyes scoring, Jack hierarchy.
    #[default]
    Belka,
}

impl Display for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rules::Classic => "classic",
            Rules::Belka => "belka",
        })
    }
}

impl FromStr for Rules {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Rules::Classic),
            "belka" => Ok(Rules::Belka),
            _ => Err(format!("unknown rules {s:?}, expected classic or belka")),
        }
    }
}

/// Which group of cards a card belongs to for following and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitClass {
    Trump,
    Plain(Suit),
}

/// Strength of a Jack in the Belka hierarchy.
fn jack_order(suit: Suit) -> u8 {
    match suit {
        Suit::Clubs => 3,
        Suit::Spades => 2,
        Suit::Hearts => 1,
        Suit::Diamonds => 0,
    }
}

impl Rules {
    /// Returns true if all four Jacks are permanent trumps.
    pub fn has_jack_hierarchy(self) -> bool {
        matches!(self, Rules::Belka)
    }

    /// Returns true if the card is considered to be trump.
    pub fn is_trump(self, card: Card, trump: Option<Suit>) -> bool {
        trump == Some(card.suit) || self.has_jack_hierarchy() && card.is_jack()
    }

    /// The class a card belongs to, given the trump suit.
    pub fn class(self, card: Card, trump: Option<Suit>) -> SuitClass {
        if self.is_trump(card, trump) {
            SuitClass::Trump
        } else {
            SuitClass::Plain(card.suit)
        }
    }

    /// Strength of a card within its class. Under Belka every Jack is stronger
    /// than every other card.
    pub fn power(self, card: Card) -> u8 {
        let rank = card.rank as u8;
        if self.has_jack_hierarchy() && card.is_jack() {
            10 + jack_order(card.suit)
        } else {
            rank
        }
    }

    /// The class that must be followed in this trick, if it has been led.
    pub fn lead_class(self, trick: &Trick, trump: Option<Suit>) -> Option<SuitClass> {
        trick.lead().map(|(_, card)| self.class(card, trump))
    }

    /// The subset of the hand that may legally be played into the trick.
    ///
    /// The lead class must be followed when possible; failing that, a trump
    /// must be played when possible; failing that, anything goes.
    pub fn legal_plays(self, hand: &[Card], trick: &Trick, trump: Option<Suit>) -> Vec<Card> {
        let Some(lead) = self.lead_class(trick, trump) else {
            return hand.to_vec();
        };
        let following: Vec<_> = hand
            .iter()
            .filter(|c| self.class(**c, trump) == lead)
            .copied()
            .collect();
        if !following.is_empty() {
            return following;
        }
        let trumps: Vec<_> = hand
            .iter()
            .filter(|c| self.is_trump(**c, trump))
            .copied()
            .collect();
        if trumps.is_empty() {
            hand.to_vec()
        } else {
            trumps
        }
    }

    /// Returns true if `challenger` takes the trick away from `current`.
    pub fn beats(self, challenger: Card, current: Card, lead: SuitClass, trump: Option<Suit>) -> bool {
        let challenger_class = self.class(challenger, trump);
        let current_class = self.class(current, trump);
        match (challenger_class, current_class) {
            (SuitClass::Trump, SuitClass::Trump) => self.power(challenger) > self.power(current),
            (SuitClass::Trump, _) => true,
            (_, SuitClass::Trump) => false,
            (a, b) if a == b => self.power(challenger) > self.power(current),
            (a, _) => a == lead && current_class != lead,
        }
    }

    /// The best card played so far, if any.
    pub fn current_best(self, trick: &Trick, trump: Option<Suit>) -> Option<(Seat, Card)> {
        let lead = self.lead_class(trick, trump)?;
        trick.cards.iter().copied().reduce(|best, next| {
            if self.beats(next.1, best.1, lead, trump) {
                next
            } else {
                best
            }
        })
    }

    /// Determines the seat that takes a complete trick.
    ///
    /// # Panics
    ///
    /// Panics if fewer than four cards have been played.
    pub fn trick_winner(self, trick: &Trick, trump: Option<Suit>) -> Seat {
        assert!(
            trick.is_complete(),
            "trick winner requested with {} cards",
            trick.len()
        );
        self.current_best(trick, trump)
            .map(|(seat, _)| seat)
            .expect("complete trick has a lead")
    }
}
