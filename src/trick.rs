//! Trick

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Card, Seat, Suit};

/// Number of cards in a complete trick.
pub const TRICK_SIZE: usize = 4;

/// A trick played during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    /// The printed suit of the first card played, if any.
    pub lead_suit: Option<Suit>,
    /// The cards that have been played into this trick, in order.
    pub cards: Vec<(Seat, Card)>,
    /// The seat that took the trick, once resolved.
    pub winner: Option<Seat>,
}

impl Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (seat, card)) in self.cards.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{seat}:{card}")?;
        }
        write!(f, "]")
    }
}

impl Trick {
    /// Creates a new, empty trick.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of cards played into this trick.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if nobody has played yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns true once every seat has played.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == TRICK_SIZE
    }

    /// The lead card, if any.
    pub fn lead(&self) -> Option<(Seat, Card)> {
        self.cards.first().copied()
    }

    /// Return the specified player's card in this trick.
    pub fn get_card(&self, seat: Seat) -> Option<Card> {
        self.cards
            .iter()
            .find_map(|(s, c)| if *s == seat { Some(*c) } else { None })
    }

    /// Plays a card into the trick, fixing the lead suit on the first card.
    pub fn play(&mut self, seat: Seat, card: Card) {
        assert!(self.cards.len() < TRICK_SIZE, "trick is already complete");
        if self.lead_suit.is_none() {
            self.lead_suit = Some(card.suit);
        }
        self.cards.push((seat, card));
    }

    /// Total card points in the trick.
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|(_, c)| c.points()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_play_fixes_lead() {
        let mut trick = Trick::new();
        assert_eq!(trick.lead(), None);
        trick.play(Seat::Left, "Kh".parse().unwrap());
        trick.play(Seat::Top, "As".parse().unwrap());
        assert_eq!(trick.lead_suit, Some(Suit::Hearts));
        assert_eq!(trick.get_card(Seat::Top), Some("As".parse().unwrap()));
        assert_eq!(trick.get_card(Seat::Right), None);
        assert_eq!(trick.points(), 15);
        assert_eq!(trick.to_string(), "[Left:K♥, Top:A♠]");
    }

    #[test]
    #[should_panic(expected = "trick is already complete")]
    fn test_fifth_card_panics() {
        let mut trick = Trick::new();
        for (seat, card) in Seat::all_seats().iter().zip(["6s", "7s", "8s", "9s"]) {
            trick.play(*seat, card.parse().unwrap());
        }
        assert!(trick.is_complete());
        trick.play(Seat::Bottom, "Ts".parse().unwrap());
    }
}
