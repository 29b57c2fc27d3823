//! The 36-card deck.

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use ansi_term::ANSIString;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::deck;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits, in the order the deck is built.
    pub fn all_suits() -> &'static [Suit; 4] {
        static SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
        &SUITS
    }

    /// The full lowercase name, as used in card ids.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }

    /// Position of the suit when a hand is laid out for display.
    fn display_order(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Clubs => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    /// Returns the suit symbol, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self {
            Suit::Clubs | Suit::Spades => self.to_string().into(),
            Suit::Diamonds | Suit::Hearts => Red.paint(self.to_string()),
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        })
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'S' | 's' | '♠' => Suit::Spades,
            'H' | 'h' | '♥' => Suit::Hearts,
            'D' | 'd' | '♦' => Suit::Diamonds,
            'C' | 'c' | '♣' => Suit::Clubs,
            _ => return Err(ParseCardError::Suit(c.to_string())),
        })
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if let Some(&suit) = Suit::all_suits().iter().find(|suit| suit.name() == lower) {
            return Ok(suit);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(ParseCardError::Suit(s.to_string())),
        }
    }
}

/// Card rank, ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, weakest first.
    pub fn all_ranks() -> &'static [Rank; 9] {
        static RANKS: [Rank; 9] = [
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ];
        &RANKS
    }

    /// Card points carried by a card of this rank into the trick winner's pile.
    pub fn points(self) -> u32 {
        match self {
            Rank::Ten => 10,
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ace => 11,
            _ => 0,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        })
    }
}

/// Failure to parse a card, rank or suit from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    #[error("unknown rank {0:?}")]
    Rank(String),
    #[error("unknown suit {0:?}")]
    Suit(String),
    #[error("malformed card {0:?}")]
    Malformed(String),
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card rank.
    pub rank: Rank,
    /// Card suit.
    pub suit: Suit,
}

impl Card {
    /// Creates a new [`Card`].
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The stable identifier of the card, e.g. `A_spades`.
    pub fn id(self) -> String {
        format!("{}_{}", self.rank, self.suit.name())
    }

    /// Card points for this card.
    pub fn points(self) -> u32 {
        self.rank.points()
    }

    /// Returns true if this is a Jack of any suit.
    pub fn is_jack(self) -> bool {
        self.rank == Rank::Jack
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self.suit {
            Suit::Clubs | Suit::Spades => self.to_string().into(),
            Suit::Diamonds | Suit::Hearts => Red.paint(self.to_string()),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts both the id form (`10_hearts`) and the short form (`Th`, `10h`, `A♠`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((rank, suit)) = s.split_once('_') {
            return Ok(Card::new(rank.parse()?, suit.parse()?));
        }
        let suit_char = s
            .chars()
            .last()
            .ok_or_else(|| ParseCardError::Malformed(s.to_string()))?;
        let rank = &s[..s.len() - suit_char.len_utf8()];
        Ok(Card::new(rank.parse()?, Suit::try_from(suit_char)?))
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A 36-card deck.
pub type Deck = deck::Deck<Card>;

impl Default for Deck {
    fn default() -> Self {
        itertools::iproduct!(Suit::all_suits(), Rank::all_ranks())
            .map(|(&suit, &rank)| Card { rank, suit })
            .collect()
    }
}

/// Builds the full, unshuffled deck: every suit from six to ace.
pub fn create_deck() -> Deck {
    Deck::default()
}

/// Returns the hand laid out for display: plain suits first, trump last, each
/// suit ascending by rank.
pub fn sort_hand(hand: &[Card], trump: Option<Suit>) -> Vec<Card> {
    hand.iter()
        .copied()
        .sorted_by_key(|c| (Some(c.suit) == trump, c.suit.display_order(), c.rank))
        .collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_deck() {
        let deck = create_deck();
        assert_eq!(deck.len(), 36);
        let ids: HashSet<_> = deck.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 36);
        for &suit in Suit::all_suits() {
            assert_eq!(deck.iter().filter(|c| c.suit == suit).count(), 9);
        }
    }

    #[test]
    fn test_card_ids() {
        assert_eq!(card("As").id(), "A_spades");
        assert_eq!(card("Th").id(), "10_hearts");
        assert_eq!(card("10h"), card("10_hearts"));
        assert_eq!(card("6♣"), Card::new(Rank::Six, Suit::Clubs));
        assert_eq!(card("jd").to_string(), "J♦");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1s".parse::<Card>(),
            Err(ParseCardError::Rank("1".to_string()))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(ParseCardError::Suit("x".to_string()))
        );
        assert!("".parse::<Card>().is_err());
        assert!("A_stars".parse::<Card>().is_err());
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&card("Qd")).unwrap();
        assert_eq!(json, "\"Q_diamonds\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card("Qd"));
    }

    #[test]
    fn test_points_total() {
        let total: u32 = create_deck().iter().map(|c| c.points()).sum();
        assert_eq!(total, 120);
    }

    #[test]
    fn test_sort_hand() {
        let hand = [card("As"), card("Kh"), card("6s"), card("9c"), card("7d")];
        let sorted = sort_hand(&hand, Some(Suit::Spades));
        assert_eq!(
            sorted,
            vec![card("9c"), card("Kh"), card("7d"), card("6s"), card("As")]
        );

        let hand = [card("Ah"), card("6h"), card("Kh")];
        assert_eq!(
            sort_hand(&hand, None),
            vec![card("6h"), card("Kh"), card("Ah")]
        );
    }
}
