//! Dealing, and the shoe that supplies decks.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{create_deck, Card, DealError, Deck, Seat};

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 9;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 36;

/// The hands as dealt, before any sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// The dealer for this round.
    pub dealer: Seat,
    /// Each seat's hand in the order it was dealt, indexed by seat number.
    pub hands: [Vec<Card>; 4],
    /// The last card dealt to the dealer.
    pub reveal: Card,
}

impl Deal {
    /// Deals the deck one card at a time, starting left of the dealer and
    /// ending with the dealer.
    pub fn new(dealer: Seat, mut deck: Deck) -> Result<Self, DealError> {
        validate(&deck)?;
        let mut hands: [Vec<Card>; 4] = Default::default();
        for _ in 0..HAND_SIZE {
            for seat in dealer.next_n(4) {
                hands[seat.index()].extend(deck.take(1));
            }
        }
        let reveal = *hands[dealer.index()]
            .last()
            .ok_or(DealError::IncompleteDeck)?;
        Ok(Self {
            dealer,
            hands,
            reveal,
        })
    }

    /// The hand dealt to a seat.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }
}

/// Checks that the deck holds every card exactly once.
fn validate(deck: &Deck) -> Result<(), DealError> {
    if deck.len() != DECK_SIZE {
        return Err(DealError::IncompleteDeck);
    }
    let seen: HashSet<_> = deck.iter().collect();
    if seen.len() == DECK_SIZE {
        Ok(())
    } else {
        Err(DealError::DuplicateCard)
    }
}

/// A source of decks for successive deals.
pub trait Shoe {
    /// The dealer of the first round of a match.
    fn first_dealer(&mut self) -> Seat;

    /// The deck for the next deal.
    fn next_deck(&mut self) -> Deck;

    /// Deals the next deck.
    fn deal(&mut self, dealer: Seat) -> Result<Deal, DealError> {
        Deal::new(dealer, self.next_deck())
    }
}

/// A shoe that shuffles a fresh deck for every deal.
#[derive(Debug, Clone)]
pub struct RandomShoe<R> {
    rng: R,
}

impl<R: Rng> RandomShoe<R> {
    /// Creates a new [`RandomShoe`] drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomShoe<StdRng> {
    /// A reproducible shoe.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A shoe seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Shoe for RandomShoe<R> {
    fn first_dealer(&mut self) -> Seat {
        self.rng.gen()
    }

    fn next_deck(&mut self) -> Deck {
        create_deck().shuffled(&mut self.rng)
    }
}

/// A shoe that hands out prepared decks in order. The last deck is reused
/// once the others run out.
#[derive(Debug, Clone)]
pub struct StackedShoe {
    dealer: Seat,
    decks: VecDeque<Deck>,
    last: Deck,
}

impl StackedShoe {
    /// Creates a new [`StackedShoe`], with a fixed first dealer.
    pub fn new<I: IntoIterator<Item = Deck>>(dealer: Seat, decks: I) -> Self {
        Self {
            dealer,
            decks: decks.into_iter().collect(),
            last: create_deck(),
        }
    }

    /// Builds the deck that deals exactly `hands` when `dealer` deals it. The
    /// last card of the dealer's hand becomes the reveal card.
    pub fn stack(dealer: Seat, hands: &[Vec<Card>; 4]) -> Deck {
        let order = dealer.next_n(4);
        (0..HAND_SIZE)
            .flat_map(|i| order.iter().map(move |seat| (i, *seat)))
            .filter_map(|(i, seat)| hands[seat.index()].get(i).copied())
            .collect()
    }
}

impl Shoe for StackedShoe {
    fn first_dealer(&mut self) -> Seat {
        self.dealer
    }

    fn next_deck(&mut self) -> Deck {
        if let Some(deck) = self.decks.pop_front() {
            self.last = deck.clone();
            deck
        } else {
            self.last.clone()
        }
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    fn all_dealt(deal: &Deal) -> HashSet<Card> {
        deal.hands.iter().flatten().copied().collect()
    }

    #[test]
    fn test_random_deal() {
        let mut shoe = RandomShoe::seeded(11);
        for &dealer in Seat::all_seats() {
            let deal = shoe.deal(dealer).unwrap();
            for hand in &deal.hands {
                assert_eq!(hand.len(), HAND_SIZE);
            }
            assert_eq!(all_dealt(&deal).len(), DECK_SIZE);
            assert!(deal.hand(dealer).contains(&deal.reveal));
            assert_eq!(deal.hand(dealer).last(), Some(&deal.reveal));
        }
    }

    #[test]
    fn test_deal_order() {
        // Unshuffled: the first card goes left of the dealer, the fourth to the dealer.
        let deck = create_deck();
        let cards: Vec<_> = deck.iter().copied().collect();
        let deal = Deal::new(Seat::Top, deck).unwrap();
        assert_eq!(deal.hand(Seat::Right)[0], cards[0]);
        assert_eq!(deal.hand(Seat::Bottom)[0], cards[1]);
        assert_eq!(deal.hand(Seat::Left)[0], cards[2]);
        assert_eq!(deal.hand(Seat::Top)[0], cards[3]);
        assert_eq!(deal.reveal, cards[35]);
    }

    #[test]
    fn test_invalid_decks() {
        let short: Deck = create_deck().into_iter().skip(1).collect();
        assert_matches!(Deal::new(Seat::Bottom, short), Err(DealError::IncompleteDeck));

        let mut cards: Vec<_> = create_deck().into_iter().collect();
        cards[5] = cards[6];
        let doubled: Deck = cards.into_iter().collect();
        assert_matches!(Deal::new(Seat::Bottom, doubled), Err(DealError::DuplicateCard));
    }

    #[test]
    fn test_stacked_deck_deals_hands() {
        let cards: Vec<_> = create_deck().into_iter().collect();
        let hands: [Vec<Card>; 4] = [
            cards[0..9].to_vec(),
            cards[9..18].to_vec(),
            cards[18..27].to_vec(),
            cards[27..36].to_vec(),
        ];
        let mut shoe = StackedShoe::new(Seat::Left, [StackedShoe::stack(Seat::Left, &hands)]);
        let dealer = shoe.first_dealer();
        assert_eq!(dealer, Seat::Left);
        let deal = shoe.deal(dealer).unwrap();
        assert_eq!(deal.hands, hands);
        assert_eq!(deal.reveal, cards[17]);

        // The last deck is reused.
        assert_eq!(shoe.deal(dealer).unwrap(), deal);
    }
}
