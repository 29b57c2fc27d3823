//! Partnerships and trump.
//!
//! Under [`Rules::Classic`] the partnerships are always Bottom/Top against
//! Left/Right, and trump is the suit of the dealer's reveal card.
//!
//! Under [`Rules::Belka`] the first round is always played in clubs, and the
//! seat dealt the Jack of Clubs becomes the trump holder; that seat's pair is
//! the "black" team for the rest of the match. Each seat is also given, for
//! good, the suit of the first Jack it was dealt. From the second round on,
//! trump is named by whichever seat holds the Jack of its own suit.

use serde::{Deserialize, Serialize};

use crate::{Card, Deal, Rank, Rules, Seat, Suit, Team};

/// Trump suit of every first round under [`Rules::Belka`].
pub const FIRST_ROUND_TRUMP: Suit = Suit::Clubs;

/// Match-long assignments made from the first deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partnership {
    /// The team of the first Jack of Clubs holder.
    pub jack_team: Option<Team>,
    /// Each seat's suit, indexed by seat number.
    pub suits: [Option<Suit>; 4],
}

impl Partnership {
    /// Fixes the partnership from the first deal of a match.
    pub fn from_first_deal(rules: Rules, deal: &Deal) -> Self {
        match rules {
            Rules::Classic => Self::default(),
            Rules::Belka => {
                let mut suits = [None; 4];
                for &seat in Seat::all_seats() {
                    suits[seat.index()] = deal.hand(seat).iter().find(|c| c.is_jack()).map(|c| c.suit);
                }
                Self {
                    jack_team: holder_of(deal, Card::new(Rank::Jack, FIRST_ROUND_TRUMP))
                        .map(Seat::team),
                    suits,
                }
            }
        }
    }

    /// The permanent suit of a seat.
    pub fn suit(&self, seat: Seat) -> Option<Suit> {
        self.suits[seat.index()]
    }
}

/// The trump suit for a round, and the seat that named it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrumpCall {
    pub trump: Suit,
    pub holder: Option<Seat>,
}

/// The seat that was dealt `card`.
fn holder_of(deal: &Deal, card: Card) -> Option<Seat> {
    Seat::all_seats()
        .iter()
        .copied()
        .find(|seat| deal.hand(*seat).contains(&card))
}

/// Determines trump for a round.
///
/// Under [`Rules::Belka`], when no seat holds the Jack of its own suit, the
/// reveal card names trump and the dealer holds it.
pub fn call_trump(rules: Rules, round: u32, deal: &Deal, partnership: &Partnership) -> TrumpCall {
    match rules {
        Rules::Classic => TrumpCall {
            trump: deal.reveal.suit,
            holder: None,
        },
        Rules::Belka if round <= 1 => TrumpCall {
            trump: FIRST_ROUND_TRUMP,
            holder: holder_of(deal, Card::new(Rank::Jack, FIRST_ROUND_TRUMP)),
        },
        Rules::Belka => Seat::all_seats()
            .iter()
            .find_map(|&seat| {
                let suit = partnership.suit(seat)?;
                deal.hand(seat)
                    .contains(&Card::new(Rank::Jack, suit))
                    .then_some(TrumpCall {
                        trump: suit,
                        holder: Some(seat),
                    })
            })
            .unwrap_or(TrumpCall {
                trump: deal.reveal.suit,
                holder: Some(deal.dealer),
            }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::StackedShoe;

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|c| c.parse().unwrap()).collect()
    }

    /// Every card of the deck, in four hands of nine, with the listed cards
    /// forced into the listed seats.
    fn fixture(dealer: Seat, forced: &[(Seat, &[&str])]) -> Deal {
        let mut hands: [Vec<Card>; 4] = Default::default();
        let mut placed = vec![];
        for (seat, list) in forced {
            let list = cards(list);
            placed.extend(list.iter().copied());
            hands[seat.index()].extend(list);
        }
        let mut rest = crate::create_deck()
            .into_iter()
            .filter(|c| !placed.contains(c));
        for hand in hands.iter_mut() {
            while hand.len() < 9 {
                hand.push(rest.next().unwrap());
            }
        }
        Deal::new(dealer, StackedShoe::stack(dealer, &hands)).unwrap()
    }

    #[test]
    fn test_classic_uses_reveal() {
        let deal = fixture(Seat::Bottom, &[]);
        let partnership = Partnership::from_first_deal(Rules::Classic, &deal);
        assert_eq!(partnership, Partnership::default());
        for round in 1..3 {
            let call = call_trump(Rules::Classic, round, &deal, &partnership);
            assert_eq!(call.trump, deal.reveal.suit);
            assert_eq!(call.holder, None);
        }
    }

    #[test]
    fn test_belka_first_round() {
        let deal = fixture(
            Seat::Right,
            &[
                (Seat::Left, &["9h", "Jd", "Jc"]),
                (Seat::Top, &["Js"]),
                (Seat::Bottom, &["Jh"]),
            ],
        );
        let partnership = Partnership::from_first_deal(Rules::Belka, &deal);
        assert_eq!(partnership.jack_team, Some(Team::LeftRight));
        assert_eq!(partnership.suit(Seat::Left), Some(Suit::Diamonds));
        assert_eq!(partnership.suit(Seat::Top), Some(Suit::Spades));
        assert_eq!(partnership.suit(Seat::Bottom), Some(Suit::Hearts));
        assert_eq!(partnership.suit(Seat::Right), None);

        let call = call_trump(Rules::Belka, 1, &deal, &partnership);
        assert_eq!(
            call,
            TrumpCall {
                trump: Suit::Clubs,
                holder: Some(Seat::Left)
            }
        );
    }

    #[test]
    fn test_belka_later_rounds() {
        let partnership = Partnership {
            jack_team: Some(Team::BottomTop),
            suits: [Some(Suit::Clubs), Some(Suit::Hearts), Some(Suit::Spades), None],
        };

        // Bottom doesn't hold the Jack of Clubs, Left holds the Jack of Hearts.
        let deal = fixture(
            Seat::Top,
            &[(Seat::Left, &["Jh"]), (Seat::Top, &["Js"]), (Seat::Right, &["Jc"])],
        );
        let call = call_trump(Rules::Belka, 2, &deal, &partnership);
        assert_eq!(
            call,
            TrumpCall {
                trump: Suit::Hearts,
                holder: Some(Seat::Left)
            }
        );

        // Nobody holds their own Jack: the reveal card decides.
        let deal = fixture(
            Seat::Top,
            &[(Seat::Right, &["Jh", "Js", "Jc"])],
        );
        let call = call_trump(Rules::Belka, 3, &deal, &partnership);
        assert_eq!(
            call,
            TrumpCall {
                trump: deal.reveal.suit,
                holder: Some(Seat::Top)
            }
        );
    }
}
