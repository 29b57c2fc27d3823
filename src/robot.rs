//! Robot player
//!
//! The robot is a plain function of the snapshot. It leads the highest card of
//! its longest plain suit, takes a trick as cheaply as it can, and otherwise
//! throws its lowest card.

use itertools::Itertools;

use crate::{Card, GameState, Rules, Seat, Suit, SuitClass, Trick};

/// Chooses the card `seat` should play, or `None` if it isn't that seat's turn.
pub fn choose_card(state: &GameState, seat: Seat) -> Option<Card> {
    let legal = state.legal_plays_for(seat);
    match legal.as_slice() {
        [] => None,
        [only] => Some(*only),
        _ if state.current_trick().is_empty() => Some(lead(state.rules(), &legal, state.trump())),
        _ => Some(follow(
            state.rules(),
            state.current_trick(),
            state.trump(),
            &legal,
        )),
    }
}

/// The highest card of the longest plain suit. A hand holding nothing but
/// trump leads its strongest trump.
fn lead(rules: Rules, legal: &[Card], trump: Option<Suit>) -> Card {
    let by_class = legal
        .iter()
        .copied()
        .into_group_map_by(|c| rules.class(*c, trump));
    let longest = Suit::all_suits()
        .iter()
        .filter_map(|suit| by_class.get(&SuitClass::Plain(*suit)))
        .fold(None::<&Vec<Card>>, |best, cards| match best {
            Some(best) if best.len() >= cards.len() => Some(best),
            _ => Some(cards),
        })
        .or_else(|| by_class.get(&SuitClass::Trump))
        .expect("legal plays are not empty");
    *longest
        .iter()
        .max_by_key(|c| rules.power(**c))
        .expect("class group is not empty")
}

/// The cheapest card that takes the lead, or the cheapest card overall.
fn follow(rules: Rules, trick: &Trick, trump: Option<Suit>, legal: &[Card]) -> Card {
    let winning = rules
        .lead_class(trick, trump)
        .zip(rules.current_best(trick, trump))
        .map(|(lead, (_, best))| {
            legal
                .iter()
                .copied()
                .filter(|c| rules.beats(*c, best, lead, trump))
                .collect_vec()
        })
        .unwrap_or_default();
    let pool = if winning.is_empty() { legal } else { &winning };
    *pool
        .iter()
        .min_by_key(|c| rules.power(**c))
        .expect("legal plays are not empty")
}
