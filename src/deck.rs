//! A deck of cards.

use std::iter::FromIterator;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A deck of cards, in dealing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards }
    }
}

impl<C> IntoIterator for Deck<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<C> Deck<C> {
    /// The number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck has no cards left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards in dealing order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cards.iter()
    }

    /// Removes the next `n` cards from the top of the deck.
    pub fn take(&mut self, n: usize) -> Vec<C> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }
}

impl<C: Clone> Deck<C> {
    /// Returns a shuffled copy of the deck, leaving this one untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }
}
