//! Tricks completed during a round.

use delegate::delegate;
use serde::{Deserialize, Serialize};

use crate::{Trick, TRICKS_PER_ROUND};

/// Tricks completed this round, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tricks {
    tricks: Vec<Trick>,
}

impl Tricks {
    delegate! {
        to self.tricks {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn last(&self) -> Option<&Trick>;
            pub fn iter(&self) -> std::slice::Iter<'_, Trick>;
            pub fn as_slice(&self) -> &[Trick];
        }
    }

    /// Records a resolved trick.
    pub fn push(&mut self, trick: Trick) {
        assert!(self.len() < TRICKS_PER_ROUND, "round already has nine tricks");
        assert!(trick.winner.is_some(), "only resolved tricks are recorded");
        self.tricks.push(trick);
    }

    /// Returns true once every trick of the round has been played.
    pub fn is_round_over(&self) -> bool {
        self.len() == TRICKS_PER_ROUND
    }
}
