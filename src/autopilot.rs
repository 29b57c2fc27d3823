//! Autopilot
//!
//! Decides which intent should follow a snapshot without a human in the loop:
//! ending the reveal pause, playing for robot seats and resolving complete
//! tricks. The autopilot never sleeps; it hands back a [`Scheduled`] intent
//! with the pause the caller should observe before firing it.

use std::time::Duration;

use crate::{choose_card, GameState, Intent, Phase, Seat, Shoe};

/// Pause after the trump is revealed.
const REVEAL_PAUSE: Duration = Duration::from_millis(1500);

/// Pause before a robot plays.
const ROBOT_PAUSE: Duration = Duration::from_millis(900);

/// Pause while a complete trick stays on the table.
const TRICK_PAUSE: Duration = Duration::from_millis(1200);

/// Cosmetic pauses between automatic intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pace {
    pub reveal: Duration,
    pub robot: Duration,
    pub trick: Duration,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            reveal: REVEAL_PAUSE,
            robot: ROBOT_PAUSE,
            trick: TRICK_PAUSE,
        }
    }
}

impl Pace {
    /// No pauses at all.
    pub fn immediate() -> Self {
        Self {
            reveal: Duration::ZERO,
            robot: Duration::ZERO,
            trick: Duration::ZERO,
        }
    }

    /// The default pace, stretched so that a robot takes `robot_ms` to play.
    pub fn scaled(robot_ms: u64) -> Self {
        let scale = |pause: Duration| {
            let ms = (pause.as_millis() as u64).saturating_mul(robot_ms);
            Duration::from_millis(ms / ROBOT_PAUSE.as_millis() as u64)
        };
        Self {
            reveal: scale(REVEAL_PAUSE),
            robot: scale(ROBOT_PAUSE),
            trick: scale(TRICK_PAUSE),
        }
    }
}

/// Identifies the moment a [`Scheduled`] intent was planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Stamp {
    epoch: u64,
    round: u32,
    phase: Phase,
    current: Seat,
    tricks: usize,
    played: usize,
}

impl Stamp {
    fn of(state: &GameState) -> Self {
        Self {
            epoch: state.epoch(),
            round: state.round(),
            phase: state.phase(),
            current: state.current_player(),
            tricks: state.completed_tricks().len(),
            played: state.current_trick().len(),
        }
    }
}

/// An intent waiting out its pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub intent: Intent,
    pub delay: Duration,
    stamp: Stamp,
}

impl Scheduled {
    /// Returns true if `state` is still the moment this intent was planned for.
    pub fn is_current(&self, state: &GameState) -> bool {
        self.stamp == Stamp::of(state)
    }

    /// Applies the intent, unless the match has moved on since it was planned.
    pub fn fire<S: Shoe + ?Sized>(self, state: &GameState, shoe: &mut S) -> GameState {
        if self.is_current(state) {
            state.apply(self.intent, shoe)
        } else {
            log::debug!("dropping stale {}", self.intent);
            state.clone()
        }
    }
}

/// Plays the seats nobody is sitting at.
#[derive(Debug, Clone)]
pub struct Autopilot {
    humans: Vec<Seat>,
    pace: Pace,
}

impl Autopilot {
    /// Creates a new [`Autopilot`] that leaves `humans` to play for themselves.
    pub fn new<I: IntoIterator<Item = Seat>>(humans: I, pace: Pace) -> Self {
        Self {
            humans: humans.into_iter().collect(),
            pace,
        }
    }

    pub fn is_human(&self, seat: Seat) -> bool {
        self.humans.contains(&seat)
    }

    /// The intent that should follow `state`, if it doesn't wait on a human.
    pub fn schedule(&self, state: &GameState) -> Option<Scheduled> {
        let (intent, delay) = match state.phase() {
            Phase::TrumpRevealed => (Intent::StartPlaying, self.pace.reveal),
            Phase::TrickResolved => (Intent::ResolveTrick, self.pace.trick),
            Phase::PlayingTrick => {
                let seat = state.current_player();
                if self.is_human(seat) {
                    return None;
                }
                let card = choose_card(state, seat)?;
                (Intent::PlayCard { seat, card }, self.pace.robot)
            }
            _ => return None,
        };
        Some(Scheduled {
            intent,
            delay,
            stamp: Stamp::of(state),
        })
    }
}
