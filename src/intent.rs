//! Intents

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Card, Seat, Settings};

/// Something a collaborator asks the game to do. Intents are applied with
/// [`GameState::apply`](crate::GameState::apply), which rejects the ones that
/// don't fit the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Starts a fresh match and deals the first round. Any overrides given
    /// here also become the configured settings.
    StartGame {
        win_threshold: Option<u32>,
        names: Option<[String; 4]>,
    },
    /// Ends the pause after the reveal and opens the first trick.
    StartPlaying,
    /// Plays a card from a seat's hand into the current trick.
    PlayCard { seat: Seat, card: Card },
    /// Awards the complete trick to its winner.
    ResolveTrick,
    /// Deals the next round after a round has been scored.
    NextRound,
    /// Abandons the match, keeping the configured settings.
    ResetMatch,
    /// Replaces the configured settings, effective at the next match start.
    UpdateSettings(Settings),
}

impl Intent {
    /// A short label, used in log lines and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::StartGame { .. } => "start game",
            Intent::StartPlaying => "start playing",
            Intent::PlayCard { .. } => "play card",
            Intent::ResolveTrick => "resolve trick",
            Intent::NextRound => "next round",
            Intent::ResetMatch => "reset match",
            Intent::UpdateSettings(_) => "update settings",
        }
    }

    /// A new match with the configured settings.
    pub fn start_game() -> Self {
        Intent::StartGame {
            win_threshold: None,
            names: None,
        }
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::PlayCard { seat, card } => write!(f, "{seat} plays {card}"),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_json_shape() {
        let intent = Intent::PlayCard {
            seat: Seat::Left,
            card: "10h".parse().unwrap(),
        };
        let json = serde_json::to_string(&intent).unwrap();
        assert_eq!(json, r#"{"type":"PLAY_CARD","seat":"Left","card":"10_hearts"}"#);
        assert_eq!(serde_json::from_str::<Intent>(&json).unwrap(), intent);

        let json = r#"{"type":"START_GAME","win_threshold":10,"names":null}"#;
        assert_eq!(
            serde_json::from_str::<Intent>(json).unwrap(),
            Intent::StartGame {
                win_threshold: Some(10),
                names: None
            }
        );
    }
}
