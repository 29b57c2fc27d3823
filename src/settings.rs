//! Match settings.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Rules, Seat};

/// Win thresholds offered to players.
pub const THRESHOLD_PRESETS: [u32; 5] = [5, 7, 10, 12, 15];

/// The default win threshold.
pub const DEFAULT_THRESHOLD: u32 = 12;

/// Longest allowed display name, in characters.
pub const MAX_NAME_LEN: usize = 12;

/// Configuration for a match. Changes take effect at the next match start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The rule set.
    pub rules: Rules,
    /// The score at which the match ends.
    pub win_threshold: u32,
    /// Display names, indexed by seat number.
    pub names: [String; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            win_threshold: DEFAULT_THRESHOLD,
            names: default_names(),
        }
    }
}

/// The names used when none are configured.
pub fn default_names() -> [String; 4] {
    ["You", "Player 2", "Partner", "Player 4"].map(String::from)
}

/// Trims and checks a list of names, one per seat.
pub fn parse_names<I, S>(names: I) -> Result<[String; 4], ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .collect();
    let count = names.len();
    let names: [String; 4] = names
        .try_into()
        .map_err(|_| ConfigError::NameCount(count))?;
    for (&seat, name) in Seat::all_seats().iter().zip(&names) {
        if name.is_empty() {
            return Err(ConfigError::EmptyName(seat));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ConfigError::NameTooLong {
                seat,
                max: MAX_NAME_LEN,
            });
        }
    }
    Ok(names)
}

impl Settings {
    /// Creates a new [`Settings`], validating every field.
    pub fn new(rules: Rules, win_threshold: u32, names: [String; 4]) -> Result<Self, ConfigError> {
        let settings = Self {
            rules,
            win_threshold,
            names: parse_names(names)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        parse_names(&self.names).map(|_| ())
    }

    /// The display name of a seat.
    pub fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.win_threshold, 12);
        assert!(THRESHOLD_PRESETS.contains(&settings.win_threshold));
        assert_eq!(settings.name(Seat::Top), "Partner");
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_names() {
        let names = parse_names([" Ann ", "Bob", "Cy", "Di"]).unwrap();
        assert_eq!(names[0], "Ann");

        assert_matches!(
            parse_names(["Ann", "", "Cy", "Di"]),
            Err(ConfigError::EmptyName(Seat::Left))
        );
        assert_matches!(
            parse_names(["Ann", "Bob", "Cy", "Bartholomew Jr"]),
            Err(ConfigError::NameTooLong {
                seat: Seat::Right,
                ..
            })
        );
        assert_matches!(parse_names(["Ann"]), Err(ConfigError::NameCount(1)));
        // Length counts characters, not bytes.
        assert!(parse_names(["Игрок Первый", "B", "C", "D"]).is_ok());
    }

    #[test]
    fn test_zero_threshold() {
        assert_eq!(
            Settings::new(Rules::Classic, 0, default_names()),
            Err(ConfigError::ZeroThreshold)
        );
        assert!(Settings::new(Rules::Classic, 7, default_names()).is_ok());
    }
}
