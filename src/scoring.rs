//! Round scoring.
//!
//! Card points (ten 10, jack 2, queen 3, king 4, ace 11) follow each trick to
//! the winner's team. What the card points are worth in the match depends on
//! the rule set:
//!
//!  - Points ([`Rules::Classic`]): the team with strictly more card points
//!    takes two match points; a tie pays nobody.
//!  - Eyes ([`Rules::Belka`]): taking all nine tricks pays twelve. Otherwise
//!    the loser's card points select a band (under 14, 14 to 30, 31 and up),
//!    paying 5/3/1 when the winners held the trump-revealing Jack and 6/4/2
//!    when they did not. A tie ("eggs") pays nothing, but the next decisive
//!    round pays a flat four instead.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{PerTeam, Rules, Seat, Team, Trick};

/// Tricks in a round.
pub const TRICKS_PER_ROUND: usize = 9;

/// Match points for winning a round under the points scheme.
const POINTS_WIN: u32 = 2;

/// Eyes paid for taking every trick.
const EYES_ALL_TRICKS: u32 = 12;

/// Eyes paid by the first decisive round after a tie.
const EYES_AFTER_EGGS: u32 = 4;

/// The outcome of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Tricks taken by each seat, indexed by seat number.
    pub seat_tricks: [u8; 4],
    /// Tricks taken by each team.
    pub team_tricks: PerTeam<u8>,
    /// Card points taken by each team.
    pub card_points: PerTeam<u32>,
    /// Match points (or eyes) awarded this round.
    pub awarded: PerTeam<u32>,
    /// Both teams took the same card points.
    pub eggs: bool,
    /// The award is the flat bonus for the round after a tie.
    pub bonus: bool,
    /// The seat holding the trump-revealing Jack, if any.
    pub trump_holder: Option<Seat>,
}

impl Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            None => write!(
                f,
                "eggs at {} card points each",
                self.card_points.bottom_top
            ),
            Some(team) => write!(
                f,
                "{} wins {} ({} to {} card points, {} tricks){}",
                team,
                self.awarded[team],
                self.card_points[team],
                self.card_points[team.other()],
                self.team_tricks[team],
                if self.bonus { " with the eggs bonus" } else { "" },
            ),
        }
    }
}

impl RoundResult {
    /// The team that took more card points, if the round wasn't a tie.
    pub fn winner(&self) -> Option<Team> {
        let (bt, lr) = (self.card_points.bottom_top, self.card_points.left_right);
        match bt.cmp(&lr) {
            std::cmp::Ordering::Greater => Some(Team::BottomTop),
            std::cmp::Ordering::Less => Some(Team::LeftRight),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns true if the winning team took every trick.
    pub fn is_sweep(&self) -> bool {
        Team::all_teams()
            .iter()
            .any(|&t| usize::from(self.team_tricks[t]) == TRICKS_PER_ROUND)
    }
}

/// Tallies resolved tricks into per-seat and per-team counts and card points.
fn tally(tricks: &[Trick]) -> RoundResult {
    let mut result = RoundResult::default();
    for trick in tricks {
        let Some(winner) = trick.winner else {
            continue;
        };
        result.seat_tricks[winner.index()] += 1;
        result.team_tricks[winner.team()] += 1;
        result.card_points[winner.team()] += trick.points();
    }
    result
}

/// Scores a finished round.
///
/// `eggs_pending` is true when the previous round was a tie under the eyes
/// scheme; it is ignored by the points scheme.
pub fn score_round(
    rules: Rules,
    tricks: &[Trick],
    trump_holder: Option<Seat>,
    eggs_pending: bool,
) -> RoundResult {
    let mut result = tally(tricks);
    result.trump_holder = trump_holder;
    let Some(winner) = result.winner() else {
        result.eggs = true;
        return result;
    };
    let award = match rules {
        Rules::Classic => POINTS_WIN,
        Rules::Belka if eggs_pending => {
            result.bonus = true;
            EYES_AFTER_EGGS
        }
        Rules::Belka if result.is_sweep() => EYES_ALL_TRICKS,
        Rules::Belka => {
            let holder_won = trump_holder.is_some_and(|seat| seat.team() == winner);
            eyes_band(result.card_points[winner.other()], holder_won)
        }
    };
    result.awarded[winner] = award;
    result
}

/// Eyes for a decisive round that wasn't a sweep.
fn eyes_band(loser_points: u32, holder_won: bool) -> u32 {
    let (low, high) = match loser_points {
        0..=13 => (5, 6),
        14..=30 => (3, 4),
        _ => (1, 2),
    };
    if holder_won {
        low
    } else {
        high
    }
}

/// The state of the match after a round's award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Nobody reached the threshold yet.
    Continue,
    /// A team reached the threshold with the higher score.
    Won(Team),
    /// The threshold was reached with both scores level.
    Drawn,
}

/// Checks cumulative scores against the win threshold.
pub fn check_threshold(score: &PerTeam<u32>, threshold: u32) -> MatchOutcome {
    let (bt, lr) = (score.bottom_top, score.left_right);
    if bt < threshold && lr < threshold {
        MatchOutcome::Continue
    } else if bt > lr {
        MatchOutcome::Won(Team::BottomTop)
    } else if lr > bt {
        MatchOutcome::Won(Team::LeftRight)
    } else {
        MatchOutcome::Drawn
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;
    use crate::Card;
    use Seat::{Bottom as B, Left as L, Right as R, Top as T};

    /// A resolved trick with the given cards, taken by `winner`.
    fn won<S: AsRef<str>>(winner: Seat, cards: [S; 4]) -> Trick {
        let mut trick = Trick::new();
        for (seat, card) in winner.next_n(4).into_iter().zip(cards) {
            trick.play(seat, card.as_ref().parse::<Card>().unwrap());
        }
        trick.winner = Some(winner);
        trick
    }

    /// The whole deck as nine tricks, one per rank, so the trick of a given
    /// rank carries four times that rank's points.
    fn by_rank(winners: [Seat; 9]) -> Vec<Trick> {
        let ranks = ["6", "7", "8", "9", "10", "J", "Q", "K", "A"];
        ranks
            .iter()
            .zip(winners)
            .map(|(rank, winner)| {
                let cards = ["s", "h", "d", "c"].map(|s| format!("{rank}{s}"));
                won(winner, cards)
            })
            .collect()
    }

    #[test]
    fn test_points_more_card_points_wins() {
        // Bottom/Top take the aces and kings: 44 + 16 + 12 = 72 vs 48.
        let tricks = by_rank([L, L, R, L, R, L, B, T, B]);
        let result = score_round(Rules::Classic, &tricks, None, false);
        assert_eq!(result.card_points.bottom_top, 72);
        assert_eq!(result.card_points.left_right, 48);
        assert_eq!(result.awarded, PerTeam { bottom_top: 2, left_right: 0 });
        assert_eq!(result.seat_tricks, [2, 4, 1, 2]);
        assert!(!result.eggs);
    }

    #[test]
    fn test_points_sweep_pays_two() {
        let tricks = by_rank([B, T, B, T, B, T, B, T, B]);
        let result = score_round(Rules::Classic, &tricks, None, false);
        assert_eq!(result.team_tricks.bottom_top, 9);
        assert!(result.is_sweep());
        assert_eq!(result.awarded, PerTeam { bottom_top: 2, left_right: 0 });
    }

    #[test]
    fn test_points_tie_pays_nobody() {
        // Aces and kings (60) against tens, jacks and queens (60).
        let tricks = by_rank([B, L, T, R, L, R, L, B, T]);
        let result = score_round(Rules::Classic, &tricks, None, true);
        assert!(result.eggs);
        assert!(!result.bonus);
        assert_eq!(result.awarded, PerTeam::default());
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_eyes_sweep_pays_twelve() {
        let tricks = by_rank([L, R, L, R, L, R, L, R, L]);
        let result = score_round(Rules::Belka, &tricks, Some(B), false);
        assert_eq!(result.awarded, PerTeam { bottom_top: 0, left_right: 12 });
    }

    #[test]
    fn test_eyes_bands() {
        struct Case {
            winners: [Seat; 9],
            holder: Seat,
            expect: u32,
        }
        let cases = [
            // Loser has the 8 from the jacks: under 14.
            Case { winners: [B, B, B, B, B, L, B, B, B], holder: T, expect: 5 },
            Case { winners: [B, B, B, B, B, L, B, B, B], holder: R, expect: 6 },
            // Loser has queens and kings: 28.
            Case { winners: [B, B, B, B, B, B, L, L, B], holder: B, expect: 3 },
            Case { winners: [B, B, B, B, B, B, L, L, B], holder: L, expect: 4 },
            // Loser has tens: 40.
            Case { winners: [L, B, B, B, L, B, B, B, B], holder: T, expect: 1 },
            Case { winners: [L, B, B, B, L, B, B, B, B], holder: L, expect: 2 },
            // Queens alone (12) stay in the low band.
            Case { winners: [B, B, B, B, B, B, R, B, B], holder: B, expect: 5 },
        ];
        for case in cases {
            let tricks = by_rank(case.winners);
            let result = score_round(Rules::Belka, &tricks, Some(case.holder), false);
            assert_eq!(result.awarded.bottom_top, case.expect, "{result}");
            assert_eq!(result.awarded.left_right, 0);
        }
    }

    #[test]
    fn test_eyes_band_edges() {
        assert_eq!(eyes_band(13, true), 5);
        assert_eq!(eyes_band(14, true), 3);
        assert_eq!(eyes_band(30, false), 4);
        assert_eq!(eyes_band(31, false), 2);
    }

    #[test]
    fn test_eyes_bonus_after_eggs() {
        let tricks = by_rank([L, R, L, R, L, R, L, R, L]);
        let result = score_round(Rules::Belka, &tricks, Some(B), true);
        assert!(result.bonus);
        assert_eq!(result.awarded.left_right, 4);

        let tricks = by_rank([B, L, T, R, L, R, L, B, T]);
        let result = score_round(Rules::Belka, &tricks, Some(B), true);
        assert!(result.eggs);
        assert!(!result.bonus);
        assert_eq!(result.awarded, PerTeam::default());
    }

    #[test]
    fn test_check_threshold() {
        let score = |bt, lr| PerTeam { bottom_top: bt, left_right: lr };
        assert_eq!(check_threshold(&score(9, 11), 12), MatchOutcome::Continue);
        assert_eq!(
            check_threshold(&score(12, 11), 12),
            MatchOutcome::Won(Team::BottomTop)
        );
        assert_matches!(
            check_threshold(&score(10, 16), 12),
            MatchOutcome::Won(Team::LeftRight)
        );
        assert_eq!(check_threshold(&score(12, 12), 12), MatchOutcome::Drawn);
    }
}
