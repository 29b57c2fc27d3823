//! Match state machine.
//!
//! ## Gameplay
//!
//! A match starts with a deal. Nine cards go to each seat, one at a time,
//! starting left of the dealer, and the last card dealt to the dealer is turned
//! up as the reveal card. Partnerships and trump are then fixed according to
//! the [`Rules`] of the match, and the seat left of the dealer leads the first
//! trick.
//!
//! Each trick is a card from every seat in clockwise order. Once all four are
//! down the trick is resolved, and its winner leads the next one. After nine
//! tricks the round is scored; the match ends when a team reaches the win
//! threshold, otherwise the deal passes clockwise.
//!
//! ## State management
//!
//! [`GameState`] is an immutable snapshot. Applying an [`Intent`] returns a new
//! snapshot; an intent that doesn't fit (wrong phase, wrong seat, a card that
//! isn't held or isn't legal) returns the state unchanged. The phases run
//!
//! ```text
//! WAITING -> DEALING -> TRUMP_REVEALED -> PLAYING_TRICK <-> TRICK_RESOLVED
//!         -> ROUND_FINISHED -> (DEALING ...) | MATCH_FINISHED
//! ```
//!
//! `DEALING` only exists inside a transition; callers never observe it.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    call_trump, check_threshold, score_round, sort_hand, Card, Intent, IntentError, MatchOutcome,
    Partnership, PerTeam, RoundResult, Rules, Seat, Settings, Shoe, Suit, Team, Trick,
};

mod tricks;
pub use tricks::Tricks;


/// The phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Waiting,
    Dealing,
    TrumpRevealed,
    PlayingTrick,
    TrickResolved,
    RoundFinished,
    MatchFinished,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Waiting => "waiting",
            Phase::Dealing => "dealing",
            Phase::TrumpRevealed => "trump revealed",
            Phase::PlayingTrick => "playing trick",
            Phase::TrickResolved => "trick resolved",
            Phase::RoundFinished => "round finished",
            Phase::MatchFinished => "match finished",
        })
    }
}

/// A snapshot of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Bumped whenever a match is started or reset.
    epoch: u64,
    /// Configured settings, used by the next match.
    settings: Settings,
    /// Settings in force for the current match.
    table: Settings,
    phase: Phase,
    score: PerTeam<u32>,
    round: u32,
    dealer: Seat,
    current: Seat,
    hands: [Vec<Card>; 4],
    trump: Option<Suit>,
    reveal: Option<Card>,
    trump_holder: Option<Seat>,
    partnership: Partnership,
    trick: Trick,
    tricks: Tricks,
    last_result: Option<RoundResult>,
    results: Vec<RoundResult>,
    eggs_pending: bool,
    winner: Option<Team>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl GameState {
    /// Creates a new match waiting to be started.
    pub fn new(settings: Settings) -> Self {
        Self {
            epoch: 0,
            table: settings.clone(),
            settings,
            phase: Phase::Waiting,
            score: PerTeam::default(),
            round: 0,
            dealer: Seat::Bottom,
            current: Seat::Bottom,
            hands: Default::default(),
            trump: None,
            reveal: None,
            trump_holder: None,
            partnership: Partnership::default(),
            trick: Trick::new(),
            tricks: Tricks::default(),
            last_result: None,
            results: vec![],
            eggs_pending: false,
            winner: None,
        }
    }

    /// Applies an intent, returning the next state. Rejected intents return
    /// an unchanged copy of this state.
    pub fn apply<S: Shoe + ?Sized>(&self, intent: Intent, shoe: &mut S) -> GameState {
        match self.try_apply(intent, shoe) {
            Ok(next) => next,
            Err(err) => {
                log::debug!("rejected intent: {err}");
                self.clone()
            }
        }
    }

    /// Applies an intent, reporting why it was rejected.
    pub fn try_apply<S: Shoe + ?Sized>(
        &self,
        intent: Intent,
        shoe: &mut S,
    ) -> Result<GameState, IntentError> {
        let label = intent.label();
        log::debug!("{} ({}): {}", self.phase, self.epoch, intent);
        let next = match intent {
            Intent::StartGame {
                win_threshold,
                names,
            } => self.start_game(win_threshold, names, shoe)?,
            Intent::StartPlaying => {
                self.expect_phase(label, Phase::TrumpRevealed)?;
                self.with_phase(Phase::PlayingTrick)
            }
            Intent::PlayCard { seat, card } => self.play_card(seat, card)?,
            Intent::ResolveTrick => {
                self.expect_phase(label, Phase::TrickResolved)?;
                self.resolve_trick()
            }
            Intent::NextRound => {
                self.expect_phase(label, Phase::RoundFinished)?;
                self.next_round(shoe)
            }
            Intent::ResetMatch => self.reset(self.settings.clone()),
            Intent::UpdateSettings(settings) => {
                let settings = Settings::new(settings.rules, settings.win_threshold, settings.names)?;
                GameState {
                    settings,
                    ..self.clone()
                }
            }
        };
        if next.phase != self.phase {
            log::debug!("{} -> {}", self.phase, next.phase);
        }
        Ok(next)
    }

    fn expect_phase(&self, intent: &'static str, phase: Phase) -> Result<(), IntentError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(IntentError::WrongPhase {
                intent,
                phase: self.phase,
            })
        }
    }

    fn with_phase(&self, phase: Phase) -> GameState {
        GameState {
            phase,
            ..self.clone()
        }
    }

    /// A fresh match in the waiting phase.
    fn reset(&self, settings: Settings) -> GameState {
        GameState {
            epoch: self.epoch + 1,
            ..GameState::new(settings)
        }
    }

    fn start_game<S: Shoe + ?Sized>(
        &self,
        win_threshold: Option<u32>,
        names: Option<[String; 4]>,
        shoe: &mut S,
    ) -> Result<GameState, IntentError> {
        let settings = Settings::new(
            self.settings.rules,
            win_threshold.unwrap_or(self.settings.win_threshold),
            names.unwrap_or_else(|| self.settings.names.clone()),
        )?;
        let mut next = self.reset(settings);
        next.round = 1;
        next.dealer = shoe.first_dealer();
        next.deal(shoe);
        log::info!(
            "match {} started: {} rules, first to {}",
            next.epoch,
            next.table.rules,
            next.table.win_threshold
        );
        Ok(next)
    }

    /// Deals the current round and fixes trump.
    fn deal<S: Shoe + ?Sized>(&mut self, shoe: &mut S) {
        self.phase = Phase::Dealing;
        let deal = shoe
            .deal(self.dealer)
            .unwrap_or_else(|err| panic!("cannot deal round {}: {err}", self.round));
        let rules = self.table.rules;
        if self.round == 1 {
            self.partnership = Partnership::from_first_deal(rules, &deal);
        }
        let call = call_trump(rules, self.round, &deal, &self.partnership);
        for (hand, dealt) in self.hands.iter_mut().zip(&deal.hands) {
            *hand = sort_hand(dealt, Some(call.trump));
        }
        self.trump = Some(call.trump);
        self.trump_holder = call.holder;
        self.reveal = Some(deal.reveal);
        self.trick = Trick::new();
        self.tricks = Tricks::default();
        self.current = self.dealer.next();
        self.phase = Phase::TrumpRevealed;
        log::debug!(
            "round {}: {} deals, reveals {}, trump {}",
            self.round,
            self.dealer,
            deal.reveal,
            call.trump
        );
    }

    fn play_card(&self, seat: Seat, card: Card) -> Result<GameState, IntentError> {
        self.expect_phase("play card", Phase::PlayingTrick)?;
        if seat != self.current {
            return Err(IntentError::NotYourTurn {
                seat,
                expected: self.current,
            });
        }
        let hand = self.hand(seat);
        let index = hand
            .iter()
            .position(|c| *c == card)
            .ok_or(IntentError::CardNotHeld(seat, card))?;
        if !self.legal_plays(seat).contains(&card) {
            return Err(IntentError::IllegalCard(seat, card));
        }

        let mut next = self.clone();
        next.hands[seat.index()].remove(index);
        next.trick.play(seat, card);
        next.current = seat.next();
        if next.trick.is_complete() {
            next.phase = Phase::TrickResolved;
        }
        Ok(next)
    }

    fn resolve_trick(&self) -> GameState {
        let mut next = self.clone();
        let mut trick = std::mem::take(&mut next.trick);
        let winner = self.table.rules.trick_winner(&trick, self.trump);
        trick.winner = Some(winner);
        log::debug!("trick {}: {} -> {}", self.tricks.len() + 1, trick, winner);
        next.tricks.push(trick);
        next.current = winner;
        if next.tricks.is_round_over() {
            next.finish_round();
        } else {
            next.phase = Phase::PlayingTrick;
        }
        next
    }

    /// Scores the round and checks for the end of the match.
    fn finish_round(&mut self) {
        let rules = self.table.rules;
        let result = score_round(
            rules,
            self.tricks.as_slice(),
            self.trump_holder,
            self.eggs_pending,
        );
        self.eggs_pending = result.eggs && rules == Rules::Belka;
        for &team in Team::all_teams() {
            self.score[team] += result.awarded[team];
        }
        log::info!(
            "round {}: {}; score {} {} - {} {}",
            self.round,
            result,
            Team::BottomTop.to_abbr(),
            self.score.bottom_top,
            Team::LeftRight.to_abbr(),
            self.score.left_right
        );
        self.last_result = Some(result.clone());
        self.results.push(result);
        self.phase = match check_threshold(&self.score, self.table.win_threshold) {
            MatchOutcome::Continue => Phase::RoundFinished,
            MatchOutcome::Won(team) => {
                log::info!("match {}: {team} wins", self.epoch);
                self.winner = Some(team);
                Phase::MatchFinished
            }
            MatchOutcome::Drawn => {
                log::info!("match {}: drawn", self.epoch);
                Phase::MatchFinished
            }
        };
    }

    fn next_round<S: Shoe + ?Sized>(&self, shoe: &mut S) -> GameState {
        let mut next = self.clone();
        next.round += 1;
        next.dealer = self.dealer.next();
        next.deal(shoe);
        next
    }

    /// The seat's legal plays, regardless of whose turn it is.
    fn legal_plays(&self, seat: Seat) -> Vec<Card> {
        self.table
            .rules
            .legal_plays(self.hand(seat), &self.trick, self.trump)
    }

    /// The cards a seat may play right now. Empty unless it is that seat's
    /// turn in a trick.
    pub fn legal_plays_for(&self, seat: Seat) -> Vec<Card> {
        if self.seat_to_play() == Some(seat) {
            self.legal_plays(seat)
        } else {
            vec![]
        }
    }

    /// The seat expected to play a card, if a trick is open.
    pub fn seat_to_play(&self) -> Option<Seat> {
        (self.phase == Phase::PlayingTrick).then_some(self.current)
    }

    /// The match counter; it changes whenever a match is started or reset.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The settings that the next match will use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The rule set of the current match.
    pub fn rules(&self) -> Rules {
        self.table.rules
    }

    /// The win threshold of the current match.
    pub fn win_threshold(&self) -> u32 {
        self.table.win_threshold
    }

    /// A seat's display name in the current match.
    pub fn name(&self, seat: Seat) -> &str {
        self.table.name(seat)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cumulative match score.
    pub fn score(&self) -> &PerTeam<u32> {
        &self.score
    }

    /// The round number, starting at 1. Zero before the first deal.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// The seat to act next, or the leader of the next trick.
    pub fn current_player(&self) -> Seat {
        self.current
    }

    /// A seat's remaining cards, in display order.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// The last card dealt to the dealer this round.
    pub fn reveal(&self) -> Option<Card> {
        self.reveal
    }

    /// The seat holding the Jack that named trump this round.
    pub fn trump_holder(&self) -> Option<Seat> {
        self.trump_holder
    }

    /// Match-long partnership details.
    pub fn partnership(&self) -> &Partnership {
        &self.partnership
    }

    /// The trick in progress.
    pub fn current_trick(&self) -> &Trick {
        &self.trick
    }

    /// Tricks completed this round.
    pub fn completed_tricks(&self) -> &Tricks {
        &self.tricks
    }

    /// The result of the most recent round.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Results of every round of the match so far.
    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    /// True when the last decisive round was a tie, so the next one pays the bonus.
    pub fn eggs_pending(&self) -> bool {
        self.eggs_pending
    }

    /// The winning team, once the match is over. `None` for a draw.
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }
}
