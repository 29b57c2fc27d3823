//! Console front end.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use ansi_term::{ANSIString, ANSIStrings};
use belka::{Card, GameState, Phase, Seat, Suit, Team, Trick};
use itertools::Itertools;

/// Reads a value from stdin, asking again until it parses. Returns `None` at
/// end of input.
fn prompt<T: FromStr, S: Display>(prompt: S) -> io::Result<Option<T>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        let mut buffer = String::new();
        print!("{prompt}");
        stdout.flush()?;
        if stdin.lock().read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            if let Ok(obj) = T::from_str(trimmed) {
                return Ok(Some(obj));
            }
            println!("Invalid input, try again");
        }
    }
}

/// Prints the match for a human, and asks them for cards.
pub struct Console {
    seat: Option<Seat>,
    color: bool,
}

impl Console {
    /// Creates a console for the player at `seat`, or a spectator.
    pub fn new(seat: Option<Seat>, color: bool) -> Self {
        Self { seat, color }
    }

    /// The seat played from this console.
    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_card(&self, card: Card) -> String {
        self.format(&ANSIStrings(&[card.to_ansi_string()]))
    }

    fn format_suit(&self, suit: Suit) -> String {
        self.format(&ANSIStrings(&[suit.to_ansi_string()]))
    }

    fn format_cards(&self, cards: &[Card]) -> String {
        let parts = Itertools::intersperse(cards.iter().map(|c| c.to_ansi_string()), " ".into())
            .collect_vec();
        self.format(&ANSIStrings(&parts))
    }

    fn format_trick(&self, state: &GameState, trick: &Trick) -> String {
        let plays = trick.cards.iter().map(|(seat, card)| {
            vec![format!("{}:", state.name(*seat)).into(), card.to_ansi_string()]
        });
        let parts: Vec<ANSIString> = std::iter::once(vec!["[".into()])
            .chain(Itertools::intersperse(plays, vec![", ".into()]))
            .chain(std::iter::once(vec!["]".into()]))
            .flatten()
            .collect();
        self.format(&ANSIStrings(&parts))
    }

    fn team_names(&self, state: &GameState, team: Team) -> String {
        let [a, b] = team.seats();
        format!("{} & {}", state.name(a), state.name(b))
    }

    /// Prints whatever happened between two snapshots.
    pub fn notify(&self, before: &GameState, after: &GameState) {
        if after.completed_tricks().len() > before.completed_tricks().len() {
            if let Some(trick) = after.completed_tricks().last() {
                if let Some(winner) = trick.winner {
                    println!(
                        "Trick {}: {} -> {}",
                        after.completed_tricks().len(),
                        self.format_trick(after, trick),
                        after.name(winner)
                    );
                }
            }
        }
        if after.results().len() > before.results().len() {
            self.show_result(after);
        }
        if after.phase() == Phase::TrumpRevealed
            && (before.phase() != Phase::TrumpRevealed || before.epoch() != after.epoch())
        {
            self.show_deal(after);
        }
        if after.phase() == Phase::MatchFinished && before.phase() != Phase::MatchFinished {
            match after.winner() {
                Some(team) => println!("{} win the match!", self.team_names(after, team)),
                None => println!("The match is drawn."),
            }
        }
    }

    fn show_deal(&self, state: &GameState) {
        println!();
        println!("Round {} ({} rules)", state.round(), state.rules());
        println!("Dealer: {}", state.name(state.dealer()));
        if let Some(reveal) = state.reveal() {
            println!("Reveal: {}", self.format_card(reveal));
        }
        if let Some(trump) = state.trump() {
            match state.trump_holder() {
                Some(holder) => println!(
                    "Trump: {} (named by {})",
                    self.format_suit(trump),
                    state.name(holder)
                ),
                None => println!("Trump: {}", self.format_suit(trump)),
            }
        }
        if let Some(team) = state.partnership().jack_team {
            println!("Black team: {}", self.team_names(state, team));
        }
        if let Some(seat) = self.seat {
            println!("{}: {}", state.name(seat), self.format_cards(state.hand(seat)));
        }
    }

    fn show_result(&self, state: &GameState) {
        let Some(result) = state.last_result() else {
            return;
        };
        match result.winner() {
            Some(team) => println!(
                "{} take the round: {} to {} card points, {} tricks{}",
                self.team_names(state, team),
                result.card_points[team],
                result.card_points[team.other()],
                result.team_tricks[team],
                if result.bonus { ", eggs bonus" } else { "" },
            ),
            None => println!(
                "Eggs! {} card points each",
                result.card_points.bottom_top
            ),
        }
        let score = state.score();
        println!(
            "Score: {} {}, {} {} (first to {})",
            self.team_names(state, Team::BottomTop),
            score.bottom_top,
            self.team_names(state, Team::LeftRight),
            score.left_right,
            state.win_threshold()
        );
    }

    /// Asks the player for a card. Returns `None` at end of input.
    pub fn choose_card(&self, state: &GameState) -> io::Result<Option<Card>> {
        let Some(seat) = self.seat else {
            return Ok(None);
        };
        let trick = state.current_trick();
        if !trick.is_empty() {
            println!("Trick: {}", self.format_trick(state, trick));
        }
        println!("Hand: {}", self.format_cards(state.hand(seat)));
        println!("Legal: {}", self.format_cards(&state.legal_plays_for(seat)));
        prompt("Play? ")
    }

    /// Waits for the player before the next deal. Returns false at end of input.
    pub fn confirm_next_round(&self) -> io::Result<bool> {
        print!("Press enter to deal...");
        io::stdout().flush()?;
        let mut buffer = String::new();
        Ok(io::stdin().lock().read_line(&mut buffer)? > 0)
    }
}
