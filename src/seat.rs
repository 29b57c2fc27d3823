//! Table position.

use std::convert::TryFrom;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};

/// Table position, as seen by the human player sitting at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    Bottom,
    Left,
    Top,
    Right,
}

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Seat::Bottom => "Bottom",
            Seat::Left => "Left",
            Seat::Top => "Top",
            Seat::Right => "Right",
        })
    }
}

impl Distribution<Seat> for Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Seat {
        Seat::all_seats()[rng.gen_range(0..4)]
    }
}

impl TryFrom<char> for Seat {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'B' | 'b' | '0' => Seat::Bottom,
            'L' | 'l' | '1' => Seat::Left,
            'T' | 't' | '2' => Seat::Top,
            'R' | 'r' | '3' => Seat::Right,
            _ => return Err(()),
        })
    }
}

impl Seat {
    /// All table positions, in clockwise order starting with the human seat.
    pub fn all_seats() -> &'static [Seat; 4] {
        static SEATS: [Seat; 4] = [Seat::Bottom, Seat::Left, Seat::Top, Seat::Right];
        &SEATS
    }

    /// The seat number, 0 through 3.
    pub fn index(self) -> usize {
        match self {
            Seat::Bottom => 0,
            Seat::Left => 1,
            Seat::Top => 2,
            Seat::Right => 3,
        }
    }

    /// The team for this table position.
    pub fn team(self) -> Team {
        Team::from(self)
    }

    /// The opposite table position, i.e. the partner.
    pub fn opposite(self) -> Seat {
        self.advance(2)
    }

    /// The next table position, in clockwise order.
    pub fn next(self) -> Seat {
        self.advance(1)
    }

    /// The table position `n` steps clockwise.
    pub fn advance(self, n: usize) -> Seat {
        Seat::all_seats()[(self.index() + n) % 4]
    }

    /// The next N table positions in clockwise order.
    pub fn next_n(mut self, n: usize) -> Vec<Seat> {
        let mut order = vec![];
        for _ in 0..n {
            self = self.next();
            order.push(self);
        }
        order
    }
}

/// A partnership of two opposite seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    BottomTop,
    LeftRight,
}

impl From<Seat> for Team {
    fn from(value: Seat) -> Self {
        match value {
            Seat::Bottom | Seat::Top => Team::BottomTop,
            Seat::Left | Seat::Right => Team::LeftRight,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Team::BottomTop => "Bottom/Top",
            Team::LeftRight => "Left/Right",
        })
    }
}

impl Team {
    /// Both teams.
    pub fn all_teams() -> &'static [Team; 2] {
        static TEAMS: [Team; 2] = [Team::BottomTop, Team::LeftRight];
        &TEAMS
    }

    /// Returns an abbreviated name for the team.
    pub fn to_abbr(self) -> &'static str {
        match self {
            Team::BottomTop => "B/T",
            Team::LeftRight => "L/R",
        }
    }

    /// The other team.
    pub fn other(self) -> Team {
        match self {
            Team::BottomTop => Team::LeftRight,
            Team::LeftRight => Team::BottomTop,
        }
    }

    /// The two seats of this team.
    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::BottomTop => [Seat::Bottom, Seat::Top],
            Team::LeftRight => [Seat::Left, Seat::Right],
        }
    }
}

/// A value kept for each team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerTeam<T> {
    pub bottom_top: T,
    pub left_right: T,
}

impl<T> Index<Team> for PerTeam<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        match team {
            Team::BottomTop => &self.bottom_top,
            Team::LeftRight => &self.left_right,
        }
    }
}

impl<T> IndexMut<Team> for PerTeam<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::BottomTop => &mut self.bottom_top,
            Team::LeftRight => &mut self.left_right,
        }
    }
}
