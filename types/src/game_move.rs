use std::{fmt::Display, str::FromStr};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::error::ParseMoveError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// case-sensitive, surrounding whitespace ignored
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .iter()
            .find(|mv| mv.label() == trimmed)
            .copied()
            .ok_or_else(|| ParseMoveError {
                input: trimmed.to_string(),
            })
    }
}

impl Distribution<Move> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}
