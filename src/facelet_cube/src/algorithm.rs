use std::{fmt, slice, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::moves::{Move, MoveError, Strictness};

/// An ordered sequence of moves, written in standard notation separated by
/// whitespace. Parentheses only group moves for readability and are ignored
/// when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Algorithm(Vec<Move>);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Move {position} of the algorithm is invalid: {source}")]
pub struct ParseAlgorithmError {
    /// Zero based index of the offending token.
    pub position: usize,
    pub source: MoveError,
}

impl Algorithm {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Algorithm {
        Algorithm(moves)
    }

    /// # Errors
    ///
    /// If any token is not a valid move under `strictness`
    pub fn parse(notation: &str, strictness: Strictness) -> Result<Algorithm, ParseAlgorithmError> {
        notation
            .split_whitespace()
            .map(|token| token.trim_matches(|c| c == '(' || c == ')'))
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                Move::parse(token, strictness)
                    .map_err(|source| ParseAlgorithmError { position, source })
            })
            .collect()
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// The algorithm that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        self.0.iter().rev().map(|mv| mv.inverse()).collect()
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::parse(s, Strictness::Lenient)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Algorithm(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
