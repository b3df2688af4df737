//! Random scrambles made of outer face turns.

use fastrand::Rng;
use itertools::Itertools;
use log::debug;

use crate::{
    algorithm::Algorithm,
    moves::{Modifier, Move, MoveKind},
};

const MODIFIERS: [Modifier; 3] = [Modifier::Single, Modifier::Prime, Modifier::Double];

// Moves per line when a scramble is laid out for display
const MOVES_PER_LINE: usize = 14;

pub struct Scrambler {
    rng: Rng,
}

impl Default for Scrambler {
    fn default() -> Self {
        Scrambler::new()
    }
}

impl Scrambler {
    #[must_use]
    pub fn new() -> Scrambler {
        Scrambler { rng: Rng::new() }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Scrambler {
        Scrambler {
            rng: Rng::with_seed(seed),
        }
    }

    /// A random sequence of `length` face turns where no two consecutive moves
    /// turn the same face.
    pub fn generate(&mut self, length: usize) -> Algorithm {
        let mut scramble = Algorithm::default();
        let mut previous = None;

        while scramble.len() < length {
            let kind = MoveKind::PRIMITIVES[self.rng.usize(..MoveKind::PRIMITIVES.len())];
            if previous == Some(kind) {
                continue;
            }
            previous = Some(kind);
            scramble.push(Move::new(kind, MODIFIERS[self.rng.usize(..MODIFIERS.len())]));
        }

        debug!("Generated scramble: {scramble}");
        scramble
    }
}

/// Lay a scramble out with two spaces between moves, wrapping after every
/// fourteen moves.
#[must_use]
pub fn format_scramble(scramble: &Algorithm) -> String {
    scramble
        .moves()
        .chunks(MOVES_PER_LINE)
        .map(|line| line.iter().join("  "))
        .join("\n")
}
