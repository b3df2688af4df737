//! The two-look OLL cases this crate can recognise.
//!
//! Apart from the dot, each case is recognised by a set of last layer
//! facelets that all show the top color once the layer is aligned.

use std::fmt;

use facelet_cube::Algorithm;

use crate::{
    classifier::UP_EDGES,
    last_layer::{
        Facelet::{self, Side as S, Up},
        LastLayer, Side,
    },
};

/// Which half of two-look OLL a case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Look {
    /// Orienting the top edges into a cross.
    First,
    /// Orienting the top corners once the cross is done.
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OllCase {
    Dot,
    Bar,
    V,
    H,
    Pi,
    Antisune,
    Sune,
    Headlights,
    T,
    Bowtie,
}

/// Candidates of the first look, in the order they are tried.
pub const FIRST_LOOK_CASES: [OllCase; 2] = [OllCase::V, OllCase::Bar];

/// Candidates of the second look for a given number of oriented corners, in
/// the order they are tried.
#[must_use]
pub fn second_look_cases(oriented_corners: usize) -> &'static [OllCase] {
    match oriented_corners {
        0 => &[OllCase::H, OllCase::Pi],
        1 => &[OllCase::Antisune, OllCase::Sune],
        2 => &[OllCase::Headlights, OllCase::T, OllCase::Bowtie],
        _ => &[],
    }
}

impl OllCase {
    pub const ALL: [Self; 10] = {
        use OllCase::*;
        [Dot, Bar, V, H, Pi, Antisune, Sune, Headlights, T, Bowtie]
    };

    #[must_use]
    pub fn look(self) -> Look {
        match self {
            OllCase::Dot | OllCase::Bar | OllCase::V => Look::First,
            _ => Look::Second,
        }
    }

    /// The algorithm as it is usually written, with grouping parentheses.
    #[must_use]
    pub fn notation(self) -> &'static str {
        match self {
            OllCase::Dot => "F (R U R' U') S (R U R' U') f'",
            OllCase::Bar => "F (R U R' U') F'",
            OllCase::V => "f (R U R' U') f'",
            OllCase::H => "R U2 R' U' R U R' U' R U' R'",
            OllCase::Pi => "R U2 R2 U' R2 U' R2 U2 R",
            OllCase::Antisune => "R U2 R' U' R U' R'",
            OllCase::Sune => "R U R' U R U2 R'",
            OllCase::Headlights => "R2 D R' U2 R D' R' U2 R'",
            OllCase::T => "r U R' U' r' F R F'",
            OllCase::Bowtie => "F' r U R' U' r' F R",
        }
    }

    #[must_use]
    pub fn algorithm(self) -> Algorithm {
        self.notation()
            .parse()
            .expect("every catalog notation only uses known moves")
    }

    /// The facelets that must show the top color, besides the center. Empty
    /// for the dot, which is recognised by the absence of oriented edges.
    #[must_use]
    pub fn pattern(self) -> &'static [Facelet] {
        match self {
            OllCase::Dot => &[],
            OllCase::Bar => &[Up(3), Up(5)],
            OllCase::V => &[Up(5), Up(7)],
            OllCase::H => &[S(Side::F, 0), S(Side::F, 2), S(Side::B, 0), S(Side::B, 2)],
            OllCase::Pi => &[S(Side::L, 0), S(Side::L, 2), S(Side::F, 2), S(Side::B, 0)],
            OllCase::Antisune => &[Up(2), S(Side::L, 0), S(Side::F, 0), S(Side::R, 0)],
            OllCase::Sune => &[Up(6), S(Side::F, 2), S(Side::R, 2), S(Side::B, 2)],
            OllCase::Headlights => &[Up(0), Up(2), S(Side::F, 0), S(Side::F, 2)],
            OllCase::T => &[Up(2), Up(8), S(Side::B, 2), S(Side::F, 0)],
            OllCase::Bowtie => &[Up(2), Up(6), S(Side::L, 0), S(Side::F, 2)],
        }
    }

    /// Whether the layer, as currently aligned, shows this case.
    #[must_use]
    pub fn matches(self, view: &LastLayer) -> bool {
        let top = view.top_color();
        match self {
            OllCase::Dot => UP_EDGES.iter().all(|&i| view.get(Up(i)) != top),
            _ => self.pattern().iter().all(|&facelet| view.get(facelet) == top),
        }
    }
}

impl fmt::Display for OllCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OllCase::Dot => "dot",
            OllCase::Bar => "bar",
            OllCase::V => "v",
            OllCase::H => "H",
            OllCase::Pi => "pi",
            OllCase::Antisune => "antisune",
            OllCase::Sune => "sune",
            OllCase::Headlights => "headlights",
            OllCase::T => "T",
            OllCase::Bowtie => "bowtie",
        };
        f.write_str(name)
    }
}
