use std::{fmt, str::FromStr};

use thiserror::Error;

/// Every face, slice, rotation and wide turn the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    U,
    F,
    R,
    B,
    L,
    D,
    M,
    S,
    E,
    X,
    Y,
    Z,
    WideR,
    WideL,
    WideF,
    WideB,
    WideU,
    WideD,
}

impl MoveKind {
    pub const ALL: [Self; 18] = {
        use MoveKind::*;
        [
            U, F, R, B, L, D, M, S, E, X, Y, Z, WideR, WideL, WideF, WideB, WideU, WideD,
        ]
    };

    /// The six outer face turns that generate every other move.
    pub const PRIMITIVES: [Self; 6] = {
        use MoveKind::*;
        [U, F, R, B, L, D]
    };

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            MoveKind::U => 'U',
            MoveKind::F => 'F',
            MoveKind::R => 'R',
            MoveKind::B => 'B',
            MoveKind::L => 'L',
            MoveKind::D => 'D',
            MoveKind::M => 'M',
            MoveKind::S => 'S',
            MoveKind::E => 'E',
            MoveKind::X => 'x',
            MoveKind::Y => 'y',
            MoveKind::Z => 'z',
            MoveKind::WideR => 'r',
            MoveKind::WideL => 'l',
            MoveKind::WideF => 'f',
            MoveKind::WideB => 'b',
            MoveKind::WideU => 'u',
            MoveKind::WideD => 'd',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        MoveKind::ALL.into_iter().find(|kind| kind.letter() == letter)
    }
}

/// How many clockwise quarter turns a move token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    #[default]
    Single,
    Prime,
    Double,
}

impl Modifier {
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Modifier::Single => 1,
            Modifier::Double => 2,
            Modifier::Prime => 3,
        }
    }

    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: u8) -> Option<Self> {
        match quarter_turns % 4 {
            1 => Some(Modifier::Single),
            2 => Some(Modifier::Double),
            3 => Some(Modifier::Prime),
            _ => None,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Modifier::Single => Modifier::Prime,
            Modifier::Prime => Modifier::Single,
            Modifier::Double => Modifier::Double,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::Single => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }
}

/// What to do with a second character that is neither `'` nor `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Ignore it and perform a single quarter turn.
    #[default]
    Lenient,
    /// Reject the token with [`MoveError::InvalidModifier`].
    Strict,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Empty move token")]
    Empty,
    #[error("Invalid move `{token}`: expected one of UFRBLDMSExyzrlfbud followed by an optional ' or 2")]
    InvalidMove { token: String },
    #[error("Invalid modifier `{modifier}` in move `{token}`: expected ' or 2")]
    InvalidModifier { token: String, modifier: char },
}

/// A move token: what to turn and how far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: MoveKind,
    pub modifier: Modifier,
}

impl Move {
    #[must_use]
    pub const fn new(kind: MoveKind, modifier: Modifier) -> Move {
        Move { kind, modifier }
    }

    /// Parse a single token such as `R`, `U'`, `M2` or `x`.
    ///
    /// # Errors
    ///
    /// If the face/axis letter is unknown, the token has more than one
    /// modifier character, or (when strict) the modifier is not `'` or `2`.
    pub fn parse(token: &str, strictness: Strictness) -> Result<Move, MoveError> {
        let mut chars = token.chars();
        let Some(letter) = chars.next() else {
            return Err(MoveError::Empty);
        };
        let invalid = || MoveError::InvalidMove {
            token: token.to_owned(),
        };
        let kind = MoveKind::from_letter(letter).ok_or_else(invalid)?;

        let modifier = match chars.next() {
            None => Modifier::Single,
            Some('\'') => Modifier::Prime,
            Some('2') => Modifier::Double,
            Some(modifier) => match strictness {
                Strictness::Lenient => Modifier::Single,
                Strictness::Strict => {
                    return Err(MoveError::InvalidModifier {
                        token: token.to_owned(),
                        modifier,
                    });
                }
            },
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Move { kind, modifier })
    }

    #[must_use]
    pub const fn inverse(self) -> Move {
        Move {
            kind: self.kind,
            modifier: self.modifier.inverse(),
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s, Strictness::Lenient)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.letter(), self.modifier.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::{Modifier, Move, MoveError, MoveKind, Strictness};

    #[test]
    fn parses_every_letter() {
        for kind in MoveKind::ALL {
            let token = kind.letter().to_string();
            assert_eq!(
                token.parse::<Move>().unwrap(),
                Move::new(kind, Modifier::Single)
            );
        }
    }

    #[test]
    fn parses_modifiers() {
        assert_eq!(
            "R'".parse::<Move>().unwrap(),
            Move::new(MoveKind::R, Modifier::Prime)
        );
        assert_eq!(
            "f2".parse::<Move>().unwrap(),
            Move::new(MoveKind::WideF, Modifier::Double)
        );
        assert_eq!(
            "y".parse::<Move>().unwrap(),
            Move::new(MoveKind::Y, Modifier::Single)
        );
    }

    #[test]
    fn rejects_unknown_letters() {
        assert_eq!(
            "Q".parse::<Move>(),
            Err(MoveError::InvalidMove {
                token: "Q".to_owned()
            })
        );
        assert!(matches!("X".parse::<Move>(), Err(MoveError::InvalidMove { .. })));
        assert_eq!("".parse::<Move>(), Err(MoveError::Empty));
        assert!(matches!("R2'".parse::<Move>(), Err(MoveError::InvalidMove { .. })));
    }

    #[test]
    fn unknown_modifier_depends_on_strictness() {
        assert_eq!(
            Move::parse("R3", Strictness::Lenient).unwrap(),
            Move::new(MoveKind::R, Modifier::Single)
        );
        assert_eq!(
            Move::parse("R3", Strictness::Strict),
            Err(MoveError::InvalidModifier {
                token: "R3".to_owned(),
                modifier: '3'
            })
        );
    }

    #[test]
    fn display_and_inverse() {
        let mv: Move = "u'".parse().unwrap();
        assert_eq!(mv.to_string(), "u'");
        assert_eq!(mv.inverse().to_string(), "u");
        assert_eq!("M2".parse::<Move>().unwrap().inverse().to_string(), "M2");
        assert_eq!(Modifier::from_quarter_turns(7), Some(Modifier::Prime));
        assert_eq!(Modifier::from_quarter_turns(4), None);
    }
}
