//! Permutation tables for every move and the code that applies them to a
//! [`FaceletState`].
//!
//! The six outer face turns are the generators. Each one moves a ring of
//! twelve stickers on the neighbouring faces three slots forward and spins
//! the eight outer stickers of the turning face two slots forward. Slice
//! turns only have the ring. Rotations and wide turns are short sequences of
//! the others.

use log::{debug, trace};

use crate::{
    algorithm::Algorithm,
    facelets::{Face, FaceletState, Sticker},
    moves::{Modifier, Move, MoveError, MoveKind, Strictness},
};

type Ring = [Sticker; 12];

macro_rules! ring {
    ($($face:ident $index:literal)*) => {
        [$(Sticker::new(Face::$face, $index)),*]
    };
}

// The non-center stickers of a face, clockwise from the top left corner
const FACE_RING: [usize; 8] = [0, 1, 2, 5, 8, 7, 6, 3];

const U_RING: Ring = ring![F 2 F 1 F 0 L 2 L 1 L 0 B 2 B 1 B 0 R 2 R 1 R 0];
const F_RING: Ring = ring![U 6 U 7 U 8 R 0 R 3 R 6 D 2 D 1 D 0 L 8 L 5 L 2];
const R_RING: Ring = ring![F 2 F 5 F 8 U 2 U 5 U 8 B 6 B 3 B 0 D 2 D 5 D 8];
const B_RING: Ring = ring![U 2 U 1 U 0 L 0 L 3 L 6 D 6 D 7 D 8 R 8 R 5 R 2];
const L_RING: Ring = ring![F 0 F 3 F 6 D 0 D 3 D 6 B 8 B 5 B 2 U 0 U 3 U 6];
const D_RING: Ring = ring![F 6 F 7 F 8 R 6 R 7 R 8 B 6 B 7 B 8 L 6 L 7 L 8];

const M_RING: Ring = ring![U 1 U 4 U 7 F 1 F 4 F 7 D 1 D 4 D 7 B 7 B 4 B 1];
const S_RING: Ring = ring![U 3 U 4 U 5 R 1 R 4 R 7 D 5 D 4 D 3 L 7 L 4 L 1];
const E_RING: Ring = ring![F 3 F 4 F 5 R 3 R 4 R 5 B 3 B 4 B 5 L 3 L 4 L 5];

macro_rules! seq {
    ($($kind:ident $modifier:ident),*) => {
        &[$(Move::new(MoveKind::$kind, Modifier::$modifier)),*]
    };
}

const X_SEQ: &[Move] = seq![R Single, M Prime, L Prime];
const Y_SEQ: &[Move] = seq![U Single, E Prime, D Prime];
const Z_SEQ: &[Move] = seq![F Single, S Single, B Prime];
const WIDE_R_SEQ: &[Move] = seq![R Single, M Prime];
const WIDE_L_SEQ: &[Move] = seq![L Single, M Single];
const WIDE_F_SEQ: &[Move] = seq![F Single, S Single];
const WIDE_B_SEQ: &[Move] = seq![B Single, S Prime];
const WIDE_U_SEQ: &[Move] = seq![U Single, E Prime];
const WIDE_D_SEQ: &[Move] = seq![D Single, E Single];

/// How a single clockwise quarter turn of a move is carried out.
#[derive(Debug, Clone, Copy)]
pub enum MoveDefinition {
    /// An outer face turn: the ring around the face plus the face itself.
    Face { face: Face, ring: &'static Ring },
    /// An inner slice turn. No face spins.
    Slice { ring: &'static Ring },
    /// A fixed sequence of other moves.
    Composite { moves: &'static [Move] },
}

impl MoveKind {
    #[must_use]
    pub fn definition(self) -> MoveDefinition {
        use MoveDefinition::{Composite, Slice};
        const fn face(face: Face, ring: &'static Ring) -> MoveDefinition {
            MoveDefinition::Face { face, ring }
        }

        match self {
            MoveKind::U => face(Face::U, &U_RING),
            MoveKind::F => face(Face::F, &F_RING),
            MoveKind::R => face(Face::R, &R_RING),
            MoveKind::B => face(Face::B, &B_RING),
            MoveKind::L => face(Face::L, &L_RING),
            MoveKind::D => face(Face::D, &D_RING),
            MoveKind::M => Slice { ring: &M_RING },
            MoveKind::S => Slice { ring: &S_RING },
            MoveKind::E => Slice { ring: &E_RING },
            MoveKind::X => Composite { moves: X_SEQ },
            MoveKind::Y => Composite { moves: Y_SEQ },
            MoveKind::Z => Composite { moves: Z_SEQ },
            MoveKind::WideR => Composite { moves: WIDE_R_SEQ },
            MoveKind::WideL => Composite { moves: WIDE_L_SEQ },
            MoveKind::WideF => Composite { moves: WIDE_F_SEQ },
            MoveKind::WideB => Composite { moves: WIDE_B_SEQ },
            MoveKind::WideU => Composite { moves: WIDE_U_SEQ },
            MoveKind::WideD => Composite { moves: WIDE_D_SEQ },
        }
    }
}

impl FaceletState {
    /// Apply an already parsed move.
    pub fn apply(&mut self, mv: Move) {
        for _ in 0..mv.modifier.quarter_turns() {
            self.quarter_turn(mv.kind);
        }
    }

    pub fn apply_algorithm(&mut self, algorithm: &Algorithm) {
        debug!("Applying algorithm: {algorithm}");
        for &mv in algorithm {
            self.apply(mv);
        }
    }

    fn quarter_turn(&mut self, kind: MoveKind) {
        match kind.definition() {
            MoveDefinition::Face { face, ring } => {
                trace!("Turning face {face:?}");
                self.cycle_ring(ring);
                self.spin_face(face);
            }
            MoveDefinition::Slice { ring } => {
                trace!("Turning slice {}", kind.letter());
                self.cycle_ring(ring);
            }
            MoveDefinition::Composite { moves } => {
                for &mv in moves {
                    self.apply(mv);
                }
            }
        }
    }

    fn cycle_ring(&mut self, ring: &Ring) {
        let old = ring.map(|sticker| self.get(sticker));
        for (i, &sticker) in ring.iter().enumerate() {
            self.set(sticker, old[(i + 9) % 12]);
        }
    }

    fn spin_face(&mut self, face: Face) {
        let face = self.face_mut(face);
        let old = FACE_RING.map(|i| face[i]);
        for (j, &i) in FACE_RING.iter().enumerate() {
            face[i] = old[(j + 6) % 8];
        }
    }
}

/// Turns move tokens into permutations of a [`FaceletState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveEngine {
    strictness: Strictness,
}

impl MoveEngine {
    #[must_use]
    pub fn new(strictness: Strictness) -> MoveEngine {
        MoveEngine { strictness }
    }

    #[must_use]
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Apply a single move token. The token is parsed before anything is
    /// touched, so a bad token leaves `state` as it was.
    ///
    /// # Errors
    ///
    /// If the token does not name a known move
    pub fn apply(&self, state: &mut FaceletState, token: &str) -> Result<Move, MoveError> {
        let mv = Move::parse(token, self.strictness)?;
        debug!("Applying move {mv}");
        state.apply(mv);
        Ok(mv)
    }

    /// Apply tokens in order. The first bad token stops execution; moves
    /// before it stay applied.
    ///
    /// # Errors
    ///
    /// The error of the first token that does not name a known move
    pub fn execute<I, S>(&self, state: &mut FaceletState, tokens: I) -> Result<usize, MoveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut applied = 0;
        for token in tokens {
            self.apply(state, token.as_ref())?;
            applied += 1;
        }
        Ok(applied)
    }
}
