//! The facelet model of a 3x3x3 cube: six faces of nine colored stickers.

use std::{fmt, ops::Index, str::FromStr};

/// The color of a single facelet. The discriminant is the tag printed in text
/// dumps of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Green = 1,
    Red = 2,
    Blue = 3,
    Orange = 4,
    Yellow = 5,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Green, Red, Blue, Orange, Yellow];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    F,
    R,
    B,
    L,
    D,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, F, R, B, L, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The four faces around the U/D axis, in the order a U turn cycles them.
    pub const SIDES: [Self; 4] = [Face::F, Face::R, Face::B, Face::L];

    /// The color this face carries when the cube is solved.
    #[must_use]
    pub fn solved_color(self) -> Color {
        Color::ALL[self as usize]
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::L => 'L',
            Face::D => 'D',
        }
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "F" => Ok(Face::F),
            "R" => Ok(Face::R),
            "B" => Ok(Face::B),
            "L" => Ok(Face::L),
            "D" => Ok(Face::D),
            _ => Err(()),
        }
    }
}

/// A single facelet position: a face and an index 0-8 in row-major order as
/// seen looking straight at that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sticker {
    pub face: Face,
    pub index: u8,
}

impl Sticker {
    #[must_use]
    pub const fn new(face: Face, index: u8) -> Self {
        assert!(index < 9);
        Sticker { face, index }
    }
}

// new[i] = old[CLOCKWISE[i]] for a clockwise in-plane quarter turn
const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Rotate the nine facelets of a face clockwise in its own plane.
#[must_use]
pub fn rotate_face_clockwise(face: [Color; 9], quarter_turns: u8) -> [Color; 9] {
    (0..quarter_turns % 4).fold(face, |face, _| CLOCKWISE.map(|i| face[i]))
}

/// The full sticker state of the cube. Every move permutes facelets in place;
/// nothing is ever added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletState {
    faces: [[Color; 9]; 6],
}

impl Default for FaceletState {
    fn default() -> Self {
        FaceletState::solved()
    }
}

impl FaceletState {
    /// The solved cube, one uniform color per face.
    #[must_use]
    pub fn solved() -> FaceletState {
        FaceletState {
            faces: Face::ALL.map(|face| [face.solved_color(); 9]),
        }
    }

    /// Build a state from explicit faces given in `Face::ALL` order. The
    /// arrangement is not checked for reachability.
    #[must_use]
    pub fn from_faces(faces: [[Color; 9]; 6]) -> FaceletState {
        FaceletState { faces }
    }

    pub fn reset(&mut self) {
        *self = FaceletState::solved();
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face as usize]
    }

    /// A value copy of a face, detached from the live state.
    #[must_use]
    pub fn copy_face(&self, face: Face) -> [Color; 9] {
        self.faces[face as usize]
    }

    /// A value copy of a face as it would look after `quarter_turns` clockwise
    /// rotations in its own plane. Used to orient faces in an unfolded net.
    #[must_use]
    pub fn rotated_face(&self, face: Face, quarter_turns: u8) -> [Color; 9] {
        rotate_face_clockwise(self.copy_face(face), quarter_turns)
    }

    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.faces[face as usize][4]
    }

    #[must_use]
    pub fn get(&self, sticker: Sticker) -> Color {
        self.faces[sticker.face as usize][usize::from(sticker.index)]
    }

    pub(crate) fn set(&mut self, sticker: Sticker, color: Color) {
        self.faces[sticker.face as usize][usize::from(sticker.index)] = color;
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut [Color; 9] {
        &mut self.faces[face as usize]
    }

    /// Whether every face is a single color, in any orientation of the cube.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|face| face.iter().all(|&color| color == face[4]))
    }

    /// How many facelets carry each color, indexed by color tag.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.faces.iter().flatten() {
            counts[*color as usize] += 1;
        }
        counts
    }
}

impl Index<Face> for FaceletState {
    type Output = [Color; 9];

    fn index(&self, index: Face) -> &Self::Output {
        self.face(index)
    }
}

impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            for (row_idx, row) in self.face(face).chunks(3).enumerate() {
                if row_idx == 0 {
                    write!(f, "{}: ", face.letter())?;
                } else {
                    write!(f, "   ")?;
                }
                for color in row {
                    write!(f, "[{}]", color.tag())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
