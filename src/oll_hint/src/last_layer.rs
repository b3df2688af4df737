//! A detached copy of the last layer that can be turned about the U axis
//! without touching the cube it was taken from.

use std::array;

use facelet_cube::{Color, Face, FaceletState, rotate_face_clockwise};

/// The side faces in the order a clockwise U turn cycles their top rows: each
/// one receives the row of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    F,
    R,
    B,
    L,
}

impl Side {
    #[must_use]
    pub fn face(self) -> Face {
        Face::SIDES[self as usize]
    }
}

/// A facelet of the last layer as the case catalog refers to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facelet {
    /// An up face facelet, 0-8.
    Up(usize),
    /// One of the three top row facelets of a side face, 0-2.
    Side(Side, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastLayer {
    up: [Color; 9],
    sides: [[Color; 3]; 4],
}

impl LastLayer {
    #[must_use]
    pub fn of(state: &FaceletState) -> LastLayer {
        LastLayer {
            up: state.copy_face(Face::U),
            sides: Face::SIDES.map(|side| {
                let face = state.face(side);
                [face[0], face[1], face[2]]
            }),
        }
    }

    /// The layer as it would look after `quarter_turns` clockwise U turns.
    #[must_use]
    pub fn rotated(&self, quarter_turns: u8) -> LastLayer {
        let shift = usize::from(quarter_turns % 4);
        LastLayer {
            up: rotate_face_clockwise(self.up, quarter_turns),
            sides: array::from_fn(|i| self.sides[(i + shift) % 4]),
        }
    }

    #[must_use]
    pub fn top_color(&self) -> Color {
        self.up[4]
    }

    #[must_use]
    pub fn get(&self, facelet: Facelet) -> Color {
        match facelet {
            Facelet::Up(index) => self.up[index],
            Facelet::Side(side, index) => self.sides[side as usize][index],
        }
    }
}
