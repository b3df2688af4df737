//! Draws the cube as an unfolded net:
//!
//! ```text
//!       B
//!     L U R
//!       F
//!       D
//! ```
//!
//! B, L and R are turned so that every edge touches the face it borders on
//! the real cube.

use facelet_cube::{Color, Face, FaceletState};
use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::config::ColorNames;

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (255, 255, 255),
        Color::Green => (0, 155, 72),
        Color::Red => (183, 18, 52),
        Color::Blue => (0, 70, 173),
        Color::Orange => (255, 88, 0),
        Color::Yellow => (255, 213, 0),
    }
}

pub fn render(state: &FaceletState, names: &ColorNames, colored: bool) -> String {
    let cell = |color: Color| {
        let letter = names.letter(color);
        if colored {
            let (r, g, b) = rgb(color);
            letter.truecolor(r, g, b).bold().to_string()
        } else {
            letter.to_string()
        }
    };
    let row = |face: &[Color; 9], row: usize| {
        face[row * 3..row * 3 + 3]
            .iter()
            .map(|&color| cell(color))
            .join(" ")
    };
    // Width of one rendered row plus the separating space
    let indent = " ".repeat(6);

    let back = state.rotated_face(Face::B, 2);
    let left = state.rotated_face(Face::L, 1);
    let right = state.rotated_face(Face::R, 3);

    let mut lines = Vec::with_capacity(12);
    for r in 0..3 {
        lines.push(format!("{indent}{}", row(&back, r)));
    }
    for r in 0..3 {
        lines.push(format!(
            "{} {} {}",
            row(&left, r),
            row(state.face(Face::U), r),
            row(&right, r)
        ));
    }
    for face in [Face::F, Face::D] {
        for r in 0..3 {
            lines.push(format!("{indent}{}", row(state.face(face), r)));
        }
    }

    lines.join("\n")
}
