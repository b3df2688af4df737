#![warn(clippy::pedantic)]

//! A sticker level model of the 3x3x3 cube and the permutations that move it.

pub mod algorithm;
pub mod engine;
pub mod facelets;
pub mod moves;
pub mod scramble;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use engine::{MoveDefinition, MoveEngine};
pub use facelets::{Color, Face, FaceletState, Sticker, rotate_face_clockwise};
pub use moves::{Modifier, Move, MoveError, MoveKind, Strictness};
pub use scramble::{Scrambler, format_scramble};
