#![warn(clippy::pedantic)]

//! Two-look OLL hints for a [`facelet_cube::FaceletState`].

pub mod advisor;
pub mod catalog;
pub mod classifier;
pub mod edge_insertion;
pub mod last_layer;

pub use advisor::{Auf, Hint, get_hint};
pub use catalog::{Look, OllCase};
pub use classifier::{TopLayer, classify_top_layer, is_f2l_complete, oriented_corners};
pub use edge_insertion::EdgeInserter;
