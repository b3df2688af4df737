//! Predicates that tell which solving stage a cube is in.

use facelet_cube::{Face, FaceletState};

/// How far along the top face is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopLayer {
    /// At least one top edge does not show the top color.
    CrossUnsolved,
    /// All four top edges show the top color but some corner does not.
    CrossSolved,
    /// The whole top face is one color.
    FullySolved,
}

// Up face indices of the four edges and four corners
pub(crate) const UP_EDGES: [usize; 4] = [1, 3, 5, 7];
pub(crate) const UP_CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Whether the first two layers are done: the middle and bottom rows of each
/// side face are one color.
///
/// Only consistency within each side face is checked. The down face is never
/// looked at, so a cube whose side faces are uniform below the top row passes
/// even if the bottom layer does not match.
#[must_use]
pub fn is_f2l_complete(state: &FaceletState) -> bool {
    Face::SIDES.iter().all(|&side| {
        let lower = &state.face(side)[3..];
        lower.iter().all(|&color| color == lower[0])
    })
}

#[must_use]
pub fn classify_top_layer(state: &FaceletState) -> TopLayer {
    let up = state.face(Face::U);
    let center = up[4];

    if up.iter().all(|&color| color == center) {
        TopLayer::FullySolved
    } else if UP_EDGES.iter().all(|&i| up[i] == center) {
        TopLayer::CrossSolved
    } else {
        TopLayer::CrossUnsolved
    }
}

/// How many top corners already show the top color.
#[must_use]
pub fn oriented_corners(state: &FaceletState) -> usize {
    let up = state.face(Face::U);
    UP_CORNERS.iter().filter(|&&i| up[i] == up[4]).count()
}
