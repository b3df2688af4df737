//! Suggests the next two-look OLL algorithm for a cube.
//!
//! Recognition never turns the cube. The last layer is copied once and each
//! of the four U alignments is checked on the copy, so the caller's state is
//! exactly as it was no matter where the search stops. The returned [`Hint`]
//! carries the alignment it found; [`Hint::apply`] performs it together with
//! the algorithm.

use std::fmt;

use facelet_cube::{Algorithm, FaceletState, Modifier, Move, MoveKind};
use log::{debug, info, warn};

use crate::{
    catalog::{FIRST_LOOK_CASES, Look, OllCase, second_look_cases},
    classifier::{TopLayer, classify_top_layer, is_f2l_complete, oriented_corners},
    last_layer::LastLayer,
};

/// The U turn needed to line the last layer up with a recognised case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auf {
    Aligned,
    U,
    U2,
    UPrime,
}

impl Auf {
    /// Every alignment, in the order the search tries them.
    pub const ALL: [Self; 4] = {
        use Auf::*;
        let v = [Aligned, U, U2, UPrime];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// The move that performs this alignment, if any turn is needed.
    #[must_use]
    pub fn to_move(self) -> Option<Move> {
        Modifier::from_quarter_turns(self.quarter_turns())
            .map(|modifier| Move::new(MoveKind::U, modifier))
    }

    /// How the alignment is written in front of an algorithm.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Auf::Aligned => "",
            Auf::U => "(U) ",
            Auf::U2 => "(U2) ",
            Auf::UPrime => "(U') ",
        }
    }
}

/// The advice for a cube. Only [`Hint::Oll`] carries moves; the others say why
/// there is nothing to suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// The first two layers are not done yet.
    F2LNotReady,
    /// The top face is already oriented; permutation hints are not offered.
    PllNotReady,
    /// Align the top layer with `auf`, then run the algorithm of `case`.
    Oll { case: OllCase, auf: Auf },
    /// No catalog case matched in any alignment. Legally scrambled cubes never
    /// end up here.
    SearchExhausted { look: Look },
}

impl Hint {
    /// The full move sequence of the hint: the alignment followed by the
    /// case algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        let Hint::Oll { case, auf } = *self else {
            return None;
        };

        Some(
            auf.to_move()
                .into_iter()
                .chain(case.algorithm().moves().iter().copied())
                .collect(),
        )
    }

    /// Perform the hint on `state`. Returns whether anything was applied.
    pub fn apply(&self, state: &mut FaceletState) -> bool {
        match self.algorithm() {
            Some(algorithm) => {
                state.apply_algorithm(&algorithm);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::F2LNotReady => f.write_str("F2L not ready for hints yet!"),
            Hint::PllNotReady => f.write_str("PLL not ready for hints yet!"),
            Hint::Oll { case, auf } => write!(f, "{}{}", auf.prefix(), case.notation()),
            Hint::SearchExhausted { look: Look::First } => {
                f.write_str("No known case orients the top edges from here")
            }
            Hint::SearchExhausted { look: Look::Second } => {
                f.write_str("No known case orients the top corners from here")
            }
        }
    }
}

/// Work out the next two-look OLL step for `state`.
#[must_use]
pub fn get_hint(state: &FaceletState) -> Hint {
    if !is_f2l_complete(state) {
        debug!("F2L is incomplete, no hint");
        return Hint::F2LNotReady;
    }

    let top_layer = classify_top_layer(state);
    debug!("Top layer is {top_layer:?}");

    let hint = match top_layer {
        TopLayer::CrossUnsolved => first_look(&LastLayer::of(state)),
        TopLayer::CrossSolved => second_look(&LastLayer::of(state), oriented_corners(state)),
        TopLayer::FullySolved => Hint::PllNotReady,
    };

    match hint {
        Hint::Oll { case, auf } => info!("Recognised the {case} case with alignment {auf:?}"),
        Hint::SearchExhausted { look } => {
            warn!("No {look:?} look case matched in any alignment of the last layer");
        }
        Hint::F2LNotReady | Hint::PllNotReady => {}
    }

    hint
}

fn first_look(view: &LastLayer) -> Hint {
    // The dot looks the same in every alignment
    if OllCase::Dot.matches(view) {
        return Hint::Oll {
            case: OllCase::Dot,
            auf: Auf::Aligned,
        };
    }

    search(view, &FIRST_LOOK_CASES, Look::First)
}

fn second_look(view: &LastLayer, oriented_corners: usize) -> Hint {
    debug!("{oriented_corners} corners are oriented");
    search(view, second_look_cases(oriented_corners), Look::Second)
}

/// Try every alignment in turn, and every candidate within an alignment,
/// stopping at the first match.
fn search(view: &LastLayer, candidates: &[OllCase], look: Look) -> Hint {
    Auf::ALL
        .into_iter()
        .find_map(|auf| {
            let aligned = view.rotated(auf.quarter_turns());
            let found = candidates.iter().copied().find(|case| case.matches(&aligned));
            debug!("Alignment {auf:?}: {found:?}");
            found.map(|case| Hint::Oll { case, auf })
        })
        .unwrap_or(Hint::SearchExhausted { look })
}

#[cfg(test)]
mod tests {
    use facelet_cube::{Algorithm, FaceletState};

    use super::{Auf, Hint, search};
    use crate::{
        catalog::{Look, OllCase},
        last_layer::LastLayer,
    };

    #[test]
    fn auf_moves_and_prefixes() {
        assert_eq!(Auf::Aligned.to_move(), None);
        assert_eq!(Auf::U.to_move(), Some("U".parse().unwrap()));
        assert_eq!(Auf::U2.to_move(), Some("U2".parse().unwrap()));
        assert_eq!(Auf::UPrime.to_move(), Some("U'".parse().unwrap()));
        let prefixes = Auf::ALL.map(Auf::prefix);
        assert_eq!(prefixes, ["", "(U) ", "(U2) ", "(U') "]);
    }

    #[test]
    fn hint_algorithm_starts_with_alignment() {
        let hint = Hint::Oll {
            case: OllCase::Sune,
            auf: Auf::U2,
        };
        let expected: Algorithm = "U2 R U R' U R U2 R'".parse().unwrap();
        assert_eq!(hint.algorithm(), Some(expected));
        assert_eq!(hint.to_string(), "(U2) R U R' U R U2 R'");
        assert_eq!(Hint::PllNotReady.algorithm(), None);
    }

    #[test]
    fn non_oll_hints_do_nothing() {
        let mut state = FaceletState::solved();
        assert!(!Hint::F2LNotReady.apply(&mut state));
        assert!(!Hint::SearchExhausted { look: Look::Second }.apply(&mut state));
        assert_eq!(state, FaceletState::solved());
    }

    #[test]
    fn empty_candidate_list_exhausts() {
        let view = LastLayer::of(&FaceletState::solved());
        assert_eq!(
            search(&view, &[], Look::Second),
            Hint::SearchExhausted { look: Look::Second }
        );
    }
}
