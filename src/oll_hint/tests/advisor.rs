use facelet_cube::{Algorithm, Color, Face, FaceletState, MoveEngine};
use oll_hint::{
    Auf, Hint, Look, OllCase, TopLayer, classify_top_layer, get_hint, is_f2l_complete,
};

fn after(moves: &str) -> FaceletState {
    let mut state = FaceletState::solved();
    MoveEngine::default()
        .execute(&mut state, moves.split_whitespace())
        .unwrap();
    state
}

/// Each catalog algorithm undone from solved, followed by every U alignment,
/// with the hint the advisor gives for the result.
const SCENARIOS: [(&str, &str); 40] = [
        ("f U R U' R' S' U R U' R' F'", "F (R U R' U') S (R U R' U') f'"),
        ("f U R U' R' S' U R U' R' F' U", "F (R U R' U') S (R U R' U') f'"),
        ("f U R U' R' S' U R U' R' F' U2", "F (R U R' U') S (R U R' U') f'"),
        ("f U R U' R' S' U R U' R' F' U'", "F (R U R' U') S (R U R' U') f'"),
        ("f U R U' R' f'", "f (R U R' U') f'"),
        ("f U R U' R' f' U", "(U') f (R U R' U') f'"),
        ("f U R U' R' f' U2", "(U2) f (R U R' U') f'"),
        ("f U R U' R' f' U'", "(U) f (R U R' U') f'"),
        ("F U R U' R' F'", "F (R U R' U') F'"),
        ("F U R U' R' F' U", "(U) F (R U R' U') F'"),
        ("F U R U' R' F' U2", "F (R U R' U') F'"),
        ("F U R U' R' F' U'", "(U) F (R U R' U') F'"),
        ("R U R' U R U' R' U R U2 R'", "R U2 R' U' R U R' U' R U' R'"),
        ("R U R' U R U' R' U R U2 R' U", "(U) R U2 R' U' R U R' U' R U' R'"),
        ("R U R' U R U' R' U R U2 R' U2", "R U2 R' U' R U R' U' R U' R'"),
        ("R U R' U R U' R' U R U2 R' U'", "(U) R U2 R' U' R U R' U' R U' R'"),
        ("R' U2 R2 U R2 U R2 U2 R'", "R U2 R2 U' R2 U' R2 U2 R"),
        ("R' U2 R2 U R2 U R2 U2 R' U", "(U') R U2 R2 U' R2 U' R2 U2 R"),
        ("R' U2 R2 U R2 U R2 U2 R' U2", "(U2) R U2 R2 U' R2 U' R2 U2 R"),
        ("R' U2 R2 U R2 U R2 U2 R' U'", "(U) R U2 R2 U' R2 U' R2 U2 R"),
        ("R U R' U R U2 R'", "R U2 R' U' R U' R'"),
        ("R U R' U R U2 R' U", "(U') R U2 R' U' R U' R'"),
        ("R U R' U R U2 R' U2", "(U2) R U2 R' U' R U' R'"),
        ("R U R' U R U2 R' U'", "(U) R U2 R' U' R U' R'"),
        ("R U2 R' U' R U' R'", "R U R' U R U2 R'"),
        ("R U2 R' U' R U' R' U", "(U') R U R' U R U2 R'"),
        ("R U2 R' U' R U' R' U2", "(U2) R U R' U R U2 R'"),
        ("R U2 R' U' R U' R' U'", "(U) R U R' U R U2 R'"),
        ("R U2 R D R' U2 R D' R2", "R2 D R' U2 R D' R' U2 R'"),
        ("R U2 R D R' U2 R D' R2 U", "(U') R2 D R' U2 R D' R' U2 R'"),
        ("R U2 R D R' U2 R D' R2 U2", "(U2) R2 D R' U2 R D' R' U2 R'"),
        ("R U2 R D R' U2 R D' R2 U'", "(U) R2 D R' U2 R D' R' U2 R'"),
        ("F R' F' r U R U' r'", "r U R' U' r' F R F'"),
        ("F R' F' r U R U' r' U", "(U') r U R' U' r' F R F'"),
        ("F R' F' r U R U' r' U2", "(U2) r U R' U' r' F R F'"),
        ("F R' F' r U R U' r' U'", "(U) r U R' U' r' F R F'"),
        ("R' F' r U R U' r' F", "F' r U R' U' r' F R"),
        ("R' F' r U R U' r' F U", "(U') F' r U R' U' r' F R"),
        ("R' F' r U R U' r' F U2", "(U2) F' r U R' U' r' F R"),
        ("R' F' r U R U' r' F U'", "(U) F' r U R' U' r' F R"),
];

#[test_log::test]
fn hints_for_every_case_and_alignment() {
    for (moves, expected) in SCENARIOS {
        let state = after(moves);
        let before = state.clone();
        let hint = get_hint(&state);
        assert_eq!(hint.to_string(), expected, "wrong hint after {moves}");
        assert_eq!(state, before, "hint for {moves} changed the cube");
    }
}

#[test_log::test]
fn applying_a_hint_finishes_its_look() {
    for (moves, _) in SCENARIOS {
        let mut state = after(moves);
        let hint = get_hint(&state);
        let Hint::Oll { case, .. } = hint else {
            panic!("expected an OLL hint after {moves}, got {hint:?}");
        };

        assert!(hint.apply(&mut state));
        assert!(is_f2l_complete(&state));
        match case.look() {
            Look::First => assert_ne!(classify_top_layer(&state), TopLayer::CrossUnsolved),
            Look::Second => assert_eq!(classify_top_layer(&state), TopLayer::FullySolved),
        }
    }
}

#[test_log::test]
fn solved_cube_is_ready_for_pll() {
    let mut state = after("R U R' U'");
    state.reset();
    assert!(is_f2l_complete(&state));
    assert_eq!(classify_top_layer(&state), TopLayer::FullySolved);
    assert_eq!(get_hint(&state), Hint::PllNotReady);
    assert_eq!(get_hint(&state).to_string(), "PLL not ready for hints yet!");
}

#[test_log::test]
fn incomplete_f2l_gets_no_hint() {
    let state = after("R U R'");
    assert_eq!(get_hint(&state), Hint::F2LNotReady);
    assert_eq!(get_hint(&state).to_string(), "F2L not ready for hints yet!");
}

#[test_log::test]
fn sexy_move_with_f_gives_v_case() {
    let state = after("F R U R' U' F'");
    assert_eq!(
        get_hint(&state),
        Hint::Oll {
            case: OllCase::V,
            auf: Auf::U2
        }
    );
}

#[test_log::test]
fn dot_case_needs_no_alignment() {
    let state = after("f U R U' R' S' U R U' R' F'");
    let hint = get_hint(&state);
    assert_eq!(
        hint,
        Hint::Oll {
            case: OllCase::Dot,
            auf: Auf::Aligned
        }
    );
    assert_eq!(hint.to_string(), "F (R U R' U') S (R U R' U') f'");
}

#[test_log::test]
fn constructed_h_case() {
    use Color::*;

    let state = FaceletState::from_faces([
        [Orange, White, Red, White, White, White, Orange, White, Red],
        [White, Green, White, Green, Green, Green, Green, Green, Green],
        [Green, Blue, Blue, Red, Red, Red, Red, Red, Red],
        [White, Orange, White, Blue, Blue, Blue, Blue, Blue, Blue],
        [Blue, Red, Green, Orange, Orange, Orange, Orange, Orange, Orange],
        [Yellow; 9],
    ]);
    let before = state.clone();

    let hint = get_hint(&state);
    assert_eq!(
        hint,
        Hint::Oll {
            case: OllCase::H,
            auf: Auf::Aligned
        }
    );
    assert_eq!(hint.to_string(), "R U2 R' U' R U R' U' R U' R'");
    assert_eq!(state.face(Face::U), before.face(Face::U));
    assert_eq!(state, before);
}

#[test_log::test]
fn impossible_corners_exhaust_the_search() {
    let mut faces = Face::ALL.map(|face| [face.solved_color(); 9]);
    faces[Face::U as usize][8] = Color::Green;
    let state = FaceletState::from_faces(faces);
    let before = state.clone();

    assert_eq!(classify_top_layer(&state), TopLayer::CrossSolved);
    assert_eq!(get_hint(&state), Hint::SearchExhausted { look: Look::Second });
    assert_eq!(state, before);
}

#[test_log::test]
fn single_flipped_edge_exhausts_the_search() {
    let mut faces = Face::ALL.map(|face| [face.solved_color(); 9]);
    for i in [3, 5, 7] {
        faces[Face::U as usize][i] = Color::Yellow;
    }
    let state = FaceletState::from_faces(faces);

    let hint = get_hint(&state);
    assert_eq!(hint, Hint::SearchExhausted { look: Look::First });
    assert_eq!(hint.algorithm(), None::<Algorithm>);
}
