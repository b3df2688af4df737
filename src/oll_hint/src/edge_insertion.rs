//! The boundary to a solver that places bottom layer cross edges. Only the
//! interface lives here; solvers plug in by implementing [`EdgeInserter`].

use facelet_cube::{Algorithm, FaceletState};

pub trait EdgeInserter {
    /// Work out the moves that solve one more edge of the bottom cross and
    /// store them, replacing any previous result.
    fn insert_edge(&mut self, state: &FaceletState);

    /// The moves found by the last call to [`EdgeInserter::insert_edge`].
    fn moves(&self) -> &Algorithm;

    /// Run the stored moves on `state`.
    fn apply_to(&self, state: &mut FaceletState) {
        state.apply_algorithm(self.moves());
    }
}
