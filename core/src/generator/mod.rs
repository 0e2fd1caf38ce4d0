use crate::*;
pub use random::*;

mod random;

pub trait LayoutGenerator {
    /// Generates a layout for `board` that keeps `anchor` and its neighbors free of mines.
    fn generate(self, board: Board, anchor: Coord2) -> Result<MineLayout>;
}

/// The anchor followed by its in-bounds neighbors, the cells a first reveal reserves as safe.
pub fn safe_zone(board: Board, anchor: Coord2) -> impl Iterator<Item = Coord2> + use<> {
    core::iter::once(anchor).chain(board.iter_neighbors(anchor))
}

/// Whether the layout can be cleared without guessing.
///
/// Not implemented, every layout is accepted.
pub fn is_solvable(_layout: &MineLayout) -> bool {
    true
}
