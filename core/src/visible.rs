use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player sees of the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibleState {
    cells: Array2<VisibleCell>,
}

impl VisibleState {
    pub fn new(board: Board) -> Self {
        Self {
            cells: Array2::default(board.size().to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn cell_at(&self, coords: Coord2) -> VisibleCell {
        self[coords]
    }

    pub fn count_flagged(&self) -> CellCount {
        self.count_where(|cell| cell == VisibleCell::Flagged)
    }

    pub fn count_revealed(&self) -> CellCount {
        self.count_where(VisibleCell::is_revealed)
    }

    /// Advances the marker on `coords` and returns the new cell, or `None` if it cannot be marked.
    pub fn cycle_mark(&mut self, coords: Coord2) -> Option<VisibleCell> {
        let next = self[coords].next_mark()?;
        self[coords] = next;
        Some(next)
    }

    /// Flagged cells that do not sit on a mine. Cells of an unset layout never count as mines.
    pub fn false_flags<'a>(&'a self, layout: &'a MineLayout) -> impl Iterator<Item = Coord2> + 'a {
        self.iter_cells()
            .filter(|&(_, cell)| cell == VisibleCell::Flagged)
            .map(|(coords, _)| coords)
            .filter(|&coords| !layout.contains_mine(coords))
    }

    /// Every cell with its coordinates, in linear index order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, VisibleCell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((x as Coord, y as Coord), cell))
    }

    /// Row-major cells, ordered by linear index.
    pub fn cells(&self) -> &Array2<VisibleCell> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<VisibleCell> {
        &mut self.cells
    }

    fn count_where(&self, predicate: impl Fn(VisibleCell) -> bool) -> CellCount {
        self.cells
            .iter()
            .filter(|&&cell| predicate(cell))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

impl Index<Coord2> for VisibleState {
    type Output = VisibleCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for VisibleState {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
