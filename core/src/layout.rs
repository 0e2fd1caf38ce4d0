use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ground-truth mine placement. All cells are `Unset` until the first reveal generates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    cells: Array2<LayoutCell>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn unset(board: Board) -> Self {
        Self {
            cells: Array2::default(board.size().to_nd_index()),
            mine_count: 0,
        }
    }

    pub(crate) fn from_cells(cells: Array2<LayoutCell>) -> Self {
        let mine_count = cells
            .iter()
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self { cells, mine_count }
    }

    /// Builds a generated layout with mines at exactly `mine_coords`, every other cell safe.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut cells = Array2::from_elem(size.to_nd_index(), LayoutCell::Safe);
        for &coords in mine_coords {
            if coords.0 >= width || coords.1 >= height {
                return Err(GameError::InvalidCoords);
            }
            let cell = &mut cells[coords.to_nd_index()];
            if cell.is_mine() {
                return Err(GameError::MineCountMismatch);
            }
            *cell = LayoutCell::Mine;
        }

        Ok(Self::from_cells(cells))
    }

    /// Board described by this layout, taking the mine count from the placed mines.
    pub fn board(&self) -> Board {
        let (width, height) = self.size();
        Board::new_unchecked(width, height, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn is_generated(&self) -> bool {
        !self.cells.iter().any(|&cell| cell == LayoutCell::Unset)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Mines among the up to 8 in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count()
            .try_into()
            .unwrap_or(u8::MAX)
    }

    /// Row-major cells, ordered by linear index.
    pub fn cells(&self) -> &Array2<LayoutCell> {
        &self.cells
    }

    pub(crate) fn iter_sides(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_sides(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = LayoutCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
