use ndarray::Array2;

use super::*;

/// Generation strategy that reserves the first revealed cell and its neighbors as safe, but other than
/// that is purely random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, board: Board, anchor: Coord2) -> Result<MineLayout> {
        use rand::prelude::*;

        let anchor = board.validate_coords(anchor)?;
        let mut cells: Array2<LayoutCell> = Array2::default(board.size().to_nd_index());

        let mut reserved: CellCount = 0;
        for coords in safe_zone(board, anchor) {
            cells[coords.to_nd_index()] = LayoutCell::Safe;
            reserved += 1;
        }

        // rejection sampling only terminates while unreserved cells outnumber the mines
        let free_cells = board.total_cells() - reserved;
        let mine_count = board.mine_count();
        if mine_count > 0 && mine_count >= free_cells {
            log::warn!(
                "Cannot place {} mines around anchor {:?}, only {} free cells",
                mine_count,
                anchor,
                free_cells
            );
            return Err(GameError::TooManyMines);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut rejected: u32 = 0;
        while mines_placed < mine_count {
            let index = rng.random_range(0..board.total_cells());
            let coords = board
                .coords_of(usize::from(index))
                .ok_or(GameError::InvalidCoords)?;
            let cell = &mut cells[coords.to_nd_index()];
            if *cell == LayoutCell::Unset {
                *cell = LayoutCell::Mine;
                mines_placed += 1;
            } else {
                rejected += 1;
            }
        }

        cells.mapv_inplace(|cell| match cell {
            LayoutCell::Unset => LayoutCell::Safe,
            other => other,
        });

        let layout = MineLayout::from_cells(cells);
        log::debug!(
            "Generated {}x{} layout with {} mines around {:?} (seed {}, {} draws rejected)",
            board.width(),
            board.height(),
            layout.mine_count(),
            anchor,
            self.seed,
            rejected
        );

        // TODO: regenerate here once `is_solvable` does more than accept every layout
        if !is_solvable(&layout) {
            log::warn!("Generated layout may require guessing");
        }

        Ok(layout)
    }
}
