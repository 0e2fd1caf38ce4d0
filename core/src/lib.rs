#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use reveal::*;
pub use session::*;
pub use types::*;
pub use visible::*;

mod cell;
mod error;
mod generator;
mod layout;
mod reveal;
mod session;
mod types;
mod visible;

/// Board dimensions and mine count, validated so that mine generation always terminates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfig")]
pub struct Board {
    width: Coord,
    height: Coord,
    mine_count: CellCount,
}

impl Board {
    pub(crate) const fn new_unchecked(width: Coord, height: Coord, mine_count: CellCount) -> Self {
        Self {
            width,
            height,
            mine_count,
        }
    }

    /// Rejects empty boards and mine counts that would not leave room for the safe zone of a
    /// first reveal anywhere on the board. A board without mines is always accepted.
    pub fn new(width: Coord, height: Coord, mine_count: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            log::warn!("Rejected empty board {}x{}", width, height);
            return Err(GameError::EmptyBoard);
        }

        let board = Self::new_unchecked(width, height, mine_count);
        if mine_count > 0 && mine_count >= board.placeable_cells() {
            log::warn!(
                "Rejected {} mines on a {}x{} board, at most {} fit",
                mine_count,
                width,
                height,
                board.placeable_cells().saturating_sub(1)
            );
            return Err(GameError::TooManyMines);
        }

        Ok(board)
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Size of the largest safe zone a first reveal can reserve, reached by an interior anchor.
    pub const fn max_safe_zone(&self) -> CellCount {
        let zone_x = if self.width < 3 { self.width } else { 3 };
        let zone_y = if self.height < 3 { self.height } else { 3 };
        mult(zone_x, zone_y)
    }

    /// Cells left for mines once the largest safe zone is reserved.
    pub const fn placeable_cells(&self) -> CellCount {
        self.total_cells() - self.max_safe_zone()
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        x < self.width && y < self.height
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Linear index `width * y + x` used by all grid storage.
    pub const fn index_of(&self, coords: Coord2) -> usize {
        linear_index(coords, self.width)
    }

    pub fn coords_of(&self, index: usize) -> Option<Coord2> {
        let width = usize::from(self.width);
        if width == 0 || index >= usize::from(self.total_cells()) {
            return None;
        }
        let x = (index % width).try_into().ok()?;
        let y = (index / width).try_into().ok()?;
        Some((x, y))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size(), Adjacency::All)
    }

    /// Every cell coordinate in linear index order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

/// Unvalidated board fields as they appear in a snapshot.
#[derive(Deserialize)]
struct BoardConfig {
    width: Coord,
    height: Coord,
    mine_count: CellCount,
}

impl TryFrom<BoardConfig> for Board {
    type Error = GameError;

    fn try_from(config: BoardConfig) -> Result<Self> {
        Self::new(config.width, config.height, config.mine_count)
    }
}

impl Default for Board {
    /// 16x16 with half of the cells mined.
    fn default() -> Self {
        Self::new_unchecked(16, 16, 128)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
            Self::Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn board_rejects_empty_dimensions() {
        assert_eq!(Board::new(0, 5, 1), Err(GameError::EmptyBoard));
        assert_eq!(Board::new(5, 0, 1), Err(GameError::EmptyBoard));
    }

    #[test]
    fn board_reserves_the_largest_safe_zone() {
        assert_eq!(Board::new(9, 9, 72), Err(GameError::TooManyMines));
        assert!(Board::new(9, 9, 71).is_ok());

        // a single row only ever reserves three cells
        assert_eq!(Board::new(5, 1, 2), Err(GameError::TooManyMines));
        assert!(Board::new(5, 1, 1).is_ok());

        // every cell of a 2x2 board neighbors every other one
        assert_eq!(Board::new(2, 2, 1), Err(GameError::TooManyMines));
        assert!(Board::new(2, 2, 0).is_ok());
    }

    #[test]
    fn default_board_matches_half_density() {
        let board = Board::default();
        assert_eq!(board.size(), (16, 16));
        assert_eq!(board.mine_count(), 128);
        assert_eq!(Board::new(16, 16, 128), Ok(board));
    }

    #[test]
    fn linear_index_round_trips_through_coords() {
        let board = Board::new(4, 3, 1).unwrap();
        assert_eq!(board.index_of((3, 2)), 11);
        assert_eq!(board.coords_of(11), Some((3, 2)));
        assert_eq!(board.coords_of(12), None);

        let linear: Vec<_> = board.iter_coords().map(|c| board.index_of(c)).collect();
        assert_eq!(linear, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn deserializing_validates_the_board() {
        let crowded = r#"{"width":2,"height":2,"mine_count":1}"#;
        assert!(serde_json::from_str::<Board>(crowded).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"width":0,"height":3,"mine_count":0}"#).is_err());

        let board: Board =
            serde_json::from_str(r#"{"width":4,"height":4,"mine_count":7}"#).unwrap();
        assert_eq!(Board::new(4, 4, 7), Ok(board));
    }

    #[test]
    fn out_of_bounds_coords_are_rejected() {
        let board = Board::new(4, 3, 1).unwrap();
        assert_eq!(board.validate_coords((4, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 3)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((3, 2)), Ok((3, 2)));
    }
}
