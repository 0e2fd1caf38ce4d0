use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error("Too many mines, no room left for the first reveal")]
    TooManyMines,
    #[error("Mine positions do not match the declared mine count")]
    MineCountMismatch,
}

impl GameError {
    /// Whether the error comes from an invalid board configuration rather than a misplaced intent.
    pub const fn is_configuration(self) -> bool {
        matches!(
            self,
            Self::EmptyBoard | Self::TooManyMines | Self::MineCountMismatch
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
