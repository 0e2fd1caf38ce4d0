use serde::{Deserialize, Serialize};

/// Ground truth for a single cell of the mine layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCell {
    /// Not generated yet, only seen before the first reveal.
    #[default]
    Unset,
    Mine,
    Safe,
}

impl LayoutCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    #[default]
    Hidden,
    /// Opened safe cell with its adjacent mine count, `Revealed(0)` is blank.
    Revealed(u8),
    Flagged,
    QuestionFlagged,
    /// The mine that ended the game.
    ExplodedMine,
    /// Any other mine, shown once the game is lost.
    ShownMine,
}

impl VisibleCell {
    /// Whether the player can still act on the cell, either revealing or marking it.
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged | Self::QuestionFlagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    /// Next marker in the `Hidden -> Flagged -> QuestionFlagged -> Hidden` ring, `None` for cells
    /// that cannot be marked.
    pub const fn next_mark(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Flagged),
            Self::Flagged => Some(Self::QuestionFlagged),
            Self::QuestionFlagged => Some(Self::Hidden),
            Self::Revealed(_) | Self::ExplodedMine | Self::ShownMine => None,
        }
    }
}
