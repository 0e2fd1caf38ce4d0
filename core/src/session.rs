use alloc::sync::Arc;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No reveal yet, the layout is still unset.
    #[default]
    Ready,
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from first reveal to win or loss.
///
/// Intents never mutate a session in place, each one returns the next snapshot together with its
/// outcome. The mine layout is shared between snapshots once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    seed: u64,
    layout: Arc<MineLayout>,
    visible: VisibleState,
    flagged_count: Saturating<CellCount>,
    phase: GamePhase,
    triggered_mine: Option<Coord2>,
}

impl Session {
    /// Starts a game in the `Ready` phase, mines are placed by the first reveal using `seed`.
    pub fn new(board: Board, seed: u64) -> Self {
        Self {
            board,
            seed,
            layout: Arc::new(MineLayout::unset(board)),
            visible: VisibleState::new(board),
            flagged_count: Saturating(0),
            phase: GamePhase::Ready,
            triggered_mine: None,
        }
    }

    pub fn new_game(width: Coord, height: Coord, mine_count: CellCount, seed: u64) -> Result<Self> {
        Ok(Self::new(Board::new(width, height, mine_count)?, seed))
    }

    /// Starts a game on a fixed layout, skipping generation.
    pub fn from_layout(layout: MineLayout) -> Self {
        let board = layout.board();
        Self {
            board,
            seed: 0,
            layout: Arc::new(layout),
            visible: VisibleState::new(board),
            flagged_count: Saturating(0),
            phase: GamePhase::Playing,
            triggered_mine: None,
        }
    }

    /// Discards both grids and goes back to `Ready` on the same board.
    ///
    /// Fails when the board cannot host a generated game, which happens for crowded fixed layouts.
    pub fn reset(&self, seed: u64) -> Result<Self> {
        let board = Board::new(
            self.board.width(),
            self.board.height(),
            self.board.mine_count(),
        )?;
        log::debug!("Reset from {:?} with seed {}", self.phase, seed);
        Ok(Self::new(board, seed))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    pub fn visible_state(&self) -> &VisibleState {
        &self.visible
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn cell_at(&self, coords: Coord2) -> VisibleCell {
        self.visible[coords]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Whether an intent on `coords` could change anything.
    pub fn can_interact_at(&self, coords: Coord2) -> bool {
        self.board.contains(coords)
            && !self.phase.is_finished()
            && self.visible[coords].is_interactive()
    }

    pub fn reveal(&self, coords: Coord2) -> Result<(Self, RevealOutcome)> {
        let coords = self.board.validate_coords(coords)?;

        if self.phase.is_finished() || self.visible[coords] != VisibleCell::Hidden {
            return Ok((self.clone(), RevealOutcome::NoChange));
        }

        let mut next = self.clone();
        let outcome = next.reveal_hidden_cell(coords)?;
        Ok((next, outcome))
    }

    pub fn cycle_flag(&self, coords: Coord2) -> Result<(Self, MarkOutcome)> {
        let coords = self.board.validate_coords(coords)?;

        if self.phase.is_finished() {
            return Ok((self.clone(), MarkOutcome::NoChange));
        }

        let mut next = self.clone();
        let previous = next.visible[coords];
        let Some(marked) = next.visible.cycle_mark(coords) else {
            return Ok((next, MarkOutcome::NoChange));
        };

        match (previous, marked) {
            (_, VisibleCell::Flagged) => next.flagged_count += 1,
            (VisibleCell::Flagged, _) => next.flagged_count -= 1,
            _ => {}
        }
        log::debug!("Marked {:?} as {:?}", coords, marked);

        let outcome = if next.check_won() {
            MarkOutcome::Won
        } else {
            MarkOutcome::Changed
        };
        Ok((next, outcome))
    }

    fn reveal_hidden_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        if self.phase.is_ready() {
            let layout = RandomLayoutGenerator::new(self.seed).generate(self.board, coords)?;
            self.layout = Arc::new(layout);
            self.phase = GamePhase::Playing;
            log::debug!("Started game with first reveal at {:?}", coords);
        }

        if self.layout.contains_mine(coords) {
            reveal_all(&self.layout, &mut self.visible, coords);
            self.flagged_count = Saturating(0);
            self.triggered_mine = Some(coords);
            self.phase = GamePhase::Lost;
            log::debug!("Hit mine at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let opened = flood_reveal(&self.layout, &mut self.visible, coords);
        log::debug!("Open cell at {:?}, {} cells opened", coords, opened);

        Ok(if self.check_won() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        })
    }

    /// Moves to `Won` when every mine carries a flag and no flag is wrong.
    fn check_won(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Playing) {
            return false;
        }

        if self.flagged_count.0 != self.mine_count()
            || self.visible.false_flags(&self.layout).next().is_some()
        {
            return false;
        }

        self.phase = GamePhase::Won;
        log::debug!("Won with {} flags", self.flagged_count.0);
        true
    }
}
