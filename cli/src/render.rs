use std::fmt;

use mineboard_core::{Coord, GamePhase, Session, VisibleCell};

pub fn glyph(cell: VisibleCell) -> char {
    match cell {
        VisibleCell::Hidden => '#',
        VisibleCell::Revealed(0) => '.',
        VisibleCell::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        VisibleCell::Flagged => 'F',
        VisibleCell::QuestionFlagged => '?',
        VisibleCell::ShownMine => '*',
        VisibleCell::ExplodedMine => 'X',
    }
}

fn label_width(size: Coord) -> usize {
    size.saturating_sub(1).to_string().len()
}

/// The board with column and row labels, then the status lines under it.
pub struct BoardView<'a> {
    session: &'a Session,
    elapsed: &'a str,
}

impl<'a> BoardView<'a> {
    pub fn new(session: &'a Session, elapsed: &'a str) -> Self {
        Self { session, elapsed }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.session.size();
        let cell_width = label_width(width);
        let row_width = label_width(height);

        write!(f, "{:row_width$} ", "")?;
        for x in 0..width {
            write!(f, " {x:>cell_width$}")?;
        }
        writeln!(f)?;

        for y in 0..height {
            write!(f, "{y:>row_width$} ")?;
            for x in 0..width {
                write!(f, " {:>cell_width$}", glyph(self.session.cell_at((x, y))))?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "Mines found: {} out of {}",
            self.session.flagged_count(),
            self.session.mine_count()
        )?;
        writeln!(f, "Time elapsed: {}", self.elapsed)?;
        match self.session.phase() {
            GamePhase::Won => writeln!(f, "You win!"),
            GamePhase::Lost => writeln!(f, "You lose!"),
            GamePhase::Ready | GamePhase::Playing => Ok(()),
        }
    }
}

pub fn render(session: &Session, elapsed: &str) -> String {
    BoardView::new(session, elapsed).to_string()
}
