use alloc::collections::VecDeque;
use alloc::vec;

use crate::*;

/// Opens `anchor` and floods outward over side neighbors, returning how many cells were opened.
///
/// The anchor always opens with its mine count. Any other cell opens only when it is safe and still
/// hidden, and the flood only continues through cells without adjacent mines. Does nothing when the
/// anchor is not hidden.
pub fn flood_reveal(layout: &MineLayout, visible: &mut VisibleState, anchor: Coord2) -> CellCount {
    if visible[anchor] != VisibleCell::Hidden {
        return 0;
    }

    let width = layout.size().0;
    let mut visited = vec![false; usize::from(layout.total_cells())];
    let mut to_visit = VecDeque::from([anchor]);
    let mut opened: CellCount = 0;

    while let Some(visit_coords) = to_visit.pop_front() {
        let index = linear_index(visit_coords, width);
        if core::mem::replace(&mut visited[index], true) {
            continue;
        }

        if visit_coords != anchor {
            // never cross into mines, and leave markers and opened cells as they are
            if layout[visit_coords] != LayoutCell::Safe
                || visible[visit_coords] != VisibleCell::Hidden
            {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }
        }

        let count = layout.adjacent_mine_count(visit_coords);
        visible[visit_coords] = VisibleCell::Revealed(count);
        opened += 1;
        log::trace!(
            "Flood opened cell at {:?}, mine count: {}",
            visit_coords,
            count
        );

        if count == 0 {
            to_visit.extend(
                layout
                    .iter_sides(visit_coords)
                    .filter(|&pos| !visited[linear_index(pos, width)]),
            );
        }
    }

    opened
}

/// Shows the whole board after `exploded` was hit: mines are shown, every other cell opens with its
/// count, and the hit cell is marked as the exploded mine.
pub fn reveal_all(layout: &MineLayout, visible: &mut VisibleState, exploded: Coord2) {
    for ((y, x), cell) in visible.cells_mut().indexed_iter_mut() {
        let coords = (x as Coord, y as Coord);
        *cell = if layout.contains_mine(coords) {
            VisibleCell::ShownMine
        } else {
            VisibleCell::Revealed(layout.adjacent_mine_count(coords))
        };
    }
    visible[exploded] = VisibleCell::ExplodedMine;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(size: Coord2, mines: &[Coord2]) -> (MineLayout, VisibleState) {
        let layout = MineLayout::from_mine_coords(size, mines).unwrap();
        let visible = VisibleState::new(layout.board());
        (layout, visible)
    }

    #[test]
    fn flood_stops_at_cells_bordering_the_mine() {
        let (layout, mut visible) = setup((5, 5), &[(4, 4)]);

        let opened = flood_reveal(&layout, &mut visible, (0, 0));

        assert_eq!(opened, 24);
        assert_eq!(visible[(0, 0)], VisibleCell::Revealed(0));
        assert_eq!(visible[(2, 2)], VisibleCell::Revealed(0));
        assert_eq!(visible[(3, 3)], VisibleCell::Revealed(1));
        assert_eq!(visible[(4, 3)], VisibleCell::Revealed(1));
        assert_eq!(visible[(3, 4)], VisibleCell::Revealed(1));
        assert_eq!(visible[(4, 4)], VisibleCell::Hidden);
    }

    #[test]
    fn anchor_with_count_opens_alone() {
        let (layout, mut visible) = setup((5, 5), &[(4, 4)]);

        assert_eq!(flood_reveal(&layout, &mut visible, (3, 3)), 1);
        assert_eq!(visible[(3, 3)], VisibleCell::Revealed(1));
        assert_eq!(visible.count_revealed(), 1);
    }

    #[test]
    fn flood_walks_sides_only() {
        // the mine column splits the board, the numbered cells beside it stop the flood
        let (layout, mut visible) = setup((5, 3), &[(2, 0), (2, 1)]);

        flood_reveal(&layout, &mut visible, (0, 0));

        assert_eq!(visible[(0, 2)], VisibleCell::Revealed(0));
        assert_eq!(visible[(1, 2)], VisibleCell::Revealed(1));
        assert_eq!(visible[(2, 2)], VisibleCell::Hidden);
        assert_eq!(visible[(4, 0)], VisibleCell::Hidden);
    }

    #[test]
    fn flood_never_opens_mines_and_keeps_markers() {
        let (layout, mut visible) = setup((4, 4), &[(3, 0), (0, 3)]);
        visible[(1, 1)] = VisibleCell::Flagged;
        visible[(2, 2)] = VisibleCell::QuestionFlagged;

        flood_reveal(&layout, &mut visible, (0, 0));

        assert_eq!(visible[(1, 1)], VisibleCell::Flagged);
        assert_eq!(visible[(2, 2)], VisibleCell::QuestionFlagged);
        for (coords, cell) in visible.iter_cells() {
            if layout.contains_mine(coords) {
                assert!(!cell.is_revealed(), "mine at {coords:?} was opened");
            }
        }
    }

    #[test]
    fn flood_on_opened_cell_is_noop() {
        let (layout, mut visible) = setup((5, 5), &[(4, 4)]);
        flood_reveal(&layout, &mut visible, (0, 0));
        let before = visible.clone();

        assert_eq!(flood_reveal(&layout, &mut visible, (1, 1)), 0);
        assert_eq!(visible, before);
    }

    #[test]
    fn reveal_all_shows_every_cell() {
        let (layout, mut visible) = setup((3, 3), &[(0, 0), (2, 2)]);
        visible[(1, 0)] = VisibleCell::Flagged;

        reveal_all(&layout, &mut visible, (2, 2));

        assert_eq!(visible[(2, 2)], VisibleCell::ExplodedMine);
        assert_eq!(visible[(0, 0)], VisibleCell::ShownMine);
        assert_eq!(visible[(1, 1)], VisibleCell::Revealed(2));
        assert_eq!(visible[(1, 0)], VisibleCell::Revealed(1));
        assert_eq!(visible[(2, 0)], VisibleCell::Revealed(0));
        assert_eq!(visible.count_flagged(), 0);
    }
}
