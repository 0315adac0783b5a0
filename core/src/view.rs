use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of everything a renderer may show, taken from a [`GameEngine`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    status: GameStatus,
    cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let size = engine.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            engine.view_at((row as Coord, col as Coord))
        });

        Self {
            status: engine.status(),
            cells,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn cell(&self, coords: Coord2) -> Result<CellView> {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .ok_or(GameError::OutOfBounds)
    }

    pub fn cells(&self) -> &Array2<CellView> {
        &self.cells
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    /// Mines shown on the board, only non-empty after a loss.
    pub fn exposed_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &cell)| cell == CellView::Mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn from_engine_maps_revealed_cells() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(0, 0)]).unwrap();
        let mut engine = GameEngine::from_layout(layout).unwrap();

        engine.reveal((1, 1)).unwrap();
        let view = BoardView::from_engine(&engine);

        assert_eq!(view.size(), (2, 3));
        assert_eq!(view.status(), GameStatus::InProgress);
        assert_eq!(view.cell((1, 1)), Ok(CellView::Revealed(1)));
        assert_eq!(view.cell((0, 0)), Ok(CellView::Hidden));
        assert_eq!(view.cell((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(view.hidden_count(), 5);
        assert_eq!(view.exposed_mines().count(), 0);
    }

    #[test]
    fn lost_board_shows_mines_only() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 1)]).unwrap();
        let mut engine = GameEngine::from_layout(layout).unwrap();

        engine.reveal((2, 1)).unwrap();
        let view = BoardView::from_engine(&engine);

        assert_eq!(view.status(), GameStatus::Lost);
        assert_eq!(view.exposed_mines().collect::<Vec<_>>(), [(0, 0), (2, 1)]);
        assert_eq!(view.hidden_count(), 7);
    }

    #[test]
    fn matches_cell_view_everywhere() {
        let mut engine = GameEngine::new(GameConfig::new(9, 9, 10).unwrap(), 8).unwrap();
        engine.reveal((4, 4)).unwrap();

        let view = BoardView::from_engine(&engine);

        for ((row, col), &cell) in view.cells().indexed_iter() {
            let coords = (row as Coord, col as Coord);
            assert_eq!(engine.cell_view(coords), Ok(cell));
        }
    }
}
