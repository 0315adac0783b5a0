use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both end states last until the next game is started.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns one board and its RNG, and plays it out one reveal at a time.
#[derive(Clone, Debug)]
pub struct GameEngine {
    generator: RandomMineGenerator,
    mine_layout: MineLayout,
    board: Array2<CellState>,
    revealed_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl GameEngine {
    /// Starts a game right away with mines placed from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, mut generator: RandomMineGenerator) -> Result<Self> {
        config.validate()?;
        let mine_layout = generator.generate(config);
        let mut engine = Self::from_layout(mine_layout)?;
        engine.generator = generator;
        Ok(engine)
    }

    /// Starts a game on a fixed layout, later restarts draw from a zero seed.
    pub fn from_layout(mine_layout: MineLayout) -> Result<Self> {
        mine_layout.validate()?;
        let size = mine_layout.size();
        let mut engine = Self {
            generator: RandomMineGenerator::new(0),
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            status: GameStatus::InProgress,
            triggered_mine: None,
        };
        engine.log_start();
        Ok(engine)
    }

    /// Throws away the current board and starts over with a fresh random layout.
    pub fn new_game(&mut self, rows: Coord, cols: Coord, mine_count: CellCount) -> Result<()> {
        self.start(GameConfig::new(rows, cols, mine_count)?)
    }

    pub fn start(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        let mine_layout = self.generator.generate(config);
        self.start_with_layout(mine_layout)
    }

    pub fn start_with<G: MineGenerator + ?Sized>(
        &mut self,
        config: GameConfig,
        generator: &mut G,
    ) -> Result<()> {
        config.validate()?;
        let mine_layout = generator.generate(config);
        config.validate_layout(&mine_layout)?;
        self.start_with_layout(mine_layout)
    }

    /// New layout, same configuration.
    pub fn restart(&mut self) -> Result<()> {
        let mine_layout = self.generator.generate(self.config());
        self.start_with_layout(mine_layout)
    }

    /// Replaces the board with `mine_layout`, an invalid layout leaves the
    /// current game untouched.
    pub fn start_with_layout(&mut self, mine_layout: MineLayout) -> Result<()> {
        mine_layout.validate()?;
        self.board = Array2::default(mine_layout.size().to_nd_index());
        self.mine_layout = mine_layout;
        self.revealed_count = 0;
        self.status = GameStatus::InProgress;
        self.triggered_mine = None;
        self.log_start();
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.mine_layout.game_config()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn safe_cells_left(&self) -> CellCount {
        self.mine_layout.safe_cell_count() - self.revealed_count
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Peeks at the layout, regardless of game status. Meant for inspection
    /// and tests, a renderer should stick to [`Self::cell_view`].
    pub fn has_mine_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.contains_mine(coords))
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.view_at(coords))
    }

    pub(crate) fn view_at(&self, coords: Coord2) -> CellView {
        if self.status == GameStatus::Lost && self.mine_layout.contains_mine(coords) {
            return CellView::Mine;
        }

        match self.board[coords.to_nd_index()] {
            CellState::Hidden => CellView::Hidden,
            CellState::Revealed(count) => CellView::Revealed(count),
        }
    }

    /// Reveals a cell, cascading through zero-count cells.
    ///
    /// Reveals on a finished game or an already revealed cell change nothing
    /// and report the current status with no new cells.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.status.is_finished() || self.board[coords.to_nd_index()].is_revealed() {
            return Ok(RevealOutcome::unchanged(self.status));
        }

        if self.mine_layout.contains_mine(coords) {
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            return Ok(RevealOutcome::unchanged(self.status));
        }

        let newly_revealed = self.flood_reveal(coords);

        if self.revealed_count == self.mine_layout.safe_cell_count() {
            self.end_game(GameStatus::Won);
        }

        Ok(RevealOutcome {
            status: self.status,
            newly_revealed,
        })
    }

    fn flood_reveal(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut newly_revealed = Vec::new();
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            // the same cell can be queued by several zero-count neighbors
            if self.board[coords.to_nd_index()].is_revealed() {
                continue;
            }
            debug_assert!(!self.mine_layout.contains_mine(coords));

            let adjacent_mines = self.mine_layout.adjacent_mine_count(coords);
            self.board[coords.to_nd_index()] = CellState::Revealed(adjacent_mines);
            self.revealed_count += 1;
            newly_revealed.push(coords);

            if adjacent_mines == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(coords)
                        .filter(|&pos| self.board[pos.to_nd_index()].is_hidden()),
                );
            }
        }

        log::trace!(
            "Revealed {} cells from {:?}, {} safe cells left",
            newly_revealed.len(),
            start,
            self.safe_cells_left()
        );
        newly_revealed
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        match status {
            GameStatus::Lost => log::debug!("Game lost on mine at {:?}", self.triggered_mine),
            GameStatus::Won => log::debug!("Game won, {} cells revealed", self.revealed_count),
            GameStatus::InProgress => {}
        }
    }

    fn log_start(&self) {
        let (rows, cols) = self.size();
        log::debug!(
            "New game on a {}x{} board with {} mines",
            rows,
            cols,
            self.mine_count()
        );
    }
}
