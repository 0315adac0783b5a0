#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Board dimensions as `(rows, cols)` plus the number of mines to place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked((rows, cols), mines);
        config.validate()?;
        Ok(config)
    }

    /// Needs at least one row and one column, and at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 || self.mines >= self.total_cells() {
            Err(GameError::InvalidConfiguration)
        } else {
            Ok(())
        }
    }

    /// Checks that `layout` is a board of this size with this many mines.
    pub fn validate_layout(&self, layout: &MineLayout) -> Result<()> {
        if layout.game_config() == *self {
            Ok(())
        } else {
            Err(GameError::InvalidConfiguration)
        }
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((10, 10), 10)
    }
}

/// Where the mines are for one game.
///
/// Every constructor, deserialization included, guarantees a valid board: the
/// count matches the mask and at least one cell is safe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

/// Serialized shape of [`MineLayout`], checked before use.
#[derive(Deserialize)]
struct RawMineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let layout = Self::from_mine_mask(raw.mine_mask)?;
        if layout.mine_count != raw.mine_count {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(layout)
    }
}

impl MineLayout {
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    /// Builds a layout with mines at exactly `mine_coords`, duplicates are
    /// merged.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new_unchecked(size, 0).validate()?;

        let mut layout = Self::empty(size);
        for &coords in mine_coords {
            let coords = layout.validate_coords(coords)?;
            layout.place_mine(coords);
        }

        layout.game_config().validate()?;
        Ok(layout)
    }

    /// Builds a layout from a `(rows, cols)` mask, the mine count is taken
    /// from the mask.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        // oversized masks are rejected by `validate`
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let layout = Self {
            mine_mask,
            mine_count,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Checks the stored count against the mask and that the board is
    /// playable.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.mine_mask.dim();
        if rows > usize::from(Coord::MAX) || cols > usize::from(Coord::MAX) {
            return Err(GameError::InvalidConfiguration);
        }

        let actual = self.mine_mask.iter().filter(|&&is_mine| is_mine).count();
        if actual != usize::from(self.mine_count) {
            return Err(GameError::InvalidConfiguration);
        }

        self.game_config().validate()
    }

    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self[coords];
        if *cell {
            false
        } else {
            *cell = true;
            self.mine_count += 1;
            true
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of a single reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealOutcome {
    pub status: GameStatus,
    /// Every cell that went from hidden to revealed during the call, in the
    /// order the cascade reached them.
    pub newly_revealed: Vec<Coord2>,
}

impl RevealOutcome {
    pub const fn unchanged(status: GameStatus) -> Self {
        Self {
            status,
            newly_revealed: Vec::new(),
        }
    }

    pub fn has_revealed(&self) -> bool {
        !self.newly_revealed.is_empty()
    }
}
