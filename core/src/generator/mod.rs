use crate::*;
use serde::{Deserialize, Serialize};
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces the mine layout for a new game.
///
/// Implementations may assume `config` has already been validated, and must
/// place exactly `config.mines` mines.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> MineLayout;
}

/// How [`RandomMineGenerator`] picks the mine cells, both give a uniformly
/// random subset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Partial shuffle of every cell index, cost does not depend on density.
    #[default]
    Shuffle,
    /// Draw random cells until enough distinct ones were hit, slows down as
    /// the board fills up.
    Rejection,
}
