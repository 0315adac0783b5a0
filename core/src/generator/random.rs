use alloc::vec::Vec;
use rand::prelude::*;

use super::*;
use crate::types::from_linear_index;

/// Seeded generator, successive calls keep advancing the same RNG so each game
/// gets an independent layout.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
    placement: Placement,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_placement(seed, Placement::default())
    }

    pub fn with_placement(seed: u64, placement: Placement) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            placement,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    fn place_shuffled(&mut self, config: GameConfig, layout: &mut MineLayout) {
        let total = usize::from(config.total_cells());
        let mut cells: Vec<usize> = (0..total).collect();

        for i in 0..usize::from(config.mines) {
            let pick = self.rng.random_range(i..total);
            cells.swap(i, pick);
            layout.place_mine(from_linear_index(cells[i], config.cols()));
        }
    }

    fn place_rejecting(&mut self, config: GameConfig, layout: &mut MineLayout) {
        if config.mines > config.total_cells() / 2 {
            log::warn!(
                "Rejection placement on a dense board, {} mines in {} cells",
                config.mines,
                config.total_cells()
            );
        }

        let mut draws: u32 = 0;
        while layout.mine_count() < config.mines {
            let coords = (
                self.rng.random_range(0..config.rows()),
                self.rng.random_range(0..config.cols()),
            );
            layout.place_mine(coords);
            draws += 1;
        }
        log::trace!("Placed {} mines in {} draws", config.mines, draws);
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        let mut layout = MineLayout::empty(config.size);

        match self.placement {
            Placement::Shuffle => self.place_shuffled(config, &mut layout),
            Placement::Rejection => self.place_rejecting(config, &mut layout),
        }

        debug_assert_eq!(layout.mine_count(), config.mines);
        layout
    }
}
