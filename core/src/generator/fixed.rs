use super::*;

/// Hands out the same layout every time, for scripted boards and replays.
///
/// The config passed to [`MineGenerator::generate`] is ignored, the engine
/// rejects the layout when it does not match.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    layout: MineLayout,
}

impl FixedMineGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        MineLayout::from_mine_coords(size, mine_coords).map(Self::new)
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, _config: GameConfig) -> MineLayout {
        self.layout.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_same_layout_every_time() {
        let mut generator = FixedMineGenerator::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        let config = generator.layout().game_config();

        let first = generator.generate(config);
        let second = generator.generate(config);

        assert_eq!(first, second);
        assert_eq!(first.iter_mines().next(), Some((1, 1)));
        assert_eq!(config, GameConfig::new(3, 3, 1).unwrap());
    }
}
