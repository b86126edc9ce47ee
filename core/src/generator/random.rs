use ndarray::Array2;

use super::*;

/// Upper bound on full regenerations before a configuration is declared unplayable.
pub const MAX_GENERATION_ATTEMPTS: u32 = 1000;

/// Generation strategy that deals every cell an independent uniformly random color, dealing the
/// whole grid again whenever the result has no move at all.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
    max_attempts: u32,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..self
        }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GameConfig) -> Result<TileGrid> {
        use rand::prelude::*;
        use rand::rngs::SmallRng;

        let palette = config.difficulty.palette();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for attempt in 1..=self.max_attempts {
            let tiles = Array2::from_shape_fn(config.size.to_nd_index(), |_| {
                Tile::new(palette[rng.random_range(0..palette.len())])
            });
            let grid = TileGrid::from_tiles(tiles)?;
            if grid.has_moves() {
                log::debug!(
                    "Generated {:?} grid with {} colors, seed: {}, attempt: {}",
                    config.size,
                    palette.len(),
                    self.seed,
                    attempt
                );
                return Ok(grid);
            }
            log::trace!("Grid without moves on attempt {}, dealing again", attempt);
        }

        log::warn!(
            "Could not generate a playable {:?} grid with {} colors in {} attempts",
            config.size,
            palette.len(),
            self.max_attempts
        );
        Err(GameError::UnplayableConfig {
            attempts: self.max_attempts,
        })
    }
}
