use crate::*;
pub use random::*;

mod random;

pub trait GridGenerator {
    fn generate(self, config: GameConfig) -> Result<TileGrid>;
}
