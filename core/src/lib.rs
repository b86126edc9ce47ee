#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use feedback::*;
pub use generator::*;
pub use grid::*;
pub use history::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod feedback;
mod generator;
mod grid;
mod history;
mod tile;
mod types;

/// Number of distinct colors dealt onto the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Difficulty {
    Easy = 3,
    Medium = 4,
    Hard = 5,
}

impl Difficulty {
    pub const fn colors(self) -> u8 {
        self as u8
    }

    pub fn palette(self) -> &'static [TileColor] {
        &TileColor::PALETTE[..usize::from(self.colors())]
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(colors: u8) -> Result<Self> {
        match colors {
            3 => Ok(Self::Easy),
            4 => Ok(Self::Medium),
            5 => Ok(Self::Hard),
            other => Err(GameError::InvalidDifficulty(other)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, difficulty: Difficulty) -> Self {
        Self { size, difficulty }
    }

    pub fn new((rows, cols): Coord2, difficulty: Difficulty) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        Self::new_unchecked((rows, cols), difficulty)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((6, 9), Difficulty::Medium)
    }
}

/// Points awarded for removing a group of `group_size` tiles: `2^group_size - 2`.
///
/// Saturates at `u64::MAX` for groups of 64 tiles or more.
pub const fn group_score(group_size: CellCount) -> u64 {
    match 1u64.checked_shl(group_size as u32) {
        Some(power) => power.saturating_sub(2),
        None => u64::MAX,
    }
}

/// Tiles cleared by a single move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    pub group_size: CellCount,
    pub points: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Clicked a removed tile.
    Empty,
    /// Clicked a tile without same-colored neighbors.
    Isolated,
    /// The game had already ended.
    AlreadyOver,
    Removed(Removal),
    /// The move left no further moves on the grid.
    Finished(Removal),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Empty => false,
            Isolated => false,
            AlreadyOver => false,
            Removed(_) => true,
            Finished(_) => true,
        }
    }

    pub const fn removal(self) -> Option<Removal> {
        match self {
            Self::Removed(removal) | Self::Finished(removal) => Some(removal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_score_follows_power_of_two() {
        assert_eq!(group_score(2), 2);
        assert_eq!(group_score(3), 6);
        assert_eq!(group_score(5), 30);
        assert_eq!(group_score(10), 1022);
    }

    #[test]
    fn group_score_does_not_underflow_or_overflow() {
        assert_eq!(group_score(0), 0);
        assert_eq!(group_score(1), 0);
        assert_eq!(group_score(63), (1u64 << 63) - 2);
        assert_eq!(group_score(64), u64::MAX);
        assert_eq!(group_score(CellCount::MAX), u64::MAX);
    }

    #[test]
    fn difficulty_maps_to_palette_size() {
        assert_eq!(Difficulty::try_from(3u8), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::Hard.palette().len(), 5);
        assert_eq!(Difficulty::Medium.palette(), &TileColor::PALETTE[..4]);
        assert_eq!(Difficulty::try_from(6u8), Err(GameError::InvalidDifficulty(6)));
    }

    #[test]
    fn config_clamps_empty_dimensions() {
        let config = GameConfig::new((0, 4), Difficulty::Easy);
        assert_eq!(config.size, (1, 4));
        assert_eq!(config.total_cells(), 4);
    }

    #[test]
    fn outcome_reports_updates() {
        let removal = Removal {
            group_size: 2,
            points: 2,
        };
        assert!(ClickOutcome::Removed(removal).has_update());
        assert!(!ClickOutcome::Isolated.has_update());
        assert_eq!(ClickOutcome::Finished(removal).removal(), Some(removal));
        assert_eq!(ClickOutcome::Empty.removal(), None);
    }
}
