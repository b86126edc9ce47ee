use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid difficulty {0}, expected a palette size of 3, 4 or 5")]
    InvalidDifficulty(u8),
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("No playable grid after {attempts} attempts")]
    UnplayableConfig { attempts: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
