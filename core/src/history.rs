use alloc::vec::Vec;
use core::convert::Infallible;
use serde::{Deserialize, Serialize};

/// Append-only record of final scores, in the order games ended.
pub trait ScoreHistory {
    type Error;

    fn append(&mut self, score: u64) -> Result<(), Self::Error>;

    fn scores(&self) -> Vec<u64>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryScoreHistory {
    scores: Vec<u64>,
}

impl MemoryScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreHistory for MemoryScoreHistory {
    type Error = Infallible;

    fn append(&mut self, score: u64) -> Result<(), Self::Error> {
        self.scores.push(score);
        Ok(())
    }

    fn scores(&self) -> Vec<u64> {
        self.scores.clone()
    }
}
