use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fire-and-forget signal emitted while processing a click, e.g. to play a sound.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackEvent {
    TileRemoved,
    ClickEmpty,
}

impl FeedbackEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TileRemoved => "tile-removed",
            Self::ClickEmpty => "click-empty",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Feedback unavailable: {reason}")]
pub struct FeedbackError {
    pub reason: String,
}

impl FeedbackError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Receiver of [`FeedbackEvent`]s. Errors are logged by the engine and never affect the game.
pub trait FeedbackSink {
    fn notify(&mut self, event: FeedbackEvent) -> Result<(), FeedbackError>;
}

/// Sink that drops every event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn notify(&mut self, _event: FeedbackEvent) -> Result<(), FeedbackError> {
        Ok(())
    }
}

impl FeedbackSink for Vec<FeedbackEvent> {
    fn notify(&mut self, event: FeedbackEvent) -> Result<(), FeedbackError> {
        self.push(event);
        Ok(())
    }
}

pub(crate) fn notify_quietly<F: FeedbackSink + ?Sized>(sink: &mut F, event: FeedbackEvent) {
    if let Err(err) = sink.notify(event) {
        log::warn!("Dropped {} feedback: {}", event.name(), err);
    }
}
