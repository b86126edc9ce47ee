use std::io::Write;

use samegame_core::{FeedbackError, FeedbackEvent, FeedbackSink};

/// Rings the terminal bell when a click lands on an empty cell.
pub struct TerminalBell<W> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FeedbackSink for TerminalBell<W> {
    fn notify(&mut self, event: FeedbackEvent) -> Result<(), FeedbackError> {
        log::trace!("Feedback event: {}", event.name());
        if !self.enabled || event != FeedbackEvent::ClickEmpty {
            return Ok(());
        }

        self.out
            .write_all(b"\x07")
            .and_then(|()| self.out.flush())
            .map_err(|err| FeedbackError::new(err.to_string()))
    }
}
