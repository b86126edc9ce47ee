use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use samegame_core::ScoreHistory;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Could not write score history to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not encode score history")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct ScoreEntry {
    score: u64,
    recorded_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HistoryFile {
    entries: Vec<ScoreEntry>,
}

/// Score history persisted as a JSON file, rewritten on every append.
#[derive(Debug)]
pub struct JsonScoreHistory {
    path: PathBuf,
    file: HistoryFile,
}

impl JsonScoreHistory {
    /// Opens the history at `path`. A missing or unreadable file starts an empty history.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                log::warn!(
                    "Ignoring corrupt score history {}: {}",
                    path.display(),
                    err
                );
                HistoryFile::default()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No score history at {}, starting fresh", path.display());
                HistoryFile::default()
            }
            Err(err) => {
                log::warn!("Could not read score history {}: {}", path.display(), err);
                HistoryFile::default()
            }
        };
        log::debug!(
            "Loaded {} score(s) from {}",
            file.entries.len(),
            path.display()
        );
        Self { path, file }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), HistoryError> {
        let text = serde_json::to_string_pretty(&self.file)?;
        fs::write(&self.path, text).map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreHistory for JsonScoreHistory {
    type Error = HistoryError;

    fn append(&mut self, score: u64) -> Result<(), Self::Error> {
        self.file.entries.push(ScoreEntry {
            score,
            recorded_at: Utc::now(),
        });
        self.save()
    }

    fn scores(&self) -> Vec<u64> {
        self.file.entries.iter().map(|entry| entry.score).collect()
    }
}
