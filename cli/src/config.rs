use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use samegame_core::{Difficulty, GameConfig};
use serde::Deserialize;

use crate::args::Args;
use crate::theme::Theme;

pub const DEFAULT_HISTORY_PATH: &str = "highscores.json";

/// Settings read from a TOML file, every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub rows: Option<u8>,
    pub cols: Option<u8>,
    pub difficulty: Option<Difficulty>,
    pub history: Option<PathBuf>,
    pub color: Option<bool>,
    pub bell: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Effective settings: command line over config file over defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub game: GameConfig,
    pub seed: Option<u64>,
    pub history_path: PathBuf,
    pub theme: Theme,
    pub bell: bool,
    pub console: bool,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let defaults = GameConfig::default();
        let rows = args.rows.or(file.rows).unwrap_or(defaults.size.0);
        let cols = args.cols.or(file.cols).unwrap_or(defaults.size.1);
        let difficulty = args
            .difficulty
            .map(Difficulty::from)
            .or(file.difficulty)
            .unwrap_or(defaults.difficulty);

        let color = !args.no_color && file.color.unwrap_or(true);
        let bell = !args.no_bell && file.bell.unwrap_or(true);

        Self {
            game: GameConfig::new((rows, cols), difficulty),
            seed: args.seed,
            history_path: args
                .history
                .clone()
                .or(file.history)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_PATH)),
            theme: if color { Theme::Color } else { Theme::Plain },
            bell,
            console: args.console,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("samegame").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let settings = Settings::resolve(&args(&[]), FileConfig::default());

        assert_eq!(settings.game, GameConfig::default());
        assert_eq!(settings.history_path, PathBuf::from(DEFAULT_HISTORY_PATH));
        assert_eq!(settings.theme, Theme::Color);
        assert!(settings.bell);
        assert!(!settings.console);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn file_values_fill_in_missing_flags() {
        let file = FileConfig::parse(
            r#"
            rows = 10
            cols = 15
            difficulty = "hard"
            history = "/tmp/scores.json"
            color = false
            "#,
        )
        .unwrap();

        let settings = Settings::resolve(&args(&["--cols", "4"]), file);

        assert_eq!(settings.game.size, (10, 4));
        assert_eq!(settings.game.difficulty, Difficulty::Hard);
        assert_eq!(settings.history_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(settings.theme, Theme::Plain);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            difficulty: Some(Difficulty::Hard),
            bell: Some(true),
            ..Default::default()
        };

        let settings = Settings::resolve(&args(&["-d", "easy", "--no-bell"]), file);

        assert_eq!(settings.game.difficulty, Difficulty::Easy);
        assert!(!settings.bell);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::parse("colour = true").is_err());
        assert!(FileConfig::parse("difficulty = \"insane\"").is_err());
    }
}
