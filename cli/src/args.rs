use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use samegame_core::Difficulty;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    /// 3 colors
    Easy,
    /// 4 colors
    Medium,
    /// 5 colors
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Clear the board by removing groups of same-colored tiles")]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Number of grid rows (default 6)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    pub rows: Option<u8>,

    /// Number of grid columns (default 9)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    pub cols: Option<u8>,

    /// How many colors are dealt (default medium)
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file the score history is kept in (default highscores.json)
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Print tile symbols without terminal colors
    #[arg(long)]
    pub no_color: bool,

    /// Do not ring the terminal bell on empty clicks
    #[arg(long)]
    pub no_bell: bool,

    /// Also attach the verbose console view from the start
    #[arg(long)]
    pub console: bool,
}
