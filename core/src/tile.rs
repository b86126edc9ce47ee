use serde::{Deserialize, Serialize};

/// Color of a tile. `Blank` is what removed tiles turn into and is never part of the palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Red,
    Yellow,
    Blue,
    Green,
    Orange,
    Blank,
}

impl TileColor {
    /// Playable colors, a difficulty of `n` uses the first `n` of them.
    pub const PALETTE: [TileColor; 5] = [
        TileColor::Red,
        TileColor::Yellow,
        TileColor::Blue,
        TileColor::Green,
        TileColor::Orange,
    ];

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn name(self) -> &'static str {
        use TileColor::*;
        match self {
            Red => "red",
            Yellow => "yellow",
            Blue => "blue",
            Green => "green",
            Orange => "orange",
            Blank => "blank",
        }
    }

    /// Single-letter tag used by text views and test fixtures.
    pub const fn symbol(self) -> char {
        use TileColor::*;
        match self {
            Red => 'R',
            Yellow => 'Y',
            Blue => 'B',
            Green => 'G',
            Orange => 'O',
            Blank => '.',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        use TileColor::*;
        match symbol {
            'R' | 'r' => Some(Red),
            'Y' | 'y' => Some(Yellow),
            'B' | 'b' => Some(Blue),
            'G' | 'g' => Some(Green),
            'O' | 'o' => Some(Orange),
            '.' => Some(Blank),
            _ => None,
        }
    }
}

/// One cell of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    color: TileColor,
    removed: bool,
    visited: bool,
}

impl Tile {
    pub const fn new(color: TileColor) -> Self {
        Self {
            color,
            removed: color.is_blank(),
            visited: false,
        }
    }

    /// Filler for columns vacated when empty columns are closed.
    pub const fn blank() -> Self {
        Self::new(TileColor::Blank)
    }

    pub const fn color(self) -> TileColor {
        self.color
    }

    pub const fn is_removed(self) -> bool {
        self.removed
    }

    /// Whether a flood fill already reached this tile.
    pub const fn is_visited(self) -> bool {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn remove(&mut self) {
        self.removed = true;
        self.color = TileColor::Blank;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::blank()
    }
}

impl From<TileColor> for Tile {
    fn from(color: TileColor) -> Self {
        Self::new(color)
    }
}
