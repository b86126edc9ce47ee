use crossterm::style::{Color, Stylize, style};
use samegame_core::TileColor;

/// How tiles are drawn in the terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Color,
    Plain,
}

impl Theme {
    /// Renders one cell, `None` being a removed cell.
    pub fn paint(self, color: Option<TileColor>) -> String {
        let color = color.unwrap_or(TileColor::Blank);
        let symbol = color.symbol();
        match self {
            Theme::Plain => symbol.to_string(),
            Theme::Color => match Self::terminal_color(color) {
                Some(term_color) => style(symbol).with(term_color).bold().to_string(),
                None => style(symbol).dim().to_string(),
            },
        }
    }

    const fn terminal_color(color: TileColor) -> Option<Color> {
        use TileColor::*;
        match color {
            Red => Some(Color::Red),
            Yellow => Some(Color::Yellow),
            Blue => Some(Color::Blue),
            Green => Some(Color::Green),
            Orange => Some(Color::Rgb {
                r: 255,
                g: 165,
                b: 0,
            }),
            Blank => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Color
    }
}
