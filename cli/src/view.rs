use std::io::{self, Write};

use samegame_core::{BoardSnapshot, Coord2};

use crate::theme::Theme;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Board,
    Console,
}

/// A presentation surface. Views never touch the engine, they draw whatever snapshot they get.
pub trait GameView {
    fn kind(&self) -> ViewKind;

    fn update(&mut self, snapshot: &BoardSnapshot) -> io::Result<()>;

    fn show_highscores(&mut self, scores: &[u64]) -> io::Result<()>;
}

fn describe_move(best_move: Option<Coord2>) -> String {
    match best_move {
        Some((row, col)) => format!("row={}, col={}", row, col),
        None => "none".to_string(),
    }
}

/// Grid with row and column labels, the hinted group drawn in brackets.
pub struct BoardView<W> {
    out: W,
    theme: Theme,
}

impl<W: Write> BoardView<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameView for BoardView<W> {
    fn kind(&self) -> ViewKind {
        ViewKind::Board
    }

    fn update(&mut self, snapshot: &BoardSnapshot) -> io::Result<()> {
        let (rows, cols) = snapshot.size;

        write!(self.out, "   ")?;
        for col in 0..cols {
            write!(self.out, "{:^3}", col)?;
        }
        writeln!(self.out)?;

        for row in 0..rows {
            write!(self.out, "{:>2} ", row)?;
            for col in 0..cols {
                let coords = (row, col);
                let cell = self.theme.paint(snapshot.color_at(coords));
                if snapshot.is_hinted(coords) {
                    write!(self.out, "[{}]", cell)?;
                } else {
                    write!(self.out, " {} ", cell)?;
                }
            }
            writeln!(self.out)?;
        }

        if snapshot.game_over {
            writeln!(self.out, "Score: {} | Game over", snapshot.points)?;
        } else {
            writeln!(
                self.out,
                "Score: {} | Next best move: {}",
                snapshot.points,
                describe_move(snapshot.best_move)
            )?;
        }
        self.out.flush()
    }

    fn show_highscores(&mut self, scores: &[u64]) -> io::Result<()> {
        writeln!(self.out, "Highscores:")?;
        for (game, score) in scores.iter().enumerate() {
            writeln!(self.out, "[Game {}] {}", game + 1, score)?;
        }
        self.out.flush()
    }
}

/// Verbose per-tile dump, meant to sit next to the board view while debugging.
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameView for ConsoleView<W> {
    fn kind(&self) -> ViewKind {
        ViewKind::Console
    }

    fn update(&mut self, snapshot: &BoardSnapshot) -> io::Result<()> {
        let (rows, cols) = snapshot.size;

        writeln!(self.out, "Grid:")?;
        for row in 0..rows {
            let cells: Vec<String> = (0..cols)
                .map(|col| match snapshot.color_at((row, col)) {
                    Some(color) => format!("[{:<6} rem=f]", color.name()),
                    None => format!("[{:<6} rem=t]", "blank"),
                })
                .collect();
            writeln!(self.out, "{}", cells.join(" "))?;
        }
        writeln!(
            self.out,
            "Score: {} | Next best move: {} | Game Over = {}",
            snapshot.points,
            describe_move(snapshot.best_move),
            snapshot.game_over
        )?;
        self.out.flush()
    }

    fn show_highscores(&mut self, scores: &[u64]) -> io::Result<()> {
        let games: Vec<String> = scores
            .iter()
            .enumerate()
            .map(|(game, score)| format!("Game {}: {}", game + 1, score))
            .collect();
        writeln!(self.out, "Highscores: {}", games.join(", "))?;
        self.out.flush()
    }
}
