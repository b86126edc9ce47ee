use alloc::collections::BTreeSet;
use alloc::vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    Over,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Owns the grid and applies the rules of a single game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    grid: TileGrid,
    points: u64,
    state: EngineState,
    next_best_move: Option<Coord2>,
}

impl PlayEngine {
    /// Starts a game on `grid`. A grid without moves starts out finished.
    pub fn new(grid: TileGrid) -> Self {
        let mut engine = Self {
            grid,
            points: 0,
            state: Default::default(),
            next_best_move: None,
        };
        engine.refresh_analysis();
        engine
    }

    pub fn generate(config: GameConfig, generator: impl GridGenerator) -> Result<Self> {
        Ok(Self::new(generator.generate(config)?))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    /// Rescans the whole grid for a remaining move, independent of the cached state.
    pub fn check_game_over(&self) -> bool {
        !self.grid.has_moves()
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    /// Start of the largest group on the grid, `None` once the game is over.
    pub fn next_best_move(&self) -> Option<Coord2> {
        self.next_best_move
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<Tile> {
        self.grid.get(coords)
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Handles a click on `coords`, removing the group under it when it has at least two tiles.
    pub fn process_click<F: FeedbackSink + ?Sized>(
        &mut self,
        coords: Coord2,
        feedback: &mut F,
    ) -> Result<ClickOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        let target = self.grid[coords];

        if target.is_removed() {
            notify_quietly(feedback, FeedbackEvent::ClickEmpty);
            return Ok(ClickOutcome::Empty);
        }

        if self.state.is_finished() {
            return Ok(ClickOutcome::AlreadyOver);
        }

        let color = target.color();
        let matching_neighbors = self
            .grid
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos].color() == color)
            .count();
        if matching_neighbors == 0 {
            log::debug!("Isolated tile at {:?}, ignoring click", coords);
            return Ok(ClickOutcome::Isolated);
        }

        let (group_size, touched_columns) = self.remove_group(coords, color, feedback);
        for col in touched_columns {
            self.grid.compact_column(col);
        }

        let removal = Removal {
            group_size,
            points: group_score(group_size),
        };
        self.points = self.points.saturating_add(removal.points);
        log::debug!(
            "Removed {} {:?} tile(s) from {:?} for {} points, total: {}",
            group_size,
            color,
            coords,
            removal.points,
            self.points
        );

        self.grid.close_empty_columns();
        self.refresh_analysis();

        Ok(if self.state.is_finished() {
            ClickOutcome::Finished(removal)
        } else {
            ClickOutcome::Removed(removal)
        })
    }

    /// Flood fill from `start` over tiles of `color`, returns the group size and the touched columns.
    fn remove_group<F: FeedbackSink + ?Sized>(
        &mut self,
        start: Coord2,
        color: TileColor,
        feedback: &mut F,
    ) -> (CellCount, BTreeSet<Coord>) {
        let mut touched_columns = BTreeSet::new();
        let mut group_size: CellCount = 0;
        let mut to_visit = vec![start];

        while let Some(visit_coords) = to_visit.pop() {
            let tile = self.grid.tile_mut(visit_coords);
            if tile.is_visited() || tile.color() != color {
                continue;
            }

            tile.mark_visited();
            tile.remove();
            group_size += 1;
            touched_columns.insert(visit_coords.1);
            log::trace!("Flood removed tile at {:?}", visit_coords);
            notify_quietly(feedback, FeedbackEvent::TileRemoved);

            to_visit.extend(self.grid.iter_neighbors(visit_coords));
        }

        (group_size, touched_columns)
    }

    fn refresh_analysis(&mut self) {
        if self.check_game_over() {
            self.end_game();
        } else {
            self.next_best_move = find_best_move(&self.grid).map(|hint| hint.start);
            log::debug!("Next best move: {:?}", self.next_best_move);
        }
    }

    fn end_game(&mut self) {
        if self.state.is_finished() {
            return;
        }

        self.state = EngineState::Over;
        self.next_best_move = None;
        log::debug!(
            "Game over with {} points, {} tile(s) left",
            self.points,
            self.grid.remaining_count()
        );
    }
}
