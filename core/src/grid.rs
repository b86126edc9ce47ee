use alloc::vec::Vec;
use core::ops::Index;
use core::str::FromStr;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular matrix of tiles, indexed by `(row, col)`.
///
/// Dimensions are fixed at construction. Only the engine mutates a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: Array2<Tile>,
}

impl TileGrid {
    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = tiles.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles })
    }

    /// Builds a grid from rows of colors, every row must have the same length.
    pub fn from_color_rows<R: AsRef<[TileColor]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GameError::InvalidBoardShape);
            }
            cells.extend(row.iter().map(|&color| Tile::new(color)));
        }
        let tiles = Array2::from_shape_vec((rows.len(), cols), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_tiles(tiles)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        // dimensions are checked against `Coord::MAX` on construction
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        area(rows, cols)
    }

    pub fn remaining_count(&self) -> CellCount {
        let remaining = self.tiles.iter().filter(|tile| !tile.is_removed()).count();
        remaining as CellCount
    }

    pub fn get(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    pub fn view(&self) -> ArrayView2<'_, Tile> {
        self.tiles.view()
    }

    /// Iterates all cells in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Whether some non-removed tile has a non-removed orthogonal neighbor of the same color.
    pub fn has_moves(&self) -> bool {
        self.iter_coords().any(|coords| self.has_matching_neighbor(coords))
    }

    fn has_matching_neighbor(&self, coords: Coord2) -> bool {
        let tile = self[coords];
        if tile.is_removed() {
            return false;
        }
        self.iter_neighbors(coords).any(|pos| {
            let neighbor = self[pos];
            !neighbor.is_removed() && neighbor.color() == tile.color()
        })
    }

    pub fn column_is_empty(&self, col: Coord) -> bool {
        self.tiles
            .column(col.into())
            .iter()
            .all(|tile| tile.is_removed())
    }

    pub(crate) fn tile_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[coords.to_nd_index()]
    }

    /// Lets the surviving tiles of a column fall to the bottom, keeping their order.
    pub(crate) fn compact_column(&mut self, col: Coord) {
        let mut column = self.tiles.column_mut(col.into());
        let ordered: Vec<Tile> = column
            .iter()
            .filter(|tile| tile.is_removed())
            .chain(column.iter().filter(|tile| !tile.is_removed()))
            .copied()
            .collect();
        for (slot, tile) in column.iter_mut().zip(ordered) {
            *slot = tile;
        }
    }

    /// Slides columns left over fully removed ones and refills the right edge with blanks.
    ///
    /// Expects touched columns to be compacted, so a removed bottom tile is the first sign of an
    /// empty column. Returns whether any column moved.
    pub(crate) fn close_empty_columns(&mut self) -> bool {
        let (rows, cols) = self.tiles.dim();
        let bottom = self.tiles.row(rows - 1);
        if !bottom.iter().take(cols - 1).any(|tile| tile.is_removed()) {
            return false;
        }

        let (_, col_end) = self.size();
        let occupied: Vec<Coord> = (0..col_end)
            .filter(|&col| !self.column_is_empty(col))
            .collect();
        let already_packed = occupied
            .iter()
            .enumerate()
            .all(|(target, &source)| usize::from(source) == target);
        if already_packed {
            return false;
        }

        let mut closed = Array2::from_elem((rows, cols), Tile::blank());
        for (target, &source) in occupied.iter().enumerate() {
            closed
                .column_mut(target)
                .assign(&self.tiles.column(source.into()));
        }
        log::debug!(
            "Closed {} empty column(s), {} remain occupied",
            cols - occupied.len(),
            occupied.len()
        );
        self.tiles = closed;
        true
    }
}

impl Index<Coord2> for TileGrid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

/// Parses whitespace-separated rows of color symbols, e.g. `"RRG YBB"`.
impl FromStr for TileGrid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split_whitespace()
            .map(|row| {
                row.chars()
                    .map(|symbol| TileColor::from_symbol(symbol).ok_or(GameError::InvalidBoardShape))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_color_rows(&rows)
    }
}
