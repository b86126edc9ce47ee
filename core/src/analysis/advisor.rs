use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Largest group found by a sweep, identified by the cell the sweep reached it from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHint {
    pub start: Coord2,
    pub size: CellCount,
}

/// Finds the largest group of same-colored tiles still on the grid.
///
/// Cells are swept in row-major order and only a strictly larger group replaces the current
/// best, so ties go to the group reached first. Returns `None` when every tile is removed.
pub fn find_best_move(grid: &TileGrid) -> Option<GroupHint> {
    let mut visited = Array2::from_elem(grid.size().to_nd_index(), false);
    let mut best: Option<GroupHint> = None;

    for start in grid.iter_coords() {
        if visited[start.to_nd_index()] {
            continue;
        }

        let size = walk_group(grid, start, &mut visited, |_| {});
        if size > best.map_or(0, |hint| hint.size) {
            best = Some(GroupHint { start, size });
        }
    }

    best
}

/// All coordinates of the group containing `coords`, empty for removed or out-of-range cells.
pub fn connected_group(grid: &TileGrid, coords: Coord2) -> Vec<Coord2> {
    let mut group = Vec::new();
    if grid.validate_coords(coords).is_err() {
        return group;
    }

    let mut visited = Array2::from_elem(grid.size().to_nd_index(), false);
    walk_group(grid, coords, &mut visited, |pos| group.push(pos));
    group
}

/// Depth-first walk over the non-removed tiles sharing the color of `start`.
///
/// Marks every reached cell in `visited` and returns how many were reached.
fn walk_group(
    grid: &TileGrid,
    start: Coord2,
    visited: &mut Array2<bool>,
    mut on_visit: impl FnMut(Coord2),
) -> CellCount {
    let root = grid[start];
    if root.is_removed() {
        return 0;
    }

    let color = root.color();
    let mut size: CellCount = 0;
    let mut to_visit = vec![start];

    while let Some(visit_coords) = to_visit.pop() {
        let index = visit_coords.to_nd_index();
        let tile = grid[visit_coords];
        if visited[index] || tile.is_removed() || tile.color() != color {
            continue;
        }

        visited[index] = true;
        size += 1;
        on_visit(visit_coords);
        to_visit.extend(
            grid.iter_neighbors(visit_coords)
                .filter(|pos| !visited[pos.to_nd_index()]),
        );
    }

    size
}
