/// Row or column index on the grid.
pub type Coord = u8;

/// Tile counts: group sizes, remaining tiles, grid area.
pub type CellCount = u16;

/// `(row, col)`, row 0 being the top row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a `rows` by `cols` grid.
pub const fn area(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

/// Orthogonal step from one cell to an adjacent one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The cell one step away from `(row, col)`, `None` when it falls off a grid of `size`.
    pub fn step(self, (row, col): Coord2, size: Coord2) -> Option<Coord2> {
        let (row, col) = match self {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row.checked_add(1)?, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col.checked_add(1)?),
        };
        (row < size.0 && col < size.1).then_some((row, col))
    }
}

/// Adjacent cells of `center` in [`Direction::ALL`] order, skipping those off the grid.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord2,
    directions: core::slice::Iter<'static, Direction>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            directions: Direction::ALL.iter(),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (center, size) = (self.center, self.size);
        self.directions
            .find_map(|direction| direction.step(center, size))
    }
}
