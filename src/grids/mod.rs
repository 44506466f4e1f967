pub mod cell;
pub mod wall_grid;

pub const DEFAULT_DIMS: (usize, usize) = (16, 16);

/// `(x, y)` with `x` counting columns and `y` counting rows from the top left.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.0 < self.width && pos.1 < self.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Bottom = 1,
    Left = 2,
    Top = 3,
}

impl Direction {
    /// enumeration order used when collecting available directions
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::Top,
    ];

    /// Unit offset of this direction, `y` growing downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Top => (0, -1),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Top => Direction::Bottom,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Right,
            1 => Direction::Bottom,
            2 => Direction::Left,
            3 => Direction::Top,
            _ => unreachable!(),
        }
    }
}

/// Coordinate of the 4-neighbor of `pos` in `direction`.
///
/// No bounds check happens here. Stepping left of column 0 or above row 0 wraps
/// around to `usize::MAX`, which every bounds check then rejects.
#[inline]
pub fn neighbor_position(pos: Position, direction: Direction) -> Position {
    let (dx, dy) = direction.offset();
    (
        (pos.0 as isize).wrapping_add(dx) as usize,
        (pos.1 as isize).wrapping_add(dy) as usize,
    )
}
