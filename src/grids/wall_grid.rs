use log::debug;

use crate::error::{Error, Result};
use crate::grids::cell::{
    get_bit, set_bit, unset_bit, WalledCell, BOTTOM_WALL, FRESH_CELL, RIGHT_WALL, VISITED,
};
use crate::grids::{neighbor_position, Dimensions, Direction, Position};

/// Rectangular maze where every cell owns the wall to its right and the wall
/// below it. The wall shared with the left or upper neighbor lives on that
/// neighbor, so each interior wall is stored exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,
    cells: Vec<WalledCell>,
}

impl WallGrid {
    /// Grid with every wall standing and nothing visited.
    pub fn with_dims(width: usize, height: usize) -> Result<Self> {
        let len = match width.checked_mul(height) {
            Some(len) if len > 0 => len,
            _ => return Err(Error::InvalidDimensions { width, height }),
        };
        debug!("creating {}x{} wall grid", width, height);

        Ok(Self {
            dims: Dimensions { width, height },
            cells: vec![FRESH_CELL; len],
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    fn index_of(&self, pos: Position) -> usize {
        debug_assert!(self.dims.contains(pos), "cell {:?} is out of bounds", pos);
        (self.dims.width * pos.1) + pos.0
    }

    /// Raw flag bits of the cell at `pos`.
    #[inline]
    pub fn cell(&self, pos: Position) -> WalledCell {
        self.cells[self.index_of(pos)]
    }

    #[inline]
    fn update_cell<F>(&mut self, pos: Position, fun: F)
    where
        F: FnOnce(WalledCell) -> WalledCell,
    {
        let index = self.index_of(pos);
        self.cells[index] = fun(self.cells[index]);
    }

    #[inline]
    pub fn is_visited(&self, pos: Position) -> bool {
        get_bit(self.cell(pos), VISITED)
    }

    #[inline]
    pub fn has_right_wall(&self, pos: Position) -> bool {
        get_bit(self.cell(pos), RIGHT_WALL)
    }

    #[inline]
    pub fn has_bottom_wall(&self, pos: Position) -> bool {
        get_bit(self.cell(pos), BOTTOM_WALL)
    }

    pub fn mark_visited(&mut self, pos: Position) {
        self.update_cell(pos, |cell| set_bit(cell, VISITED));
    }

    /// Whether the cursor may move from `pos` towards `direction`: the
    /// neighbor must be inside the grid and not yet visited. Walls are not
    /// consulted, they are what carving produces.
    pub fn is_direction_passable(&self, pos: Position, direction: Direction) -> bool {
        let next = neighbor_position(pos, direction);
        self.dims.contains(next) && !self.is_visited(next)
    }

    /// Passable directions from `pos`, in `Direction::ALL` order.
    pub fn available_directions(&self, pos: Position) -> AvailableDirections {
        let mut available = AvailableDirections::default();
        for &direction in Direction::ALL.iter() {
            if self.is_direction_passable(pos, direction) {
                available.push(direction);
            }
        }
        available
    }

    /// Which cell owns the wall between `pos` and its neighbor in `direction`,
    /// and which bit on it.
    fn wall_owner(pos: Position, direction: Direction) -> (Position, u8) {
        match direction {
            Direction::Right => (pos, RIGHT_WALL),
            Direction::Bottom => (pos, BOTTOM_WALL),
            Direction::Left => (neighbor_position(pos, direction), RIGHT_WALL),
            Direction::Top => (neighbor_position(pos, direction), BOTTOM_WALL),
        }
    }

    /// Knocks down the wall between `pos` and its neighbor in `direction`,
    /// returning the neighbor.
    pub fn carve(&mut self, pos: Position, direction: Direction) -> Position {
        let next = neighbor_position(pos, direction);
        debug_assert!(
            self.dims.contains(next),
            "carving {:?} from {:?} leaves the grid",
            direction,
            pos
        );

        let (owner, bit) = Self::wall_owner(pos, direction);
        self.update_cell(owner, |cell| unset_bit(cell, bit));

        next
    }

    /// True iff the neighbor in `direction` exists and no wall separates it
    /// from `pos`.
    pub fn is_open(&self, pos: Position, direction: Direction) -> bool {
        if !self.dims.contains(neighbor_position(pos, direction)) {
            return false;
        }
        let (owner, bit) = Self::wall_owner(pos, direction);
        !get_bit(self.cell(owner), bit)
    }

    /// Number of walls removed between two cells of the grid.
    pub fn carved_passages(&self) -> usize {
        let mut count = 0;
        for y in 0..self.dims.height {
            for x in 0..self.dims.width {
                if self.is_open((x, y), Direction::Right) {
                    count += 1;
                }
                if self.is_open((x, y), Direction::Bottom) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn visited_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| get_bit(cell, VISITED))
            .count()
    }
}

/// Up to four directions collected without allocating.
#[derive(Debug, Clone, Copy)]
pub struct AvailableDirections {
    dirs: [Direction; 4],
    len: usize,
}

impl Default for AvailableDirections {
    fn default() -> Self {
        Self {
            dirs: Direction::ALL,
            len: 0,
        }
    }
}

impl AvailableDirections {
    fn push(&mut self, direction: Direction) {
        self.dirs[self.len] = direction;
        self.len += 1;
    }
}

impl std::ops::Deref for AvailableDirections {
    type Target = [Direction];

    fn deref(&self) -> &Self::Target {
        &self.dirs[..self.len]
    }
}
