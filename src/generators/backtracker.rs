//! Randomized depth-first carving with an explicit backtracking stack.
//!
//! The cursor starts in the top left cell. Each step it either knocks down the
//! wall to a random unvisited neighbor and moves there, or, when every
//! neighbor is taken, pops back to the cell it came from. Because a wall is
//! only ever carved towards an unvisited cell, the passages form a spanning
//! tree: `width * height - 1` walls removed, no loops.

use log::{debug, trace};
use rand::Rng;

use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Direction, Position};

pub const START: Position = (0, 0);

pub struct RecursiveBacktracker<'g, R: Rng> {
    grid: &'g mut WallGrid,
    rng: R,
    current_cell: Position,
    stack: Vec<Position>,
    visits: usize,
    backtracks: usize,
    pub done: bool,
}

impl<'g, R: Rng> RecursiveBacktracker<'g, R> {
    pub fn new(grid: &'g mut WallGrid, rng: R) -> Self {
        let capacity = grid.dims().area();
        Self {
            grid,
            rng,
            current_cell: START,
            stack: Vec::with_capacity(capacity),
            visits: 0,
            backtracks: 0,
            done: false,
        }
    }

    pub fn current_cell(&self) -> Position {
        self.current_cell
    }

    /// Cells the cursor can still return to, oldest first.
    pub fn stack(&self) -> &[Position] {
        &self.stack
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    pub fn grid(&self) -> &WallGrid {
        &*self.grid
    }
}

impl<'g, R: Rng> Generator for RecursiveBacktracker<'g, R> {
    fn step_generation(&mut self) {
        if self.done {
            return;
        }

        let current = self.current_cell;
        if !self.grid.is_visited(current) {
            self.grid.mark_visited(current);
            self.visits += 1;
        }

        let available: &[Direction] = &self.grid.available_directions(current);
        if !available.is_empty() {
            let direction = available[self.rng.gen_range(0, available.len())];
            let next = self.grid.carve(current, direction);
            trace!("carving {:?} from {:?} to {:?}", direction, current, next);

            self.stack.push(current);
            self.current_cell = next;
        } else if let Some(previous) = self.stack.pop() {
            trace!("backtracking from {:?} to {:?}", current, previous);
            self.current_cell = previous;
            self.backtracks += 1;
        } else {
            self.done = true;
            debug!(
                "maze finished after {} visits and {} backtracks",
                self.visits, self.backtracks
            );
        }
    }

    fn generate_maze(&mut self) {
        while !self.done {
            self.step_generation();
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Carves `grid` in place until every cell has been visited.
pub fn generate<R: Rng + ?Sized>(grid: &mut WallGrid, rng: &mut R) {
    RecursiveBacktracker::new(grid, rng).generate_maze();
}
