//! Perfect maze generation by randomized depth-first carving, rendered to a
//! black and white bitmap.
//!
//! ```no_run
//! use maze_carver::{create_maze, encoder, generate, render};
//!
//! # fn main() -> maze_carver::Result<()> {
//! let mut grid = create_maze(16, 16)?;
//! generate(&mut grid, &mut rand::thread_rng());
//! encoder::save(&render(&grid), "maze.png", 1)?;
//! # Ok(())
//! # }
//! ```

pub mod encoder;
pub mod error;
pub mod generators;
pub mod grids;
pub mod renderer;

pub use error::{Error, Result};
pub use generators::backtracker::{generate, RecursiveBacktracker};
pub use generators::Generator;
pub use grids::wall_grid::WallGrid;
pub use grids::{Direction, Position};
pub use renderer::{render, Pixel, PixelBuffer};

/// Fully walled, unvisited grid of `width x height` cells.
pub fn create_maze(width: usize, height: usize) -> Result<WallGrid> {
    WallGrid::with_dims(width, height)
}
