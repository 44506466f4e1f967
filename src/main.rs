use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use maze_carver::grids::DEFAULT_DIMS;
use maze_carver::{create_maze, encoder, generate, render};

/// Generates a perfect maze and writes it out as an image
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.0)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.1)]
    height: usize,

    /// Output image, format taken from the extension (png, bmp)
    #[arg(short, long, default_value = "maze.png")]
    output: PathBuf,

    /// Random seed, a fresh maze every run when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Side length in image pixels of every maze pixel
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = create_maze(args.width, args.height)?;

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    generate(&mut grid, &mut rng);

    let buffer = render(&grid);
    encoder::save(&buffer, &args.output, args.scale)
        .with_context(|| format!("could not write maze to {}", args.output.display()))?;

    Ok(())
}
