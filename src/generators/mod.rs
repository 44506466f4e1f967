pub mod backtracker;

pub trait Generator {
    /// Advance the generation by a single transition.
    fn step_generation(&mut self);
    /// Run transitions until the maze is finished.
    fn generate_maze(&mut self);
    fn is_done(&self) -> bool;
}

