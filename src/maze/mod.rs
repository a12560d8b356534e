//! Maze generators that fill a [`Grid`] with walls or weights.
//!
//! A generator mutates the grid in one synchronous `run` and records every
//! mutation in a [`Trace`] so the renderer can replay the build step by step,
//! the same way search results are replayed.

pub mod random;
pub mod recursive_division;

pub use random::{Fill, RandomMaze};
pub use recursive_division::{RecursiveDivision, Region};

use crate::error::CoreResult;
use crate::grid::{Grid, Position};
use crate::trace::Trace;
use clap::ValueEnum;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// One recorded grid mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeStep {
    Wall(Position),
    Weight(Position, u32),
}

impl MazeStep {
    pub fn position(&self) -> Position {
        match *self {
            MazeStep::Wall(pos) | MazeStep::Weight(pos, _) => pos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum MazeKind {
    RandomMarked,
    RandomWeighted,
    RecursiveDivision,
}

impl MazeKind {
    pub const ALL: [MazeKind; 3] = [
        MazeKind::RandomMarked,
        MazeKind::RandomWeighted,
        MazeKind::RecursiveDivision,
    ];
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeKind::RandomMarked => write!(f, "Random Marked"),
            MazeKind::RandomWeighted => write!(f, "Random Weighted"),
            MazeKind::RecursiveDivision => write!(f, "Recursive Division"),
        }
    }
}

/// Direction of a recursive-division wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Orientation {
    /// A wall along a row.
    Horizontal,
    /// A wall along a column.
    Vertical,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeOptions {
    /// Per-cell probability used by the random generators.
    pub chance: f64,
    /// Orientation bias for recursive division.
    pub skew: Option<Orientation>,
    /// Fixed seed for reproducible mazes; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for MazeOptions {
    fn default() -> Self {
        MazeOptions {
            chance: 0.3,
            skew: None,
            seed: None,
        }
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Shared contract of the maze generators.
pub trait MazeGenerator {
    fn kind(&self) -> MazeKind;

    fn trace(&self) -> &Trace<MazeStep>;

    fn trace_mut(&mut self) -> &mut Trace<MazeStep>;

    /// Writes the maze into `grid`, recording each mutation.
    fn generate(&mut self, grid: &mut Grid) -> CoreResult<()>;

    /// Clears walls and generated weights (user weights survive), then
    /// generates a fresh maze. Returns the number of recorded steps.
    fn run(&mut self, grid: &mut Grid) -> CoreResult<usize> {
        self.trace_mut().clear();
        grid.clear_walls();
        grid.reset_non_user_weights();
        self.generate(grid)?;
        let steps = self.trace().len();
        debug!("{} maze recorded {} steps", self.kind(), steps);
        Ok(steps)
    }

    fn reset_pointer(&mut self) {
        self.trace_mut().reset_pointer();
    }

    fn update_pointer(&mut self) -> bool {
        self.trace_mut().update_pointer()
    }

    fn get_trace(&self) -> &[MazeStep] {
        self.trace().items()
    }
}

pub fn create(kind: MazeKind, options: MazeOptions) -> Box<dyn MazeGenerator> {
    match kind {
        MazeKind::RandomMarked => Box::new(RandomMaze::new(Fill::Marked, options)),
        MazeKind::RandomWeighted => Box::new(RandomMaze::new(Fill::Weighted, options)),
        MazeKind::RecursiveDivision => Box::new(RecursiveDivision::new(options)),
    }
}
