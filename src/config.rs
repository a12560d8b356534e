use crate::algorithms::{AlgorithmKind, Heuristic};
use crate::maze::{MazeKind, MazeOptions, Orientation};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    #[arg(long, default_value_t = 20)]
    pub cols: usize,

    #[arg(long, value_enum, default_value_t = AlgorithmKind::AStar)]
    pub algorithm: AlgorithmKind,

    /// Heuristic used by A* and greedy best-first
    #[arg(long, value_enum, default_value_t = Heuristic::Manhattan)]
    pub heuristic: Heuristic,

    /// Generate a maze before searching
    #[arg(long, value_enum)]
    pub maze: Option<MazeKind>,

    /// Per-cell probability for the random mazes
    #[arg(long, default_value_t = 0.3)]
    pub maze_chance: f64,

    /// Orientation bias for recursive division
    #[arg(long, value_enum)]
    pub skew: Option<Orientation>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 30)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Run every algorithm on the same grid and print a comparison
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn maze_options(&self) -> MazeOptions {
        MazeOptions {
            chance: self.maze_chance,
            skew: self.skew,
            seed: self.seed,
        }
    }

    pub fn animate(&self) -> bool {
        !self.no_visualization && !self.quiet
    }
}
