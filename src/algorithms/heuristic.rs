use crate::grid::{Grid, Position};
use clap::ValueEnum;
use std::fmt;

/// Default multiplier applied to the Manhattan estimate.
///
/// Scaling by 3 makes A* head for the end more eagerly than the true unit
/// edge costs justify, so with it A* is no longer guaranteed optimal.
pub const MANHATTAN_SCALE: u64 = 3;

/// Distance estimates used by A* and greedy best-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Heuristic {
    /// `|Δrow| + |Δcol|`, multiplied by a scale.
    #[default]
    Manhattan,
    /// `(|Δrow| + 1)² + (|Δcol| + 1)²`; the offset keeps it non-zero at the end.
    Euclidean,
}

impl Heuristic {
    pub fn estimate(self, from: Position, to: Position, manhattan_scale: u64) -> u64 {
        let d_row = from.row.abs_diff(to.row) as u64;
        let d_col = from.col.abs_diff(to.col) as u64;
        match self {
            Heuristic::Manhattan => (d_row + d_col) * manhattan_scale,
            Heuristic::Euclidean => (d_row + 1).pow(2) + (d_col + 1).pow(2),
        }
    }

    /// Estimate from every cell to `goal`, indexed like the grid arena.
    pub fn table(self, grid: &Grid, goal: Position, manhattan_scale: u64) -> Vec<u64> {
        (0..grid.len())
            .map(|index| self.estimate(grid.position_of(index), goal, manhattan_scale))
            .collect()
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Euclidean => write!(f, "euclidean"),
        }
    }
}
