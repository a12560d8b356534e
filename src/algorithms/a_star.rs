use crate::algorithms::best_first::{self, Ranking};
use crate::algorithms::common::{SearchAlgorithm, SearchRecord, SearchResult};
use crate::algorithms::heuristic::{Heuristic, MANHATTAN_SCALE};
use crate::algorithms::AlgorithmKind;
use crate::error::CoreResult;
use crate::grid::Grid;

/// A* search: Dijkstra's relaxation ranked by `g + h`.
#[derive(Debug)]
pub struct AStar {
    heuristic: Heuristic,
    manhattan_scale: u64,
    record: SearchRecord,
}

impl AStar {
    /// Creates a new A* instance using `heuristic` with the default
    /// Manhattan scale.
    pub fn new(heuristic: Heuristic) -> Self {
        AStar {
            heuristic,
            manhattan_scale: MANHATTAN_SCALE,
            record: SearchRecord::new(),
        }
    }

    /// Overrides the Manhattan multiplier. A scale of 1 keeps the estimate
    /// admissible on grids whose weights are all at least 1.
    pub fn with_manhattan_scale(mut self, scale: u64) -> Self {
        self.manhattan_scale = scale;
        self
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Default for AStar {
    fn default() -> Self {
        AStar::new(Heuristic::default())
    }
}

impl SearchAlgorithm for AStar {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::AStar
    }

    fn record(&self) -> &SearchRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut SearchRecord {
        &mut self.record
    }

    /// Finds a path from the grid's start to its end.
    ///
    /// The heuristic is evaluated once for every cell before the search
    /// starts.
    fn search(&self, grid: &Grid) -> CoreResult<SearchResult> {
        let (_, end) = grid.get_start_and_end_node_coords();
        let estimates = self.heuristic.table(grid, end, self.manhattan_scale);
        best_first::search(grid, Ranking::CostAndHeuristic(&estimates))
    }
}
