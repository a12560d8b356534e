use crate::algorithms::best_first::{self, Ranking};
use crate::algorithms::common::{SearchAlgorithm, SearchRecord, SearchResult};
use crate::algorithms::heuristic::{Heuristic, MANHATTAN_SCALE};
use crate::algorithms::AlgorithmKind;
use crate::error::CoreResult;
use crate::grid::Grid;

/// Greedy best-first search: ranked by the heuristic alone, so it heads
/// straight for the end and may return a costlier path than Dijkstra.
#[derive(Debug)]
pub struct GreedyBestFirst {
    heuristic: Heuristic,
    record: SearchRecord,
}

impl GreedyBestFirst {
    pub fn new(heuristic: Heuristic) -> Self {
        GreedyBestFirst {
            heuristic,
            record: SearchRecord::new(),
        }
    }
}

impl Default for GreedyBestFirst {
    fn default() -> Self {
        GreedyBestFirst::new(Heuristic::default())
    }
}

impl SearchAlgorithm for GreedyBestFirst {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Greedy
    }

    fn record(&self) -> &SearchRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut SearchRecord {
        &mut self.record
    }

    fn search(&self, grid: &Grid) -> CoreResult<SearchResult> {
        let (_, end) = grid.get_start_and_end_node_coords();
        let estimates = self.heuristic.table(grid, end, MANHATTAN_SCALE);
        best_first::search(grid, Ranking::Heuristic(&estimates))
    }
}
