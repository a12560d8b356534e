use crate::algorithms::best_first::{self, Ranking};
use crate::algorithms::common::{SearchAlgorithm, SearchRecord, SearchResult};
use crate::algorithms::AlgorithmKind;
use crate::error::CoreResult;
use crate::grid::Grid;

/// Uniform-cost search keyed on accumulated weight. The cost of a step is
/// the weight of the node being entered.
#[derive(Debug, Default)]
pub struct Dijkstra {
    record: SearchRecord,
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra::default()
    }
}

impl SearchAlgorithm for Dijkstra {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dijkstra
    }

    fn record(&self) -> &SearchRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut SearchRecord {
        &mut self.record
    }

    fn search(&self, grid: &Grid) -> CoreResult<SearchResult> {
        best_first::search(grid, Ranking::Cost)
    }
}
