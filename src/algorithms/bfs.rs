use crate::algorithms::common::{
    arena_index, reconstruct_path, SearchAlgorithm, SearchRecord, SearchResult,
};
use crate::algorithms::AlgorithmKind;
use crate::containers::{BoundedStack, Queue};
use crate::error::CoreResult;
use crate::grid::Grid;

/// Breadth-first search. Shortest by edge count; weights are ignored.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    record: SearchRecord,
}

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst::default()
    }
}

impl SearchAlgorithm for BreadthFirst {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bfs
    }

    fn record(&self) -> &SearchRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut SearchRecord {
        &mut self.record
    }

    fn search(&self, grid: &Grid) -> CoreResult<SearchResult> {
        let (start, end) = grid.get_start_and_end_node_coords();
        let start = arena_index(grid, start)?;
        let end = arena_index(grid, end)?;

        let cells = grid.len();
        let mut seen = vec![false; cells];
        let mut parents: Vec<Option<usize>> = vec![None; cells];
        let mut checked = BoundedStack::with_capacity(cells);
        let mut frontier = Queue::new();

        seen[start] = true;
        frontier.enqueue(start);

        while let Some(current) = frontier.dequeue() {
            let current_pos = grid.position_of(current);
            checked.push(current_pos)?;

            if current == end {
                let path = reconstruct_path(grid, &parents, end)?;
                return Ok(SearchResult::found(checked.compact(), path));
            }

            for &next_pos in grid.get_valid_adjacent_nodes(current_pos) {
                let next = arena_index(grid, next_pos)?;
                // Parent of first discovery only.
                if !seen[next] {
                    seen[next] = true;
                    parents[next] = Some(current);
                    frontier.enqueue(next);
                }
            }
        }

        Ok(SearchResult::no_path(checked.compact()))
    }
}
