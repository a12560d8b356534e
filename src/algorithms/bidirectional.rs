use crate::algorithms::common::{
    arena_index, trace_back, SearchAlgorithm, SearchRecord, SearchResult,
};
use crate::algorithms::AlgorithmKind;
use crate::containers::{BoundedStack, Queue};
use crate::error::CoreResult;
use crate::grid::{Grid, Position};

/// One half of a bidirectional search.
struct Frontier {
    queue: Queue<usize>,
    seen: Vec<bool>,
    checked: Vec<bool>,
    parents: Vec<Option<usize>>,
}

impl Frontier {
    fn new(cells: usize, origin: usize) -> Self {
        let mut frontier = Frontier {
            queue: Queue::new(),
            seen: vec![false; cells],
            checked: vec![false; cells],
            parents: vec![None; cells],
        };
        frontier.seen[origin] = true;
        frontier.queue.enqueue(origin);
        frontier
    }

    /// Checks the next queued node and queues its undiscovered neighbours.
    /// Returns `None` once this side has run dry.
    fn expand(&mut self, grid: &Grid) -> CoreResult<Option<usize>> {
        let Some(current) = self.queue.dequeue() else {
            return Ok(None);
        };
        self.checked[current] = true;

        for &next_pos in grid.get_valid_adjacent_nodes(grid.position_of(current)) {
            let next = arena_index(grid, next_pos)?;
            if !self.seen[next] {
                self.seen[next] = true;
                self.parents[next] = Some(current);
                self.queue.enqueue(next);
            }
        }
        Ok(Some(current))
    }
}

/// Two breadth-first searches, one from each endpoint, advanced in lockstep
/// until they check a common cell.
#[derive(Debug, Default)]
pub struct BidirectionalBfs {
    record: SearchRecord,
}

impl BidirectionalBfs {
    pub fn new() -> Self {
        BidirectionalBfs::default()
    }
}

impl SearchAlgorithm for BidirectionalBfs {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bidirectional
    }

    fn record(&self) -> &SearchRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut SearchRecord {
        &mut self.record
    }

    fn search(&self, grid: &Grid) -> CoreResult<SearchResult> {
        let (start, end) = grid.get_start_and_end_node_coords();
        let cells = grid.len();
        let mut forward = Frontier::new(cells, arena_index(grid, start)?);
        let mut backward = Frontier::new(cells, arena_index(grid, end)?);
        // One trace for both sides; a cell checked by both appears once.
        let mut checked = BoundedStack::with_capacity(cells);

        loop {
            let from_start = forward.expand(grid)?;
            if let Some(index) = from_start {
                if !backward.checked[index] {
                    checked.push(grid.position_of(index))?;
                }
            }
            let from_end = backward.expand(grid)?;
            if let Some(index) = from_end {
                if !forward.checked[index] {
                    checked.push(grid.position_of(index))?;
                }
            }

            if from_start.is_none() && from_end.is_none() {
                return Ok(SearchResult::no_path(checked.compact()));
            }

            // Only cells checked this round can be new to the intersection.
            let meeting = [from_start, from_end]
                .into_iter()
                .flatten()
                .find(|&index| forward.checked[index] && backward.checked[index]);

            if let Some(meeting) = meeting {
                let path = join_halves(grid, &forward, &backward, meeting)?;
                return Ok(SearchResult::found(checked.compact(), path));
            }
        }
    }
}

/// start → meeting from the forward parents, then meeting → end from the
/// backward parents.
fn join_halves(
    grid: &Grid,
    forward: &Frontier,
    backward: &Frontier,
    meeting: usize,
) -> CoreResult<Vec<Position>> {
    let to_meeting = trace_back(grid, &forward.parents, meeting)?.reverse();
    let to_end = match backward.parents[meeting] {
        Some(next) => trace_back(grid, &backward.parents, next)?.compact(),
        None => Vec::new(),
    };
    Ok(BoundedStack::merge(&to_meeting, &to_end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::BreadthFirst;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_meets_in_the_middle_of_a_corridor() {
        let grid = Grid::new(1, 7).unwrap();
        let mut search = BidirectionalBfs::new();
        let outcome = search.run(&grid).unwrap();
        assert!(outcome.is_found());

        let path = search.get_path_trace();
        let expected: Vec<Position> = (0..7).map(|col| Position::new(0, col)).collect();
        assert_eq!(path, expected.as_slice());
        // The meeting cell is checked by both sides but recorded once.
        assert_eq!(search.get_checked_trace().len(), 7);
        assert_eq!(search.get_checked_trace().last(), Some(&Position::new(0, 3)));
    }

    #[test]
    fn test_path_is_contiguous_through_both_gaps() {
        let mut grid = Grid::new(6, 8).unwrap();
        for row in 0..5 {
            grid.set_wall(Position::new(row, 3), true).unwrap();
        }
        for row in 1..6 {
            grid.set_wall(Position::new(row, 6), true).unwrap();
        }

        let mut search = BidirectionalBfs::new();
        let mut bfs = BreadthFirst::new();
        search.run(&grid).unwrap();
        bfs.run(&grid).unwrap();

        let path = search.get_path_trace();
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(5, 7)));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(&pair[1]), 1);
        }
        assert!(path.contains(&Position::new(5, 3)));
        assert!(path.contains(&Position::new(0, 6)));
        assert!(path.len() >= bfs.get_path_trace().len());
    }

    #[test]
    fn test_checked_trace_has_no_duplicates() {
        let grid = Grid::new(7, 7).unwrap();
        let mut search = BidirectionalBfs::new();
        search.run(&grid).unwrap();
        let checked = search.get_checked_trace();
        let unique: FxHashSet<_> = checked.iter().collect();
        assert_eq!(unique.len(), checked.len());
    }

    #[test]
    fn test_fails_when_both_sides_run_dry() {
        let mut grid = Grid::new(4, 4).unwrap();
        for col in 0..4 {
            grid.set_wall(Position::new(2, col), true).unwrap();
        }
        let mut search = BidirectionalBfs::new();
        let outcome = search.run(&grid).unwrap();
        assert!(!outcome.is_found());
        assert!(search.get_path_trace().is_empty());
        assert_eq!(search.get_checked_trace().len(), 12);
    }
}
