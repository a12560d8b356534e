use crate::algorithms::common::{arena_index, SearchAlgorithm, SearchRecord, SearchResult};
use crate::algorithms::AlgorithmKind;
use crate::containers::BoundedStack;
use crate::error::CoreResult;
use crate::grid::Grid;

/// Depth-first search with explicit backtracking.
///
/// The path is whatever the live stack holds when the end is reached, which
/// is a valid route but rarely the shortest one.
#[derive(Debug, Default)]
pub struct DepthFirst {
    record: SearchRecord,
}

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst::default()
    }
}

impl SearchAlgorithm for DepthFirst {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dfs
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
        let mut seen = vec![false; cells];
        let mut stack = BoundedStack::with_capacity(cells);
        let mut checked = BoundedStack::with_capacity(cells);

        seen[arena_index(grid, start)?] = true;
        stack.push(start)?;
        checked.push(start)?;

        while let Some(top) = stack.peek() {
            if top == end {
                return Ok(SearchResult::found(checked.compact(), stack.compact()));
            }

            let unchecked = grid
                .get_valid_adjacent_nodes(top)
                .iter()
                .copied()
                .find(|next| grid.index_of(*next).is_some_and(|index| !seen[index]));

            match unchecked {
                Some(next) => {
                    seen[arena_index(grid, next)?] = true;
                    stack.push(next)?;
                    checked.push(next)?;
                }
                // Dead end: backtrack.
                None => {
                    stack.pop()?;
                }
            }
        }

        Ok(SearchResult::no_path(checked.compact()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn test_path_is_live_stack_not_shortest() {
        let grid = Grid::new(3, 3).unwrap();
        let mut dfs = DepthFirst::new();
        dfs.run(&grid).unwrap();
        // Snakes through every cell before reaching the corner.
        let expected: Vec<Position> = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
        ]
        .into_iter()
        .map(|(row, col)| Position::new(row, col))
        .collect();
        assert_eq!(dfs.get_path_trace(), expected.as_slice());
        assert_eq!(dfs.get_checked_trace(), expected.as_slice());
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // Row 0 is a dead-end corridor; the only way down is column 0.
        let mut grid = Grid::new(3, 4).unwrap();
        for col in 1..4 {
            grid.set_wall(Position::new(1, col), true).unwrap();
        }
        let mut dfs = DepthFirst::new();
        let outcome = dfs.run(&grid).unwrap();
        assert!(outcome.is_found());

        let path = dfs.get_path_trace();
        assert_eq!(path.first(), Some(&Position::new(0, 0)));
        assert_eq!(path.last(), Some(&Position::new(2, 3)));
        assert!(!path.contains(&Position::new(0, 3)));
        assert!(dfs.get_checked_trace().contains(&Position::new(0, 3)));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(&pair[1]), 1);
        }
    }
}
