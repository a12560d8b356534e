//! Priority-queue search shared by Dijkstra, A* and greedy best-first.
//!
//! The three differ only in how a queued node is ranked; relaxation,
//! decrease-key and path reconstruction are identical.

use crate::algorithms::common::{arena_index, reconstruct_path, SearchResult};
use crate::containers::{BoundedStack, PriorityQueue};
use crate::error::CoreResult;
use crate::grid::{Grid, DEFAULT_WEIGHT};

/// How a node's priority is derived from its path cost `g` and the
/// precomputed heuristic table `h`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Ranking<'a> {
    /// `g`
    Cost,
    /// `g + h`
    CostAndHeuristic(&'a [u64]),
    /// `h`
    Heuristic(&'a [u64]),
}

impl Ranking<'_> {
    fn priority(&self, cost: u64, index: usize) -> u64 {
        match self {
            Ranking::Cost => cost,
            Ranking::CostAndHeuristic(h) => cost.saturating_add(h[index]),
            Ranking::Heuristic(h) => h[index],
        }
    }
}

pub(crate) fn search(grid: &Grid, ranking: Ranking<'_>) -> CoreResult<SearchResult> {
    let (start, end) = grid.get_start_and_end_node_coords();
    let start = arena_index(grid, start)?;
    let end = arena_index(grid, end)?;

    let cells = grid.len();
    let mut parents: Vec<Option<usize>> = vec![None; cells];
    let mut cost = vec![u64::MAX; cells];
    let mut expanded = vec![false; cells];
    let mut checked = BoundedStack::with_capacity(cells);
    let mut frontier = PriorityQueue::new();

    cost[start] = 0;
    frontier.enqueue(start, ranking.priority(0, start));

    while let Some((current, _)) = frontier.dequeue() {
        if expanded[current] {
            continue;
        }
        expanded[current] = true;
        let current_pos = grid.position_of(current);
        checked.push(current_pos)?;

        if current == end {
            let path = reconstruct_path(grid, &parents, end)?;
            return Ok(SearchResult::found(checked.compact(), path));
        }

        for &next_pos in grid.get_valid_adjacent_nodes(current_pos) {
            let next = arena_index(grid, next_pos)?;
            if expanded[next] {
                continue;
            }
            let weight = grid.get_weight_at_node(next_pos).unwrap_or(DEFAULT_WEIGHT);
            let tentative = cost[current].saturating_add(u64::from(weight));

            if !frontier.exists(&next) {
                cost[next] = tentative;
                parents[next] = Some(current);
                frontier.enqueue(next, ranking.priority(tentative, next));
            } else if tentative < cost[next] {
                cost[next] = tentative;
                parents[next] = Some(current);
                frontier.replace(next, ranking.priority(tentative, next));
            }
        }
    }

    Ok(SearchResult::no_path(checked.compact()))
}
