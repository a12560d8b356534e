//! Search algorithms over a [`Grid`](crate::grid::Grid).
//!
//! Every variant implements [`SearchAlgorithm`]: `run` once against the grid,
//! then step the checked and path reveal pointers to animate the result.
//! [`create`] maps an [`AlgorithmKind`] to a boxed instance.

pub mod a_star;
pub(crate) mod best_first;
pub mod bfs;
pub mod bidirectional;
pub mod common;
pub mod dfs;
pub mod dijkstra;
pub mod greedy;
pub mod heuristic;

pub use a_star::AStar;
pub use bfs::BreadthFirst;
pub use bidirectional::BidirectionalBfs;
pub use common::{
    PathStatus, SearchAlgorithm, SearchOutcome, SearchRecord, SearchResult, SearchState,
};
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use greedy::GreedyBestFirst;
pub use heuristic::{Heuristic, MANHATTAN_SCALE};

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AlgorithmKind {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
    Greedy,
    Bidirectional,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Dfs,
        AlgorithmKind::Bfs,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::AStar,
        AlgorithmKind::Greedy,
        AlgorithmKind::Bidirectional,
    ];

    /// Whether the algorithm looks at weights and a heuristic.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, AlgorithmKind::AStar | AlgorithmKind::Greedy)
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Dfs => "Depth-First Search",
            AlgorithmKind::Bfs => "Breadth-First Search",
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::AStar => "A*",
            AlgorithmKind::Greedy => "Greedy Best-First",
            AlgorithmKind::Bidirectional => "Bidirectional BFS",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds the algorithm for `kind`. `heuristic` only matters for A* and
/// greedy best-first.
pub fn create(kind: AlgorithmKind, heuristic: Heuristic) -> Box<dyn SearchAlgorithm> {
    match kind {
        AlgorithmKind::Dfs => Box::new(DepthFirst::new()),
        AlgorithmKind::Bfs => Box::new(BreadthFirst::new()),
        AlgorithmKind::Dijkstra => Box::new(Dijkstra::new()),
        AlgorithmKind::AStar => Box::new(AStar::new(heuristic)),
        AlgorithmKind::Greedy => Box::new(GreedyBestFirst::new(heuristic)),
        AlgorithmKind::Bidirectional => Box::new(BidirectionalBfs::new()),
    }
}
