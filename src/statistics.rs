use crate::algorithms::{AlgorithmKind, SearchAlgorithm};
use crate::grid::{Grid, Position, DEFAULT_WEIGHT};
use pathfinding::prelude::{bfs, dijkstra};
use std::fmt;
use std::time::Duration;

/// Cheapest start-to-end weight on `grid`, computed independently of this
/// crate's algorithms.
pub fn optimal_path_weight(grid: &Grid) -> Option<u64> {
    let (start, end) = grid.get_start_and_end_node_coords();
    dijkstra(
        &start,
        |pos: &Position| {
            grid.get_valid_adjacent_nodes(*pos)
                .iter()
                .map(|next| {
                    let weight = grid.get_weight_at_node(*next).unwrap_or(DEFAULT_WEIGHT);
                    (*next, u64::from(weight))
                })
                .collect::<Vec<_>>()
        },
        |pos| *pos == end,
    )
    .map(|(_, cost)| cost)
}

/// Fewest nodes on any start-to-end path, ignoring weights.
pub fn shortest_path_length(grid: &Grid) -> Option<usize> {
    let (start, end) = grid.get_start_and_end_node_coords();
    bfs(
        &start,
        |pos: &Position| grid.get_valid_adjacent_nodes(*pos).to_vec(),
        |pos| *pos == end,
    )
    .map(|path| path.len())
}

#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub algorithm: AlgorithmKind,
    pub checked_nodes: usize,
    pub path_length: usize,
    pub path_weight: Option<u64>,
    pub optimal_weight: Option<u64>,
    /// Path weight over the optimum; 1.0 is optimal, 0.0 means no path.
    pub route_efficiency: f64,
    /// Time spent inside `run`.
    pub elapsed: Duration,
}

impl RunStatistics {
    /// Collects statistics for a completed run of `algorithm` on `grid`.
    pub fn collect(algorithm: &dyn SearchAlgorithm, grid: &Grid, elapsed: Duration) -> Self {
        let path = algorithm.get_path_trace();
        let path_weight = (!path.is_empty()).then(|| grid.path_weight(path));
        let optimal_weight = optimal_path_weight(grid);
        let mut stats = RunStatistics {
            algorithm: algorithm.kind(),
            checked_nodes: algorithm.get_checked_trace().len(),
            path_length: path.len(),
            path_weight,
            optimal_weight,
            route_efficiency: 0.0,
            elapsed,
        };
        stats.calculate_efficiency();
        stats
    }

    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match (self.path_weight, self.optimal_weight) {
            (Some(weight), Some(optimal)) if optimal > 0 => weight as f64 / optimal as f64,
            _ => 0.0,
        };
    }

    pub fn is_optimal(&self) -> bool {
        self.path_weight.is_some() && self.path_weight == self.optimal_weight
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Statistics:", self.algorithm)?;
        writeln!(f, "Checked nodes: {}", self.checked_nodes)?;
        writeln!(f, "Compute time: {:.2?}", self.elapsed)?;
        match self.path_weight {
            Some(weight) => {
                writeln!(f, "Path length: {} nodes", self.path_length)?;
                writeln!(f, "Path weight: {}", weight)?;
            }
            None => writeln!(f, "No path found")?,
        }
        if let Some(optimal) = self.optimal_weight {
            writeln!(f, "Optimal weight: {}", optimal)?;
        }
        if self.route_efficiency > 0.0 {
            writeln!(f, "Route efficiency: {:.3}", self.route_efficiency)?;
            if self.is_optimal() {
                writeln!(f, "✓ Optimal route")?;
            }
        }
        Ok(())
    }
}

/// Side-by-side summary of several runs on the same grid.
pub fn comparison_table(results: &[RunStatistics]) -> String {
    let mut table = format!(
        "{:<22} {:>8} {:>8} {:>8} {:>10} {:>12}\n",
        "Algorithm", "Checked", "Length", "Weight", "Efficiency", "Time"
    );
    table.push_str(&"-".repeat(73));
    table.push('\n');
    for stats in results {
        let weight = stats
            .path_weight
            .map_or_else(|| "-".to_string(), |weight| weight.to_string());
        table.push_str(&format!(
            "{:<22} {:>8} {:>8} {:>8} {:>10.3} {:>12}\n",
            stats.algorithm.name(),
            stats.checked_nodes,
            stats.path_length,
            weight,
            stats.route_efficiency,
            format!("{:.2?}", stats.elapsed)
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{create, Heuristic};

    #[test]
    fn test_reference_optimum_on_weighted_grid() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_user_weight(Position::new(0, 1), 10).unwrap();
        grid.set_user_weight(Position::new(1, 0), 10).unwrap();
        assert_eq!(optimal_path_weight(&grid), Some(13));
        assert_eq!(shortest_path_length(&grid), Some(5));
    }

    #[test]
    fn test_unreachable_end_has_no_optimum() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_wall(Position::new(0, 1), true).unwrap();
        grid.set_wall(Position::new(1, 0), true).unwrap();
        assert_eq!(optimal_path_weight(&grid), None);
        assert_eq!(shortest_path_length(&grid), None);
    }

    #[test]
    fn test_collect_marks_dijkstra_optimal() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_user_weight(Position::new(2, 2), 30).unwrap();
        let mut algorithm = create(AlgorithmKind::Dijkstra, Heuristic::Manhattan);
        algorithm.run(&grid).unwrap();
        let stats = RunStatistics::collect(algorithm.as_ref(), &grid, Duration::ZERO);
        assert!(stats.is_optimal());
        assert!((stats.route_efficiency - 1.0).abs() < f64::EPSILON);
        assert!(stats.to_string().contains("Optimal route"));

        let table = comparison_table(&[stats]);
        assert!(table.contains("Dijkstra"));
    }
}
