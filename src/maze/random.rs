use crate::error::CoreResult;
use crate::grid::{Grid, Position};
use crate::maze::{seeded_rng, MazeGenerator, MazeKind, MazeOptions, MazeStep};
use crate::trace::Trace;
use rand::rngs::StdRng;
use rand::Rng;

pub const MIN_RANDOM_WEIGHT: u32 = 1;
pub const MAX_RANDOM_WEIGHT: u32 = 100;

/// What a selected cell receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Marked,
    Weighted,
}

/// Visits every cell once and, with probability `chance`, walls it or gives
/// it a random weight in `[1, 100]`. The start is never touched and walls
/// never land on the end.
pub struct RandomMaze {
    fill: Fill,
    chance: f64,
    rng: StdRng,
    trace: Trace<MazeStep>,
}

impl RandomMaze {
    pub fn new(fill: Fill, options: MazeOptions) -> Self {
        RandomMaze {
            fill,
            chance: options.chance.clamp(0.0, 1.0),
            rng: seeded_rng(options.seed),
            trace: Trace::new(),
        }
    }

    fn mutate(&mut self, grid: &mut Grid, pos: Position) -> CoreResult<()> {
        match self.fill {
            Fill::Marked => {
                if grid.set_wall(pos, true)? {
                    self.trace.push(MazeStep::Wall(pos));
                }
            }
            Fill::Weighted => {
                let weight = self.rng.gen_range(MIN_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT);
                if grid.set_weight_at_node(pos, weight, false)? {
                    self.trace.push(MazeStep::Weight(pos, weight));
                }
            }
        }
        Ok(())
    }
}

impl MazeGenerator for RandomMaze {
    fn kind(&self) -> MazeKind {
        match self.fill {
            Fill::Marked => MazeKind::RandomMarked,
            Fill::Weighted => MazeKind::RandomWeighted,
        }
    }

    fn trace(&self) -> &Trace<MazeStep> {
        &self.trace
    }

    fn trace_mut(&mut self) -> &mut Trace<MazeStep> {
        &mut self.trace
    }

    fn generate(&mut self, grid: &mut Grid) -> CoreResult<()> {
        let (start, end) = grid.get_start_and_end_node_coords();
        for index in 0..grid.len() {
            let pos = grid.position_of(index);
            if pos == start || (self.fill == Fill::Marked && pos == end) {
                continue;
            }
            if self.rng.gen_bool(self.chance) {
                self.mutate(grid, pos)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(chance: f64, seed: u64) -> MazeOptions {
        MazeOptions {
            chance,
            seed: Some(seed),
            ..MazeOptions::default()
        }
    }

    #[test]
    fn test_marked_never_touches_endpoints() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut maze = RandomMaze::new(Fill::Marked, options(1.0, 1));
        let steps = maze.run(&mut grid).unwrap();
        assert_eq!(steps, 62);
        assert_eq!(grid.wall_count(), 62);
        let (start, end) = grid.get_start_and_end_node_coords();
        assert!(!grid.is_wall(start));
        assert!(!grid.is_wall(end));
        assert!(maze
            .get_trace()
            .iter()
            .all(|step| matches!(step, MazeStep::Wall(_))));
    }

    #[test]
    fn test_weighted_assigns_weights_in_range() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set_user_weight(Position::new(3, 3), 7).unwrap();
        let mut maze = RandomMaze::new(Fill::Weighted, options(1.0, 9));
        maze.run(&mut grid).unwrap();

        // Start and the user-weighted cell are skipped.
        assert_eq!(maze.get_trace().len(), 98);
        for step in maze.get_trace() {
            let MazeStep::Weight(pos, weight) = *step else {
                panic!("unexpected step {step:?}");
            };
            assert!((MIN_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT).contains(&weight));
            assert_eq!(grid.get_weight_at_node(pos), Some(weight));
        }
        assert_eq!(grid.get_weight_at_node(Position::new(0, 0)), Some(0));
        assert_eq!(grid.get_weight_at_node(Position::new(3, 3)), Some(7));
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut first = Grid::new(15, 15).unwrap();
        let mut second = Grid::new(15, 15).unwrap();
        RandomMaze::new(Fill::Marked, options(0.4, 77))
            .run(&mut first)
            .unwrap();
        RandomMaze::new(Fill::Marked, options(0.4, 77))
            .run(&mut second)
            .unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }
}
