//! A grid plus the results currently being played back against it.
//!
//! Results are computed once and revealed one step per [`Simulation::tick`].
//! Anything that changes the grid (editing, resizing, a new maze, a new
//! search) first discards results that no longer match the topology.

use crate::algorithms::{self, AlgorithmKind, Heuristic, SearchAlgorithm, SearchOutcome};
use crate::error::CoreResult;
use crate::grid::{Grid, Position};
use crate::maze::{self, MazeGenerator, MazeKind, MazeOptions, MazeStep};
use crate::statistics::RunStatistics;
use log::info;
use std::time::{Duration, Instant};

/// What a single tick revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Maze(MazeStep),
    Checked(Position),
    Path(Position),
    /// Nothing left to reveal.
    Done,
}

pub struct Simulation {
    grid: Grid,
    heuristic: Heuristic,
    maze_options: MazeOptions,
    search: Option<Box<dyn SearchAlgorithm>>,
    search_time: Duration,
    maze: Option<Box<dyn MazeGenerator>>,
}

impl Simulation {
    pub fn new(rows: usize, cols: usize) -> CoreResult<Self> {
        Ok(Simulation {
            grid: Grid::new(rows, cols)?,
            heuristic: Heuristic::default(),
            maze_options: MazeOptions::default(),
            search: None,
            search_time: Duration::ZERO,
            maze: None,
        })
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_maze_options(mut self, options: MazeOptions) -> Self {
        self.maze_options = options;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutates the grid after dropping any result computed against the old
    /// layout.
    pub fn edit_grid<R>(&mut self, edit: impl FnOnce(&mut Grid) -> R) -> R {
        self.discard();
        edit(&mut self.grid)
    }

    /// Replaces the grid with a fresh one of the new size.
    pub fn resize(&mut self, rows: usize, cols: usize) -> CoreResult<()> {
        let grid = Grid::new(rows, cols)?;
        self.discard();
        self.grid = grid;
        info!("grid resized to {}x{}", rows, cols);
        Ok(())
    }

    pub fn reset_grid(&mut self) {
        self.discard();
        self.grid.reset();
    }

    /// Drops the current search and maze results.
    pub fn discard(&mut self) {
        self.search = None;
        self.maze = None;
    }

    pub fn search(&self) -> Option<&dyn SearchAlgorithm> {
        self.search.as_deref()
    }

    pub fn maze(&self) -> Option<&dyn MazeGenerator> {
        self.maze.as_deref()
    }

    /// Runs `kind` to completion on the current grid. The previous search
    /// result is dropped first; a finished maze build is kept so its trace
    /// can still be played back before the search.
    pub fn run_search(&mut self, kind: AlgorithmKind) -> CoreResult<SearchOutcome> {
        self.search = None;
        self.grid.rebuild_adjacency();
        info!("running {} on {}x{} grid", kind, self.grid.rows(), self.grid.cols());

        let mut algorithm = algorithms::create(kind, self.heuristic);
        let started = Instant::now();
        let outcome = algorithm.run(&self.grid)?;
        self.search_time = started.elapsed();
        self.search = Some(algorithm);
        Ok(outcome)
    }

    /// Builds a new maze into the grid. Returns the number of recorded steps.
    pub fn generate_maze(&mut self, kind: MazeKind) -> CoreResult<usize> {
        self.discard();
        info!("generating {} maze", kind);
        let mut generator = maze::create(kind, self.maze_options);
        let steps = generator.run(&mut self.grid)?;
        self.maze = Some(generator);
        Ok(steps)
    }

    /// Statistics for the current search result.
    pub fn statistics(&self) -> Option<RunStatistics> {
        self.search
            .as_deref()
            .map(|algorithm| RunStatistics::collect(algorithm, &self.grid, self.search_time))
    }

    /// Runs every algorithm on the current grid and collects statistics. The
    /// last one stays loaded for playback.
    pub fn run_all(&mut self) -> CoreResult<Vec<RunStatistics>> {
        let mut results = Vec::with_capacity(AlgorithmKind::ALL.len());
        for kind in AlgorithmKind::ALL {
            self.run_search(kind)?;
            if let Some(stats) = self.statistics() {
                results.push(stats);
            }
        }
        Ok(results)
    }

    /// Rewinds every reveal pointer.
    pub fn rewind(&mut self) {
        if let Some(generator) = self.maze.as_deref_mut() {
            generator.reset_pointer();
        }
        if let Some(algorithm) = self.search.as_deref_mut() {
            algorithm.reset_checked_pointer();
            algorithm.reset_path_pointer();
        }
    }

    /// Reveals the next step: the maze build first, then the checked trace,
    /// then the path.
    pub fn tick(&mut self) -> Frame {
        if let Some(generator) = self.maze.as_deref_mut() {
            if !generator.trace().is_fully_revealed() && generator.update_pointer() {
                if let Some(step) = generator.trace().current() {
                    return Frame::Maze(*step);
                }
            }
        }

        if let Some(algorithm) = self.search.as_deref_mut() {
            if !algorithm.record().checked().is_fully_revealed() && algorithm.update_checked_pointer()
            {
                if let Some(pos) = algorithm.record().checked().current() {
                    return Frame::Checked(*pos);
                }
            }
            if !algorithm.record().path().is_fully_revealed() && algorithm.update_path_pointer() {
                if let Some(pos) = algorithm.record().path().current() {
                    return Frame::Path(*pos);
                }
            }
        }

        Frame::Done
    }

    /// Current state as text. While a maze build is still replaying only its
    /// revealed steps are drawn; afterwards the search traces are overlaid.
    pub fn render(&self) -> CoreResult<String> {
        if let Some(generator) = self.maze.as_deref() {
            if !generator.trace().is_fully_revealed() {
                let mut preview = self.grid.clone();
                preview.clear_walls();
                preview.reset_non_user_weights();
                for step in generator.trace().revealed() {
                    match *step {
                        MazeStep::Wall(pos) => preview.set_wall(pos, true)?,
                        MazeStep::Weight(pos, weight) => {
                            preview.set_weight_at_node(pos, weight, false)?
                        }
                    };
                }
                return Ok(preview.render(&[], &[]));
            }
        }

        Ok(match self.search.as_deref() {
            Some(algorithm) => self.grid.render(
                algorithm.record().checked().revealed(),
                algorithm.record().path().revealed(),
            ),
            None => self.grid.render(&[], &[]),
        })
    }
}
