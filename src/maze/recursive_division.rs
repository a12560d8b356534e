use crate::error::CoreResult;
use crate::grid::{Grid, Position};
use crate::maze::{seeded_rng, MazeGenerator, MazeKind, MazeOptions, MazeStep, Orientation};
use crate::trace::Trace;
use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Regions narrower or shorter than this are left open.
pub const MIN_DIVISIBLE: usize = 4;

/// Out of 15 draws, how many keep the skewed orientation.
const SKEW_KEEP: u32 = 11;
const SKEW_DRAWS: u32 = 15;

/// Half-open cell rectangle `[start_x, end_x) × [start_y, end_y)`; x runs
/// along columns and y along rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start_x: usize,
    pub end_x: usize,
    pub start_y: usize,
    pub end_y: usize,
}

impl Region {
    pub fn width(&self) -> usize {
        self.end_x.saturating_sub(self.start_x)
    }

    pub fn height(&self) -> usize {
        self.end_y.saturating_sub(self.start_y)
    }
}

/// Recursive-division maze.
///
/// Each region gets one wall line with a single passage, then both halves are
/// divided the same way. Rows and columns that hold a passage are never used
/// as wall lines later, so every passage stays open and the maze stays
/// connected.
pub struct RecursiveDivision {
    skew: Option<Orientation>,
    rng: StdRng,
    trace: Trace<MazeStep>,
    gap_rows: FxHashSet<usize>,
    gap_cols: FxHashSet<usize>,
    divided: Vec<Region>,
}

impl RecursiveDivision {
    pub fn new(options: MazeOptions) -> Self {
        RecursiveDivision {
            skew: options.skew,
            rng: seeded_rng(options.seed),
            trace: Trace::new(),
            gap_rows: FxHashSet::default(),
            gap_cols: FxHashSet::default(),
            divided: Vec::new(),
        }
    }

    /// Regions that received a wall during the last run.
    pub fn divided_regions(&self) -> &[Region] {
        &self.divided
    }

    fn choose_orientation(&mut self, width: usize, height: usize) -> Orientation {
        if let Some(bias) = self.skew {
            return if self.rng.gen_range(0..SKEW_DRAWS) < SKEW_KEEP {
                bias
            } else {
                bias.flip()
            };
        }
        if width < height {
            Orientation::Horizontal
        } else if height < width {
            Orientation::Vertical
        } else if self.rng.gen_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    fn place_wall(&mut self, grid: &mut Grid, pos: Position) -> CoreResult<()> {
        let (start, end) = grid.get_start_and_end_node_coords();
        if pos != start && pos != end && grid.set_wall(pos, true)? {
            self.trace.push(MazeStep::Wall(pos));
        }
        Ok(())
    }

    fn divide(&mut self, grid: &mut Grid, region: Region) -> CoreResult<()> {
        // Regions outside the grid are ignored, not reported.
        if region.end_x > grid.cols() || region.end_y > grid.rows() {
            return Ok(());
        }
        let (width, height) = (region.width(), region.height());
        if width < MIN_DIVISIBLE || height < MIN_DIVISIBLE {
            return Ok(());
        }

        match self.choose_orientation(width, height) {
            Orientation::Horizontal => {
                let lines: Vec<usize> = (region.start_y + 1..region.end_y - 1)
                    .filter(|row| !self.gap_rows.contains(row))
                    .collect();
                let Some(&wall_row) = lines.choose(&mut self.rng) else {
                    return Ok(());
                };
                let passage = self.rng.gen_range(region.start_x..region.end_x);
                self.gap_cols.insert(passage);
                self.divided.push(region);
                trace!("horizontal wall at row {wall_row}, passage at column {passage}");

                for col in (region.start_x..region.end_x).filter(|&col| col != passage) {
                    self.place_wall(grid, Position::new(wall_row, col))?;
                }
                self.divide(grid, Region { end_y: wall_row, ..region })?;
                self.divide(
                    grid,
                    Region {
                        start_y: wall_row + 1,
                        ..region
                    },
                )
            }
            Orientation::Vertical => {
                let lines: Vec<usize> = (region.start_x + 1..region.end_x - 1)
                    .filter(|col| !self.gap_cols.contains(col))
                    .collect();
                let Some(&wall_col) = lines.choose(&mut self.rng) else {
                    return Ok(());
                };
                let passage = self.rng.gen_range(region.start_y..region.end_y);
                self.gap_rows.insert(passage);
                self.divided.push(region);
                trace!("vertical wall at column {wall_col}, passage at row {passage}");

                for row in (region.start_y..region.end_y).filter(|&row| row != passage) {
                    self.place_wall(grid, Position::new(row, wall_col))?;
                }
                self.divide(grid, Region { end_x: wall_col, ..region })?;
                self.divide(
                    grid,
                    Region {
                        start_x: wall_col + 1,
                        ..region
                    },
                )
            }
        }
    }
}

impl MazeGenerator for RecursiveDivision {
    fn kind(&self) -> MazeKind {
        MazeKind::RecursiveDivision
    }

    fn trace(&self) -> &Trace<MazeStep> {
        &self.trace
    }

    fn trace_mut(&mut self) -> &mut Trace<MazeStep> {
        &mut self.trace
    }

    fn generate(&mut self, grid: &mut Grid) -> CoreResult<()> {
        self.gap_rows.clear();
        self.gap_cols.clear();
        self.divided.clear();
        let whole = Region {
            start_x: 0,
            end_x: grid.cols(),
            start_y: 0,
            end_y: grid.rows(),
        };
        self.divide(grid, whole)
    }
}
