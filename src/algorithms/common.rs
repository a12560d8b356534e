use crate::algorithms::AlgorithmKind;
use crate::containers::BoundedStack;
use crate::error::{CoreError, CoreResult};
use crate::grid::{Grid, Position};
use crate::trace::Trace;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    Found,
    NoPath,
}

/// Lifecycle of one algorithm instance. `run` always starts over from
/// `Idle`, so a completed instance can be run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Running,
    Completed(PathStatus),
}

/// Summary of a finished run. Not finding a path is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { path_len: usize, checked_len: usize },
    NoPath { checked_len: usize },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn checked_len(&self) -> usize {
        match *self {
            SearchOutcome::Found { checked_len, .. } | SearchOutcome::NoPath { checked_len } => {
                checked_len
            }
        }
    }
}

/// What an algorithm body hands back to [`SearchAlgorithm::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub checked: Vec<Position>,
    pub path: Option<Vec<Position>>,
}

impl SearchResult {
    pub fn found(checked: Vec<Position>, path: Vec<Position>) -> Self {
        SearchResult {
            checked,
            path: Some(path),
        }
    }

    pub fn no_path(checked: Vec<Position>) -> Self {
        SearchResult {
            checked,
            path: None,
        }
    }
}

/// State and traces of the latest run.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    state: SearchState,
    checked: Trace<Position>,
    path: Trace<Position>,
}

impl SearchRecord {
    pub fn new() -> Self {
        SearchRecord {
            state: SearchState::Idle,
            checked: Trace::new(),
            path: Trace::new(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn checked(&self) -> &Trace<Position> {
        &self.checked
    }

    pub fn path(&self) -> &Trace<Position> {
        &self.path
    }

    pub fn checked_mut(&mut self) -> &mut Trace<Position> {
        &mut self.checked
    }

    pub fn path_mut(&mut self) -> &mut Trace<Position> {
        &mut self.path
    }

    /// Drops the previous run's traces and rewinds both pointers.
    pub fn clear(&mut self) {
        self.state = SearchState::Idle;
        self.checked.clear();
        self.path.clear();
    }

    fn begin(&mut self) {
        self.clear();
        self.state = SearchState::Running;
    }

    fn complete(&mut self, result: SearchResult) -> SearchOutcome {
        let checked_len = result.checked.len();
        self.checked = Trace::from_items(result.checked);
        match result.path {
            Some(path) => {
                let path_len = path.len();
                self.path = Trace::from_items(path);
                self.state = SearchState::Completed(PathStatus::Found);
                SearchOutcome::Found {
                    path_len,
                    checked_len,
                }
            }
            None => {
                self.state = SearchState::Completed(PathStatus::NoPath);
                SearchOutcome::NoPath { checked_len }
            }
        }
    }
}

impl Default for SearchRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared contract of every search algorithm.
///
/// Implementors provide the algorithm body in [`search`](Self::search) and
/// storage for a [`SearchRecord`]; running, the reveal pointers and trace
/// access come for free.
pub trait SearchAlgorithm {
    fn kind(&self) -> AlgorithmKind;

    fn record(&self) -> &SearchRecord;

    fn record_mut(&mut self) -> &mut SearchRecord;

    /// Runs the algorithm to completion against `grid`.
    fn search(&self, grid: &Grid) -> CoreResult<SearchResult>;

    /// Clears the previous results, searches, and stores the new traces.
    ///
    /// A container invariant violation aborts the run, leaves the record
    /// empty and is returned as an error.
    fn run(&mut self, grid: &Grid) -> CoreResult<SearchOutcome> {
        self.record_mut().begin();
        match self.search(grid) {
            Ok(result) => {
                let outcome = self.record_mut().complete(result);
                debug!("{} finished: {:?}", self.kind(), outcome);
                Ok(outcome)
            }
            Err(err) => {
                self.record_mut().clear();
                Err(err)
            }
        }
    }

    fn state(&self) -> SearchState {
        self.record().state()
    }

    fn reset_checked_pointer(&mut self) {
        self.record_mut().checked_mut().reset_pointer();
    }

    fn update_checked_pointer(&mut self) -> bool {
        self.record_mut().checked_mut().update_pointer()
    }

    fn reset_path_pointer(&mut self) {
        self.record_mut().path_mut().reset_pointer();
    }

    fn update_path_pointer(&mut self) -> bool {
        self.record_mut().path_mut().update_pointer()
    }

    fn get_checked_trace(&self) -> &[Position] {
        self.record().checked().items()
    }

    fn get_path_trace(&self) -> &[Position] {
        self.record().path().items()
    }
}

/// Arena index of a position the algorithm got from the grid itself.
pub(crate) fn arena_index(grid: &Grid, pos: Position) -> CoreResult<usize> {
    grid.index_of(pos).ok_or(CoreError::OutOfBounds {
        row: pos.row,
        col: pos.col,
    })
}

/// Follows parent links from `from` back to the root of the search tree,
/// pushing every position visited. A parent cycle overflows the stack
/// instead of looping forever.
pub(crate) fn trace_back(
    grid: &Grid,
    parents: &[Option<usize>],
    from: usize,
) -> CoreResult<BoundedStack<Position>> {
    let mut stack = BoundedStack::with_capacity(grid.len());
    let mut current = Some(from);
    while let Some(index) = current {
        stack.push(grid.position_of(index))?;
        current = parents[index];
    }
    Ok(stack)
}

/// Start-to-`end` path from a parent array rooted at the start.
pub(crate) fn reconstruct_path(
    grid: &Grid,
    parents: &[Option<usize>],
    end: usize,
) -> CoreResult<Vec<Position>> {
    Ok(trace_back(grid, parents, end)?.reverse())
}
