//! Error types shared by the containers, the grid and the search algorithms.
//!
//! A search that finds no route is not an error: it completes with
//! [`crate::algorithms::SearchOutcome::NoPath`]. The variants here describe
//! broken preconditions (sizing bugs, bad coordinates) and are never retried.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A bounded stack ran out of slots. Stacks are sized to the grid, so this
    /// means an algorithm pushed something it should not have.
    #[error("bounded stack capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// Pop on an empty bounded stack.
    #[error("pop on an empty stack")]
    Underflow,

    /// A grid needs at least two cells so start and end can be distinct.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("position ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// Start and end may never share a cell.
    #[error("position ({row}, {col}) is already taken by the other endpoint")]
    Occupied { row: usize, col: usize },
}
