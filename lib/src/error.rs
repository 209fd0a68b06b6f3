//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid character {ch:?} at row {row}, column {col}.
    InvalidChar { row: usize, col: usize, ch: char },
    /// Row {row} has {found} cells, but the first row has {expected}.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The seat layout is empty.
    EmptyGrid,
    /// A {height}x{width} grid needs {expected} cells, but {found} were given.
    SizeMismatch {
        height: usize,
        width: usize,
        expected: usize,
        found: usize,
    },
    /// A {height}x{width} grid is too large to fit in memory.
    TooLarge { height: usize, width: usize },
    /// Threshold {0} is out of range. It should be between 1 and 8.
    InvalidThreshold(usize),
    /// Number of threads / maximal rounds should be positive.
    NonPositiveError,
    /// Unable to build the thread pool: {0}.
    ThreadPool(String),
    /// No equilibrium was reached after {0} rounds.
    NotConverged(u64),
    /// The simulation was cancelled after {0} rounds.
    Cancelled(u64),
}
