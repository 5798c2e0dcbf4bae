//! Error types for grid construction and rule parsing.

use thiserror::Error;

/// Result type returned by fallible grid constructors.
pub type ConstructionResult<T> = Result<T, ConstructionError>;

/// Result type returned when parsing a rule string.
pub type RuleParseResult<T> = Result<T, RuleParseError>;

/// Error encountered while building a `Grid`.
///
/// Construction either produces a fully linked grid or one of these; there
/// is no partially initialized grid.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ConstructionError {
    /// The initial matrix has no rows.
    #[error("no grid was provided")]
    EmptyGrid,
    /// Some row's length differs from the number of rows.
    #[error("matrix has to be size n*n (row {row} has {len} cells, expected {expected})")]
    NonSquareGrid {
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },
    /// A value in the matrix is not 0 or 1.
    #[error("invalid cell state {value:?} at row {row}, column {col}")]
    InvalidState {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        col: usize,
        /// The offending value, as it was written.
        value: String,
    },
}

/// Error encountered while parsing a `B.../S...` rule string.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RuleParseError {
    #[error("invalid rule string: {0:?}")]
    InvalidSyntax(String),
    #[error("neighbor count out of range: {0}")]
    InvalidCount(u32),
}

/// Error returned when converting a value that is neither 0 nor 1 into a
/// `CellState`.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("cell state out of range: {0}")]
pub struct InvalidCellState(pub String);
