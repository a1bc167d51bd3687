use thiserror::Error;

/// Reasons a search request is refused before any cell is expanded.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no start cell has been set on the grid")]
    MissingStart,
    #[error("no goal cell has been set on the grid")]
    MissingGoal,
}

/// Errors produced when reading a grid from its text form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridParseError {
    #[error("grid text contains no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at column {column}, row {row}")]
    UnknownTile {
        column: usize,
        row: usize,
        tile: char,
    },
    #[error("grid text marks more than one start cell")]
    DuplicateStart,
    #[error("grid text marks more than one goal cell")]
    DuplicateGoal,
}
