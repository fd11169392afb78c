// error.rs - Error type shared by persistence, grid decoding and configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Pattern name is empty")]
    EmptyName,

    #[error("Pattern name \"{name}\" contains unsupported character {found:?}")]
    InvalidName { name: String, found: char },

    #[error("Pattern name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("Pattern \"{name}\" not found")]
    PatternNotFound { name: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    #[error("Grid is {found_columns}x{found_rows}, expected {columns}x{rows}")]
    DimensionMismatch {
        columns: usize,
        rows: usize,
        found_columns: usize,
        found_rows: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LifeResult<T> = Result<T, LifeError>;
