//! Core error type.
//!
//! Decision logic never fails; these errors come from the edges where host
//! input is parsed or configuration is validated.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("vision window has {got} tiles, expected {expected} for range {range}")]
    WindowSize {
        range:    u32,
        expected: usize,
        got:      usize,
    },

    #[error("vision window side {0} is not odd")]
    EvenSide(usize),

    #[error("vision row {row} has {got} tiles, expected {expected}")]
    RaggedRow {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("unrecognised tile symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        symbol: char,
        row:    usize,
        col:    usize,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[cfg(feature = "toml")]
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Shorthand result type for all `ctf-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
