//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::data::ParseCsvError;

pub type ChartResult<T> = Result<T, ChartError>;

/// Precise configuration faults, raised by [`crate::ConfigBuilder::build`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("offset must be at least 1, got {0}")]
    InvalidOffset(usize),

    #[error("height must be finite and non-negative, got {0}")]
    InvalidHeight(f64),

    #[error("`{field}` bound must be finite, got {value}")]
    NonFiniteBound { field: &'static str, value: f64 },

    #[error("tick interval must be at least 1")]
    InvalidTickInterval,

    #[error("expected exactly 10 symbols, got {0}")]
    SymbolCount(usize),

    #[error("unsupported label template `{0}` (expected e.g. \"{{:8.2f}} \")")]
    BadFormat(String),
}

/// Faults raised while rendering or composing a chart.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("the min value ({min}) cannot exceed the max value ({max})")]
    InvalidDomain { min: f64, max: f64 },

    #[error("domain {min}..={max} at ratio {ratio} needs more than {limit} rows")]
    TooManyRows {
        min: f64,
        max: f64,
        ratio: f64,
        limit: usize,
    },

    #[error("domain {min}..={max} cannot be mapped onto integer grid rows")]
    UnrepresentableDomain { min: f64, max: f64 },

    #[error("a {rows}x{columns} canvas exceeds the {limit} cell limit")]
    CanvasTooLarge {
        rows: usize,
        columns: usize,
        limit: usize,
    },

    #[error("percent change is undefined: minimum sample is zero")]
    DivisionByZero,

    #[error("no samples to summarize")]
    EmptyInput,

    #[error("sample #{index} is not a finite number ({value})")]
    NonFiniteSample { index: usize, value: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Top-level error type bubbled up by the command line front-end.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] ParseCsvError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("column {column} not found (input has {available})")]
    MissingColumn { column: usize, available: usize },
}
