//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::Domain;
pub use config::{Config, ConfigBuilder, LabelFormat, Rounding, Symbols};
pub use constants::{DECIMAL_PRECISION, DEFAULT_OFFSET, DEFAULT_SYMBOLS, TICK_INTERVAL};
pub use data::{Sample, SeriesSet};
pub use error::{ChartError, ChartResult, ConfigError, GraphError};
