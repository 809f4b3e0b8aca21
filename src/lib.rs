//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;
pub mod telemetry;

pub use crate::core::{
    config::{Config, ConfigBuilder, LabelFormat, Rounding, Symbols},
    data::{Sample, SeriesSet},
    error::{ChartError, ChartResult, ConfigError, GraphError},
};

pub use render::{ComposeOptions, compose, compose_with, plot};

/// Render any flat or nested numeric input with the default configuration.
///
/// `NaN` entries become gaps in the trace.
pub fn plot_default<S: Into<SeriesSet>>(series: S) -> ChartResult<String> {
    plot(&series.into(), &Config::default())
}
