//! A collection of constants.

/// Columns reserved left of the plot for labels and the tick column.
pub const DEFAULT_OFFSET: usize = 3;

/// Default box-drawing palette, indexed by [`crate::core::config::Symbols`] role.
pub const DEFAULT_SYMBOLS: [char; 10] = ['┼', '┤', '╶', '╴', '─', '╰', '╭', '╮', '╯', '│'];

/// Default y-axis label: eight wide, two decimals, one trailing space.
pub const DEFAULT_LABEL_WIDTH: usize = 8;
/// Digits after the decimal point in labels and captions.
pub const DECIMAL_PRECISION: usize = 2;

/// Vertical resolution used by the composer.
pub const COMPOSE_HEIGHT: f64 = 12.0;
/// The composer's chart is drawn flush against the tick column.
pub const COMPOSE_OFFSET: usize = 1;
/// Distance between two x-axis ruler ticks.
pub const TICK_INTERVAL: usize = 6;
/// Prefix for min/max in the caption line.
pub const CURRENCY_PREFIX: &str = "$";

/// Terminal width used when the real size cannot be queried.
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;
