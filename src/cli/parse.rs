use clap::{Parser, Subcommand, ValueEnum};

use crate::core::{
    config::{LabelFormat, Rounding, Symbols},
    constants::{COMPOSE_HEIGHT, CURRENCY_PREFIX, DEFAULT_OFFSET, TICK_INTERVAL},
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-chart",
    about = "Line charts for terminals, logs and chat messages"
)]
pub struct Cli {
    /// Log resolved domains and timings to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot every CSV column as its own series
    Render(RenderArgs),
    /// Plot one column with an x-axis ruler and a min/max caption
    Compose(ComposeArgs),
    /// Show the default glyph palette and the role of each glyph
    Symbols,
    /// Print example invocations
    Examples,
}

/// `ascii-chart render …`
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Y-axis lower bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,
    /// Y-axis upper bound (auto if omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Vertical resolution (defaults to max - min)
    #[arg(long)]
    pub height: Option<f64>,

    /// Left margin reserved for labels and the tick column
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: usize,

    /// Ten glyphs: origin, axis, gap start, gap end, flat, falling upper,
    /// rising upper, falling lower, rising lower, vertical
    #[arg(long)]
    pub symbols: Option<Symbols>,

    /// Label template, e.g. "{:8.2f} "
    #[arg(long)]
    pub format: Option<LabelFormat>,

    /// Tie-breaking rule when a value sits half-way between two rows
    #[arg(long, value_enum, default_value_t = RoundingArg::HalfEven)]
    pub rounding: RoundingArg,

    /// Keep only the newest N samples (default: fit the terminal, 0 = all)
    #[arg(long)]
    pub tail: Option<usize>,
}

/// `ascii-chart compose …`
#[derive(Parser, Debug)]
pub struct ComposeArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Zero-based CSV column to chart
    #[arg(long, default_value_t = 0)]
    pub column: usize,

    /// Vertical resolution of the chart
    #[arg(long, default_value_t = COMPOSE_HEIGHT)]
    pub height: f64,

    /// Samples between two x-axis ticks
    #[arg(long, default_value_t = TICK_INTERVAL)]
    pub interval: usize,

    /// Prefix of the min/max amounts in the caption
    #[arg(long, default_value = CURRENCY_PREFIX)]
    pub currency: String,

    /// Keep only the newest N samples (default: fit the terminal, 0 = all)
    #[arg(long)]
    pub tail: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    HalfEven,
    HalfUp,
}

impl From<RoundingArg> for Rounding {
    fn from(r: RoundingArg) -> Self {
        match r {
            RoundingArg::HalfEven => Self::HalfEven,
            RoundingArg::HalfUp => Self::HalfAwayFromZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "ascii-chart",
            "render",
            "data.csv",
            "--min",
            "-2",
            "--symbols",
            "+|<>-\\//\\|",
            "--format",
            "{:6.1f} ",
            "--rounding",
            "half-up",
        ])
        .unwrap();
        let Command::Render(a) = cli.cmd else {
            panic!("expected render");
        };
        assert_eq!(a.file, "data.csv");
        assert_eq!(a.min, Some(-2.0));
        assert_eq!(a.symbols.map(|s| s.flat()), Some('-'));
        assert_eq!(a.format.map(|f| f.apply(1.0)), Some("   1.0 ".to_owned()));
        assert_eq!(Rounding::from(a.rounding), Rounding::HalfAwayFromZero);
    }

    #[test]
    fn compose_defaults() {
        let cli = Cli::try_parse_from(["ascii-chart", "compose"]).unwrap();
        let Command::Compose(a) = cli.cmd else {
            panic!("expected compose");
        };
        assert_eq!(a.file, "-");
        assert_eq!(a.height, 12.0);
        assert_eq!(a.interval, 6);
        assert_eq!(a.currency, "$");
        assert!(!cli.debug);
    }

    #[test]
    fn bad_symbols_are_rejected() {
        assert!(Cli::try_parse_from(["ascii-chart", "render", "--symbols", "abc"]).is_err());
    }
}
