use std::time::Instant;

use tracing::{debug, warn};

use crate::{
    core::{
        bounds::{left_margin, terminal_width},
        config::Config,
        constants::{COMPOSE_OFFSET, DEFAULT_SYMBOLS},
        data::{SeriesSet, read_csv_from_path},
        error::GraphError,
    },
    render::{ComposeOptions, compose_with, plot},
};

use super::parse::{ComposeArgs, RenderArgs};

/// Number of samples that fit the terminal next to a `margin` wide prefix.
/// The last sample of a series is never given its own column.
fn fit_terminal(margin: usize) -> usize {
    (terminal_width() + 1).saturating_sub(margin).max(2)
}

pub fn render(a: RenderArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let mut data = read_csv_from_path(&a.file)?;
    debug!(
        series = data.len(),
        samples = data.width(),
        elapsed_us = t_ingest.elapsed().as_micros(),
        "CSV ingest"
    );

    let mut b = Config::builder()
        .min_opt(a.min)
        .max_opt(a.max)
        .height_opt(a.height)
        .offset(a.offset)
        .rounding(a.rounding.into());
    if let Some(s) = a.symbols {
        b = b.symbols(s);
    }
    if let Some(f) = a.format {
        b = b.format(f);
    }
    let cfg = b.build()?;

    let tail = a.tail.unwrap_or_else(|| {
        let (lo, hi) = data.extrema().unwrap_or((0.0, 0.0));
        let bounds = (cfg.min().unwrap_or(lo), cfg.max().unwrap_or(hi));
        fit_terminal(left_margin(bounds, cfg.format(), cfg.offset()))
    });
    if tail > 0 && data.width() > tail {
        debug!(tail, "trimming to the newest samples");
        data.retain_last(tail);
    }

    println!("{}", plot(&data, &cfg)?);
    Ok(())
}

pub fn compose(a: ComposeArgs) -> Result<(), GraphError> {
    let data = read_csv_from_path(&a.file)?;
    let available = data.len();
    let column = data.take(a.column).ok_or(GraphError::MissingColumn {
        column: a.column,
        available,
    })?;

    let mut samples: Vec<f64> = column.iter().filter_map(|s| s.value()).collect();
    let dropped = column.iter().filter(|s| s.is_missing()).count();
    if dropped > 0 {
        warn!(dropped, "skipping missing samples");
    }

    let tail = a.tail.unwrap_or_else(|| fit_terminal(COMPOSE_OFFSET));
    if tail > 0 && samples.len() > tail {
        samples.drain(..samples.len() - tail);
    }

    let opts = ComposeOptions {
        height: a.height,
        tick_interval: a.interval,
        currency: a.currency,
    };
    println!("{}", compose_with(&samples, &opts)?);
    Ok(())
}

/// Print the default palette next to the role of each glyph.
pub fn symbols() {
    const ROLES: [&str; 10] = [
        "origin tick",
        "axis tick",
        "segment start after gap",
        "segment end before gap",
        "flat segment",
        "falling corner (upper)",
        "rising corner (upper)",
        "falling corner (lower)",
        "rising corner (lower)",
        "vertical fill",
    ];
    println!("\nDefault symbols:");
    for (i, (glyph, role)) in DEFAULT_SYMBOLS.iter().zip(ROLES).enumerate() {
        println!("  [{i}] {glyph}  {role}");
    }
    let palette: String = DEFAULT_SYMBOLS.iter().collect();
    println!("\nPass ten glyphs in this order, e.g. --symbols '{palette}'\n");

    let demo = SeriesSet::single([1.0, 3.0, 2.0, f64::NAN, 2.0, 2.0]);
    match plot(&demo, &Config::default()) {
        Ok(chart) => println!("{chart}\n"),
        Err(e) => warn!("demo chart failed: {e}"),
    }
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "ascii-chart";
    println!(
        "
Example invocations
-------------------
• Plot every column   : {bin} render prices.csv
• Fixed bounds        : {bin} render prices.csv --min 0 --max 100 --height 10
• ASCII-only glyphs   : {bin} render prices.csv --symbols '+|<>-\\//\\|'
• Custom labels       : {bin} render prices.csv --format '{{:10.4f}} '
• Balance summary     : {bin} compose balances.csv --column 1 --height 12
• From a pipe         : seq 1 30 | {bin} compose - --currency 'S$'
• Debug logging       : {bin} --debug render prices.csv
"
    );
}
