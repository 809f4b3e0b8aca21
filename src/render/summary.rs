//! Single-series chart with an x-axis ruler and a min/max/percent caption.

use std::fmt::Write;

use tracing::debug;

use crate::{
    core::{
        config::Config,
        constants::{
            COMPOSE_HEIGHT, COMPOSE_OFFSET, CURRENCY_PREFIX, DECIMAL_PRECISION, TICK_INTERVAL,
        },
        data::SeriesSet,
        error::{ChartError, ChartResult, ConfigError},
    },
    render::line::plot,
};

/// Knobs of [`compose_with`]; the defaults match [`compose`].
#[derive(Clone, Debug, PartialEq)]
pub struct ComposeOptions {
    pub height: f64,
    pub tick_interval: usize,
    pub currency: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            height: COMPOSE_HEIGHT,
            tick_interval: TICK_INTERVAL,
            currency: CURRENCY_PREFIX.to_owned(),
        }
    }
}

/// Chart `samples`, then append the ruler and the caption line.
///
/// # Errors
/// [`ChartError::EmptyInput`] for no samples,
/// [`ChartError::NonFiniteSample`] for NaN or infinite samples and
/// [`ChartError::DivisionByZero`] when the smallest sample is zero.
pub fn compose(samples: &[f64], height: f64) -> ChartResult<String> {
    compose_with(
        samples,
        &ComposeOptions {
            height,
            ..ComposeOptions::default()
        },
    )
}

pub fn compose_with(samples: &[f64], opts: &ComposeOptions) -> ChartResult<String> {
    if opts.tick_interval == 0 {
        return Err(ConfigError::InvalidTickInterval.into());
    }
    let (min, max) = extrema(samples)?;
    // checked before drawing so a failure never leaves a half-built chart
    let caption = caption(min, max, &opts.currency)?;

    let config = Config::builder()
        .height(opts.height)
        .offset(COMPOSE_OFFSET)
        .build()?;
    let chart = plot(&SeriesSet::from(samples), &config)?;
    let ruler = x_axis_ruler(samples.len(), opts.tick_interval);
    debug!(samples = samples.len(), min, max, "composed chart");

    Ok(format!("{chart}\n{ruler}\n{caption}"))
}

fn extrema(samples: &[f64]) -> ChartResult<(f64, f64)> {
    if samples.is_empty() {
        return Err(ChartError::EmptyInput);
    }
    samples.iter().enumerate().try_fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), (index, &value)| {
            if value.is_finite() {
                Ok((lo.min(value), hi.max(value)))
            } else {
                Err(ChartError::NonFiniteSample { index, value })
            }
        },
    )
}

/// Tick numbers every `interval` columns, counted back from the right edge,
/// padded to `width` columns.
///
/// Each tick's digits are written reversed and right-aligned in their slot,
/// then the whole ruler is reversed. Multi-digit labels therefore end up
/// reading forwards with their *last* digit on the tick column, which
/// left-to-right padding of the labels would not give.
#[must_use]
pub fn x_axis_ruler(width: usize, interval: usize) -> String {
    if interval == 0 {
        return " ".repeat(width);
    }
    let mut axis = String::new();
    for i in 1..=width / interval {
        let digits: String = (i * interval).to_string().chars().rev().collect();
        let _ = write!(axis, "{digits:>interval$}");
    }
    let axis: String = axis.chars().rev().collect();
    format!("{axis:>width$}")
}

/// `"$min - $max (pct%)"` with thousands separators on the amounts.
///
/// # Errors
/// [`ChartError::DivisionByZero`] when `min` is zero.
pub fn caption(min: f64, max: f64, currency: &str) -> ChartResult<String> {
    if min == 0.0 {
        return Err(ChartError::DivisionByZero);
    }
    let pct = (max - min) / min * 100.0;
    Ok(format!(
        "{currency}{} - {currency}{} ({pct:.prec$}%)",
        group_thousands(min, DECIMAL_PRECISION),
        group_thousands(max, DECIMAL_PRECISION),
        prec = DECIMAL_PRECISION,
    ))
}

/// Fixed-point with `,` between groups of three integer digits.
#[must_use]
pub fn group_thousands(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$}");
    let (sign, unsigned) = raw
        .strip_prefix('-')
        .map_or(("", raw.as_str()), |rest| ("-", rest));
    let (int, frac) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let mut out = String::with_capacity(raw.len() + int.len() / 3);
    out.push_str(sign);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}
