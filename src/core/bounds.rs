//! Geometry helpers: y-domain resolution + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::{
    config::{Config, LabelFormat, Rounding},
    constants::FALLBACK_TERMINAL_WIDTH,
    data::SeriesSet,
    error::{ChartError, ChartResult},
};

/// Largest grid a single render may allocate, in rows.
pub const MAX_ROWS: usize = 1 << 16;

// 2^63: first f64 past `i64::MAX`; `i64::MIN` itself is exactly representable
const LEVEL_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Integer grid level of an already floored/ceiled value, `None` when it
/// does not fit an `i64`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn to_level(v: f64) -> Option<i64> {
    (v.is_finite() && v >= -LEVEL_LIMIT && v < LEVEL_LIMIT).then_some(v as i64)
}

/// The value range of a chart mapped onto integer grid levels.
///
/// Level `scaled_min` is the bottom row, `scaled_max` the top row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub ratio: f64,
    pub scaled_min: i64,
    pub scaled_max: i64,
    rounding: Rounding,
}

impl Domain {
    /// Resolve bounds from `config`, falling back to the observed extrema.
    ///
    /// `Ok(None)` means there is nothing to draw: the set is empty or every
    /// sample is missing.
    ///
    /// # Errors
    /// [`ChartError::InvalidDomain`] for `min > max`,
    /// [`ChartError::UnrepresentableDomain`] when a bound is infinite or the
    /// scaled levels overflow `i64`, and [`ChartError::TooManyRows`] past
    /// [`MAX_ROWS`].
    pub fn resolve(series: &SeriesSet, config: &Config) -> ChartResult<Option<Self>> {
        let Some((lo, hi)) = series.extrema() else {
            return Ok(None);
        };
        let min = config.min().unwrap_or(lo);
        let max = config.max().unwrap_or(hi);
        if min > max {
            return Err(ChartError::InvalidDomain { min, max });
        }

        let unrepresentable = || ChartError::UnrepresentableDomain { min, max };
        if !min.is_finite() || !max.is_finite() {
            return Err(unrepresentable());
        }

        let interval = max - min;
        let height = config.height().unwrap_or(interval);
        let ratio = if interval > 0.0 { height / interval } else { 1.0 };
        if !interval.is_finite() || !ratio.is_finite() {
            return Err(unrepresentable());
        }

        let scaled_min = to_level((min * ratio).floor()).ok_or_else(unrepresentable)?;
        let scaled_max = to_level((max * ratio).ceil()).ok_or_else(unrepresentable)?;

        let domain = Self {
            min,
            max,
            ratio,
            scaled_min,
            scaled_max,
            rounding: config.rounding(),
        };
        match scaled_max.checked_sub(scaled_min) {
            Some(rows) if usize::try_from(rows).is_ok_and(|r| r < MAX_ROWS) => Ok(Some(domain)),
            _ => Err(ChartError::TooManyRows {
                min,
                max,
                ratio,
                limit: MAX_ROWS,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.max - self.min
    }

    /// Index of the bottom row; the grid holds `rows() + 1` rows.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rows(&self) -> usize {
        (self.scaled_max - self.scaled_min) as usize
    }

    /// Grid level of `value` relative to the bottom row. Out-of-range values
    /// saturate at the domain edges.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled(&self, value: f64) -> usize {
        let level = self.rounding.apply(value.clamp(self.min, self.max) * self.ratio) as i64;
        (level - self.scaled_min) as usize
    }

    /// Row index (top = 0) that `value` is drawn on.
    #[inline]
    #[must_use]
    pub fn row(&self, value: f64) -> usize {
        self.rows() - self.scaled(value)
    }

    /// Label value for the row holding `level`, interpolated from `max`
    /// (top) down to `min` (bottom).
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn label_value(&self, level: i64) -> f64 {
        let divisor = self.rows().max(1) as f64;
        self.max - (level - self.scaled_min) as f64 * self.interval() / divisor
    }
}

/// Current terminal width (80 column fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(usize::from(FALLBACK_TERMINAL_WIDTH), |(Width(w), _)| {
        usize::from(w)
    })
}

/// Columns a row occupies before the first plotted sample.
///
/// A label lives in a single cell of the margin, so every row is widened by
/// the label length minus one. With `offset == 1` the tick column
/// overwrites the label entirely.
#[must_use]
pub fn left_margin(domain: (f64, f64), format: &LabelFormat, offset: usize) -> usize {
    if offset == 1 {
        return 1;
    }
    let (low, high) = domain;
    let label = format
        .apply(low)
        .chars()
        .count()
        .max(format.apply(high).chars().count());
    label.saturating_add(offset - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(values: &[f64], cfg: &Config) -> Domain {
        Domain::resolve(&SeriesSet::from(values), cfg)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn flat_series_falls_back_to_unit_ratio() {
        let d = domain(&[4.0, 4.0, 4.0], &Config::default());
        assert_eq!(d.ratio, 1.0);
        assert_eq!(d.rows(), 0);
        assert_eq!(d.row(4.0), 0);
        assert_eq!(d.label_value(4), 4.0);
    }

    #[test]
    fn height_stretches_the_grid() {
        let cfg = Config::builder().height(12.0).build().unwrap();
        let d = domain(&[1.0, 2.0, 3.0], &cfg);
        assert_eq!((d.scaled_min, d.scaled_max), (6, 18));
        assert_eq!(d.row(1.0), 12);
        assert_eq!(d.row(2.0), 6);
        assert_eq!(d.row(3.0), 0);
    }

    #[test]
    fn out_of_range_values_saturate() {
        let cfg = Config::builder().range(2.0..=8.0).build().unwrap();
        let d = domain(&[0.0, 10.0], &cfg);
        assert_eq!(d.row(-100.0), d.rows());
        assert_eq!(d.row(100.0), 0);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let cfg = Config::builder().min(5.0).max(1.0).build().unwrap();
        let err = Domain::resolve(&SeriesSet::from(vec![1.0, 2.0]), &cfg).unwrap_err();
        assert_eq!(err, ChartError::InvalidDomain { min: 5.0, max: 1.0 });
    }

    #[test]
    fn all_missing_resolves_to_nothing() {
        let set = SeriesSet::single([f64::NAN, f64::NAN]);
        assert_eq!(Domain::resolve(&set, &Config::default()), Ok(None));
        assert_eq!(Domain::resolve(&SeriesSet::default(), &Config::default()), Ok(None));
    }

    #[test]
    fn huge_grids_are_refused() {
        let set = SeriesSet::from(vec![0.0, 1e9]);
        assert!(matches!(
            Domain::resolve(&set, &Config::default()),
            Err(ChartError::TooManyRows { .. })
        ));
    }

    #[test]
    fn domains_beyond_grid_levels_are_refused() {
        for values in [
            vec![1.0, 2.0, f64::INFINITY],
            vec![f64::NEG_INFINITY, 0.0],
            vec![-1e308, 1e308],
            vec![1e300, 2e300, 1.5e300],
        ] {
            assert!(
                matches!(
                    Domain::resolve(&SeriesSet::from(values.clone()), &Config::default()),
                    Err(ChartError::UnrepresentableDomain { .. })
                ),
                "{values:?} should be refused"
            );
        }
    }

    #[test]
    fn infinite_samples_clamp_inside_explicit_bounds() {
        let cfg = Config::builder().range(0.0..=4.0).build().unwrap();
        let d = domain(&[1.0, f64::INFINITY], &cfg);
        assert_eq!(d.row(f64::INFINITY), 0);
    }

    #[test]
    fn margin_accounts_for_label_overflow() {
        let f = LabelFormat::default();
        assert_eq!(left_margin((1.0, 5.0), &f, 3), 11);
        assert_eq!(left_margin((1.0, 5.0), &f, 1), 1);
        assert_eq!(left_margin((1.0, 5.0), &f, 20), 28);
        assert_eq!(left_margin((1.0, 5.0), &f, usize::MAX), usize::MAX);
    }
}
