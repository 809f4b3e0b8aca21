//! Series set to box-drawing line chart.
//!
//! ### Workflow
//! 1. [`Domain::resolve`] fixes `min`/`max`/`ratio` and the integer grid
//!    levels before anything is allocated.
//! 2. The label pass writes one formatted label and one tick per row.
//! 3. The segment pass walks every adjacent sample pair of every series and
//!    stamps the glyph for that step into column `x + offset`.
//!
//! Series are drawn in order onto the same canvas, so where two traces
//! touch the same cell the later series wins.

use tracing::{debug, trace};

use crate::{
    core::{
        bounds::Domain,
        config::Config,
        data::{Sample, SeriesSet},
        error::{ChartError, ChartResult},
    },
    render::canvas::{Canvas, MAX_CELLS},
};

/// Render `series` with `config` into a newline separated text block.
///
/// Returns an empty string when there is nothing to draw (no series, or
/// every sample missing).
///
/// # Errors
/// [`crate::ChartError::InvalidDomain`] when the resolved `min` exceeds
/// `max`, [`crate::ChartError::TooManyRows`] when the grid would be absurdly
/// tall, [`crate::ChartError::UnrepresentableDomain`] when the values do not
/// fit integer grid levels and [`crate::ChartError::CanvasTooLarge`] when the
/// offset plus sample count is too wide to allocate.
pub fn plot(series: &SeriesSet, config: &Config) -> ChartResult<String> {
    Ok(plot_canvas(series, config)?.map_or_else(String::new, |c| c.to_text()))
}

/// Same as [`plot`] but hands back the grid itself.
pub fn plot_canvas(series: &SeriesSet, config: &Config) -> ChartResult<Option<Canvas>> {
    let Some(domain) = Domain::resolve(series, config)? else {
        debug!(series = series.len(), "nothing to plot");
        return Ok(None);
    };
    debug!(
        min = domain.min,
        max = domain.max,
        ratio = domain.ratio,
        rows = domain.rows() + 1,
        "resolved chart domain"
    );

    let offset = config.offset();
    let rows = domain.rows() + 1;
    let columns = offset
        .checked_add(series.width())
        .ok_or(ChartError::CanvasTooLarge {
            rows,
            columns: usize::MAX,
            limit: MAX_CELLS,
        })?;
    let mut canvas = Canvas::new(rows, columns)?;

    draw_axis(&mut canvas, &domain, config);

    // first value is a tick mark across the y-axis
    if let Some(Sample::Present(v)) = series.first() {
        canvas.put(domain.row(v), offset - 1, config.symbols().origin());
    }

    for (i, s) in series.series().iter().enumerate() {
        trace!(series = i, len = s.len(), "drawing series");
        draw_series(&mut canvas, &domain, config, s);
    }
    Ok(Some(canvas))
}

fn draw_axis(canvas: &mut Canvas, domain: &Domain, config: &Config) {
    let offset = config.offset();
    let symbols = config.symbols();
    for level in domain.scaled_min..=domain.scaled_max {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = (level - domain.scaled_min) as usize;
        let label = config.format().apply(domain.label_value(level));
        let col = offset.saturating_sub(label.chars().count());
        canvas.put_label(row, col, label);
        let tick = if level == 0 {
            symbols.origin()
        } else {
            symbols.axis()
        };
        canvas.put(row, offset - 1, tick);
    }
}

fn draw_series(canvas: &mut Canvas, domain: &Domain, config: &Config, series: &[Sample]) {
    let offset = config.offset();
    let symbols = config.symbols();

    for (x, pair) in series.windows(2).enumerate() {
        let col = x + offset;
        match (pair[0], pair[1]) {
            (Sample::Missing, Sample::Missing) => {}
            (Sample::Missing, Sample::Present(d1)) => {
                canvas.put(domain.row(d1), col, symbols.gap_start());
            }
            (Sample::Present(d0), Sample::Missing) => {
                canvas.put(domain.row(d0), col, symbols.gap_end());
            }
            (Sample::Present(d0), Sample::Present(d1)) => {
                let (y0, y1) = (domain.scaled(d0), domain.scaled(d1));
                let rows = domain.rows();
                if y0 == y1 {
                    canvas.put(rows - y0, col, symbols.flat());
                    continue;
                }
                let falling = y0 > y1;
                let (upper, lower) = if falling {
                    (symbols.falling_upper(), symbols.falling_lower())
                } else {
                    (symbols.rising_upper(), symbols.rising_lower())
                };
                canvas.put(rows - y1, col, upper);
                canvas.put(rows - y0, col, lower);
                for y in y0.min(y1) + 1..y0.max(y1) {
                    canvas.put(rows - y, col, symbols.vertical());
                }
            }
        }
    }
}
