//! Samples, series and a small CSV loader with zero-allocation float parsing.

use std::io::{BufRead, BufReader, Read};

use thiserror::Error;

// --- Samples ---

/// One data point: a number or an explicit hole in the trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Present(f64),
    Missing,
}

impl Sample {
    #[inline]
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// `NaN` is the conventional "no data" value in float feeds; it never
/// survives past this conversion.
impl From<f64> for Sample {
    #[inline]
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Self::Missing
        } else {
            Self::Present(v)
        }
    }
}

impl From<Option<f64>> for Sample {
    #[inline]
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Missing, Self::from)
    }
}

/// One or more traces sharing the implicit x-domain (sample index).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    series: Vec<Vec<Sample>>,
}

impl SeriesSet {
    #[must_use]
    pub fn new(series: Vec<Vec<Sample>>) -> Self {
        Self { series }
    }

    /// A flat sequence becomes a one-element set.
    pub fn single<I, S>(samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        Self::new(vec![samples.into_iter().map(Into::into).collect()])
    }

    pub fn push<I, S>(&mut self, samples: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        self.series.push(samples.into_iter().map(Into::into).collect());
    }

    #[inline]
    #[must_use]
    pub fn series(&self) -> &[Vec<Sample>] {
        &self.series
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Length of the longest series.
    #[must_use]
    pub fn width(&self) -> usize {
        self.series.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// First sample of the first series, if any.
    #[must_use]
    pub fn first(&self) -> Option<Sample> {
        self.series.first().and_then(|s| s.first()).copied()
    }

    /// Observed `(min, max)` over every present sample; `None` when the set
    /// holds no numbers at all.
    #[must_use]
    pub fn extrema(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flatten()
            .filter_map(|s| s.value())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Keep only the newest `n` samples of every series.
    pub fn retain_last(&mut self, n: usize) {
        for s in &mut self.series {
            if s.len() > n {
                s.drain(..s.len() - n);
            }
        }
    }

    /// Remove and return series `index`, leaving the set untouched if absent.
    #[must_use]
    pub fn take(mut self, index: usize) -> Option<Vec<Sample>> {
        (index < self.series.len()).then(|| self.series.swap_remove(index))
    }
}

impl From<Vec<f64>> for SeriesSet {
    fn from(v: Vec<f64>) -> Self {
        Self::single(v)
    }
}

impl From<&[f64]> for SeriesSet {
    fn from(v: &[f64]) -> Self {
        Self::single(v.iter().copied())
    }
}

impl From<Vec<Sample>> for SeriesSet {
    fn from(v: Vec<Sample>) -> Self {
        Self::new(vec![v])
    }
}

impl From<Vec<Vec<f64>>> for SeriesSet {
    fn from(v: Vec<Vec<f64>>) -> Self {
        Self::new(
            v.into_iter()
                .map(|s| s.into_iter().map(Sample::from).collect())
                .collect(),
        )
    }
}

// --- Error Handling ---

#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid value in column {column}: '{text}'")]
    BadFloat { column: usize, text: String },
    #[error("no samples found")]
    Empty,
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Rewrite U+2212 (`−`, as pasted from spreadsheets) to an ASCII hyphen.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn is_missing_token(b: &[u8]) -> bool {
    b.is_empty()
        || b == b"-"
        || b.eq_ignore_ascii_case(b"nan")
        || b.eq_ignore_ascii_case(b"null")
}

#[inline]
fn parse_sample(bytes: &[u8], line: usize, column: usize) -> Result<Sample, ParseCsvError> {
    if is_missing_token(bytes) {
        return Ok(Sample::Missing);
    }
    let bad = || ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() {
        Ok(Sample::Present(val))
    } else {
        Err(bad())
    }
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read one series per comma separated column.
///
/// Ragged rows are padded with [`Sample::Missing`] so every series ends up
/// with the same length.
pub fn read_csv<R: Read>(src: R) -> Result<SeriesSet, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut columns: Vec<Vec<Sample>> = Vec::new();
    let mut rows = 0usize;
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        // header detection: first field neither numeric nor a missing marker
        if !saw_first {
            saw_first = true;
            let first = buf.iter().position(|&b| b == b',').unwrap_or(buf.len());
            let field = trim(&buf[..first]);
            if !is_missing_token(field) && lexical_core::parse::<f64>(field).is_err() {
                continue;
            }
        }

        let mut col = 0;
        for field in buf.split(|&b| b == b',') {
            let sample = parse_sample(trim(field), line_no, col)?;
            if col == columns.len() {
                columns.push(vec![Sample::Missing; rows]);
            }
            columns[col].push(sample);
            col += 1;
        }
        rows += 1;
        for short in columns.iter_mut().filter(|c| c.len() < rows) {
            short.push(Sample::Missing);
        }
    }

    if rows == 0 {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(SeriesSet::new(columns))
}

pub fn read_csv_from_path(path: &str) -> Result<SeriesSet, ParseCsvError> {
    if path == "-" {
        read_csv(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_becomes_missing() {
        assert_eq!(Sample::from(f64::NAN), Sample::Missing);
        assert_eq!(Sample::from(2.5), Sample::Present(2.5));
        assert_eq!(Sample::from(None), Sample::Missing);
    }

    #[test]
    fn extrema_skip_missing_samples() {
        let set = SeriesSet::from(vec![vec![f64::NAN, 3.0], vec![-1.0, f64::NAN, 7.0]]);
        assert_eq!(set.extrema(), Some((-1.0, 7.0)));
        assert_eq!(set.width(), 3);
        assert_eq!(SeriesSet::single([f64::NAN]).extrema(), None);
    }

    #[test]
    fn retain_last_keeps_newest() {
        let mut set = SeriesSet::from(vec![1.0, 2.0, 3.0, 4.0]);
        set.retain_last(2);
        assert_eq!(
            set.series()[0],
            vec![Sample::Present(3.0), Sample::Present(4.0)]
        );
    }

    #[test]
    fn csv_with_header_gaps_and_ragged_rows() {
        let src = "date,close\n# comment\n1,10.5\n2,nan\n3,\u{2212}2\n4\n5,1,9\n";
        let set = read_csv(src.as_bytes()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.series()[1][1], Sample::Missing);
        assert_eq!(set.series()[1][2], Sample::Present(-2.0));
        assert_eq!(set.series()[1][3], Sample::Missing);
        assert_eq!(set.series()[2][..4], [Sample::Missing; 4]);
        assert_eq!(set.series()[2][4], Sample::Present(9.0));
    }

    #[test]
    fn csv_rejects_garbage_with_line_number() {
        let err = read_csv("1\n2\nabc\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { column: 0, .. }));
    }

    #[test]
    fn csv_without_rows_is_empty() {
        let err = read_csv("value\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Empty));
    }
}
