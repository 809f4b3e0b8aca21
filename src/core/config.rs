//! Run-time configuration object + fluent builder.

use std::{fmt, str::FromStr, sync::Arc};

use crate::core::{
    constants::{DECIMAL_PRECISION, DEFAULT_LABEL_WIDTH, DEFAULT_OFFSET, DEFAULT_SYMBOLS},
    error::ConfigError,
};

// --- Symbols ---

/// The ten glyphs a chart is drawn with, one per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols([char; 10]);

impl Symbols {
    #[must_use]
    pub const fn new(glyphs: [char; 10]) -> Self {
        Self(glyphs)
    }
    /// Tick where the axis crosses zero or the trace starts.
    #[inline]
    pub const fn origin(&self) -> char {
        self.0[0]
    }
    /// Tick on every other labelled row.
    #[inline]
    pub const fn axis(&self) -> char {
        self.0[1]
    }
    /// First point after a gap.
    #[inline]
    pub const fn gap_start(&self) -> char {
        self.0[2]
    }
    /// Last point before a gap.
    #[inline]
    pub const fn gap_end(&self) -> char {
        self.0[3]
    }
    #[inline]
    pub const fn flat(&self) -> char {
        self.0[4]
    }
    #[inline]
    pub const fn falling_upper(&self) -> char {
        self.0[5]
    }
    #[inline]
    pub const fn rising_upper(&self) -> char {
        self.0[6]
    }
    #[inline]
    pub const fn falling_lower(&self) -> char {
        self.0[7]
    }
    #[inline]
    pub const fn rising_lower(&self) -> char {
        self.0[8]
    }
    #[inline]
    pub const fn vertical(&self) -> char {
        self.0[9]
    }

    #[must_use]
    pub const fn as_array(&self) -> &[char; 10] {
        &self.0
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self(DEFAULT_SYMBOLS)
    }
}

impl From<[char; 10]> for Symbols {
    fn from(glyphs: [char; 10]) -> Self {
        Self(glyphs)
    }
}

/// Ten characters in role order, e.g. `"+|<>-\\//\\|"`.
impl FromStr for Symbols {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().collect();
        let count = glyphs.len();
        glyphs
            .try_into()
            .map(Self)
            .map_err(|_| ConfigError::SymbolCount(count))
    }
}

// --- Label format ---

type LabelFn = dyn Fn(f64) -> String + Send + Sync;

/// Template applied to every y-axis label value.
#[derive(Clone)]
pub enum LabelFormat {
    /// `prefix` + right-aligned fixed-point number + `suffix`.
    Fixed {
        prefix: String,
        width: usize,
        precision: usize,
        suffix: String,
    },
    Custom(Arc<LabelFn>),
}

impl LabelFormat {
    pub fn custom(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        match self {
            Self::Fixed {
                prefix,
                width,
                precision,
                suffix,
            } => format!("{prefix}{value:>width$.precision$}{suffix}"),
            Self::Custom(f) => f(value),
        }
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::Fixed {
            prefix: String::new(),
            width: DEFAULT_LABEL_WIDTH,
            precision: DECIMAL_PRECISION,
            suffix: " ".into(),
        }
    }
}

impl fmt::Debug for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed {
                prefix,
                width,
                precision,
                suffix,
            } => write!(f, "{prefix}{{:{width}.{precision}f}}{suffix}"),
            Self::Custom(_) => f.write_str("<custom>"),
        }
    }
}

/// Parses the familiar `{:W.Pf}` placeholder with optional literal text
/// around it. Width and precision are optional; precision defaults to 6.
impl FromStr for LabelFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::BadFormat(s.to_owned());
        let open = s.find("{:").ok_or_else(bad)?;
        let close = open + s[open..].find('}').ok_or_else(bad)?;
        let spec = s[open + 2..close].strip_suffix('f').ok_or_else(bad)?;
        let (width, precision) = spec.split_once('.').unwrap_or((spec, "6"));

        let digits = |t: &str, default: usize| -> Result<usize, ConfigError> {
            if t.is_empty() {
                Ok(default)
            } else if t.bytes().all(|b| b.is_ascii_digit()) {
                t.parse().map_err(|_| bad())
            } else {
                Err(bad())
            }
        };
        let prefix = &s[..open];
        let suffix = &s[close + 1..];
        if prefix.contains(['{', '}']) || suffix.contains(['{', '}']) {
            return Err(bad());
        }
        Ok(Self::Fixed {
            prefix: prefix.to_owned(),
            width: digits(width, 0)?,
            precision: digits(precision, DECIMAL_PRECISION)?,
            suffix: suffix.to_owned(),
        })
    }
}

// --- Rounding ---

/// How a scaled value snaps to a grid row when it lies exactly half-way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Ties go to the even row (2.5 -> 2, 3.5 -> 4).
    #[default]
    HalfEven,
    /// Ties go away from zero (2.5 -> 3, -2.5 -> -3).
    HalfAwayFromZero,
}

impl Rounding {
    #[inline]
    #[must_use]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Self::HalfEven => v.round_ties_even(),
            Self::HalfAwayFromZero => v.round(),
        }
    }
}

// --- Config ---

/// Immutable parameters handed to the renderer.
///
/// Options left unset (`min`, `max`, `height`) are derived from the data at
/// render time; everything else is resolved here.
#[derive(Debug, Clone)]
pub struct Config {
    min: Option<f64>,
    max: Option<f64>,
    height: Option<f64>,
    offset: usize,
    symbols: Symbols,
    format: LabelFormat,
    rounding: Rounding,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.min
    }
    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.max
    }
    #[inline]
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.height
    }
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }
    #[inline]
    #[must_use]
    pub fn format(&self) -> &LabelFormat {
        &self.format
    }
    #[inline]
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            height: None,
            offset: DEFAULT_OFFSET,
            symbols: Symbols::default(),
            format: LabelFormat::default(),
            rounding: Rounding::default(),
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    min: Option<f64>,
    max: Option<f64>,
    height: Option<f64>,
    offset: Option<usize>,
    symbols: Option<Symbols>,
    format: Option<LabelFormat>,
    rounding: Option<Rounding>,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn min_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.min = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn max_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.max = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.min = Some(*r.start());
        self.max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, v: f64) -> Self {
        self.height = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn height_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.height = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn offset(mut self, v: usize) -> Self {
        self.offset = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn symbols<S: Into<Symbols>>(mut self, s: S) -> Self {
        self.symbols = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn format(mut self, f: LabelFormat) -> Self {
        self.format = Some(f);
        self
    }
    #[inline]
    #[must_use]
    pub fn rounding(mut self, r: Rounding) -> Self {
        self.rounding = Some(r);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let offset = self.offset.unwrap_or(DEFAULT_OFFSET);
        if offset == 0 {
            return Err(ConfigError::InvalidOffset(offset));
        }
        if let Some(h) = self.height {
            if !h.is_finite() || h < 0.0 {
                return Err(ConfigError::InvalidHeight(h));
            }
        }
        for (field, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(value) = bound.filter(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteBound { field, value });
            }
        }
        Ok(Config {
            min: self.min,
            max: self.max,
            height: self.height,
            offset,
            symbols: self.symbols.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
            rounding: self.rounding.unwrap_or_default(),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_label_matches_fixed_template() {
        let f = LabelFormat::default();
        assert_eq!(f.apply(1.0), "    1.00 ");
        assert_eq!(f.apply(-12.5), "  -12.50 ");
    }

    #[test]
    fn parse_template_with_literals() {
        let f: LabelFormat = "${:6.1f}|".parse().unwrap();
        assert_eq!(f.apply(3.14159), "$   3.1|");
        let g: LabelFormat = "{:.0f}".parse().unwrap();
        assert_eq!(g.apply(2.6), "3");
        let h: LabelFormat = "{:5f}".parse().unwrap();
        assert_eq!(h.apply(1.0), "1.000000");
    }

    #[test]
    fn reject_unsupported_templates() {
        for t in ["{}", "{:8.2d}", "{:x.2f}", "no placeholder", "{:8.2f}{}"] {
            assert!(t.parse::<LabelFormat>().is_err(), "{t} should be rejected");
        }
    }

    #[test]
    fn symbols_need_exactly_ten_glyphs() {
        let s: Symbols = "+|<>-\\//\\|".parse().unwrap();
        assert_eq!(s.origin(), '+');
        assert_eq!(s.vertical(), '|');
        assert_eq!(
            "abc".parse::<Symbols>().unwrap_err(),
            ConfigError::SymbolCount(3)
        );
    }

    #[test]
    fn rounding_modes_differ_only_on_ties() {
        assert_eq!(Rounding::HalfEven.apply(2.5), 2.0);
        assert_eq!(Rounding::HalfAwayFromZero.apply(2.5), 3.0);
        assert_eq!(Rounding::HalfEven.apply(2.6), 3.0);
        assert_eq!(Rounding::HalfAwayFromZero.apply(-2.5), -3.0);
    }

    #[test]
    fn builder_validates_options() {
        assert_eq!(
            Config::builder().offset(0).build().unwrap_err(),
            ConfigError::InvalidOffset(0)
        );
        assert!(matches!(
            Config::builder().height(-1.0).build(),
            Err(ConfigError::InvalidHeight(_))
        ));
        assert!(matches!(
            Config::builder().max(f64::INFINITY).build(),
            Err(ConfigError::NonFiniteBound { field: "max", .. })
        ));
        let cfg = Config::builder().build().unwrap();
        assert_eq!(cfg.offset(), DEFAULT_OFFSET);
        assert_eq!(cfg.rounding(), Rounding::HalfEven);
    }
}
