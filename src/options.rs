use super::*;

/// Fixed vertical range shared by every plot panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lo: Coordinate,
    hi: Coordinate,
}

impl Bounds {
    /// Rejects non-finite ends, `lo >= hi`, and spans too wide to represent.
    pub fn new(lo: Coordinate, hi: Coordinate) -> Result<Self, ReportError> {
        if lo.is_finite() && hi.is_finite() && lo < hi && (hi - lo).is_finite() {
            Ok(Self { lo, hi })
        } else {
            Err(ReportError::Bounds { lo, hi })
        }
    }
    pub fn lo(&self) -> Coordinate {
        self.lo
    }
    pub fn hi(&self) -> Coordinate {
        self.hi
    }
    /// Smallest padded range covering `values`, for panels without fixed bounds.
    pub fn fit(values: impl IntoIterator<Item = Coordinate>) -> Self {
        let (lo, hi) = values
            .into_iter()
            .filter(|x| x.is_finite())
            .map(|x| x.clamp(-AUTO_LIMIT, AUTO_LIMIT))
            .fold((Coordinate::MAX, Coordinate::MIN), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        match (lo, hi) {
            (lo, hi) if lo > hi => Self { lo: 0.0, hi: 1.0 },
            (lo, hi) => {
                let span = hi - lo;
                let scale = if span > 0.0 { span } else { lo.abs() };
                let pad = (scale * AUTO_PADDING).max(AUTO_PADDING);
                Self {
                    lo: lo - pad,
                    hi: hi + pad,
                }
            }
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        let (lo, hi) = DEFAULT_BOUNDS;
        Self { lo, hi }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Rendering switches for a single report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// vertical bounds for every panel; `None` auto-scales
    pub bounds: Option<Bounds>,
    /// print the raw per-point assignments before the report
    pub raw_labels: bool,
    /// build plot panels in addition to the text report
    pub plot: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bounds: Some(Bounds::default()),
            raw_labels: false,
            plot: false,
        }
    }
}

impl Options {
    pub fn bounds(self, bounds: Option<Bounds>) -> Self {
        Self { bounds, ..self }
    }
    pub fn raw_labels(self, raw_labels: bool) -> Self {
        Self { raw_labels, ..self }
    }
    pub fn plot(self, plot: bool) -> Self {
        Self { plot, ..self }
    }
}
