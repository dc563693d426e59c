use super::*;

/// Legend anchor inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    #[default]
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

/// Plotting surface the renderer draws through.
///
/// Calls arrive in a fixed order: one `split` call, then for each panel its
/// `axes`, every `line`, optionally `bounds`, and finally `legend`. Panels are
/// stacked vertically in index order. Implementations decide whether and
/// when anything reaches a screen or file.
pub trait Plotter {
    /// Allocates `count` empty panels, discarding any previous layout.
    fn split(&mut self, count: usize);
    /// Titles the panel and sets its categorical horizontal axis.
    fn axes(&mut self, panel: usize, title: &str, names: &[String]);
    /// Adds one labeled series, one value per horizontal category.
    fn line(&mut self, panel: usize, label: &str, values: &[Coordinate]);
    /// Fixes the vertical range.
    fn bounds(&mut self, panel: usize, bounds: Bounds);
    /// Shows a legend of all series at the given corner.
    fn legend(&mut self, panel: usize, corner: Corner);
}

