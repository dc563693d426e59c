//! Per-game reports over k-means centroids.
//!
//! A clustering is fitted elsewhere on feature vectors built by concatenating
//! several "games", each contributing a contiguous run of labeled axes. This
//! crate prints every centroid game by game and, on request, lays out one line
//! plot panel per game with a line for each cluster.
//!
//! ## Core Types
//!
//! - [`Clustering`] — Centroid matrix and point assignments
//! - [`Grouping`] — Named games mapped to column segments of the centroids
//! - [`Options`] — Axis bounds and output toggles
//! - [`Report`] — The textual per-cluster, per-game dump
//! - [`Renderer`] — Writes the report and drives a [`Plotter`]
//! - [`Figure`] — In-memory [`Plotter`] that draws itself with plotters
#[cfg(feature = "cli")]
mod args;
mod clustering;
mod error;
mod figure;
mod grouping;
mod options;
mod plotter;
mod renderer;
mod report;

#[cfg(feature = "cli")]
pub use args::*;
pub use clustering::*;
pub use error::*;
pub use figure::*;
pub use grouping::*;
pub use options::*;
pub use plotter::*;
pub use renderer::*;
pub use report::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single centroid coordinate.
pub type Coordinate = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for fixtures and demos.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Postfix application, keeps builder chains flat.
pub(crate) trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}
impl<T> Pipe for T {}

// ============================================================================
// RENDERING PARAMETERS
// ============================================================================
/// Default vertical bounds applied to every plot panel.
pub const DEFAULT_BOUNDS: (Coordinate, Coordinate) = (1.5, 4.0);
/// Decimal places printed per centroid value.
pub const PRECISION: usize = 3;
/// Column width reserved for game names in the text report.
pub const NAME_WIDTH: usize = 16;
/// Figure width in pixels.
pub const FIGURE_WIDTH: u32 = 1000;
/// Figure height in pixels, shared by all stacked panels.
pub const FIGURE_HEIGHT: u32 = 1000;
/// Padding added around auto-scaled vertical ranges.
pub const AUTO_PADDING: Coordinate = 0.1;
/// Auto-scaled data is clamped to this magnitude so padded ranges stay finite.
pub const AUTO_LIMIT: Coordinate = Coordinate::MAX / 4.0;
/// Points assigned in synthetic clusterings.
pub const SAMPLE_POINTS: usize = 256;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
