use super::*;
use anyhow::Context;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// One labeled line across a panel's categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    label: String,
    values: Vec<Coordinate>,
}

impl Series {
    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn values(&self) -> &[Coordinate] {
        &self.values
    }
}

/// A single chart: one integer tick per axis name, any number of series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    title: String,
    axes: Vec<String>,
    series: Vec<Series>,
    bounds: Option<Bounds>,
    legend: Option<Corner>,
}

impl Panel {
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn axes(&self) -> &[String] {
        &self.axes
    }
    pub fn series(&self) -> &[Series] {
        &self.series
    }
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
    pub fn legend(&self) -> Option<Corner> {
        self.legend
    }

    /// vertical range: fixed bounds if set, otherwise fitted to the data
    fn range(&self) -> Bounds {
        self.bounds.unwrap_or_else(|| {
            Bounds::fit(
                self.series
                    .iter()
                    .flat_map(|s| s.values.iter().copied()),
            )
        })
    }

    fn draw<DB>(&self, area: &DrawingArea<DB, Shift>) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let n = self.axes.len().max(1) as i32;
        let ref range = self.range();
        let mut chart = ChartBuilder::on(area)
            .caption(&self.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(-1..n, range.lo()..range.hi())?;
        // one integer tick per category, padded by one empty tick on each side
        let names = |x: &i32| {
            usize::try_from(*x)
                .ok()
                .and_then(|i| self.axes.get(i))
                .cloned()
                .unwrap_or_default()
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n as usize + 2)
            .x_label_formatter(&names)
            .draw()?;
        for (k, series) in self.series.iter().enumerate() {
            let color = Palette99::pick(k).to_rgba();
            chart
                .draw_series(LineSeries::new(
                    series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| (i as i32, *v)),
                    &color,
                ))?
                .label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        if let Some(corner) = self.legend {
            chart
                .configure_series_labels()
                .position(position(corner))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }
        Ok(())
    }
}

fn position(corner: Corner) -> SeriesLabelPosition {
    match corner {
        Corner::UpperRight => SeriesLabelPosition::UpperRight,
        Corner::UpperLeft => SeriesLabelPosition::UpperLeft,
        Corner::LowerRight => SeriesLabelPosition::LowerRight,
        Corner::LowerLeft => SeriesLabelPosition::LowerLeft,
    }
}

/// In-memory [`Plotter`]: records panels, draws only when asked.
///
/// Rendering into a `Figure` never touches a display or the filesystem.
/// Call [`Figure::draw`] with any plotters drawing area, or
/// [`Figure::save`] to write an SVG file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    panels: Vec<Panel>,
}

impl Figure {
    pub fn panel(&self, i: usize) -> &Panel {
        &self.panels[i]
    }
    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }
    pub fn len(&self) -> usize {
        self.panels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Draws all panels stacked top to bottom onto `root`.
    pub fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let areas = root.split_evenly((self.len().max(1), 1));
        for (panel, area) in self.panels.iter().zip(areas.iter()) {
            panel.draw(area)?;
        }
        root.present()?;
        Ok(())
    }

    /// Writes the figure as an SVG file.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        log::info!("{:<32}{:<32}", "saving figure", path.display().to_string());
        let root = SVGBackend::new(path, (FIGURE_WIDTH, FIGURE_HEIGHT)).into_drawing_area();
        self.draw(&root)
            .with_context(|| format!("draw figure to {}", path.display()))
    }
}

impl Plotter for Figure {
    fn split(&mut self, count: usize) {
        self.panels = vec![Panel::default(); count];
    }
    fn axes(&mut self, panel: usize, title: &str, names: &[String]) {
        let ref mut p = self.panels[panel];
        p.title = title.to_string();
        p.axes = names.to_vec();
    }
    fn line(&mut self, panel: usize, label: &str, values: &[Coordinate]) {
        self.panels[panel].series.push(Series {
            label: label.to_string(),
            values: values.to_vec(),
        });
    }
    fn bounds(&mut self, panel: usize, bounds: Bounds) {
        self.panels[panel].bounds = Some(bounds);
    }
    fn legend(&mut self, panel: usize, corner: Corner) {
        self.panels[panel].legend = Some(corner);
    }
}
