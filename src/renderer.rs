use super::*;
use std::io::Write;

/// Writes the text report and, when enabled, lays out one panel per game.
///
/// The renderer owns only its [`Options`]. Output and plotting surface are
/// passed in per call, so nothing global is touched and the figure is never
/// shown or saved here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Renderer {
    options: Options,
}

impl From<Options> for Renderer {
    fn from(options: Options) -> Self {
        Self { options }
    }
}

impl Renderer {
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Shape is checked before anything is written. With plotting disabled
    /// the plotter receives no calls at all.
    pub fn render<W, P>(
        &self,
        clustering: &Clustering,
        grouping: &Grouping,
        out: &mut W,
        plotter: &mut P,
    ) -> Result<(), ReportError>
    where
        W: Write + ?Sized,
        P: Plotter + ?Sized,
    {
        log::info!(
            "{:<32}{:<32}",
            "rendering report",
            format!("k={} games={}", clustering.k(), grouping.len())
        );
        let report = Report::new(clustering, grouping)?.raw_labels(self.options.raw_labels);
        write!(out, "{}", report)?;
        out.flush()?;
        if self.options.plot {
            self.plot(clustering, grouping, plotter);
        }
        Ok(())
    }

    fn plot<P>(&self, clustering: &Clustering, grouping: &Grouping, plotter: &mut P)
    where
        P: Plotter + ?Sized,
    {
        log::info!("{:<32}{:<32}", "plotting panels", grouping.len());
        plotter.split(grouping.len());
        for (g, (game, segment)) in grouping.iter().enumerate() {
            log::debug!("{:<32}{:<32}", "plotting game", game.name());
            plotter.axes(g, game.name(), game.axes());
            for k in 0..clustering.k() {
                let ref label = format!("Cluster #{}", k);
                plotter.line(g, label, segment.slice(clustering.centroid(k)));
            }
            if let Some(bounds) = self.options.bounds {
                plotter.bounds(g, bounds);
            }
            plotter.legend(g, Corner::UpperRight);
        }
    }
}

/// Prints the report to stdout and returns the figure when plotting is on.
pub fn render(
    clustering: &Clustering,
    grouping: &Grouping,
    options: Options,
) -> Result<Option<Figure>, ReportError> {
    let mut figure = Figure::default();
    let ref mut stdout = std::io::stdout().lock();
    Renderer::from(options).render(clustering, grouping, stdout, &mut figure)?;
    Ok(options.plot.then_some(figure))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Clustering, Grouping) {
        let clustering = Clustering::new(
            vec![
                vec![1.0, 2.0, 3.0, 4.0, 5.0],
                vec![2.5, 2.5, 2.5, 2.5, 2.5],
                vec![3.0, 2.0, 1.0, 0.0, -1.0],
            ],
            vec![0, 2, 1, 1],
        )
        .unwrap();
        let grouping = Grouping::new(vec![
            Game::new("go", ["a", "b"]),
            Game::new("chess", ["c", "d", "e"]),
        ])
        .unwrap();
        (clustering, grouping)
    }

    #[test]
    fn figure_matches_grouping() {
        let (c, g) = fixture();
        let mut out = Vec::new();
        let mut figure = Figure::default();
        Renderer::from(Options::default().plot(true))
            .render(&c, &g, &mut out, &mut figure)
            .unwrap();
        assert_eq!(figure.len(), 2);
        assert_eq!(figure.panel(1).title(), "chess");
        assert_eq!(figure.panel(1).axes(), &["c", "d", "e"]);
        assert_eq!(figure.panel(1).series()[2].label(), "Cluster #2");
        assert_eq!(figure.panel(1).series()[2].values(), &[1.0, 0.0, -1.0]);
        assert!(figure.iter().all(|p| p.legend() == Some(Corner::UpperRight)));
    }

    #[test]
    fn no_figure_without_plot() {
        let (c, g) = fixture();
        let mut out = Vec::new();
        let mut figure = Figure::default();
        Renderer::default()
            .render(&c, &g, &mut out, &mut figure)
            .unwrap();
        assert!(figure.is_empty());
        assert!(!out.is_empty());
    }

    #[test]
    fn auto_scale_leaves_bounds_unset() {
        let (c, g) = fixture();
        let mut figure = Figure::default();
        Renderer::from(Options::default().plot(true).bounds(None))
            .render(&c, &g, &mut std::io::sink(), &mut figure)
            .unwrap();
        assert!(figure.iter().all(|p| p.bounds().is_none()));
    }
}
