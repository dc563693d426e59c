use super::*;

/// Text dump of every centroid, one line per (cluster, game) pair.
///
/// ```text
/// Labels: [0, 1, 1]
///
/// Cluster #0:
///   go              ['1.000', '2.000']
///   chess           ['3.000', '4.000', '5.000']
/// Cluster #1:
///   ...
/// ```
///
/// Clusters come in index order, games in grouping order. The label line is
/// only present when requested.
pub struct Report<'a> {
    clustering: &'a Clustering,
    grouping: &'a Grouping,
    raw_labels: bool,
}

impl<'a> Report<'a> {
    /// Fails if the games do not span the centroid width exactly.
    pub fn new(clustering: &'a Clustering, grouping: &'a Grouping) -> Result<Self, ReportError> {
        grouping.check(clustering.dims())?;
        Ok(Self {
            clustering,
            grouping,
            raw_labels: false,
        })
    }
    pub fn raw_labels(self, raw_labels: bool) -> Self {
        Self { raw_labels, ..self }
    }
    /// centroid slices of cluster `i`, one per game
    pub fn cluster(&self, i: usize) -> impl Iterator<Item = (&'a Game, &'a [Coordinate])> + '_ {
        let row = self.clustering.centroid(i);
        self.grouping.iter().map(move |(game, seg)| (game, seg.slice(row)))
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.raw_labels {
            writeln!(f, "Labels: {:?}", self.clustering.labels())?;
            writeln!(f)?;
        }
        for i in 0..self.clustering.k() {
            writeln!(f, "Cluster #{}:", i)?;
            for (game, values) in self.cluster(i) {
                writeln!(f, "  {:<w$} {}", game.name(), Values(values), w = NAME_WIDTH)?;
            }
        }
        Ok(())
    }
}

/// Bracketed list of quoted fixed-point values, e.g. `['1.000', '-0.123']`.
///
/// Values go through `{:.3}`: the exact binary value is rounded to nearest,
/// with exact ties going to even, and never in scientific notation.
pub struct Values<'a>(pub &'a [Coordinate]);

impl std::fmt::Display for Values<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (j, x) in self.0.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{:.*}'", PRECISION, x)?;
        }
        write!(f, "]")
    }
}
