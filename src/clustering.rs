use super::*;
use serde::Deserialize;

/// A fitted k-means result: centroids plus per-point cluster assignments.
///
/// The clustering itself is computed elsewhere; this type only holds the
/// outcome. Construction guarantees a rectangular `k × D` centroid matrix
/// with `k > 0` and `D > 0` holding only finite coordinates, and that every
/// label indexes an existing centroid. Nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Shape")]
pub struct Clustering {
    centroids: Vec<Vec<Coordinate>>,
    labels: Vec<usize>,
}

impl Clustering {
    pub fn new(centroids: Vec<Vec<Coordinate>>, labels: Vec<usize>) -> Result<Self, ReportError> {
        let k = centroids.len();
        let dims = centroids
            .first()
            .map(Vec::len)
            .ok_or(ReportError::Empty("centroid matrix"))?;
        if dims == 0 {
            return Err(ReportError::Empty("centroid row"));
        }
        if let Some((row, found)) = centroids
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, n)| *n != dims)
        {
            return Err(ReportError::Ragged {
                row,
                expected: dims,
                found,
            });
        }
        if let Some((row, col, _)) = centroids
            .iter()
            .enumerate()
            .flat_map(|(row, c)| c.iter().enumerate().map(move |(col, x)| (row, col, x)))
            .find(|(_, _, x)| !x.is_finite())
        {
            return Err(ReportError::NonFinite { row, col });
        }
        if let Some((index, &label)) = labels.iter().enumerate().find(|(_, l)| **l >= k) {
            return Err(ReportError::Label { index, label, k });
        }
        Ok(Self { centroids, labels })
    }

    /// Synthetic clustering with `k` centroids of width `dims` and `n`
    /// assigned points, coordinates drawn from the default bounds.
    /// Fails like [`Clustering::new`] when `k` or `dims` is zero.
    pub fn sample(k: usize, dims: usize, n: usize) -> Result<Self, ReportError> {
        let (lo, hi) = DEFAULT_BOUNDS;
        let centroids = (0..k)
            .map(|_| (0..dims).map(|_| rand::random_range(lo..hi)).collect())
            .collect();
        let empty = Self::new(centroids, vec![])?;
        let labels = (0..n).map(|_| rand::random_range(0..k)).collect();
        Ok(Self { labels, ..empty })
    }

    /// number of clusters
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    /// width of every centroid row
    pub fn dims(&self) -> usize {
        self.centroids[0].len()
    }
    pub fn centroids(&self) -> &[Vec<Coordinate>] {
        &self.centroids
    }
    pub fn centroid(&self, i: usize) -> &[Coordinate] {
        &self.centroids[i]
    }
    /// cluster index of each input point, in input order
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
    /// number of points assigned to each cluster
    pub fn populations(&self) -> Vec<usize> {
        self.labels
            .iter()
            .fold(vec![0; self.k()], |mut counts, &label| {
                counts[label] += 1;
                counts
            })
    }
}

/// Unchecked wire shape, validated into a [`Clustering`].
#[derive(Deserialize)]
struct Shape {
    centroids: Vec<Vec<Coordinate>>,
    #[serde(default)]
    labels: Vec<usize>,
}

impl TryFrom<Shape> for Clustering {
    type Error = ReportError;
    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        Self::new(shape.centroids, shape.labels)
    }
}
