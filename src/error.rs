use crate::Coordinate;

/// Errors raised while assembling or writing a report.
///
/// Shape errors are detected before any output is produced, so a malformed
/// grouping never yields a silently misaligned report.
#[derive(Debug)]
pub enum ReportError {
    /// An empty centroid matrix, grouping, or game.
    Empty(&'static str),
    /// A centroid row whose width differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A centroid coordinate that is NaN or infinite.
    NonFinite { row: usize, col: usize },
    /// A point assigned to a cluster that does not exist.
    Label { index: usize, label: usize, k: usize },
    /// Grouping width does not match centroid width.
    Width { expected: usize, found: usize },
    /// Vertical axis bounds that are inverted, not finite, or too far apart.
    Bounds { lo: Coordinate, hi: Coordinate },
    Io(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(what) => write!(f, "empty {}", what),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "centroid row {} has {} columns, expected {}",
                row, found, expected
            ),
            Self::NonFinite { row, col } => {
                write!(f, "centroid row {} column {} is not finite", row, col)
            }
            Self::Label { index, label, k } => write!(
                f,
                "point {} is assigned to cluster {} but k = {}",
                index, label, k
            ),
            Self::Width { expected, found } => write!(
                f,
                "games span {} columns but centroids have {}",
                found, expected
            ),
            Self::Bounds { lo, hi } => write!(f, "invalid axis bounds [{}, {}]", lo, hi),
            Self::Io(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_message_names_both_sides() {
        let e = ReportError::Width {
            expected: 6,
            found: 5,
        };
        assert_eq!(e.to_string(), "games span 5 columns but centroids have 6");
    }

    #[test]
    fn io_has_source() {
        use std::error::Error;
        let e = ReportError::from(std::io::Error::other("closed"));
        assert!(e.source().is_some());
        assert!(ReportError::Empty("grouping").source().is_none());
    }
}
