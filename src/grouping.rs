use super::*;
use serde::Deserialize;
use serde::Serialize;

/// One named group of axes inside the concatenated feature vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    name: String,
    axes: Vec<String>,
}

impl Game {
    pub fn new(name: impl Into<String>, axes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            axes: axes.into_iter().map(Into::into).collect(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// axis labels, in column order
    pub fn axes(&self) -> &[String] {
        &self.axes
    }
    pub fn width(&self) -> usize {
        self.axes.len()
    }
}

/// Contiguous column range `[offset, offset + width)` of a centroid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    offset: usize,
    width: usize,
}

impl Segment {
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn width(&self) -> usize {
        self.width
    }
    /// Panics if the row is narrower than the segment end.
    pub fn slice<'a>(&self, row: &'a [Coordinate]) -> &'a [Coordinate] {
        &row[self.offset..self.offset + self.width]
    }
}

/// Ordered games with their column segments, computed once.
///
/// Each game owns as many columns as it has axes, laid out back to back in
/// game order. Widths may differ between games.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Game>")]
pub struct Grouping {
    games: Vec<Game>,
    segments: Vec<Segment>,
}

impl Grouping {
    pub fn new(games: Vec<Game>) -> Result<Self, ReportError> {
        if games.is_empty() {
            return Err(ReportError::Empty("grouping"));
        }
        if games.iter().any(|g| g.width() == 0) {
            return Err(ReportError::Empty("game"));
        }
        let segments = games
            .iter()
            .scan(0, |offset, game| {
                let segment = Segment {
                    offset: *offset,
                    width: game.width(),
                };
                *offset += game.width();
                Some(segment)
            })
            .collect();
        Ok(Self { games, segments })
    }

    /// Fails unless the games span exactly `dims` columns.
    pub fn check(&self, dims: usize) -> Result<(), ReportError> {
        match self.dims() {
            found if found == dims => Ok(()),
            found => Err(ReportError::Width {
                expected: dims,
                found,
            }),
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }
    pub fn game(&self, g: usize) -> &Game {
        &self.games[g]
    }
    pub fn segment(&self, g: usize) -> Segment {
        self.segments[g]
    }
    pub fn len(&self) -> usize {
        self.games.len()
    }
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
    /// total columns spanned by all games
    pub fn dims(&self) -> usize {
        self.segments.iter().map(Segment::width).sum()
    }
    /// true when every game has the same number of axes
    pub fn is_uniform(&self) -> bool {
        self.segments.windows(2).all(|w| w[0].width == w[1].width)
    }
    /// the slice of `row` belonging to game `g`
    pub fn slice<'a>(&self, g: usize, row: &'a [Coordinate]) -> &'a [Coordinate] {
        self.segment(g).slice(row)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Game, Segment)> + '_ {
        self.games.iter().zip(self.segments.iter().copied())
    }
}

impl TryFrom<Vec<Game>> for Grouping {
    type Error = ReportError;
    fn try_from(games: Vec<Game>) -> Result<Self, Self::Error> {
        Self::new(games)
    }
}

/// bare axis lists, games named by position
impl TryFrom<Vec<Vec<String>>> for Grouping {
    type Error = ReportError;
    fn try_from(axes: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        axes.into_iter()
            .enumerate()
            .map(|(g, axes)| Game::new(format!("game #{}", g), axes))
            .collect::<Vec<_>>()
            .pipe(Self::new)
    }
}

impl Arbitrary for Grouping {
    fn random() -> Self {
        let n = rand::random_range(1..=4);
        let w = rand::random_range(2..=6);
        (0..n)
            .map(|g| Game::new(format!("game-{}", g), (0..w).map(|a| format!("x{}", a))))
            .collect::<Vec<_>>()
            .pipe(Self::new)
            .expect("non-empty games of non-zero width")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouping() -> Grouping {
        Grouping::new(vec![
            Game::new("go", ["a", "b"]),
            Game::new("chess", ["c", "d", "e"]),
            Game::new("poker", ["f"]),
        ])
        .unwrap()
    }

    #[test]
    fn offsets_accumulate() {
        let g = grouping();
        assert_eq!(g.segment(0), Segment { offset: 0, width: 2 });
        assert_eq!(g.segment(1), Segment { offset: 2, width: 3 });
        assert_eq!(g.segment(2), Segment { offset: 5, width: 1 });
        assert_eq!(g.dims(), 6);
        assert!(!g.is_uniform());
    }

    #[test]
    fn slices_variable_widths() {
        let g = grouping();
        let row = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(g.slice(0, &row), &[0.0, 1.0]);
        assert_eq!(g.slice(1, &row), &[2.0, 3.0, 4.0]);
        assert_eq!(g.slice(2, &row), &[5.0]);
    }

    #[test]
    fn check_width() {
        let g = grouping();
        assert!(g.check(6).is_ok());
        assert!(matches!(
            g.check(7),
            Err(ReportError::Width {
                expected: 7,
                found: 6
            })
        ));
    }

    #[test]
    #[should_panic]
    fn short_row_panics() {
        grouping().slice(1, &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn rejects_empty() {
        assert!(Grouping::new(vec![]).is_err());
        assert!(Grouping::new(vec![Game::new("void", Vec::<String>::new())]).is_err());
    }

    #[test]
    fn bare_axis_lists() {
        let axes = vec![vec!["a".to_string(), "b".to_string()]; 3];
        let g = Grouping::try_from(axes).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.game(2).name(), "game #2");
        assert!(g.is_uniform());
    }

    #[test]
    fn deserialize_games() {
        let g = serde_json::from_str::<Grouping>(
            r#"[{"name":"go","axes":["a","b"]},{"name":"chess","axes":["c"]}]"#,
        )
        .unwrap();
        assert_eq!(g.dims(), 3);
        assert!(serde_json::from_str::<Grouping>("[]").is_err());
    }

    #[test]
    fn random_is_uniform() {
        let g = Grouping::random();
        assert!(g.is_uniform());
        assert!(!g.is_empty());
    }
}
