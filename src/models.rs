use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowError {
    #[error("score {score} for '{title}' is outside 0..={max}", max = Score::MAX)]
    InvalidScore { title: String, score: i64 },

    #[error("show at position {position} has an empty title")]
    EmptyTitle { position: usize },
}

/// Rating in the closed range `0..=Score::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 3;

    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Score)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    title: String,
    score: Score,
    watching: Option<bool>,
}

impl Show {
    pub fn new(
        title: impl Into<String>,
        score: i64,
        watching: Option<bool>,
    ) -> Result<Self, ShowError> {
        Self::at_position(0, title.into(), score, watching)
    }

    fn at_position(
        position: usize,
        title: String,
        score: i64,
        watching: Option<bool>,
    ) -> Result<Self, ShowError> {
        if title.trim().is_empty() {
            return Err(ShowError::EmptyTitle { position });
        }
        let score = Score::new(score).ok_or_else(|| ShowError::InvalidScore {
            title: title.clone(),
            score,
        })?;
        Ok(Self {
            title,
            score,
            watching,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn watching(&self) -> Option<bool> {
        self.watching
    }

    /// Absent `watching` counts as not watching.
    pub fn is_watching(&self) -> bool {
        self.watching.unwrap_or(false)
    }
}

/// Literal form of a show, suitable for `const` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowEntry {
    pub title: &'static str,
    pub score: i64,
    pub watching: Option<bool>,
}

impl ShowEntry {
    pub const fn new(title: &'static str, score: i64) -> Self {
        Self {
            title,
            score,
            watching: None,
        }
    }

    pub const fn watching(self) -> Self {
        Self {
            watching: Some(true),
            ..self
        }
    }
}

/// Ordered, read-only list of validated shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowList {
    shows: Vec<Show>,
}

impl ShowList {
    pub fn from_entries(entries: &[ShowEntry]) -> Result<Self, ShowError> {
        let shows = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                Show::at_position(
                    position,
                    entry.title.to_string(),
                    entry.score,
                    entry.watching,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { shows })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Show> {
        self.shows.iter()
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

impl From<Vec<Show>> for ShowList {
    fn from(shows: Vec<Show>) -> Self {
        Self { shows }
    }
}

impl<'a> IntoIterator for &'a ShowList {
    type Item = &'a Show;
    type IntoIter = std::slice::Iter<'a, Show>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
