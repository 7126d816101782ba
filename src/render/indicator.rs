use crate::models::Score;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How a score is drawn. Every textual source (env, CLI, query string) goes
/// through [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum IndicatorStyle {
    /// One dot per point, nothing for missing points.
    #[default]
    Dot,
    /// Always `Score::MAX` stars, the first `score` of them filled.
    Star,
}

impl IndicatorStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorStyle::Dot => "dot",
            IndicatorStyle::Star => "star",
        }
    }

    pub fn legend(self) -> &'static str {
        match self {
            IndicatorStyle::Dot => "● Liked · ●● Really liked · ●●● Loved",
            IndicatorStyle::Star => "★ Liked · ★★ Really liked · ★★★ Loved",
        }
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" | "dots" => Ok(IndicatorStyle::Dot),
            "star" | "stars" => Ok(IndicatorStyle::Star),
            other => anyhow::bail!("Unknown indicator style '{}' (expected dot or star)", other),
        }
    }
}

impl TryFrom<String> for IndicatorStyle {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Filled,
    Unfilled,
}

pub fn indicator(score: Score, style: IndicatorStyle) -> Vec<Mark> {
    let filled = usize::from(score.get());
    let total = match style {
        IndicatorStyle::Dot => filled,
        IndicatorStyle::Star => usize::from(Score::MAX),
    };
    (0..total)
        .map(|i| if i < filled { Mark::Filled } else { Mark::Unfilled })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: i64) -> Score {
        Score::new(v).unwrap()
    }

    #[test]
    fn dots_match_score_exactly() {
        for v in 0..=3 {
            let marks = indicator(score(v), IndicatorStyle::Dot);
            assert_eq!(marks.len(), v as usize);
            assert!(marks.iter().all(|m| *m == Mark::Filled));
        }
    }

    #[test]
    fn stars_always_total_three_with_leading_filled() {
        for v in 0..=3 {
            let marks = indicator(score(v), IndicatorStyle::Star);
            assert_eq!(marks.len(), 3);
            let filled = marks.iter().take_while(|m| **m == Mark::Filled).count();
            assert_eq!(filled, v as usize);
            assert!(marks[filled..].iter().all(|m| *m == Mark::Unfilled));
        }
    }

    #[test]
    fn zero_score_has_no_filled_marks() {
        assert!(indicator(score(0), IndicatorStyle::Dot).is_empty());
        assert_eq!(
            indicator(score(0), IndicatorStyle::Star),
            vec![Mark::Unfilled; 3]
        );
    }

    #[test]
    fn parses_style_names() {
        assert_eq!("dot".parse::<IndicatorStyle>().unwrap(), IndicatorStyle::Dot);
        assert_eq!(" Stars ".parse::<IndicatorStyle>().unwrap(), IndicatorStyle::Star);
        assert!("moon".parse::<IndicatorStyle>().is_err());
        assert_eq!(IndicatorStyle::default(), IndicatorStyle::Dot);
    }

    #[test]
    fn deserializes_through_from_str() {
        for raw in ["star", "Star", "STARS"] {
            assert_eq!(
                IndicatorStyle::try_from(raw.to_string()).unwrap(),
                IndicatorStyle::Star
            );
        }
        assert!(IndicatorStyle::try_from(String::new()).is_err());
    }
}
