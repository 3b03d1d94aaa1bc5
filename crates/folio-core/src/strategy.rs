//! Recommendation strategy tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RecommendError;

/// The three independent recommendation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Pearson correlation over co-rating readers.
    Correlation,
    /// Association rules mined from co-rated itemsets, ranked by lift.
    Association,
    /// Cosine similarity of author/genre term vectors.
    Content,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::Correlation, Self::Association, Self::Content];

    /// Canonical tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correlation => "correlation",
            Self::Association => "association",
            Self::Content => "content",
        }
    }

    /// Whether the strategy runs over the co-rating neighborhood.
    pub fn is_collaborative(self) -> bool {
        !matches!(self, Self::Content)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "correlation" | "corr" => Ok(Self::Correlation),
            "association" | "assoc" => Ok(Self::Association),
            "content" | "cb" => Ok(Self::Content),
            _ => Err(RecommendError::UnknownStrategy { tag: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_short_tags() {
        assert_eq!("correlation".parse::<Strategy>().unwrap(), Strategy::Correlation);
        assert_eq!("ASSOC".parse::<Strategy>().unwrap(), Strategy::Association);
        assert_eq!(" cb ".parse::<Strategy>().unwrap(), Strategy::Content);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "popularity".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, RecommendError::UnknownStrategy { ref tag } if tag == "popularity"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }

    #[test]
    fn only_content_skips_the_neighborhood() {
        assert!(Strategy::Correlation.is_collaborative());
        assert!(Strategy::Association.is_collaborative());
        assert!(!Strategy::Content.is_collaborative());
    }
}
