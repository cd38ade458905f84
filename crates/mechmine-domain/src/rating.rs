//! Rating module - the closed enumeration of manual review ratings

use serde::{Deserialize, Serialize};

/// Manual rating assigned to a match during human review.
///
/// The wire format is exactly the four strings `excellent`, `good`,
/// `weak`, and `false_positive`. Any other string is rejected at
/// deserialization rather than silently miscounted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Strong, clearly correct match
    Excellent,

    /// Correct match with minor caveats
    Good,

    /// Plausible but tenuous match
    Weak,

    /// Incorrect match
    FalsePositive,
}

impl Rating {
    /// Get the rating name as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Weak => "weak",
            Rating::FalsePositive => "false_positive",
        }
    }

    /// Parse a rating from its wire string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "excellent" => Some(Rating::Excellent),
            "good" => Some(Rating::Good),
            "weak" => Some(Rating::Weak),
            "false_positive" => Some(Rating::FalsePositive),
            _ => None,
        }
    }

    /// Whether this rating counts toward precision (excellent or good)
    pub fn is_precise(&self) -> bool {
        matches!(self, Rating::Excellent | Rating::Good)
    }
}

impl std::str::FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unrecognized rating: {}", s))
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_round_trip() {
        for rating in [
            Rating::Excellent,
            Rating::Good,
            Rating::Weak,
            Rating::FalsePositive,
        ] {
            assert_eq!(Rating::parse(rating.as_str()), Some(rating));
        }
    }

    #[test]
    fn test_unknown_rating_rejected() {
        assert_eq!(Rating::parse("mediocre"), None);
        assert!("mediocre".parse::<Rating>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Rating::FalsePositive).unwrap();
        assert_eq!(json, "\"false_positive\"");

        let parsed: Rating = serde_json::from_str("\"weak\"").unwrap();
        assert_eq!(parsed, Rating::Weak);
    }

    #[test]
    fn test_serde_rejects_unknown_variant() {
        let result: Result<Rating, _> = serde_json::from_str("\"superb\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_precise() {
        assert!(Rating::Excellent.is_precise());
        assert!(Rating::Good.is_precise());
        assert!(!Rating::Weak.is_precise());
        assert!(!Rating::FalsePositive.is_precise());
    }
}
