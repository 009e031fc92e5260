//! Feature kinds: the closed set of generation tasks the pipeline supports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A generation task. Each kind maps to exactly one prompt template; the
/// mapping is total and fixed at compile time, so adding a kind without a
/// template is a compile error, not a runtime lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Content,
    Quiz,
    Materials,
    Notes,
    Flashcards,
    Assistant,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 6] = [
        FeatureKind::Content,
        FeatureKind::Quiz,
        FeatureKind::Materials,
        FeatureKind::Notes,
        FeatureKind::Flashcards,
        FeatureKind::Assistant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Content => "content",
            FeatureKind::Quiz => "quiz",
            FeatureKind::Materials => "materials",
            FeatureKind::Notes => "notes",
            FeatureKind::Flashcards => "flashcards",
            FeatureKind::Assistant => "assistant",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature value outside the closed enumeration. This is a
/// caller/integration bug, raised at the boundary where external strings
/// enter the pipeline.
#[derive(Debug, Error)]
#[error("unknown feature '{0}'")]
pub struct InvalidFeature(pub String);

impl FromStr for FeatureKind {
    type Err = InvalidFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(FeatureKind::Content),
            "quiz" => Ok(FeatureKind::Quiz),
            "materials" => Ok(FeatureKind::Materials),
            "notes" => Ok(FeatureKind::Notes),
            "flashcards" => Ok(FeatureKind::Flashcards),
            "assistant" => Ok(FeatureKind::Assistant),
            other => Err(InvalidFeature(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_parses_from_its_display_form() {
        for kind in FeatureKind::ALL {
            let parsed: FeatureKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_feature_is_rejected() {
        let err = "nonexistent".parse::<FeatureKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown feature 'nonexistent'");
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert!("Quiz".parse::<FeatureKind>().is_err());
        assert!("FLASHCARDS".parse::<FeatureKind>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&FeatureKind::Flashcards).unwrap();
        assert_eq!(json, r#""flashcards""#);

        let kind: FeatureKind = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(kind, FeatureKind::Assistant);
    }

    #[test]
    fn test_all_covers_six_distinct_kinds() {
        let mut seen = std::collections::HashSet::new();
        for kind in FeatureKind::ALL {
            seen.insert(kind);
        }
        assert_eq!(seen.len(), 6);
    }
}
