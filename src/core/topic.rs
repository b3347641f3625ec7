//! Training topics.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of tips the athlete asked for.
///
/// The topic is injected into the system instructions sent with every
/// prompt and steers the shape of the reply (drills, meals, lifts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Ball handling.
    #[default]
    Dribbling,
    /// Shooting form and volume.
    Shooting,
    /// Passing and court vision.
    Passing,
    /// Meals and portion sizes.
    Diet,
    /// Strength and conditioning.
    PhysiqueTraining,
}

impl Topic {
    /// All topics, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Dribbling,
        Self::Shooting,
        Self::Passing,
        Self::Diet,
        Self::PhysiqueTraining,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dribbling => "Dribbling",
            Self::Shooting => "Shooting",
            Self::Passing => "Passing",
            Self::Diet => "Diet",
            Self::PhysiqueTraining => "Physique Training",
        }
    }

    /// Stable key used in storage.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dribbling => "dribbling",
            Self::Shooting => "shooting",
            Self::Passing => "passing",
            Self::Diet => "diet",
            Self::PhysiqueTraining => "physique_training",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Topic {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c })
            .collect();
        match normalized.as_str() {
            "dribbling" => Ok(Self::Dribbling),
            "shooting" => Ok(Self::Shooting),
            "passing" => Ok(Self::Passing),
            "diet" => Ok(Self::Diet),
            "physique" | "physique_training" => Ok(Self::PhysiqueTraining),
            _ => Err(CommandError::UnknownTopic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_topic() {
        assert_eq!(Topic::default(), Topic::Dribbling);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("Shooting".parse::<Topic>().unwrap(), Topic::Shooting);
        assert_eq!(
            "Physique Training".parse::<Topic>().unwrap(),
            Topic::PhysiqueTraining
        );
        assert_eq!(
            "physique-training".parse::<Topic>().unwrap(),
            Topic::PhysiqueTraining
        );
        assert_eq!("physique".parse::<Topic>().unwrap(), Topic::PhysiqueTraining);
        assert!("yoga".parse::<Topic>().is_err());
    }

    #[test]
    fn test_key_roundtrip() {
        for topic in Topic::ALL {
            assert_eq!(topic.key().parse::<Topic>().unwrap(), topic);
            assert_eq!(topic.label().parse::<Topic>().unwrap(), topic);
        }
    }
}
