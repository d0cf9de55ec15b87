use serde::{Deserialize, Serialize};

/// One of the five skin-type buckets assigned by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Sensitive,
    Normal,
    /// Only reachable through deserialization of a client-supplied profile.
    #[serde(other)]
    Unspecified,
}

impl SkinType {
    /// Tie-break order for the quiz: the earliest entry wins on equal scores.
    pub const PRIORITY: [SkinType; 5] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
        SkinType::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::Normal => "normal",
            SkinType::Unspecified => "unspecified",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bracket from the last quiz question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "under-18")]
    Under18,
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46+")]
    Over46,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl AgeRange {
    /// Option order of the age question.
    pub const BRACKETS: [AgeRange; 5] = [
        AgeRange::Under18,
        AgeRange::From18To25,
        AgeRange::From26To35,
        AgeRange::From36To45,
        AgeRange::Over46,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::Under18 => "under-18",
            AgeRange::From18To25 => "18-25",
            AgeRange::From26To35 => "26-35",
            AgeRange::From36To45 => "36-45",
            AgeRange::Over46 => "46+",
            AgeRange::Unknown => "unknown",
        }
    }
}

/// Quiz-derived profile consumed by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinProfile {
    pub skin_type: SkinType,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub age_range: AgeRange,
}
