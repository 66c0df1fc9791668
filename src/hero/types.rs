//! Type definitions for the hero module.

use serde::{Deserialize, Serialize};

/// A single hero record as returned by the remote APIs.
///
/// Every field defaults when missing, so a record without a `work`
/// object deserializes with an empty base and classifies as unemployed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub work: Work,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    #[serde(default)]
    pub gender: String,
    /// Ordered pair: informal string (e.g. "6'2"), formatted string
    /// (e.g. "188 cm"). Only the formatted string is normalized.
    #[serde(default)]
    pub height: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub occupation: String,
    /// Workplace; `""` or `"-"` mean unemployed.
    #[serde(default)]
    pub base: String,
}

/// Filter criteria for a tallest-hero search.
#[derive(Debug, Clone)]
pub struct HeroQuery {
    pub gender: String,
    pub has_job: bool,
}

impl HeroQuery {
    pub fn new(gender: &str, has_job: bool) -> Self {
        Self {
            gender: gender.to_string(),
            has_job,
        }
    }
}

impl Hero {
    /// The formatted height string, the second height descriptor.
    pub fn formatted_height(&self) -> &str {
        self.appearance.height.get(1).map(String::as_str).unwrap_or("")
    }
}
