//! Closed enumerations for the portal domain.
//!
//! Wire strings match the server's JSON exactly ("AI/ML", "In Review"), so
//! serialization uses per-variant renames rather than a blanket case rule.
//! `ProjectStatus` carries `allowed_next_states()` to enforce valid
//! transitions at the application layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Technology
// ---------------------------------------------------------------------------

/// Technology track a project is requested under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technology {
    Python,
    Java,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "IoT")]
    Iot,
    Web,
    Android,
}

impl Technology {
    /// All tracks, in the order the portal lists them.
    pub const ALL: [Self; 6] = [
        Self::Python,
        Self::Java,
        Self::AiMl,
        Self::Iot,
        Self::Web,
        Self::Android,
    ];

    /// Return the wire string used in API payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Java => "Java",
            Self::AiMl => "AI/ML",
            Self::Iot => "IoT",
            Self::Web => "Web",
            Self::Android => "Android",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technology {
    type Err = String;

    /// Parse a user-supplied value, tolerant of case and `-`/`_`/`/`
    /// separators ("ai-ml", "AI/ML", "iot" all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "python" => Ok(Self::Python),
            "java" => Ok(Self::Java),
            "ai ml" | "aiml" => Ok(Self::AiMl),
            "iot" => Ok(Self::Iot),
            "web" => Ok(Self::Web),
            "android" => Ok(Self::Android),
            _ => Err(format!("unknown technology '{s}' (expected one of: Python, Java, AI/ML, IoT, Web, Android)")),
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Delivery status of a project request.
///
/// ```text
/// Requested → In Review → In Development → Completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Requested,
    #[serde(rename = "In Review")]
    InReview,
    #[serde(rename = "In Development")]
    InDevelopment,
    Completed,
}

impl ProjectStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Requested => &[Self::InReview],
            Self::InReview => &[Self::InDevelopment],
            Self::InDevelopment => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Return the wire string used in API payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::InReview => "In Review",
            Self::InDevelopment => "In Development",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "requested" => Ok(Self::Requested),
            "in review" => Ok(Self::InReview),
            "in development" => Ok(Self::InDevelopment),
            "completed" => Ok(Self::Completed),
            _ => Err(format!(
                "unknown status '{s}' (expected one of: Requested, In Review, In Development, Completed)"
            )),
        }
    }
}

/// Lowercase and collapse `-`, `_`, and `/` separators to single spaces.
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', '_', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
