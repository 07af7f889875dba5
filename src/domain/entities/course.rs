//! Course entity and its difficulty level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Difficulty level of a course.
///
/// The set is closed: the stored and serialized labels are the three French
/// names below, and anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Level {
    #[serde(rename = "Débutant")]
    Beginner,
    #[serde(rename = "Intermédiaire")]
    Intermediate,
    #[serde(rename = "Avancé")]
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Returns the label used on the wire and in the `courses.level` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Débutant",
            Level::Intermediate => "Intermédiaire",
            Level::Advanced => "Avancé",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known level labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub level: Level,
}

impl Course {
    /// Creates a new Course instance.
    pub fn new(id: Uuid, title: String, description: String, level: Level) -> Self {
        Self {
            id,
            title,
            description,
            level,
        }
    }

    /// Returns a copy of this course with every field present in `patch` replaced.
    pub fn merged(&self, patch: &CoursePatch) -> Course {
        Course {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            level: patch.level.unwrap_or(self.level),
        }
    }
}

/// Input data for creating a new course. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub level: Level,
}

/// Partial update for an existing course.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<Level>,
}

impl CoursePatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.level.is_none()
    }
}
