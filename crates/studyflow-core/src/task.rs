//! Task types for study planning.
//!
//! A [`Task`] is what the user enters on the task screen: a name, a
//! subject, how hard it is, how urgent it is, and a deadline. Tasks are
//! immutable once added; the planner consumes them as a read-only slice.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// How demanding a task is. Drives the base session duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Integer encoding used for comparison ordering (easy=1 .. hard=3).
    pub fn weight(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// How urgent a task is. Primary sort key for the planner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Integer encoding used for comparison ordering (low=1 .. high=3).
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(s)
    }
}

/// Self-reported energy state. Read by the planner and the suggestion
/// generator; a single process-wide value set by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Tired,
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Neutral
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
        };
        f.write_str(s)
    }
}

/// A study task as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub subject: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub priority: Priority,
    /// Deadline date as entered, `YYYY-MM-DD`.
    pub deadline: String,
}

impl Task {
    /// Check the required fields before the task crosses into planning.
    ///
    /// Name, subject, and deadline must be non-empty. Difficulty and
    /// priority always carry a value, so only the free-text fields can
    /// be missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "subject" });
        }
        if self.deadline.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "deadline" });
        }
        Ok(())
    }
}
