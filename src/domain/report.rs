use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score a report can carry.
pub const MAX_SCORE: i64 = 100;

/// Lower bound (inclusive) of the positive tier.
pub const POSITIVE_THRESHOLD: i64 = 70;

/// Lower bound (inclusive) of the caution tier.
pub const CAUTION_THRESHOLD: i64 = 40;

/// Shown in place of feedback when a report has none.
pub const FEEDBACK_PLACEHOLDER: &str = "No feedback provided yet.";

/// Opaque identifier of one practice session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Summary of a single practice session as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub session_id: SessionId,
    /// Score in `[0, 100]`. Absent when the session has not been graded.
    #[serde(default)]
    pub total_score: Option<i64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl ReportSummary {
    pub fn new(session_id: impl Into<String>, total_score: Option<i64>) -> Self {
        Self {
            session_id: SessionId::new(session_id),
            total_score,
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    /// Display score: missing scores count as 0, out-of-range values are clamped.
    pub fn score(&self) -> i64 {
        self.total_score.unwrap_or(0).clamp(0, MAX_SCORE)
    }

    pub fn tier(&self) -> Tier {
        tier_of(self.score())
    }

    /// Fill fraction of the progress bar, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        self.score() as f32 / MAX_SCORE as f32
    }

    pub fn feedback_text(&self) -> &str {
        match self.feedback.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => FEEDBACK_PLACEHOLDER,
        }
    }
}

/// Reports in the order the source delivered them.
pub type ReportCollection = Vec<ReportSummary>;

/// Severity bucket derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Positive,
    Caution,
    Negative,
}

/// Single source of truth for score -> tier; every color decision goes through here.
pub fn tier_of(score: i64) -> Tier {
    if score >= POSITIVE_THRESHOLD {
        Tier::Positive
    } else if score >= CAUTION_THRESHOLD {
        Tier::Caution
    } else {
        Tier::Negative
    }
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Positive => "Strong",
            Tier::Caution => "Developing",
            Tier::Negative => "Needs work",
        }
    }
}
