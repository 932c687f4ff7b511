use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub job_title: String,
    pub question_text: String,
    pub question_type: String,
    pub difficulty: i32,
    pub is_flagged: bool,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-question label. `mixed` only exists at request level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Technical,
    Behavioral,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
        }
    }

    /// Lenient lookup used on model output: trims and ignores case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "technical" => Some(QuestionType::Technical),
            "behavioral" => Some(QuestionType::Behavioral),
            _ => None,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category requested for a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Mixed,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Technical => "technical",
            QuestionCategory::Behavioral => "behavioral",
            QuestionCategory::Mixed => "mixed",
        }
    }

    /// The type every question must carry, or `None` when the category is mixed.
    pub fn fixed_type(&self) -> Option<QuestionType> {
        match self {
            QuestionCategory::Technical => Some(QuestionType::Technical),
            QuestionCategory::Behavioral => Some(QuestionType::Behavioral),
            QuestionCategory::Mixed => None,
        }
    }
}

impl FromStr for QuestionCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(QuestionCategory::Technical),
            "behavioral" => Ok(QuestionCategory::Behavioral),
            "mixed" => Ok(QuestionCategory::Mixed),
            other => Err(Error::InvalidParameter(format!(
                "question_type must be one of technical, behavioral, mixed (got '{}')",
                other
            ))),
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question produced by the generation pipeline, not yet persisted.
///
/// `difficulty` is always within `1..=5` and `tags` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedQuestion {
    pub job_title: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub difficulty: i32,
    pub tags: String,
}
