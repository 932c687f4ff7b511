use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_category, validate_question_type};

fn default_count() -> usize {
    5
}

fn default_category() -> String {
    "mixed".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateQuestionsPayload {
    #[validate(length(min = 2, max = 100))]
    pub job_title: String,
    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 100))]
    pub count: usize,
    #[serde(default = "default_category")]
    #[validate(custom(function = "validate_category"))]
    pub question_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuestionPayload {
    #[validate(length(min = 1, max = 255))]
    pub job_title: String,
    #[validate(length(min = 1))]
    pub question_text: String,
    #[validate(custom(function = "validate_question_type"))]
    pub question_type: String,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: Option<i32>,
    pub is_flagged: Option<bool>,
    #[validate(length(max = 500))]
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuestionPayload {
    #[validate(range(min = 1, max = 5))]
    pub difficulty: Option<i32>,
    pub is_flagged: Option<bool>,
    #[validate(length(max = 500))]
    pub tags: Option<String>,
}

impl UpdateQuestionPayload {
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none() && self.is_flagged.is_none() && self.tags.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuestionListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub job_title: Option<String>,
    pub question_type: Option<String>,
    pub flagged_only: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuestionSetPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub job_title: String,
    #[validate(length(min = 1))]
    pub question_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRatingPayload {
    pub question_id: Uuid,
    #[validate(range(min = 1.0, max = 5.0))]
    pub rating: f64,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_questions: i64,
    pub questions_by_type: BTreeMap<String, i64>,
    pub questions_by_job_title: BTreeMap<String, i64>,
    pub average_difficulty: f64,
    pub flagged_questions: i64,
    pub total_question_sets: i64,
}
