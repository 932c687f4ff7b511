//! Keyword tables used to label questions recovered from free text.
//!
//! All matching is case-insensitive substring matching on the question text.

use crate::models::question::{QuestionCategory, QuestionType};

pub const DEFAULT_DIFFICULTY: i32 = 3;
pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

/// Any of these marks a question as behavioral in a mixed request.
pub const BEHAVIORAL_KEYWORDS: &[&str] = &[
    "experience",
    "team",
    "conflict",
    "leadership",
    "challenge",
    "difficult",
    "situation",
    "example",
    "disagree",
    "feedback",
    "mistake",
    "proud",
    "improve",
    "strength",
    "weakness",
];

pub struct DifficultyRule {
    pub keywords: &'static [&'static str],
    pub difficulty: i32,
}

/// Checked in order; the first rule with a matching keyword wins.
pub const DIFFICULTY_RULES: &[DifficultyRule] = &[
    DifficultyRule {
        keywords: &["basic", "simple", "beginner", "fundamental"],
        difficulty: 2,
    },
    DifficultyRule {
        keywords: &["senior", "advanced", "complex", "architecture", "design"],
        difficulty: 5,
    },
];

/// Questions longer than this many words default to `LONG_QUESTION_DIFFICULTY`.
pub const LONG_QUESTION_WORDS: usize = 25;
pub const LONG_QUESTION_DIFFICULTY: i32 = 4;

/// Appended to the tag list when found; spaces become underscores.
pub const TAG_KEYWORDS: &[&str] = &[
    "design",
    "algorithm",
    "data structure",
    "architecture",
    "database",
    "performance",
    "scalability",
    "leadership",
    "teamwork",
    "communication",
    "problem-solving",
    "api",
    "testing",
    "deployment",
    "security",
    "optimization",
];

fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

/// Fallback tag string for a job title: lower-cased words joined by commas.
pub fn job_title_slug(job_title: &str) -> String {
    let slug = job_title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(",");
    if slug.is_empty() {
        "general".to_string()
    } else {
        slug
    }
}

pub fn classify_type(text: &str, category: QuestionCategory) -> QuestionType {
    if let Some(fixed) = category.fixed_type() {
        return fixed;
    }
    if contains_any(&text.to_lowercase(), BEHAVIORAL_KEYWORDS) {
        QuestionType::Behavioral
    } else {
        QuestionType::Technical
    }
}

pub fn estimate_difficulty(text: &str) -> i32 {
    let lowered = text.to_lowercase();
    if let Some(rule) = DIFFICULTY_RULES
        .iter()
        .find(|rule| contains_any(&lowered, rule.keywords))
    {
        return rule.difficulty;
    }
    if text.split_whitespace().count() > LONG_QUESTION_WORDS {
        LONG_QUESTION_DIFFICULTY
    } else {
        DEFAULT_DIFFICULTY
    }
}

pub fn infer_tags(text: &str, job_title: &str) -> String {
    let lowered = text.to_lowercase();
    let mut tags = vec![job_title_slug(job_title)];
    tags.extend(
        TAG_KEYWORDS
            .iter()
            .filter(|k| lowered.contains(*k))
            .map(|k| k.replace(' ', "_")),
    );
    tags.join(",")
}
