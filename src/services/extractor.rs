//! Turns raw model output into `ExtractedQuestion`s.
//!
//! The structured parse (a JSON array of records) runs first. When it yields
//! nothing, a line-oriented heuristic parse recovers questions from prose.
//! Neither stage fails: unusable input produces an empty list.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;

use crate::models::question::{ExtractedQuestion, QuestionCategory, QuestionType};
use crate::services::heuristics::{
    self, DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY,
};

/// One array element as the model wrote it; every field may be absent or mistyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuestionRecord {
    #[serde(default)]
    pub question: Option<JsonValue>,
    #[serde(default, rename = "type")]
    pub question_type: Option<JsonValue>,
    #[serde(default)]
    pub difficulty: Option<JsonValue>,
    #[serde(default)]
    pub tags: Option<JsonValue>,
}

pub fn extract(raw: &str, job_title: &str, category: QuestionCategory) -> Vec<ExtractedQuestion> {
    let questions = parse_structured(raw, job_title, category);
    if !questions.is_empty() {
        return questions;
    }

    tracing::debug!("Structured parse yielded nothing, falling back to line parse");
    let questions = parse_lines(raw, job_title, category);
    if questions.is_empty() {
        tracing::debug!(
            response_len = raw.len(),
            "No questions could be extracted from model response"
        );
    }
    questions
}

/// Stage A: fenced or bare JSON array of records.
pub fn parse_structured(
    raw: &str,
    job_title: &str,
    category: QuestionCategory,
) -> Vec<ExtractedQuestion> {
    let Some(records) = parse_records(raw) else {
        return Vec::new();
    };
    let questions: Vec<ExtractedQuestion> = records
        .into_iter()
        .filter_map(|record| normalize(record, job_title, category))
        .collect();
    tracing::debug!("Parsed {} questions from JSON", questions.len());
    questions
}

/// Slices the outermost `[...]` and keeps elements that are objects with a
/// `question` key. `None` when there is no array or it is not valid JSON.
pub fn parse_records(raw: &str) -> Option<Vec<RawQuestionRecord>> {
    let cleaned = strip_code_fence(raw);
    let slice = array_slice(cleaned)?;

    let values: Vec<JsonValue> = match serde_json::from_str(slice) {
        Ok(values) => values,
        Err(e) => {
            tracing::debug!(error = %e, "Model response is not a valid JSON array");
            return None;
        }
    };

    Some(
        values
            .into_iter()
            .filter(|v| v.as_object().is_some_and(|o| o.contains_key("question")))
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
    )
}

/// Applies every default and clamp; `None` rejects the record.
pub fn normalize(
    record: RawQuestionRecord,
    job_title: &str,
    category: QuestionCategory,
) -> Option<ExtractedQuestion> {
    let question_text = record
        .question
        .as_ref()
        .and_then(JsonValue::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();

    let question_type = category.fixed_type().unwrap_or_else(|| {
        record
            .question_type
            .as_ref()
            .and_then(JsonValue::as_str)
            .and_then(QuestionType::parse)
            .unwrap_or(QuestionType::Technical)
    });

    let tags = coerce_tags(record.tags.as_ref())
        .unwrap_or_else(|| heuristics::job_title_slug(job_title));

    Some(ExtractedQuestion {
        job_title: job_title.to_string(),
        question_text,
        question_type,
        difficulty: coerce_difficulty(record.difficulty.as_ref()),
        tags,
    })
}

/// Integer coercion clamped to `1..=5`; booleans count as 0/1 and anything
/// else unparseable is the default.
pub fn coerce_difficulty(value: Option<&JsonValue>) -> i32 {
    let parsed = match value {
        Some(JsonValue::Bool(b)) => Some(i64::from(*b)),
        Some(JsonValue::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(JsonValue::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .map(|d| d.clamp(MIN_DIFFICULTY as i64, MAX_DIFFICULTY as i64) as i32)
        .unwrap_or(DEFAULT_DIFFICULTY)
}

fn coerce_tags(value: Option<&JsonValue>) -> Option<String> {
    let tags = match value? {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Array(items) => items
            .iter()
            .filter_map(JsonValue::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(","),
        _ => return None,
    };
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

/// Removes a surrounding ```lang ... ``` fence, if any.
fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

fn array_slice(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

fn question_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| {
        Regex::new(r"^(?:(?i:q(?:uestion)?)\s*\d*\s*:|-+|\d+[.)]\s)\s*")
            .expect("question prefix pattern is valid")
    })
}

/// Stage B: one question per line that contains `?` or starts with a
/// numbering/bullet marker. No count cap here.
pub fn parse_lines(
    raw: &str,
    job_title: &str,
    category: QuestionCategory,
) -> Vec<ExtractedQuestion> {
    let prefix = question_prefix();
    let questions: Vec<ExtractedQuestion> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let matched = prefix.find(line);
            if matched.is_none() && !line.contains('?') {
                return None;
            }
            let text = match matched {
                Some(m) => line[m.end()..].trim(),
                None => line,
            };
            if text.is_empty() {
                return None;
            }
            Some(ExtractedQuestion {
                job_title: job_title.to_string(),
                question_text: text.to_string(),
                question_type: heuristics::classify_type(text, category),
                difficulty: heuristics::estimate_difficulty(text),
                tags: heuristics::infer_tags(text, job_title),
            })
        })
        .collect();
    tracing::debug!("Parsed {} questions from text", questions.len());
    questions
}
