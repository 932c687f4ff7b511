use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::question::{ExtractedQuestion, QuestionCategory};
use crate::services::extractor;
use crate::services::gemini_client::{SamplingParams, TextGenerator};
use crate::services::prompt_builder::{build_prompt, PromptVariant};

pub const MAX_QUESTIONS_PER_REQUEST: usize = 100;
pub const MIN_JOB_TITLE_CHARS: usize = 2;
pub const MAX_JOB_TITLE_CHARS: usize = 100;

pub const FIRST_ATTEMPT_TEMPERATURE: f32 = 0.7;
pub const RETRY_TEMPERATURE: f32 = 0.5;

/// Validated parameters of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    job_title: String,
    count: usize,
    category: QuestionCategory,
}

impl GenerationRequest {
    pub fn new(job_title: impl Into<String>, count: usize, category: QuestionCategory) -> Result<Self> {
        let job_title = job_title.into();
        let title_len = job_title.trim().chars().count();
        if !(MIN_JOB_TITLE_CHARS..=MAX_JOB_TITLE_CHARS).contains(&title_len) {
            return Err(Error::InvalidParameter(format!(
                "job_title must be between {} and {} characters",
                MIN_JOB_TITLE_CHARS, MAX_JOB_TITLE_CHARS
            )));
        }
        if !(1..=MAX_QUESTIONS_PER_REQUEST).contains(&count) {
            return Err(Error::InvalidParameter(format!(
                "count must be between 1 and {}",
                MAX_QUESTIONS_PER_REQUEST
            )));
        }
        Ok(Self {
            job_title,
            count,
            category,
        })
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn category(&self) -> QuestionCategory {
        self.category
    }
}

/// One scheduled call: which prompt, how hot, and its 1-based index within
/// the prompt variant's round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptPlan {
    pub variant: PromptVariant,
    pub temperature: f32,
    pub attempt: u8,
}

/// Detailed prompt twice, then the simplified prompt twice, each round
/// cooling from the first-attempt temperature to the retry temperature.
pub fn default_schedule() -> Vec<AttemptPlan> {
    [PromptVariant::Detailed, PromptVariant::Simplified]
        .into_iter()
        .flat_map(|variant| {
            [FIRST_ATTEMPT_TEMPERATURE, RETRY_TEMPERATURE]
                .into_iter()
                .zip(1u8..)
                .map(move |(temperature, attempt)| AttemptPlan {
                    variant,
                    temperature,
                    attempt,
                })
        })
        .collect()
}

#[derive(Clone)]
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
    schedule: Vec<AttemptPlan>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_schedule(generator, default_schedule())
    }

    pub fn with_schedule(generator: Arc<dyn TextGenerator>, schedule: Vec<AttemptPlan>) -> Self {
        Self {
            generator,
            schedule,
        }
    }

    /// Generates up to `count` questions. Fails with `InvalidParameter` before
    /// any external call, or `GenerationExhausted` when no attempt produced a
    /// usable question.
    pub async fn generate(
        &self,
        job_title: &str,
        count: usize,
        category: &str,
    ) -> Result<Vec<ExtractedQuestion>> {
        let category: QuestionCategory = category.parse()?;
        let request = GenerationRequest::new(job_title, count, category)?;
        self.run(&request).await
    }

    pub async fn run(&self, request: &GenerationRequest) -> Result<Vec<ExtractedQuestion>> {
        let target = request.count();
        tracing::info!(
            "Generating {} {} questions for {}",
            target,
            request.category(),
            request.job_title()
        );

        let mut questions: Vec<ExtractedQuestion> = Vec::new();
        let mut round_count = target;
        let mut attempts_made = 0usize;
        let mut last_error: Option<String> = None;

        for plan in &self.schedule {
            if questions.len() >= target {
                break;
            }
            if plan.attempt == 1 {
                // A new round only asks for what is still missing.
                round_count = target - questions.len();
                if plan.variant == PromptVariant::Simplified {
                    tracing::info!(
                        "Detailed prompt yielded {}/{} questions. Trying simplified prompt for {}.",
                        questions.len(),
                        target,
                        round_count
                    );
                }
            }

            attempts_made += 1;
            let prompt = build_prompt(
                plan.variant,
                request.job_title(),
                round_count,
                request.category(),
            );
            let params = SamplingParams::with_temperature(plan.temperature);

            match self.generator.generate(&prompt, &params).await {
                Ok(raw) => {
                    let extracted =
                        extractor::extract(&raw, request.job_title(), request.category());
                    tracing::debug!(
                        variant = ?plan.variant,
                        attempt = plan.attempt,
                        extracted = extracted.len(),
                        "Generation attempt finished"
                    );
                    questions.extend(extracted);
                }
                Err(e) => {
                    tracing::warn!(
                        variant = ?plan.variant,
                        attempt = plan.attempt,
                        "Error on generation attempt: {}",
                        e
                    );
                    last_error = Some(e.to_string());
                }
            }
        }

        if questions.is_empty() {
            let reason = match last_error {
                Some(err) => format!(
                    "no valid questions after {} attempts (last error: {})",
                    attempts_made, err
                ),
                None => format!("no valid questions after {} attempts", attempts_made),
            };
            tracing::error!("Question generation failed: {}", reason);
            return Err(Error::GenerationExhausted(reason));
        }

        questions.truncate(target);
        tracing::info!("Generated {} questions successfully", questions.len());
        Ok(questions)
    }
}
