use crate::dto::question_dto::{CreateQuestionSetPayload, PageQuery};
use crate::error::{Error, Result};
use crate::models::question_set::QuestionSet;
use crate::services::question_service::{QuestionService, DEFAULT_LIMIT, MAX_LIMIT};
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Clone)]
pub struct QuestionSetService {
    pool: PgPool,
    questions: QuestionService,
}

impl QuestionSetService {
    pub fn new(pool: PgPool) -> Self {
        let questions = QuestionService::new(pool.clone());
        Self { pool, questions }
    }

    pub async fn create(&self, payload: CreateQuestionSetPayload) -> Result<QuestionSet> {
        let question_ids = dedup_preserving_order(&payload.question_ids);
        let existing = self.questions.count_existing(&question_ids).await?;
        if existing != question_ids.len() as i64 {
            return Err(Error::NotFound(format!(
                "{} of {} referenced questions do not exist",
                question_ids.len() as i64 - existing,
                question_ids.len()
            )));
        }

        let set = sqlx::query_as::<_, QuestionSet>(
            r#"
            INSERT INTO question_sets (name, description, job_title, question_ids)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, job_title, question_ids, created_at, updated_at
            "#,
        )
        .bind(payload.name.trim())
        .bind(payload.description)
        .bind(payload.job_title.trim())
        .bind(&question_ids)
        .fetch_one(&self.pool)
        .await?;

        Ok(set)
    }

    pub async fn list(&self, query: PageQuery) -> Result<Vec<QuestionSet>> {
        let skip = query.skip.unwrap_or(0).max(0);
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let sets = sqlx::query_as::<_, QuestionSet>(
            r#"
            SELECT id, name, description, job_title, question_ids, created_at, updated_at
            FROM question_sets
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(sets)
    }
}

fn dedup_preserving_order(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
