use crate::dto::question_dto::{CreateQuestionPayload, QuestionListQuery, UpdateQuestionPayload};
use crate::error::{Error, Result};
use crate::models::question::{ExtractedQuestion, Question};
use sqlx::PgPool;
use uuid::Uuid;

const QUESTION_COLUMNS: &str = "id, job_title, question_text, question_type, difficulty, is_flagged, tags, created_at, updated_at";

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        let query = format!(
            r#"
            INSERT INTO questions (job_title, question_text, question_type, difficulty, is_flagged, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(payload.job_title.trim())
            .bind(payload.question_text.trim())
            .bind(&payload.question_type)
            .bind(payload.difficulty.unwrap_or(1))
            .bind(payload.is_flagged.unwrap_or(false))
            .bind(payload.tags)
            .fetch_one(&self.pool)
            .await?;

        Ok(question)
    }

    /// Persists a generated batch atomically, in order.
    pub async fn create_many(&self, questions: &[ExtractedQuestion]) -> Result<Vec<Question>> {
        let query = format!(
            r#"
            INSERT INTO questions (job_title, question_text, question_type, difficulty, tags)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(questions.len());
        for q in questions {
            let row = sqlx::query_as::<_, Question>(&query)
                .bind(&q.job_title)
                .bind(&q.question_text)
                .bind(q.question_type.as_str())
                .bind(q.difficulty)
                .bind(&q.tags)
                .fetch_one(&mut *tx)
                .await?;
            saved.push(row);
        }
        tx.commit().await?;

        tracing::info!("Saved {} generated questions", saved.len());
        Ok(saved)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Question> {
        let query = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Question not found".to_string()))
    }

    pub async fn list(&self, query: QuestionListQuery) -> Result<Vec<Question>> {
        let skip = query.skip.unwrap_or(0).max(0);
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut filters = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(job_title) = query.job_title.filter(|s| !s.trim().is_empty()) {
            filters.push(format!("job_title ILIKE ${}", args.len() + 1));
            args.push(format!("%{}%", job_title.trim()));
        }
        if let Some(question_type) = query.question_type.filter(|s| !s.trim().is_empty()) {
            filters.push(format!("question_type = ${}", args.len() + 1));
            args.push(question_type.trim().to_string());
        }
        if query.flagged_only.unwrap_or(false) {
            filters.push("is_flagged = TRUE".to_string());
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let items_query = format!(
            "SELECT {}
             FROM questions
             {}
             ORDER BY created_at DESC
             LIMIT ${} OFFSET ${}",
            QUESTION_COLUMNS,
            where_clause,
            args.len() + 1,
            args.len() + 2
        );

        let mut statement = sqlx::query_as::<_, Question>(&items_query);
        for value in &args {
            statement = statement.bind(value);
        }
        let items = statement
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateQuestionPayload) -> Result<Question> {
        self.get_by_id(id).await?;

        let query = format!(
            r#"
            UPDATE questions
            SET
                difficulty = COALESCE($2, difficulty),
                is_flagged = COALESCE($3, is_flagged),
                tags = COALESCE($4, tags),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(payload.difficulty)
            .bind(payload.is_flagged)
            .bind(payload.tags)
            .fetch_one(&self.pool)
            .await?;

        Ok(question)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Question not found".to_string()));
        }
        Ok(())
    }

    pub async fn job_titles(&self) -> Result<Vec<String>> {
        let titles = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT job_title FROM questions ORDER BY job_title",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(titles)
    }

    /// Counts the distinct ids in `ids` that exist.
    pub async fn count_existing(&self, ids: &[Uuid]) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM questions WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
