use crate::dto::question_dto::StatsResponse;
use crate::error::Result;
use sqlx::PgPool;
use std::collections::BTreeMap;

#[derive(Clone)]
pub struct StatsService {
    pool: PgPool,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<StatsResponse> {
        let total_questions = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        let questions_by_type = self
            .grouped_counts("SELECT question_type, COUNT(*) FROM questions GROUP BY question_type")
            .await?;

        let questions_by_job_title = self
            .grouped_counts("SELECT job_title, COUNT(*) FROM questions GROUP BY job_title")
            .await?;

        let average_difficulty = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(difficulty)::float8 FROM questions",
        )
        .fetch_one(&self.pool)
        .await?
        .unwrap_or(0.0);

        let flagged_questions =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions WHERE is_flagged")
                .fetch_one(&self.pool)
                .await?;

        let total_question_sets =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM question_sets")
                .fetch_one(&self.pool)
                .await?;

        Ok(StatsResponse {
            total_questions,
            questions_by_type,
            questions_by_job_title,
            average_difficulty,
            flagged_questions,
            total_question_sets,
        })
    }

    async fn grouped_counts(&self, sql: &str) -> Result<BTreeMap<String, i64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().collect())
    }
}
