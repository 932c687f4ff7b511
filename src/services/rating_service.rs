use crate::dto::question_dto::CreateRatingPayload;
use crate::error::Result;
use crate::models::rating::UserRating;
use crate::services::question_service::QuestionService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct RatingService {
    pool: PgPool,
    questions: QuestionService,
}

impl RatingService {
    pub fn new(pool: PgPool) -> Self {
        let questions = QuestionService::new(pool.clone());
        Self { pool, questions }
    }

    pub async fn create(&self, payload: CreateRatingPayload) -> Result<UserRating> {
        self.questions.get_by_id(payload.question_id).await?;

        let rating = sqlx::query_as::<_, UserRating>(
            r#"
            INSERT INTO user_ratings (question_id, rating, feedback)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, rating, feedback, created_at
            "#,
        )
        .bind(payload.question_id)
        .bind(payload.rating)
        .bind(payload.feedback)
        .fetch_one(&self.pool)
        .await?;

        Ok(rating)
    }
}
