use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRating {
    pub id: Uuid,
    pub question_id: Uuid,
    pub rating: f64,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}
