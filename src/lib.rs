pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    gemini_client::TextGenerator, generation_service::GenerationService,
    question_service::QuestionService, question_set_service::QuestionSetService,
    rating_service::RatingService, stats_service::StatsService,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub generation_service: GenerationService,
    pub question_service: QuestionService,
    pub question_set_service: QuestionSetService,
    pub rating_service: RatingService,
    pub stats_service: StatsService,
}

impl AppState {
    /// `generator` is built once per process and shared by every request.
    pub fn new(pool: PgPool, generator: Arc<dyn TextGenerator>) -> Self {
        let generation_service = GenerationService::new(generator);
        let question_service = QuestionService::new(pool.clone());
        let question_set_service = QuestionSetService::new(pool.clone());
        let rating_service = RatingService::new(pool.clone());
        let stats_service = StatsService::new(pool.clone());

        Self {
            pool,
            generation_service,
            question_service,
            question_set_service,
            rating_service,
            stats_service,
        }
    }
}
