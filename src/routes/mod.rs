pub mod health;
pub mod questions;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Every public route, without state or outer layers attached.
pub fn router() -> Router<AppState> {
    let base_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health));

    let question_api = Router::new()
        .route(
            "/api/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/api/questions/generate",
            post(questions::generate_questions),
        )
        .route(
            "/api/questions/sets",
            get(questions::list_question_sets).post(questions::create_question_set),
        )
        .route("/api/questions/rate", post(questions::rate_question))
        .route(
            "/api/questions/job-titles",
            get(questions::list_job_titles),
        )
        .route(
            "/api/questions/:id",
            get(questions::get_question)
                .put(questions::update_question)
                .delete(questions::delete_question),
        )
        .route("/api/stats", get(stats::get_stats));

    base_routes.merge(question_api)
}
