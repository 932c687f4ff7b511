use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::question_dto::{
        CreateQuestionPayload, CreateQuestionSetPayload, CreateRatingPayload,
        GenerateQuestionsPayload, PageQuery, QuestionListQuery, UpdateQuestionPayload,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/questions/generate",
    request_body = GenerateQuestionsPayload,
    responses(
        (status = 201, description = "Questions generated and saved", body = Json<Vec<Question>>),
        (status = 400, description = "Invalid payload"),
        (status = 502, description = "Generation service produced no usable questions")
    )
)]
#[axum::debug_handler]
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuestionsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let generated = state
        .generation_service
        .generate(&payload.job_title, payload.count, &payload.question_type)
        .await?;
    let saved = state.question_service.create_many(&generated).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get,
    path = "/api/questions",
    params(
        ("skip" = Option<i64>, Query, description = "Records to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum records to return (1-1000)"),
        ("job_title" = Option<String>, Query, description = "Case-insensitive partial match"),
        ("question_type" = Option<String>, Query, description = "Exact question type"),
        ("flagged_only" = Option<bool>, Query, description = "Only flagged questions")
    ),
    responses(
        (status = 200, description = "List of questions", body = Json<Vec<Question>>)
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionListQuery>,
) -> Result<impl IntoResponse> {
    let items = state.question_service.list(query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = Json<Question>),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let question = state.question_service.get_by_id(id).await?;
    Ok(Json(question))
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question created", body = Json<Question>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question updated", body = Json<Question>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    if payload.is_empty() {
        return Err(Error::BadRequest("No fields to update".into()));
    }
    let question = state.question_service.update(id, payload).await?;
    Ok(Json(question))
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.question_service.delete(id).await?;
    Ok(Json(json!({ "message": "Question deleted successfully" })))
}

#[utoipa::path(
    post,
    path = "/api/questions/sets",
    request_body = CreateQuestionSetPayload,
    responses(
        (status = 201, description = "Question set created", body = Json<QuestionSet>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Referenced question not found")
    )
)]
#[axum::debug_handler]
pub async fn create_question_set(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionSetPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let set = state.question_set_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(set)))
}

#[utoipa::path(
    get,
    path = "/api/questions/sets",
    params(
        ("skip" = Option<i64>, Query, description = "Records to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum records to return (1-1000)")
    ),
    responses(
        (status = 200, description = "List of question sets", body = Json<Vec<QuestionSet>>)
    )
)]
#[axum::debug_handler]
pub async fn list_question_sets(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let sets = state.question_set_service.list(query).await?;
    Ok(Json(sets))
}

#[utoipa::path(
    post,
    path = "/api/questions/rate",
    request_body = CreateRatingPayload,
    responses(
        (status = 201, description = "Rating saved", body = Json<UserRating>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn rate_question(
    State(state): State<AppState>,
    Json(payload): Json<CreateRatingPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let rating = state.rating_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(rating)))
}

#[utoipa::path(
    get,
    path = "/api/questions/job-titles",
    responses(
        (status = 200, description = "Distinct job titles", body = Json<Vec<String>>)
    )
)]
#[axum::debug_handler]
pub async fn list_job_titles(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let titles = state.question_service.job_titles().await?;
    Ok(Json(titles))
}
