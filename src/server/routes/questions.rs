use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions::{
    self, get_all_questions, get_question_by_id, search_questions,
};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::server::extract::{ApiJson, ApiPath, ApiQuery};
use crate::server::pagination::{paginate, PageQuery};

use super::categories::format_categories;

/// Every field is optional here; a missing one flows through to the insert,
/// where the NOT NULL constraint fails it with an unprocessable response.
/// A field of the wrong type never gets this far, the body extractor
/// rejects it as a bad request.
#[derive(Deserialize)]
struct NewQuestion {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    difficulty: Option<i64>,
    #[serde(default)]
    category: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<Value> {
    let questions = get_all_questions(&pool).await?;
    let current_questions = paginate(&questions, page)?;
    if current_questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": questions.len(),
        "current_category": null,
        "categories": format_categories(&categories),
    })))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(question_id): ApiPath<i64>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<Value> {
    let question = get_question_by_id(&pool, question_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    questions::delete_question(&pool, question_id)
        .await
        .map_err(|error| {
            tracing::warn!("failed to delete question {question_id}: {error}");
            ApiError::Unprocessable
        })?;

    let questions = get_all_questions(&pool).await?;
    let current_questions = paginate(&questions, page)?;

    Ok(Json(json!({
        "success": true,
        "deleted": question,
        "questions": current_questions,
        "total_questions": questions.len(),
    })))
}

async fn submit_question(
    State(pool): State<SqlitePool>,
    ApiQuery(page): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<NewQuestion>,
) -> ApiResult<Value> {
    questions::create_question(
        &pool,
        body.question.as_deref(),
        body.answer.as_deref(),
        body.difficulty,
        body.category,
    )
    .await
    .map_err(|error| {
        tracing::warn!("failed to insert question: {error}");
        ApiError::Unprocessable
    })?;

    let questions = get_all_questions(&pool).await?;
    let current_questions = paginate(&questions, page)?;

    Ok(Json(json!({
        "success": true,
        "question": body.question,
        "answer": body.answer,
        "difficulty": body.difficulty,
        "category": body.category,
        "questions": current_questions,
        "total_questions": questions.len(),
    })))
}

/// Unlike the other list endpoints, an empty result here is a success with
/// an empty list, never a 404.
async fn search(
    State(pool): State<SqlitePool>,
    ApiQuery(page): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResult<Value> {
    let term = body.search_term.unwrap_or_default();
    let matches = search_questions(&pool, &term).await?;
    let current_questions = paginate(&matches, page)?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": matches.len(),
        "current_category": 0,
    })))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(search))
        .route("/questions/add", post(submit_question))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
