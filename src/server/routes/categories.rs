use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions::get_questions_for_category;
use crate::db::Category;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::server::extract::{ApiPath, ApiQuery};
use crate::server::pagination::{paginate, PageQuery};

/// The `{id: type}` mapping used by the category listing and embedded in the
/// question listing. Integer keys serialize as JSON object keys, i.e.
/// strings.
pub fn format_categories(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResult<Value> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "categories": format_categories(&categories),
        "total_categories": categories.len(),
    })))
}

async fn questions_for_category(
    State(pool): State<SqlitePool>,
    ApiPath(category_id): ApiPath<i64>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> ApiResult<Value> {
    let questions = get_questions_for_category(&pool, category_id).await?;
    let current_questions = paginate(&questions, page)?;
    if current_questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": questions.len(),
        "current_category": category_id,
    })))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
