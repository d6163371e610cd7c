use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db::queries::questions::{get_all_questions, get_questions_for_category};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::ApiResult;
use crate::server::extract::ApiJson;
use crate::telemetry::QUIZ_QUESTION_CNTR;

/// Category id meaning "draw from every category".
const ANY_CATEGORY: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

/// Either the next question to play, or the literal 0 once the pool is
/// exhausted. Untagged so the exhausted case serializes as a bare integer.
#[derive(Serialize)]
#[serde(untagged)]
enum QuizQuestion {
    Next(Question),
    Exhausted(u8),
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizBody>,
) -> ApiResult<Value> {
    let category_id = body.quiz_category.id;
    let questions = if category_id == ANY_CATEGORY {
        get_all_questions(&pool).await?
    } else {
        get_questions_for_category(&pool, category_id).await?
    };

    let unseen: Vec<Question> = questions
        .into_iter()
        .filter(|q| !body.previous_questions.contains(&q.id))
        .collect();

    let question = match unseen.choose(&mut rand::thread_rng()) {
        Some(picked) => {
            QUIZ_QUESTION_CNTR
                .with_label_values(&[picked.category.to_string().as_str()])
                .inc();
            QuizQuestion::Next(picked.clone())
        }
        None => QuizQuestion::Exhausted(0),
    };

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
