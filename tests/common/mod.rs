use sqlx::SqlitePool;

use trivia_api::db::queries::categories::import_categories;
use trivia_api::db::queries::questions::import_questions;
use trivia_api::db::{run_migrations, Category, Question};

pub async fn create_test_pool() -> SqlitePool {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let pool = SqlitePool::connect(format!("sqlite:{}?mode=rwc", path.display()).as_str())
        .await
        .expect("failed to create test database");
    run_migrations(&pool).await.expect("failed to migrate");
    pool
}

pub fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id,
        question: text.to_owned(),
        answer: format!("answer {id}"),
        difficulty: 1,
        category,
    }
}

pub async fn seed_categories(pool: &SqlitePool) {
    let categories = vec![
        Category {
            id: 1,
            kind: "Science".to_owned(),
        },
        Category {
            id: 2,
            kind: "Art".to_owned(),
        },
    ];
    import_categories(pool, categories)
        .await
        .expect("failed to seed categories");
}

pub async fn seed_questions(pool: &SqlitePool, questions: Vec<Question>) {
    import_questions(pool, questions)
        .await
        .expect("failed to seed questions");
}
