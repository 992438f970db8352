#![allow(dead_code)]

//! Test infrastructure for sn-server API tests

use sn_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/sn-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Register a test account and return its identity
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> Uuid {
    let user_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query("INSERT INTO users (id, username, bio, created_at, updated_at) VALUES (?, ?, ?, ?, ?)")
        .bind(user_id.to_string())
        .bind(username)
        .bind("")
        .bind(now)
        .bind(now)
        .execute(pool)
        .await
        .expect("Failed to create test user");

    user_id
}
