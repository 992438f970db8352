#![allow(dead_code)]

use sn_core::Profile;
use sn_db::ProfileRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../sn-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Registers an account and returns its identity
pub async fn register_account(pool: &SqlitePool, username: &str) -> Uuid {
    let profile = Profile::new(username.to_string());
    ProfileRepository::new(pool.clone())
        .create(&profile)
        .await
        .expect("Failed to register account");
    profile.id
}
