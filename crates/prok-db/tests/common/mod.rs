#![allow(dead_code)]

//! Test infrastructure for repository tests

use prok_core::User;
use prok_db::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // Single connection: every pooled connection to ":memory:" would
    // otherwise see its own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    prok_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a test user (verifier is an arbitrary PHC-shaped string; the
/// repository never interprets it)
pub async fn create_test_user(pool: &SqlitePool, username: &str, email: &str) -> User {
    let user = User::new(username, email, "$argon2id$v=19$test-verifier");

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}
