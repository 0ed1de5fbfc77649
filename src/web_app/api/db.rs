// web_app/api/db.rs - Database connection pool setup and schema bootstrap

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

static POOL: OnceLock<PgPool> = OnceLock::new();
static TEST_POOL_OVERRIDE: Mutex<Option<PgPool>> = Mutex::new(None);

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    tracing::info!("Initializing global database pool");
    if POOL.set(pool).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized successfully");
    }
}

/// Set a pool override for testing
pub fn set_test_pool(pool: PgPool) {
    let mut guard = TEST_POOL_OVERRIDE.lock().unwrap();
    *guard = Some(pool);
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    // Check for test override first
    {
        let guard = TEST_POOL_OVERRIDE.lock().unwrap();
        if let Some(ref pool) = *guard {
            return Some(pool.clone());
        }
    }

    let pool = POOL.get().cloned();
    if pool.is_none() {
        tracing::warn!("Global pool is empty!");
    }
    pool
}

/// Create a PostgreSQL connection pool
///
/// Reads DATABASE_URL from the environment and creates a connection
/// pool with sensible defaults for a web application.
pub async fn create_pool() -> Result<PgPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
}

/// Create the `site` schema and its tables if they do not exist yet.
/// Safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE SCHEMA IF NOT EXISTS site")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site.enquiries (
            id             UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            seq            BIGSERIAL,
            student_name   TEXT NOT NULL,
            parent_name    TEXT NOT NULL,
            location       TEXT NOT NULL,
            phone_number   TEXT NOT NULL,
            class          TEXT NOT NULL,
            excitement     TEXT,
            date_submitted TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site.admin_users (
            id            UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site.sessions (
            token      UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            email      TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
