// common/mod.rs - Shared test utilities for database setup
//
// The live-database suites share one `site` schema, created
// idempotently on demand. Tests isolate themselves through unique
// data (uuid-suffixed names and emails) instead of truncation, so
// suites can run in parallel without stepping on each other.

use little_scholars::web_app::api::db;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::time::Duration;
use uuid::Uuid;

/// Create a database connection pool for testing
pub async fn create_test_pool() -> anyhow::Result<PgPool> {
    dotenv::dotenv().ok();
    let database_url =
        env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Create the site schema and tables if missing. Safe to call from
/// every test.
pub async fn ensure_site_schema(pool: &PgPool) -> anyhow::Result<()> {
    db::ensure_schema(pool).await?;
    Ok(())
}

/// A label made unique per call, so concurrent tests never collide on
/// data they assert about.
pub fn unique(label: &str) -> String {
    format!("{}-{}", label, Uuid::new_v4().simple())
}
