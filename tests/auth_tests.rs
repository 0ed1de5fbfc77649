// tests/auth_tests.rs - Live-database tests for admin auth
//
// Requires a running PostgreSQL instance and DATABASE_URL in the
// environment. Run with: cargo test --features ssr --test auth_tests

mod common;

use leptos::prelude::ServerFnError;
use little_scholars::web_app::api::{auth, db};
use little_scholars::web_app::model::SiteError;
use little_scholars::web_app::server_fns;

#[tokio::test]
async fn sign_in_session_lifecycle() -> anyhow::Result<()> {
    let pool = common::create_test_pool().await?;
    common::ensure_site_schema(&pool).await?;

    let email = format!("{}@example.com", common::unique("admin"));
    auth::ensure_admin_user(&pool, &email, "correct-horse")
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    // Wrong password and unknown account fail the same way.
    let err = auth::sign_in(&pool, &email, "wrong").await.unwrap_err();
    assert!(matches!(err, SiteError::Auth(_)));
    assert_eq!(err.to_string(), "Invalid login credentials");
    let err = auth::sign_in(&pool, "nobody@example.com", "correct-horse")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid login credentials");

    // Correct credentials open a session whose token resolves back.
    let session = auth::sign_in(&pool, &email, "correct-horse")
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    assert_eq!(session.email, email);

    let resolved = auth::session_for_token(&pool, &session.access_token)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    assert_eq!(resolved.map(|s| s.email), Some(email.clone()));

    // Sign-out invalidates the token.
    auth::sign_out(&pool, &session.access_token)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    let resolved = auth::session_for_token(&pool, &session.access_token)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    assert!(resolved.is_none());

    Ok(())
}

#[tokio::test]
async fn malformed_tokens_are_not_sessions() -> anyhow::Result<()> {
    let pool = common::create_test_pool().await?;
    common::ensure_site_schema(&pool).await?;

    let resolved = auth::session_for_token(&pool, "definitely-not-a-uuid")
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    assert!(resolved.is_none());

    // Signing out a malformed token is a no-op, not an error.
    auth::sign_out(&pool, "definitely-not-a-uuid")
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

#[tokio::test]
async fn admin_seeding_is_idempotent() -> anyhow::Result<()> {
    let pool = common::create_test_pool().await?;
    common::ensure_site_schema(&pool).await?;

    let email = format!("{}@example.com", common::unique("seed"));
    auth::ensure_admin_user(&pool, &email, "first-password")
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    // A second seeding run must not overwrite the existing account.
    auth::ensure_admin_user(&pool, &email, "second-password")
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    assert!(auth::sign_in(&pool, &email, "first-password").await.is_ok());
    assert!(auth::sign_in(&pool, &email, "second-password").await.is_err());

    Ok(())
}

#[tokio::test]
async fn listing_without_a_session_is_an_auth_error() -> anyhow::Result<()> {
    let pool = common::create_test_pool().await?;
    common::ensure_site_schema(&pool).await?;

    // Route the server function at the test pool.
    db::set_test_pool(pool.clone());

    let err = server_fns::list_enquiries("not-a-token".to_string())
        .await
        .expect_err("listing without a session must fail");

    match err {
        ServerFnError::ServerError(msg) => {
            assert!(matches!(SiteError::decode(&msg), SiteError::Auth(_)));
        }
        other => panic!("unexpected error kind: {}", other),
    }

    Ok(())
}
