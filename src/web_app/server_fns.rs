// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!
//
// Errors cross this boundary as a JSON-encoded `SiteError` inside
// `ServerFnError::ServerError`; the client wrappers in `store` and
// `auth` decode them back into the taxonomy.

use crate::web_app::model::*;
use leptos::prelude::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use crate::web_app::api::db;
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use sqlx::PgPool;

    // First try to get from context (for testing or if manually set)
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }

    // Try global pool (most reliable fallback)
    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }
            if let Some(pool) = req.app_data::<PgPool>() {
                return Ok(pool.clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new(
        SiteError::store("Database pool not available").encode(),
    ))
}

#[cfg(feature = "ssr")]
fn site_err(err: SiteError) -> ServerFnError {
    ServerFnError::new(err.encode())
}

/// Insert a validated enquiry and return the stored record with its
/// assigned id and submission timestamp.
#[server(SubmitEnquiry, "/api")]
pub async fn submit_enquiry(record: NewEnquiry) -> Result<Enquiry, ServerFnError> {
    use crate::web_app::api::store;

    tracing::info!(
        "Enquiry submission: student='{}', class={}",
        record.student_name,
        record.class
    );

    if !record.is_complete() {
        return Err(site_err(SiteError::Validation(
            "Please fill in all required fields".to_string(),
        )));
    }

    let pool = pool().await?;
    let saved = store::insert_enquiry(&pool, &record)
        .await
        .map_err(site_err)?;

    tracing::info!("Enquiry stored: id={}", saved.id);
    Ok(saved)
}

/// List all enquiries, newest first. Requires a valid session token.
#[server(ListEnquiries, "/api")]
pub async fn list_enquiries(access_token: String) -> Result<Vec<Enquiry>, ServerFnError> {
    use crate::web_app::api::{auth, store};

    let pool = pool().await?;

    let session = auth::session_for_token(&pool, &access_token)
        .await
        .map_err(site_err)?;
    let Some(session) = session else {
        tracing::warn!("Enquiry list requested with an invalid session token");
        return Err(site_err(SiteError::auth("Not authenticated")));
    };

    let rows = store::list_enquiries(&pool).await.map_err(site_err)?;
    tracing::info!("Listed {} enquiries for {}", rows.len(), session.email);
    Ok(rows)
}

/// Verify admin credentials and open a new session.
#[server(SignIn, "/api")]
pub async fn sign_in(email: String, password: String) -> Result<Session, ServerFnError> {
    use crate::web_app::api::auth;

    tracing::info!("Sign-in attempt: email='{}'", email);

    let pool = pool().await?;
    let session = auth::sign_in(&pool, &email, &password)
        .await
        .map_err(site_err)?;

    tracing::info!("Sign-in successful: email='{}'", session.email);
    Ok(session)
}

/// Close the session for the given token. Unknown tokens are a no-op.
#[server(SignOut, "/api")]
pub async fn sign_out(access_token: String) -> Result<(), ServerFnError> {
    use crate::web_app::api::auth;

    let pool = pool().await?;
    auth::sign_out(&pool, &access_token)
        .await
        .map_err(site_err)?;

    tracing::info!("Session closed");
    Ok(())
}

/// Resolve a session token to its session, if still valid.
#[server(GetSession, "/api")]
pub async fn get_session(access_token: String) -> Result<Option<Session>, ServerFnError> {
    use crate::web_app::api::auth;

    let pool = pool().await?;
    auth::session_for_token(&pool, &access_token)
        .await
        .map_err(site_err)
}
