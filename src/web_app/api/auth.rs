// web_app/api/auth.rs - Admin credentials and session tokens
//
// Passwords are argon2id hashes in site.admin_users; sessions are
// opaque uuid tokens in site.sessions. Credential failures all map to
// the same message so the login form never leaks which part was wrong.

use crate::web_app::model::{Session, SiteError};
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use sqlx::{PgPool, Row};
use uuid::Uuid;

const BAD_CREDENTIALS: &str = "Invalid login credentials";

pub fn hash_password(password: &str) -> Result<String, SiteError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SiteError::auth(format!("Password hashing failed: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Verify credentials and open a new session.
pub async fn sign_in(pool: &PgPool, email: &str, password: &str) -> Result<Session, SiteError> {
    let row = sqlx::query("SELECT password_hash FROM site.admin_users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            tracing::error!("Admin lookup failed: {}", e);
            SiteError::auth("Sign-in unavailable")
        })?;

    let Some(row) = row else {
        return Err(SiteError::auth(BAD_CREDENTIALS));
    };
    let hash: String = row.get("password_hash");
    if !verify_password(password, &hash) {
        return Err(SiteError::auth(BAD_CREDENTIALS));
    }

    let row = sqlx::query("INSERT INTO site.sessions (email) VALUES ($1) RETURNING token")
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            tracing::error!("Session creation failed: {}", e);
            SiteError::auth("Sign-in unavailable")
        })?;
    let token: Uuid = row.get("token");

    Ok(Session {
        access_token: token.to_string(),
        email: email.to_string(),
    })
}

/// Resolve a token to its session. Unknown or malformed tokens are
/// simply not a session, never an error.
pub async fn session_for_token(pool: &PgPool, token: &str) -> Result<Option<Session>, SiteError> {
    let Ok(token) = Uuid::parse_str(token) else {
        return Ok(None);
    };

    let row = sqlx::query("SELECT email FROM site.sessions WHERE token = $1")
        .bind(token)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            tracing::error!("Session lookup failed: {}", e);
            SiteError::auth("Session lookup unavailable")
        })?;

    Ok(row.map(|row| Session {
        access_token: token.to_string(),
        email: row.get("email"),
    }))
}

/// Delete the session for the given token. Unknown tokens are a no-op.
pub async fn sign_out(pool: &PgPool, token: &str) -> Result<(), SiteError> {
    let Ok(token) = Uuid::parse_str(token) else {
        return Ok(());
    };

    sqlx::query("DELETE FROM site.sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await
        .map_err(|e| {
            tracing::error!("Session delete failed: {}", e);
            SiteError::auth("Sign-out failed")
        })?;
    Ok(())
}

/// Create the admin account if it does not exist yet. Run on startup
/// with ADMIN_EMAIL/ADMIN_PASSWORD from the environment.
pub async fn ensure_admin_user(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<(), SiteError> {
    let hash = hash_password(password)?;

    sqlx::query(
        "INSERT INTO site.admin_users (email, password_hash) VALUES ($1, $2)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(email)
    .bind(hash)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Admin seeding failed: {}", e);
        SiteError::auth("Admin seeding failed")
    })?;

    tracing::info!("Admin account ensured for {}", email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("letmein123").unwrap();
        assert!(verify_password("letmein123", &hash));
        assert!(!verify_password("letmein124", &hash));
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
