// web_app/auth.rs - Auth client
//
// Thin client over the auth server functions. Holds the current
// session in a signal, persists the bearer token in localStorage when
// running in the browser, and keeps a registry of auth-change
// listeners so pages can react to sign-in/sign-out from anywhere.
//
// One instance is created in `App` and provided via context.

use crate::web_app::model::{Session, SiteError};
use crate::web_app::server_fns;
use crate::web_app::store::classify;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "little_scholars.session_token";

/// What changed in the auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    SignedIn,
    SignedOut,
    /// Session restored from a persisted token.
    TokenRefreshed,
}

/// Handle returned by [`AuthClient::on_auth_state_change`]. Pages must
/// call `unsubscribe` on unmount or the callback outlives the page.
pub struct AuthSubscription {
    client: AuthClient,
    id: u64,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {
        self.client
            .listeners
            .update_value(|listeners| listeners.retain(|(id, _)| *id != self.id));
    }
}

#[derive(Clone, Copy)]
pub struct AuthClient {
    session: RwSignal<Option<Session>>,
    listeners: StoredValue<Vec<(u64, Callback<(AuthChangeEvent, Option<Session>)>)>>,
    next_id: StoredValue<u64>,
}

impl AuthClient {
    pub fn new() -> AuthClient {
        AuthClient {
            session: RwSignal::new(None),
            listeners: StoredValue::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Verify credentials against the server. On success the session is
    /// cached, the token persisted, and `SignedIn` is broadcast.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SiteError> {
        let session = server_fns::sign_in(email.to_string(), password.to_string())
            .await
            .map_err(classify)?;

        persist_token(&session.access_token);
        self.session.set(Some(session.clone()));
        self.notify(AuthChangeEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    /// Close the current session. Local state is cleared and
    /// `SignedOut` broadcast before the server round-trip, so the UI
    /// never stays signed in on a flaky connection.
    pub async fn sign_out(&self) -> Result<(), SiteError> {
        let token = self
            .session
            .get_untracked()
            .map(|s| s.access_token)
            .or_else(persisted_token);

        self.session.set(None);
        clear_persisted_token();
        self.notify(AuthChangeEvent::SignedOut, None);

        if let Some(token) = token {
            server_fns::sign_out(token).await.map_err(classify)?;
        }
        Ok(())
    }

    /// Current session: cached value first, then the persisted token
    /// validated against the server. A missing session is `Ok(None)`,
    /// never an error.
    pub async fn get_session(&self) -> Result<Option<Session>, SiteError> {
        if let Some(session) = self.session.get_untracked() {
            return Ok(Some(session));
        }

        let Some(token) = persisted_token() else {
            return Ok(None);
        };

        match server_fns::get_session(token).await.map_err(classify)? {
            Some(session) => {
                self.session.set(Some(session.clone()));
                self.notify(AuthChangeEvent::TokenRefreshed, Some(session.clone()));
                Ok(Some(session))
            }
            None => {
                // Stale token, forget it.
                clear_persisted_token();
                Ok(None)
            }
        }
    }

    /// Register a listener for auth-state changes. The returned
    /// subscription cancels delivery when consumed.
    pub fn on_auth_state_change(
        &self,
        callback: Callback<(AuthChangeEvent, Option<Session>)>,
    ) -> AuthSubscription {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.update_value(|id| *id += 1);
        self.listeners
            .update_value(|listeners| listeners.push((id, callback)));
        AuthSubscription { client: *self, id }
    }

    fn notify(&self, event: AuthChangeEvent, session: Option<Session>) {
        let listeners = self.listeners.with_value(|l| l.clone());
        for (_, callback) in listeners {
            callback.run((event, session.clone()));
        }
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        AuthClient::new()
    }
}

#[cfg(feature = "hydrate")]
fn persisted_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

#[cfg(feature = "hydrate")]
fn persist_token(token: &str) {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

#[cfg(feature = "hydrate")]
fn clear_persisted_token() {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

// Server-rendered pages keep the session in memory only.
#[cfg(not(feature = "hydrate"))]
fn persisted_token() -> Option<String> {
    None
}

#[cfg(not(feature = "hydrate"))]
fn persist_token(_token: &str) {}

#[cfg(not(feature = "hydrate"))]
fn clear_persisted_token() {}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_listener(
        counter: Arc<AtomicUsize>,
    ) -> Callback<(AuthChangeEvent, Option<Session>)> {
        Callback::new(move |(event, session): (AuthChangeEvent, Option<Session>)| {
            if event == AuthChangeEvent::SignedOut {
                assert!(session.is_none());
                counter.fetch_add(1, Ordering::SeqCst);
            }
        })
    }

    // With no cached session and no persisted token, sign_out is a
    // purely local transition: it only clears state and notifies.
    #[tokio::test]
    async fn sign_out_notifies_every_registered_listener() {
        let owner = Owner::new();
        owner.set();

        let client = AuthClient::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let _first_sub = client.on_auth_state_change(counting_listener(first.clone()));
        let _second_sub = client.on_auth_state_change(counting_listener(second.clone()));

        client.sign_out().await.unwrap();

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery_to_that_listener_only() {
        let owner = Owner::new();
        owner.set();

        let client = AuthClient::new();
        let cancelled = Arc::new(AtomicUsize::new(0));
        let surviving = Arc::new(AtomicUsize::new(0));
        let cancelled_sub = client.on_auth_state_change(counting_listener(cancelled.clone()));
        let _surviving_sub = client.on_auth_state_change(counting_listener(surviving.clone()));

        cancelled_sub.unsubscribe();

        client.sign_out().await.unwrap();
        client.sign_out().await.unwrap();

        assert_eq!(cancelled.load(Ordering::SeqCst), 0);
        assert_eq!(surviving.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn get_session_without_any_token_is_ok_none() {
        let owner = Owner::new();
        owner.set();

        let client = AuthClient::new();
        assert_eq!(client.get_session().await.unwrap(), None);
    }
}
