// web_app/store.rs - Record store client
//
// Client-side wrappers over the enquiry server functions. Validation
// happens here, before any network traffic, and every failure comes
// back as a `SiteError` so the pages deal in one taxonomy.

use crate::web_app::auth::AuthClient;
use crate::web_app::model::{Enquiry, EnquiryInput, SiteError};
use crate::web_app::server_fns;
use leptos::prelude::ServerFnError;

/// Map a server-fn failure back into the site taxonomy. Payloads the
/// server encoded survive the hop; transport-level failures become
/// store errors carrying the raw message.
pub(crate) fn classify(err: ServerFnError) -> SiteError {
    match err {
        ServerFnError::ServerError(msg) => SiteError::decode(&msg),
        other => SiteError::store(other.to_string()),
    }
}

/// Validate, trim and submit an enquiry. Incomplete input fails with a
/// validation error without touching the network.
pub async fn submit_enquiry(input: &EnquiryInput) -> Result<Enquiry, SiteError> {
    let record = input.validate()?;
    server_fns::submit_enquiry(record).await.map_err(classify)
}

/// Fetch all enquiries, newest first. Fails with an auth error, before
/// any network call, when no session is available.
pub async fn list_enquiries(auth: &AuthClient) -> Result<Vec<Enquiry>, SiteError> {
    let Some(session) = auth.get_session().await? else {
        return Err(SiteError::auth("Not authenticated"));
    };
    server_fns::list_enquiries(session.access_token)
        .await
        .map_err(classify)
}
