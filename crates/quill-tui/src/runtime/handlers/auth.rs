//! Auth handlers: API sign-in and the local session file.

use quill_core::api::BlogClient;
use quill_core::session::{self, Session};
use quill_types::{Credentials, Registration, User};

use super::run_request;
use crate::events::{ApiUiEvent, UiEvent};

pub async fn login(client: BlogClient, credentials: Credentials) -> UiEvent {
    let result = run_request(None, client.login(&credentials)).await;
    UiEvent::Api(ApiUiEvent::LoggedIn(result))
}

pub async fn register(client: BlogClient, registration: Registration) -> UiEvent {
    let result = run_request(None, client.register(&registration)).await;
    UiEvent::Api(ApiUiEvent::Registered(result))
}

/// Writes the session file. Failures are logged; the signed-in state is kept.
pub fn save_session(user: User) {
    if let Err(err) = session::save(&Session::new(user)) {
        tracing::warn!("Failed to save session: {err:#}");
    }
}

pub fn clear_session() {
    if let Err(err) = session::clear() {
        tracing::warn!("Failed to clear session: {err:#}");
    }
}
