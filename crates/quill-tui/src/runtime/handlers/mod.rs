//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them and sends the result to the inbox. They never touch state.
//!
//! ```ignore
//! // Handler: pure async, returns UiEvent
//! pub async fn fetch_posts(client: BlogClient, cancel: Option<CancellationToken>) -> UiEvent { ... }
//!
//! // Runtime: spawns with a TaskStarted/TaskCompleted lifecycle
//! self.spawn_task(TaskKind::PostList, id, true, move |cancel| handlers::fetch_posts(client, cancel));
//! ```

pub mod auth;
pub mod blog;

use std::future::Future;

pub use auth::*;
pub use blog::*;
use quill_core::api::ApiError;
use tokio_util::sync::CancellationToken;

const CANCELLED: &str = "Request cancelled";

/// Awaits an API call unless `cancel` fires first. Errors become their
/// display message.
async fn run_request<T>(
    cancel: Option<CancellationToken>,
    request: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, String> {
    let result = match cancel {
        Some(token) => tokio::select! {
            () = token.cancelled() => return Err(CANCELLED.to_string()),
            result = request => result,
        },
        None => request.await,
    };
    result.map_err(|err| {
        tracing::warn!(kind = %err.kind, "{err}");
        err.to_string()
    })
}
