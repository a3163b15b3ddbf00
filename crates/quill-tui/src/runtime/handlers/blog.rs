//! Blog API handlers.

use quill_core::api::BlogClient;
use quill_types::{NewComment, NewPost};
use tokio_util::sync::CancellationToken;

use super::run_request;
use crate::common::PageId;
use crate::events::{ApiUiEvent, UiEvent};

pub async fn fetch_posts(client: BlogClient, cancel: Option<CancellationToken>) -> UiEvent {
    let result = run_request(cancel, client.list_posts()).await;
    if let Ok(posts) = &result {
        tracing::debug!(count = posts.len(), "posts loaded");
    }
    UiEvent::Api(ApiUiEvent::PostsLoaded(result))
}

/// Loads a post and its comments concurrently.
pub async fn fetch_post(
    client: BlogClient,
    post_id: u64,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let result = run_request(cancel, client.post_with_comments(post_id)).await;
    UiEvent::Api(ApiUiEvent::PostLoaded { post_id, result })
}

pub async fn fetch_user_posts(
    client: BlogClient,
    user_id: u64,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let result = run_request(cancel, client.user_posts(user_id)).await;
    UiEvent::Api(ApiUiEvent::UserPostsLoaded { user_id, result })
}

pub async fn create_post(client: BlogClient, page: PageId, post: NewPost) -> UiEvent {
    let result = run_request(None, client.create_post(&post)).await;
    UiEvent::Api(ApiUiEvent::PostCreated { page, result })
}

pub async fn create_comment(
    client: BlogClient,
    page: PageId,
    post_id: u64,
    comment: NewComment,
) -> UiEvent {
    let result = run_request(None, client.create_comment(post_id, &comment)).await;
    UiEvent::Api(ApiUiEvent::CommentCreated {
        page,
        post_id,
        result,
    })
}
