//! Blog feature reducer.

use super::state::{BlogAction, BlogState, DEFAULT_FETCH_ERROR, FetchStatus};

/// Applies a blog event.
///
/// Only `FetchPostsSuccess` touches `posts`, and always as a full
/// replacement.
pub fn reduce(state: BlogState, action: BlogAction) -> BlogState {
    match action {
        BlogAction::FetchPostsStart => BlogState {
            status: FetchStatus::Loading,
            ..state
        },
        BlogAction::FetchPostsSuccess(posts) => BlogState {
            posts,
            status: FetchStatus::Idle,
            ..state
        },
        BlogAction::FetchPostsFailure(message) => {
            let message = if message.trim().is_empty() {
                DEFAULT_FETCH_ERROR.to_string()
            } else {
                message
            };
            BlogState {
                status: FetchStatus::Failed(message),
                ..state
            }
        }
        BlogAction::SetCurrentPost(post) => BlogState {
            current_post: Some(post),
            ..state
        },
        BlogAction::ClearCurrentPost => BlogState {
            current_post: None,
            ..state
        },
    }
}
