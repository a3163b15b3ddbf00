//! Blog state.
//!
//! Loaded posts, the post being viewed, and the fetch status. Loading and
//! error live in one enum so they are mutually exclusive.

use quill_types::Post;

/// Message used when a failure arrives without text.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch posts";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogState {
    pub(super) posts: Vec<Post>,
    pub(super) current_post: Option<Post>,
    pub(super) status: FetchStatus,
}

impl BlogState {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn current_post(&self) -> Option<&Post> {
        self.current_post.as_ref()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(message) => Some(message.as_str()),
            FetchStatus::Idle | FetchStatus::Loading => None,
        }
    }
}

/// Events accepted by the blog slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogAction {
    FetchPostsStart,
    FetchPostsSuccess(Vec<Post>),
    FetchPostsFailure(String),
    SetCurrentPost(Post),
    ClearCurrentPost,
}

impl BlogAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            BlogAction::FetchPostsStart => "fetch_posts_start",
            BlogAction::FetchPostsSuccess(_) => "fetch_posts_success",
            BlogAction::FetchPostsFailure(_) => "fetch_posts_failure",
            BlogAction::SetCurrentPost(_) => "set_current_post",
            BlogAction::ClearCurrentPost => "clear_current_post",
        }
    }
}
