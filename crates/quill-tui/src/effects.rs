//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use quill_types::{Credentials, NewComment, NewPost, Registration, User};
use tokio_util::sync::CancellationToken;

use crate::common::{PageId, TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
///
/// Task effects are built with `task: None`; the reducer fills in a fresh id
/// before returning them.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// `GET /posts`
    FetchPosts { task: Option<TaskId> },

    /// `GET /posts/{id}` and its comments.
    FetchPost { task: Option<TaskId>, post_id: u64 },

    /// `GET /users/{id}/posts`
    FetchUserPosts { task: Option<TaskId>, user_id: u64 },

    /// `POST /posts`, sent from the compose page `page`.
    CreatePost {
        task: Option<TaskId>,
        page: PageId,
        post: NewPost,
    },

    /// `POST /posts/{id}/comments`, sent from the post page `page`.
    CreateComment {
        task: Option<TaskId>,
        page: PageId,
        post_id: u64,
        comment: NewComment,
    },

    /// `POST /auth/login`
    Login {
        task: Option<TaskId>,
        credentials: Credentials,
    },

    /// `POST /auth/register`
    Register {
        task: Option<TaskId>,
        registration: Registration,
    },

    /// Persist the signed-in user to the session file.
    SaveSession { user: User },

    /// Remove the session file.
    ClearSession,

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}

impl UiEffect {
    /// The task kind and id slot of a task effect.
    pub fn task_slot(&mut self) -> Option<(TaskKind, &mut Option<TaskId>)> {
        match self {
            UiEffect::FetchPosts { task } => Some((TaskKind::PostList, task)),
            UiEffect::FetchPost { task, .. } => Some((TaskKind::PostDetail, task)),
            UiEffect::FetchUserPosts { task, .. } => Some((TaskKind::UserPosts, task)),
            UiEffect::CreatePost { task, .. } => Some((TaskKind::CreatePost, task)),
            UiEffect::CreateComment { task, .. } => Some((TaskKind::CreateComment, task)),
            UiEffect::Login { task, .. } => Some((TaskKind::Login, task)),
            UiEffect::Register { task, .. } => Some((TaskKind::Register, task)),
            UiEffect::Quit
            | UiEffect::SaveSession { .. }
            | UiEffect::ClearSession
            | UiEffect::CancelTask { .. } => None,
        }
    }
}
