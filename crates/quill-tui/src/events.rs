//! UI event types.
//!
//! All external inputs (terminal, async results) are converted to `UiEvent`
//! before being processed by the reducer.
//!
//! ## Task Lifecycle Events
//!
//! API calls use a uniform lifecycle:
//! - The reducer issues a `TaskId` when it emits the effect; that id becomes
//!   the latest for its `TaskKind`
//! - The runtime emits `UiEvent::TaskStarted` once the task is spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer applies the result only if the id is still the latest

use crossterm::event::Event as CrosstermEvent;
use quill_types::{Comment, Post, RegisterResponse, User};

use crate::common::{PageId, TaskCompleted, TaskKind, TaskStarted};

/// Results of API calls. Errors carry the display message.
#[derive(Debug)]
pub enum ApiUiEvent {
    PostsLoaded(Result<Vec<Post>, String>),
    PostLoaded {
        post_id: u64,
        result: Result<(Post, Vec<Comment>), String>,
    },
    UserPostsLoaded {
        user_id: u64,
        result: Result<Vec<Post>, String>,
    },
    PostCreated {
        page: PageId,
        result: Result<Post, String>,
    },
    CommentCreated {
        page: PageId,
        post_id: u64,
        result: Result<Comment, String>,
    },
    LoggedIn(Result<User, String>),
    Registered(Result<RegisterResponse, String>),
}

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// First event of a run; carries the restored session, if any.
    Init { user: Option<User> },

    /// Timer tick (spinner animation).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// Task lifecycle: runtime started a task (cancel token optional).
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    /// Task lifecycle: runtime completed a task (wraps the result event).
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// API call results.
    Api(ApiUiEvent),
}
