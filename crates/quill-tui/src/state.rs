//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── auth: AuthState   (signed-in user)
//! │   ├── blog: BlogState   (posts, current post, fetch status)
//! │   ├── task_seq: TaskSeq (request id generator)
//! │   ├── tasks: Tasks      (latest request per kind)
//! │   ├── page_seq: u64     (last PageId handed out)
//! │   └── config: Config
//! └── page: Page            (active page and its local state)
//! ```
//!
//! The page is kept apart from `TuiState` so page handlers can take
//! `&mut self` while reading the slices.

use quill_core::config::Config;

use crate::auth::AuthState;
use crate::blog::BlogState;
use crate::common::{PageId, TaskSeq, Tasks};
use crate::pages::Page;

pub struct AppState {
    pub tui: TuiState,
    pub page: Page,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            page: Page::default(),
        }
    }
}

pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub auth: AuthState,
    pub blog: BlogState,
    /// Task id sequence for API requests.
    pub task_seq: TaskSeq,
    /// Latest request per kind.
    pub tasks: Tasks,
    /// Last `PageId` handed out by navigation.
    pub page_seq: u64,
    pub config: Config,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    /// Hands out the id for the next opened page.
    pub fn next_page_id(&mut self) -> PageId {
        self.page_seq = self.page_seq.wrapping_add(1);
        PageId(self.page_seq)
    }

    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            auth: AuthState::default(),
            blog: BlogState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            page_seq: 0,
            config,
            spinner_frame: 0,
        }
    }
}
