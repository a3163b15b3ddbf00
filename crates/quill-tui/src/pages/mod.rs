//! Page modules for the TUI.
//!
//! Exactly one page is active at a time. Each page owns its local state, key
//! handler, and render function; the shared auth and blog slices live in
//! `TuiState` and are only changed through `StateMutation`s the page returns.
//!
//! ## Module Structure
//!
//! - `home.rs`: post list (the blog slice)
//! - `post_detail.rs`: one post, its comments, and the comment box
//! - `compose.rs`: new post form
//! - `profile.rs`: signed-in user and their posts
//! - `account.rs`: login and registration forms
//! - `form.rs`: shared field editing and form rendering

pub mod account;
pub mod compose;
pub mod form;
pub mod home;
pub mod post_detail;
pub mod profile;

pub use account::{LoginField, LoginForm, RegisterField, RegisterForm};
pub use compose::{ComposeField, ComposeState};
use crossterm::event::KeyEvent;
pub use home::HomeState;
pub use post_detail::PostDetailState;
pub use profile::ProfileState;
use quill_types::Post;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::common::PageId;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

// ============================================================================
// PageRequest / PageTransition / PageUpdate
// ============================================================================

/// Requests to navigate to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Post list. `refresh` starts a fetch on entry.
    Home { refresh: bool },
    PostDetail { post: Post },
    Compose,
    Profile,
    Login { notice: Option<String> },
    Register,
}

/// Transition returned by page key handlers.
#[derive(Debug)]
pub enum PageTransition {
    Stay,
    Open(PageRequest),
}

/// Update returned by page key handlers.
#[derive(Debug)]
pub struct PageUpdate {
    pub transition: PageTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl PageUpdate {
    fn new(transition: PageTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(PageTransition::Stay)
    }

    pub fn open(request: PageRequest) -> Self {
        Self::new(PageTransition::Open(request))
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Page
// ============================================================================

#[derive(Debug)]
pub enum Page {
    Home(HomeState),
    PostDetail(PostDetailState),
    Compose(ComposeState),
    Profile(ProfileState),
    Login(LoginForm),
    Register(RegisterForm),
}

impl Default for Page {
    fn default() -> Self {
        Page::Home(HomeState::default())
    }
}

impl Page {
    /// Builds the page for `request` along with its entry mutations and
    /// effects. `id` tags results that belong to this opening only.
    pub fn open(
        request: PageRequest,
        id: PageId,
        tui: &TuiState,
    ) -> (Page, Vec<StateMutation>, Vec<UiEffect>) {
        match request {
            PageRequest::Home { refresh } => {
                let (state, mutations, effects) = HomeState::open(refresh);
                (Page::Home(state), mutations, effects)
            }
            PageRequest::PostDetail { post } => {
                let (state, mutations, effects) = PostDetailState::open(post, id);
                (Page::PostDetail(state), mutations, effects)
            }
            PageRequest::Compose => (Page::Compose(ComposeState::open(id)), vec![], vec![]),
            PageRequest::Profile => {
                let (state, mutations, effects) = ProfileState::open(tui.auth.user());
                (Page::Profile(state), mutations, effects)
            }
            PageRequest::Login { notice } => (Page::Login(LoginForm::open(notice)), vec![], vec![]),
            PageRequest::Register => (Page::Register(RegisterForm::default()), vec![], vec![]),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> PageUpdate {
        match self {
            Page::Home(p) => p.handle_key(tui, key),
            Page::PostDetail(p) => p.handle_key(tui, key),
            Page::Compose(p) => p.handle_key(tui, key),
            Page::Profile(p) => p.handle_key(tui, key),
            Page::Login(f) => f.handle_key(key),
            Page::Register(f) => f.handle_key(key),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Page::Home(p) => p.render(frame, area, tui),
            Page::PostDetail(p) => p.render(frame, area, tui),
            Page::Compose(p) => p.render(frame, area, tui),
            Page::Profile(p) => p.render(frame, area, tui),
            Page::Login(f) => f.render(frame, area),
            Page::Register(f) => f.render(frame, area),
        }
    }

    /// Whether plain character keys go to a text field instead of the
    /// global shortcuts.
    pub fn captures_text(&self, tui: &TuiState) -> bool {
        match self {
            Page::Home(_) | Page::Profile(_) => false,
            Page::PostDetail(p) => p.captures_text(),
            Page::Compose(_) => tui.auth.is_authenticated(),
            Page::Login(_) | Page::Register(_) => true,
        }
    }

    /// Footer hints for the page's own keys.
    pub fn key_hints(&self, tui: &TuiState) -> &'static str {
        match self {
            Page::Home(_) => "j/k move · Enter open · r refresh",
            Page::PostDetail(p) if p.composing => "Enter post comment · Esc done",
            Page::PostDetail(_) => "c comment · j/k scroll · r reload · Esc back",
            Page::Compose(_) if tui.auth.is_authenticated() => {
                "Tab next field · Enter add tag · ←/→ pick tag · Del remove · Ctrl+S publish · Esc cancel"
            }
            Page::Compose(_) => "Esc back",
            Page::Profile(_) => "j/k move · Enter open · r refresh",
            Page::Login(_) | Page::Register(_) => "Tab next field · Enter submit · Esc cancel",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Home(_) => "home",
            Page::PostDetail(_) => "post_detail",
            Page::Compose(_) => "compose",
            Page::Profile(_) => "profile",
            Page::Login(_) => "login",
            Page::Register(_) => "register",
        }
    }
}
