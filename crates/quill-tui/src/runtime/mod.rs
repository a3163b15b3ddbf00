//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s to `inbox_tx`
//! - The runtime drains `inbox_rx` each loop iteration
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use quill_core::api::BlogClient;
use quill_core::config::Config;
use quill_types::User;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame cadence while something is in flight or the user is typing.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: BlogClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and enters the alternate screen.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: Config, client: BlogClient) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let now = Instant::now();
        Ok(Self {
            terminal,
            state: AppState::new(config),
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop, starting from the restored session.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self, user: Option<User>) -> Result<()> {
        self.dispatch_event(UiEvent::Init { user });

        let mut dirty = true;
        while !self.state.tui.should_quit {
            let events = self.collect_events()?;
            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render; other events batch until then.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                self.dispatch_event(event);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.state.tui.tasks.is_any_running() || recent_terminal_activity
        {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        let client = self.client.clone();
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::CancelTask { token, .. } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }

            // Blog effects
            UiEffect::FetchPosts { task } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::PostList, task, true, move |cancel| {
                    handlers::fetch_posts(client, cancel)
                });
            }
            UiEffect::FetchPost { task, post_id } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::PostDetail, task, true, move |cancel| {
                    handlers::fetch_post(client, post_id, cancel)
                });
            }
            UiEffect::FetchUserPosts { task, user_id } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::UserPosts, task, true, move |cancel| {
                    handlers::fetch_user_posts(client, user_id, cancel)
                });
            }
            UiEffect::CreatePost { task, page, post } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::CreatePost, task, false, move |_| {
                    handlers::create_post(client, page, post)
                });
            }
            UiEffect::CreateComment {
                task,
                page,
                post_id,
                comment,
            } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::CreateComment, task, false, move |_| {
                    handlers::create_comment(client, page, post_id, comment)
                });
            }

            // Auth effects
            UiEffect::Login { task, credentials } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::Login, task, false, move |_| {
                    handlers::login(client, credentials)
                });
            }
            UiEffect::Register { task, registration } => {
                let Some(task) = task else {
                    return;
                };
                self.spawn_task(TaskKind::Register, task, false, move |_| {
                    handlers::register(client, registration)
                });
            }
            UiEffect::SaveSession { user } => handlers::save_session(user),
            UiEffect::ClearSession => handlers::clear_session(),
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
