//! Full-screen terminal client for the quill blog.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod pages;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use anyhow::Result;
pub use features::{auth, blog};
use quill_core::api::BlogClient;
use quill_core::config::Config;
use quill_core::session;
pub use runtime::TuiRuntime;

/// Runs the interactive client until the user quits.
///
/// A saved session signs the user back in before the first fetch. An
/// unreadable session file is logged and treated as signed out.
///
/// # Errors
/// Returns an error if no terminal is attached or terminal I/O fails.
pub async fn run(config: Config, client: BlogClient) -> Result<()> {
    terminal::ensure_tty()?;

    let user = match session::load() {
        Ok(session) => session.map(|s| s.user),
        Err(err) => {
            tracing::warn!("Ignoring unreadable session: {err:#}");
            None
        }
    };

    tracing::info!(api = client.base_url(), "starting interactive client");
    let mut runtime = TuiRuntime::new(config, client)?;
    runtime.run(user)
}
