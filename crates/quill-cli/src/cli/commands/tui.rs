//! Interactive client launcher.

use anyhow::{Context, Result};
use quill_core::api::BlogClient;
use quill_core::config::Config;

pub async fn run(config: Config, client: BlogClient) -> Result<()> {
    quill_tui::run(config, client)
        .await
        .context("interactive client failed")
}
