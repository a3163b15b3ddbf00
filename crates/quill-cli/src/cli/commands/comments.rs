//! Comment command handlers.

use anyhow::{Context, Result, bail};
use quill_core::api::BlogClient;
use quill_types::{Author, NewComment};

use super::auth;

/// Adds a comment, attributed to the signed-in user when there is one.
pub async fn add(client: &BlogClient, post_id: u64, content: &str) -> Result<()> {
    if content.trim().is_empty() {
        bail!("Comment cannot be empty");
    }
    let author = auth::current_user()?.as_ref().map(Author::from);
    let comment = NewComment {
        content: content.to_string(),
        author,
    };
    let created = client
        .create_comment(post_id, &comment)
        .await
        .with_context(|| format!("add comment to post {post_id}"))?;
    println!("Added comment {} to post {}", created.id, post_id);
    Ok(())
}
