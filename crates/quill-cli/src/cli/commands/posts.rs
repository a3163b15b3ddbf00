//! Post command handlers.

use anyhow::{Context, Result};
use quill_core::api::BlogClient;
use quill_types::{Author, NewPost, Post, TagList};

use super::auth;

pub async fn list(client: &BlogClient) -> Result<()> {
    let posts = client.list_posts().await.context("fetch posts")?;
    print_posts(&posts, "No posts yet.");
    Ok(())
}

pub async fn show(client: &BlogClient, id: u64) -> Result<()> {
    let (post, comments) = match client.post_with_comments(id).await {
        Ok(found) => found,
        Err(err) if err.is_not_found() => anyhow::bail!("Post {id} not found"),
        Err(err) => return Err(err).with_context(|| format!("fetch post {id}")),
    };

    println!("{}", post.title);
    println!(
        "By {} • {}",
        post.author.username,
        post.created_at.date_label()
    );
    if !post.tags.is_empty() {
        println!("{}", format_tags(&post.tags));
    }
    println!();
    println!("{}", post.content);
    println!();
    println!("Comments ({})", comments.len());
    if comments.is_empty() {
        println!("No comments yet.");
    }
    for comment in &comments {
        println!(
            "- {} • {}",
            comment.author.username,
            comment.created_at.date_label()
        );
        for line in comment.content.lines() {
            println!("  {line}");
        }
    }
    Ok(())
}

pub async fn create(
    client: &BlogClient,
    title: String,
    content: String,
    category: String,
    tags: &[String],
) -> Result<()> {
    let user = auth::require_user()?;
    if title.trim().is_empty() || content.trim().is_empty() {
        anyhow::bail!("Title and content are required");
    }
    let tags: TagList = tags.iter().map(String::as_str).collect();
    let post = NewPost {
        title,
        content,
        category,
        tags: tags.into_vec(),
        author: Author::from(&user),
    };
    let created = client.create_post(&post).await.context("create post")?;
    println!("Created post {}: {}", created.id, created.title);
    Ok(())
}

pub async fn by_user(client: &BlogClient, user_id: Option<u64>) -> Result<()> {
    let user_id = match user_id {
        Some(id) => id,
        None => auth::require_user()?.id,
    };
    let posts = client
        .user_posts(user_id)
        .await
        .with_context(|| format!("fetch posts of user {user_id}"))?;
    print_posts(&posts, "No posts found.");
    Ok(())
}

fn print_posts(posts: &[Post], empty: &str) {
    if posts.is_empty() {
        println!("{empty}");
        return;
    }
    for post in posts {
        println!("{}  {}", post.id, post.title);
        let mut byline = format!(
            "    By {} • {}",
            post.author.username,
            post.created_at.date_label()
        );
        if !post.tags.is_empty() {
            byline.push_str("  ");
            byline.push_str(&format_tags(&post.tags));
        }
        println!("{byline}");
    }
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}
