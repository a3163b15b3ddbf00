//! Account command handlers.

use anyhow::{Context, Result};
use quill_core::api::BlogClient;
use quill_core::session::{self, Session};
use quill_types::{Credentials, Registration, User};

/// The signed-in user from the saved session, if any.
pub fn current_user() -> Result<Option<User>> {
    let session = session::load().context("load session")?;
    Ok(session.map(|s| s.user))
}

/// The signed-in user, or an error telling how to sign in.
pub fn require_user() -> Result<User> {
    current_user()?.context("Not logged in. Run `quill login` first.")
}

pub async fn login(client: &BlogClient, username: String, password: String) -> Result<()> {
    let credentials = Credentials { username, password };
    let user = client.login(&credentials).await.context("login failed")?;
    session::save(&Session::new(user.clone())).context("save session")?;
    println!("Logged in as {}", user.username);
    Ok(())
}

pub fn logout() -> Result<()> {
    if session::clear().context("clear session")? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

pub fn whoami() -> Result<()> {
    match current_user()? {
        Some(user) if user.email.is_empty() => {
            println!("{} (id {})", user.username, user.id);
        }
        Some(user) => println!("{} <{}> (id {})", user.username, user.email, user.id),
        None => println!("Not logged in."),
    }
    Ok(())
}

pub async fn register(
    client: &BlogClient,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    let registration = Registration {
        username,
        email,
        password,
    };
    let response = client
        .register(&registration)
        .await
        .context("registration failed")?;
    println!(
        "Registered user {}. Run `quill login` to sign in.",
        response.user_id
    );
    Ok(())
}
