use std::time::Duration;

use anyhow::Result;
use quill_types::{
    Comment, Credentials, LoginResponse, NewComment, NewPost, Post, RegisterResponse,
    Registration, User, Validate,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::errors::ApiError;
use crate::config::Config;

const USER_AGENT: &str = concat!("quill/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the blog REST API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    http: reqwest::Client,
}

impl BlogClient {
    /// Creates a client for `base_url`. `timeout` of `None` disables the
    /// per-request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Creates a client from config, applying the base URL override chain.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the client cannot be built.
    pub fn from_config(config: &Config, override_url: Option<&str>) -> Result<Self> {
        let base_url = config.resolve_base_url(override_url)?;
        Self::new(&base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /posts`
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("/posts", "post list").await
    }

    /// `GET /posts/{id}`
    pub async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        self.get_json(&format!("/posts/{id}"), "post").await
    }

    /// `GET /posts/{id}/comments`
    pub async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("/posts/{post_id}/comments"), "comment list")
            .await
    }

    /// `POST /posts/{id}/comments`
    pub async fn create_comment(
        &self,
        post_id: u64,
        comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        self.post_json(&format!("/posts/{post_id}/comments"), comment, "comment")
            .await
    }

    /// `POST /posts`
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        self.post_json("/posts", post, "post").await
    }

    /// `GET /users/{id}/posts`
    pub async fn user_posts(&self, user_id: u64) -> Result<Vec<Post>, ApiError> {
        self.get_json(&format!("/users/{user_id}/posts"), "post list")
            .await
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let response: LoginResponse = self
            .post_json("/auth/login", credentials, "login response")
            .await?;
        Ok(response.into_user())
    }

    /// `POST /auth/register`
    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        self.post_json("/auth/register", registration, "register response")
            .await
    }

    /// Fetches a post and its comments concurrently.
    ///
    /// Fails as a whole if either request fails.
    pub async fn post_with_comments(&self, id: u64) -> Result<(Post, Vec<Comment>), ApiError> {
        tokio::try_join!(self.get_post(id), self.list_comments(id))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T>(&self, path: &str, what: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        Self::decode(response, what).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, what: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Validate,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        Self::decode(response, what).await
    }

    /// Checks the status, parses the body and validates it.
    async fn decode<T>(response: reqwest::Response, what: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let status = response.status();
        let url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(ApiError::http_status(status.as_u16(), &body));
        }

        let value: T =
            serde_json::from_str(&body).map_err(|e| ApiError::decode(what, &e, &body))?;
        if let Err(err) = value.validate() {
            tracing::warn!(%url, %err, "rejected {what}");
            return Err(ApiError::invalid(what, &err));
        }

        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "response");
        Ok(value)
    }
}
