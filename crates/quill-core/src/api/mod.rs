//! Blog REST API client.

mod client;
mod errors;

pub use client::BlogClient;
pub use errors::{ApiError, ApiErrorKind};
