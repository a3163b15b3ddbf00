//! Core services for quill: configuration, the signed-in session cache,
//! logging setup and the blog API client.

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
