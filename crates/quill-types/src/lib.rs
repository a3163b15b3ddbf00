//! Shared data model for the quill blog client.
//!
//! - `model`: entities returned by the blog API (User, Author, Post, Comment)
//! - `requests`: request bodies and auth responses
//! - `validate`: payload validation applied at the API boundary
//! - `text`: display helpers used by forms and list views

pub mod model;
pub mod requests;
pub mod text;
pub mod validate;

pub use model::{Author, Comment, Post, Timestamp, User};
pub use requests::{
    Credentials, LoginResponse, NewComment, NewPost, RegisterResponse, Registration,
};
pub use text::{TagList, preview};
pub use validate::{Validate, ValidationError, validate_all};
