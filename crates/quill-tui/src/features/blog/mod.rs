//! Blog feature slice.
//!
//! - `state.rs`: BlogState, FetchStatus and the BlogAction vocabulary
//! - `update.rs`: pure reducer
//! - `render.rs`: post cards and the post view

mod render;
mod state;
mod update;

pub use render::{post_detail_lines, render_home, render_message, render_post_list};
pub use state::{BlogAction, BlogState, DEFAULT_FETCH_ERROR, FetchStatus};
pub use update::reduce;
