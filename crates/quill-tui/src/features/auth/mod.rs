//! Auth feature slice.
//!
//! - `state.rs`: AuthState and the AuthAction vocabulary
//! - `update.rs`: pure reducer
//! - `render.rs`: navbar entries

mod render;
mod state;
mod update;

pub use render::navbar_items;
pub use state::{AuthAction, AuthState};
pub use update::reduce;
