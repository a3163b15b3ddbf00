//! Cross-slice state mutations.
//!
//! Pages return these to request changes to the auth and blog slices. The
//! main reducer applies them in order through the slice reducers.

use crate::auth::AuthAction;
use crate::blog::BlogAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    Auth(AuthAction),
    Blog(BlogAction),
}
