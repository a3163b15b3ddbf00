//! Auth state.
//!
//! Who is signed in. "Authenticated" is derived from the presence of a user,
//! so the flag and the user can never disagree.

use quill_types::User;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub(super) user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Events accepted by the auth slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    Login(User),
    Logout,
}
