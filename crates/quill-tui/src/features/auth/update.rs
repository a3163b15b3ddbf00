//! Auth feature reducer.

use super::state::{AuthAction, AuthState};

/// Applies an auth event. Both transitions replace the whole state.
pub fn reduce(_state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::Login(user) => AuthState { user: Some(user) },
        AuthAction::Logout => AuthState { user: None },
    }
}
