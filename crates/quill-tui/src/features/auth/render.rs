//! Auth feature view: the signed-in part of the navbar.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use super::state::AuthState;

/// Navbar entries for the current auth state, key hint first.
pub fn navbar_items(auth: &AuthState) -> Vec<Span<'static>> {
    let entries: Vec<(char, String)> = match auth.user() {
        Some(user) => vec![
            ('n', "Create Post".to_string()),
            ('p', user.username.clone()),
            ('o', "Logout".to_string()),
        ],
        None => vec![('l', "Login".to_string()), ('g', "Register".to_string())],
    };

    let mut spans = Vec::with_capacity(entries.len() * 3);
    for (key, label) in entries {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw("  "));
    }
    spans
}
