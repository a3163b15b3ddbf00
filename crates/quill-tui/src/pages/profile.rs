use crossterm::event::{KeyCode, KeyEvent};
use quill_types::{Post, User};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::post_detail::non_empty;
use super::{PageRequest, PageUpdate};
use crate::blog;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

/// The signed-in user's details and their posts.
#[derive(Debug, Default)]
pub struct ProfileState {
    pub user_id: Option<u64>,
    pub posts: Vec<Post>,
    pub loaded: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl ProfileState {
    pub fn open(user: Option<&User>) -> (Self, Vec<StateMutation>, Vec<UiEffect>) {
        let Some(user) = user else {
            return (Self::default(), vec![], vec![]);
        };
        let state = Self {
            user_id: Some(user.id),
            ..Self::default()
        };
        let effects = vec![UiEffect::FetchUserPosts {
            task: None,
            user_id: user.id,
        }];
        (state, vec![], effects)
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> PageUpdate {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                PageUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.posts.len() {
                    self.selected += 1;
                }
                PageUpdate::stay()
            }
            KeyCode::Enter => match self.posts.get(self.selected) {
                Some(post) => PageUpdate::open(PageRequest::PostDetail { post: post.clone() }),
                None => PageUpdate::stay(),
            },
            KeyCode::Char('r') => match self.user_id {
                Some(user_id) => {
                    self.loaded = false;
                    PageUpdate::stay()
                        .with_ui_effects(vec![UiEffect::FetchUserPosts { task: None, user_id }])
                }
                None => PageUpdate::stay(),
            },
            KeyCode::Esc => PageUpdate::open(PageRequest::Home { refresh: true }),
            _ => PageUpdate::stay(),
        }
    }

    /// Applies a user-posts fetch. Results for another user are ignored.
    pub fn on_loaded(&mut self, user_id: u64, result: Result<Vec<Post>, String>) {
        if self.user_id != Some(user_id) {
            return;
        }
        self.loaded = true;
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.error = None;
                self.selected = self.selected.min(self.posts.len().saturating_sub(1));
            }
            Err(message) => {
                self.error = Some(non_empty(message, "Failed to fetch user posts"));
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let Some(user) = tui.auth.user() else {
            blog::render_message(
                frame,
                area,
                "Please log in to view your profile",
                Color::Yellow,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let mut header = vec![
            Line::from(Span::styled(
                user.username.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                user.email.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Your Posts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(error) = &self.error {
            header.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(header), chunks[0]);

        if !self.loaded && self.error.is_none() {
            blog::render_message(frame, chunks[1], "Loading...", Color::Yellow);
            return;
        }
        blog::render_post_list(
            frame,
            chunks[1],
            &self.posts,
            self.selected,
            tui.config.display.profile_preview_chars,
            "No posts yet. Press n to create one.",
        );
    }
}
