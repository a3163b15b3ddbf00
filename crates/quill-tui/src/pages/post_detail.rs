use crossterm::event::{KeyCode, KeyEvent};
use quill_types::{Author, Comment, NewComment, Post};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;
use ratatui::widgets::{Paragraph, Wrap};

use super::form::{self, FieldView, FormStatus};
use super::{PageRequest, PageUpdate};
use crate::blog::{self, BlogAction};
use crate::common::PageId;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

const COMMENT_ROWS: u16 = 3;

/// A post with its comments and the comment box.
#[derive(Debug)]
pub struct PostDetailState {
    pub id: PageId,
    pub post_id: u64,
    pub comments: Vec<Comment>,
    pub loaded: bool,
    pub error: Option<String>,
    pub comment_input: String,
    /// Comment box has focus.
    pub composing: bool,
    pub submitting: bool,
    pub comment_error: Option<String>,
    pub scroll: u16,
}

impl PostDetailState {
    pub fn open(post: Post, id: PageId) -> (Self, Vec<StateMutation>, Vec<UiEffect>) {
        let post_id = post.id;
        (
            Self {
                id,
                post_id,
                comments: Vec::new(),
                loaded: false,
                error: None,
                comment_input: String::new(),
                composing: false,
                submitting: false,
                comment_error: None,
                scroll: 0,
            },
            vec![StateMutation::Blog(BlogAction::SetCurrentPost(post))],
            vec![UiEffect::FetchPost {
                task: None,
                post_id,
            }],
        )
    }

    pub fn captures_text(&self) -> bool {
        self.composing
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> PageUpdate {
        if self.composing {
            return self.handle_comment_key(tui, key);
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => {
                PageUpdate::open(PageRequest::Home { refresh: true })
            }
            KeyCode::Char('c') => {
                self.composing = true;
                PageUpdate::stay()
            }
            KeyCode::Char('r') => {
                self.loaded = false;
                self.error = None;
                PageUpdate::stay().with_ui_effects(vec![UiEffect::FetchPost {
                    task: None,
                    post_id: self.post_id,
                }])
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                PageUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                PageUpdate::stay()
            }
            _ => PageUpdate::stay(),
        }
    }

    fn handle_comment_key(&mut self, tui: &TuiState, key: KeyEvent) -> PageUpdate {
        match key.code {
            KeyCode::Esc => {
                self.composing = false;
                PageUpdate::stay()
            }
            KeyCode::Enter => self.submit_comment(tui),
            _ => {
                form::edit_text(&mut self.comment_input, key, false);
                PageUpdate::stay()
            }
        }
    }

    fn submit_comment(&mut self, tui: &TuiState) -> PageUpdate {
        if self.submitting || self.comment_input.trim().is_empty() {
            return PageUpdate::stay();
        }
        self.submitting = true;
        self.comment_error = None;
        let comment = NewComment {
            content: self.comment_input.clone(),
            author: tui.auth.user().map(Author::from),
        };
        PageUpdate::stay().with_ui_effects(vec![UiEffect::CreateComment {
            task: None,
            page: self.id,
            post_id: self.post_id,
            comment,
        }])
    }

    /// Applies the post + comments fetch. Returns the fresh post to store
    /// as current.
    pub fn on_loaded(&mut self, result: Result<(Post, Vec<Comment>), String>) -> Option<Post> {
        self.loaded = true;
        match result {
            Ok((post, comments)) => {
                self.comments = comments;
                self.error = None;
                Some(post)
            }
            Err(message) => {
                self.error = Some(non_empty(message, "Failed to fetch post"));
                None
            }
        }
    }

    pub fn on_comment_created(&mut self, result: Result<Comment, String>) {
        self.submitting = false;
        match result {
            Ok(comment) => {
                self.comments.push(comment);
                self.comment_input.clear();
            }
            Err(message) => {
                self.comment_error = Some(non_empty(message, "Failed to add comment"));
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if let Some(error) = &self.error {
            blog::render_message(frame, area, error, Color::Red);
            return;
        }
        let Some(post) = tui.blog.current_post() else {
            blog::render_message(frame, area, "Loading...", Color::Yellow);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(COMMENT_ROWS + 2),
                Constraint::Length(1),
            ])
            .split(area);

        let mut lines = blog::post_detail_lines(post, &self.comments);
        if !self.loaded {
            lines.push(ratatui::text::Line::from("Loading comments..."));
        }
        let para = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(para, chunks[0]);

        let status = FormStatus {
            error: self.comment_error.as_deref(),
            busy: self.submitting.then_some("Posting comment..."),
            ..FormStatus::default()
        };
        let field = FieldView::new("Write a comment...", &self.comment_input, self.composing)
            .rows(COMMENT_ROWS);
        form::render_form(
            frame,
            Rect {
                height: chunks[1].height + chunks[2].height,
                ..chunks[1]
            },
            "",
            &[field],
            vec![],
            &status,
        );
    }
}

pub(crate) fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
