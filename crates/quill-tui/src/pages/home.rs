use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use super::{PageRequest, PageUpdate};
use crate::blog::{self, BlogAction};
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

/// Post list backed by the blog slice.
#[derive(Debug, Default)]
pub struct HomeState {
    pub selected: usize,
}

impl HomeState {
    /// Opens the page, starting a fetch when `refresh` is set.
    pub fn open(refresh: bool) -> (Self, Vec<StateMutation>, Vec<UiEffect>) {
        let (mutations, effects) = if refresh {
            fetch_posts()
        } else {
            (vec![], vec![])
        };
        (Self::default(), mutations, effects)
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> PageUpdate {
        let posts = tui.blog.posts();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                PageUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < posts.len() {
                    self.selected += 1;
                }
                PageUpdate::stay()
            }
            KeyCode::Enter => match posts.get(self.selected) {
                Some(post) => PageUpdate::open(PageRequest::PostDetail { post: post.clone() }),
                None => PageUpdate::stay(),
            },
            KeyCode::Char('r') => {
                let (mutations, effects) = fetch_posts();
                PageUpdate::stay()
                    .with_mutations(mutations)
                    .with_ui_effects(effects)
            }
            _ => PageUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let selected = self
            .selected
            .min(tui.blog.posts().len().saturating_sub(1));
        blog::render_home(
            frame,
            area,
            &tui.blog,
            selected,
            tui.config.display.home_preview_chars,
        );
    }
}

pub(crate) fn fetch_posts() -> (Vec<StateMutation>, Vec<UiEffect>) {
    (
        vec![StateMutation::Blog(BlogAction::FetchPostsStart)],
        vec![UiEffect::FetchPosts { task: None }],
    )
}
