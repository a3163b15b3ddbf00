use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quill_types::{Author, NewPost, TagList};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::form::{self, FieldView, FormStatus};
use super::post_detail::non_empty;
use super::{PageRequest, PageUpdate};
use crate::blog;
use crate::common::PageId;
use crate::effects::UiEffect;
use crate::state::TuiState;

pub const SIGNED_OUT_SUBMIT: &str = "You must be logged in to create a post";
pub const REQUIRED_FIELDS: &str = "Title and content are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Title,
    Content,
    Category,
    Tags,
}

impl ComposeField {
    const ORDER: [ComposeField; 4] = [
        ComposeField::Title,
        ComposeField::Content,
        ComposeField::Category,
        ComposeField::Tags,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// New post form.
#[derive(Debug, Default)]
pub struct ComposeState {
    pub id: PageId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tag_input: String,
    pub tags: TagList,
    /// Highlighted tag chip. Only set while the tag input is empty.
    pub selected_tag: Option<usize>,
    pub focus: ComposeField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl ComposeState {
    pub fn open(id: PageId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> PageUpdate {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return self.submit(tui);
        }
        match key.code {
            KeyCode::Esc => PageUpdate::open(PageRequest::Home { refresh: true }),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                self.selected_tag = None;
                PageUpdate::stay()
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                self.selected_tag = None;
                PageUpdate::stay()
            }
            _ => {
                self.edit_focused(key);
                PageUpdate::stay()
            }
        }
    }

    fn edit_focused(&mut self, key: KeyEvent) {
        match self.focus {
            ComposeField::Title | ComposeField::Category if key.code == KeyCode::Enter => {
                self.focus = self.focus.next();
            }
            ComposeField::Title => {
                form::edit_text(&mut self.title, key, false);
            }
            ComposeField::Content => {
                form::edit_text(&mut self.content, key, true);
            }
            ComposeField::Category => {
                form::edit_text(&mut self.category, key, false);
            }
            ComposeField::Tags => self.edit_tags(key),
        }
    }

    fn edit_tags(&mut self, key: KeyEvent) {
        let count = self.tags.as_slice().len();
        match key.code {
            KeyCode::Left if self.tag_input.is_empty() && count > 0 => {
                self.selected_tag = Some(match self.selected_tag {
                    Some(i) => i.saturating_sub(1),
                    None => count - 1,
                });
            }
            KeyCode::Right if self.selected_tag.is_some() => {
                self.selected_tag = self.selected_tag.map(|i| i + 1).filter(|i| *i < count);
            }
            KeyCode::Delete | KeyCode::Backspace if self.selected_tag.is_some() => {
                self.remove_selected_tag();
            }
            KeyCode::Backspace if self.tag_input.is_empty() => {
                self.tags.pop();
            }
            KeyCode::Enter => {
                self.selected_tag = None;
                self.add_tag();
            }
            _ => {
                self.selected_tag = None;
                form::edit_text(&mut self.tag_input, key, false);
            }
        }
    }

    /// Removes the highlighted chip and moves the highlight to its left
    /// neighbour (the first chip when the removed one was first).
    fn remove_selected_tag(&mut self) {
        let Some(index) = self.selected_tag else {
            return;
        };
        let Some(tag) = self.tags.as_slice().get(index).cloned() else {
            self.selected_tag = None;
            return;
        };
        self.tags.remove(&tag);
        self.selected_tag = if self.tags.is_empty() {
            None
        } else {
            Some(index.saturating_sub(1))
        };
    }

    /// Adds the tag being typed. Blank input is ignored; duplicates are
    /// dropped but still clear the input.
    pub fn add_tag(&mut self) {
        if self.tag_input.trim().is_empty() {
            return;
        }
        self.tags.add(&self.tag_input);
        self.tag_input.clear();
    }

    fn submit(&mut self, tui: &TuiState) -> PageUpdate {
        if self.submitting {
            return PageUpdate::stay();
        }
        let Some(user) = tui.auth.user() else {
            self.error = Some(SIGNED_OUT_SUBMIT.to_string());
            return PageUpdate::stay();
        };
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            self.error = Some(REQUIRED_FIELDS.to_string());
            return PageUpdate::stay();
        }
        self.error = None;
        self.submitting = true;
        let post = NewPost {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            tags: self.tags.as_slice().to_vec(),
            author: Author::from(user),
        };
        PageUpdate::stay().with_ui_effects(vec![UiEffect::CreatePost {
            task: None,
            page: self.id,
            post,
        }])
    }

    pub fn on_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(non_empty(message, "Failed to create post"));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if !tui.auth.is_authenticated() {
            blog::render_message(frame, area, "Please log in to create a post", Color::Yellow);
            return;
        }
        let fields = [
            FieldView::new("Title", &self.title, self.focus == ComposeField::Title),
            FieldView::new("Content", &self.content, self.focus == ComposeField::Content).rows(8),
            FieldView::new("Category", &self.category, self.focus == ComposeField::Category),
            FieldView::new(
                "Tags (Enter to add)",
                &self.tag_input,
                self.focus == ComposeField::Tags,
            ),
        ];
        let chips: Vec<Span<'static>> = self
            .tags
            .as_slice()
            .iter()
            .enumerate()
            .flat_map(|(i, tag)| {
                let style = if self.selected_tag == Some(i) {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                [Span::styled(format!("#{tag}"), style), Span::raw(" ")]
            })
            .collect();
        let extra = if chips.is_empty() {
            vec![]
        } else {
            vec![Line::from(chips)]
        };
        let status = FormStatus {
            error: self.error.as_deref(),
            busy: self.submitting.then_some("Creating..."),
            ..FormStatus::default()
        };
        form::render_form(frame, area, "Create New Post", &fields, extra, &status);
    }
}
