//! Blog feature view.
//!
//! Post cards for the list pages and the full post view. Functions here only
//! read state.

use quill_types::{Comment, Post, preview};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::state::{BlogState, FetchStatus};
use crate::common::text::{single_line, truncate_with_ellipsis};

const LOADING_TEXT: &str = "Loading...";

/// Lines per card: title, preview, byline, tags, spacer.
const CARD_HEIGHT: usize = 5;

/// Renders the home page body from the blog slice.
pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    blog: &BlogState,
    selected: usize,
    preview_chars: usize,
) {
    match blog.status() {
        FetchStatus::Loading => render_message(frame, area, LOADING_TEXT, Color::Yellow),
        FetchStatus::Failed(message) => render_message(frame, area, message, Color::Red),
        FetchStatus::Idle => render_post_list(
            frame,
            area,
            blog.posts(),
            selected,
            preview_chars,
            "No posts yet.",
        ),
    }
}

/// Renders a single status line (loading, error, empty).
pub fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let para = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

/// Renders posts as cards, keeping the selected card on screen.
pub fn render_post_list(
    frame: &mut Frame,
    area: Rect,
    posts: &[Post],
    selected: usize,
    preview_chars: usize,
    empty_text: &str,
) {
    if posts.is_empty() {
        render_message(frame, area, empty_text, Color::DarkGray);
        return;
    }

    let width = area.width as usize;
    let lines: Vec<Line<'static>> = posts
        .iter()
        .enumerate()
        .flat_map(|(i, post)| post_card_lines(post, preview_chars, width, i == selected))
        .collect();

    let height = area.height as usize;
    let selected_end = (selected.min(posts.len() - 1) + 1) * CARD_HEIGHT;
    let offset = selected_end.saturating_sub(height);

    let para = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(para, area);
}

/// Builds the lines of one post card.
pub fn post_card_lines(
    post: &Post,
    preview_chars: usize,
    width: usize,
    selected: bool,
) -> Vec<Line<'static>> {
    let marker = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let body_width = width.saturating_sub(2);

    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(truncate_with_ellipsis(&post.title, body_width), title_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::raw(truncate_with_ellipsis(
                &single_line(&preview(&post.content, preview_chars)),
                body_width,
            )),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_with_ellipsis(
                    &format!(
                        "By {} • {}",
                        post.author.username,
                        post.created_at.date_label()
                    ),
                    body_width,
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![Span::raw("  "), tags_span(&post.tags, body_width)]),
        Line::from(""),
    ]
}

fn tags_span(tags: &[String], width: usize) -> Span<'static> {
    let text = tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");
    Span::styled(
        truncate_with_ellipsis(&text, width),
        Style::default().fg(Color::Magenta),
    )
}

/// Builds the full view of a post with its comments.
pub fn post_detail_lines(post: &Post, comments: &[Comment]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "By {} • {}",
                post.author.username,
                post.created_at.date_label()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if !post.category.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Category: {}", post.category),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !post.tags.is_empty() {
        lines.push(Line::from(tags_span(&post.tags, usize::MAX)));
    }
    lines.push(Line::from(""));
    lines.extend(post.content.lines().map(|line| Line::from(line.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Comments ({})", comments.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for comment in comments {
        lines.push(Line::from(vec![
            Span::styled(
                comment.author.username.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" • {}", comment.created_at.date_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.extend(
            comment
                .content
                .lines()
                .map(|line| Line::from(format!("  {line}"))),
        );
    }
    lines
}
