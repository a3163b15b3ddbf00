//! Shared text-field editing and form rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::text::mask;

/// Applies a plain editing key to `value`. Returns whether it was consumed.
///
/// Enter inserts a newline only when `multiline` is set.
pub fn edit_text(value: &mut String, key: KeyEvent, multiline: bool) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            value.push(c);
            true
        }
        KeyCode::Backspace => {
            value.pop();
            true
        }
        KeyCode::Enter if multiline => {
            value.push('\n');
            true
        }
        _ => false,
    }
}

/// One field as displayed in a form.
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    pub masked: bool,
    /// Rows of text the field box shows.
    pub rows: u16,
}

impl<'a> FieldView<'a> {
    pub fn new(label: &'a str, value: &'a str, focused: bool) -> Self {
        Self {
            label,
            value,
            focused,
            masked: false,
            rows: 1,
        }
    }

    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }
}

/// Status lines under a form.
#[derive(Default)]
pub struct FormStatus<'a> {
    pub error: Option<&'a str>,
    pub notice: Option<&'a str>,
    pub busy: Option<&'a str>,
}

/// Renders a titled form: bordered fields top to bottom, then status lines.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[FieldView<'_>],
    extra: Vec<Line<'static>>,
    status: &FormStatus<'_>,
) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|f| Constraint::Length(f.rows + 2)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    for (field, chunk) in fields.iter().zip(chunks.iter().skip(1)) {
        render_field(frame, *chunk, field);
    }

    let mut lines = extra;
    if let Some(notice) = status.notice {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(busy) = status.busy {
        lines.push(Line::from(Span::styled(
            busy.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(error) = status.error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(last) = chunks.last() {
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), *last);
    }
}

fn render_field(frame: &mut Frame, area: Rect, field: &FieldView<'_>) {
    let border = if field.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", field.label),
            Style::default().fg(border),
        ));

    let mut text = if field.masked {
        mask(field.value)
    } else {
        field.value.to_string()
    };
    if field.focused {
        text.push('▏');
    }

    // Keep the tail visible for text longer than the box.
    let line_count = text.lines().count().max(1) as u16;
    let scroll = line_count.saturating_sub(field.rows);
    let para = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(para, area);
}
