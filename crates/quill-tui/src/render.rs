//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::auth;
use crate::state::AppState;

const NAVBAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const BODY_MARGIN: u16 = 1;

/// Spinner frames shown while a request is in flight.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
const SPINNER_SPEED_DIVISOR: usize = 3;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    render_navbar(app, frame, chunks[0]);

    let body = Rect {
        x: chunks[1].x + BODY_MARGIN,
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(BODY_MARGIN * 2),
        height: chunks[1].height,
    };
    app.page.render(frame, body, &app.tui);

    render_footer(app, frame, chunks[2]);
}

fn render_navbar(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Line::from(vec![
        Span::styled(
            " Blog Platform",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  h Home", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(brand), inner);

    let items = Line::from(auth::navbar_items(&app.tui.auth)).alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(items), inner);
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    if app.tui.tasks.is_any_running() {
        let idx = (app.tui.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len();
        spans.push(Span::styled(
            format!(" {} ", SPINNER_FRAMES[idx]),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        app.page.key_hints(&app.tui),
        Style::default().fg(Color::DarkGray),
    ));
    if !app.page.captures_text(&app.tui) {
        spans.push(Span::styled(
            " · q quit",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
