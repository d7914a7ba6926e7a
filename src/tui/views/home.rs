//! Dashboard home: greeting, tool launcher and recent activity.

use crate::model::fixtures::{CHAT_SESSIONS, TOOLS};
use crate::tui::app::App;
use crate::tui::theme::{Styles, colors, count_badge};
use crate::tui::widgets::render_selectable_table;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row},
};

/// Sessions listed under "Recent".
const RECENT_SESSIONS: usize = 3;

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(RECENT_SESSIONS as u16 + 2),
        ])
        .split(area);

    render_greeting(frame, chunks[0], app);

    let rows: Vec<Row> = TOOLS
        .iter()
        .map(|(name, about)| {
            Row::new(vec![
                Cell::from(Span::styled(*name, Styles::value())),
                Cell::from(Span::styled(*about, Styles::text_muted())),
            ])
        })
        .collect();
    render_selectable_table(
        frame,
        chunks[1],
        "Tools",
        None,
        rows,
        &[Constraint::Length(20), Constraint::Min(20)],
        Some(app.screens.home.list.selected),
    );

    render_recent(frame, chunks[2]);
}

fn render_greeting(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let radars = app.radar().workflow.radars();
    let active = radars.iter().filter(|r| r.is_active()).count();

    let lines = vec![
        Line::from(vec![
            Span::styled("Welcome back, ", Styles::text()),
            Span::styled(app.screens.profile.display_name.clone(), Styles::header_title()),
        ]),
        Line::from(vec![
            Span::styled("Active radars ", Styles::label()),
            count_badge(active, scheme.success),
            Span::styled("  Unread notifications ", Styles::label()),
            count_badge(app.screens.notifications.unread(), scheme.warning),
        ]),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(paragraph, area);
}

fn render_recent(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = CHAT_SESSIONS
        .iter()
        .take(RECENT_SESSIONS)
        .map(|s| {
            Line::from(vec![
                Span::styled(format!("{:<18}", s.tool_name), Styles::label()),
                Span::styled(s.title, Styles::text()),
                Span::styled(format!("  {}", s.updated), Styles::text_muted()),
            ])
        })
        .collect();
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Recent ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(paragraph, area);
}
