//! My cases, case detail, history and the static catalog screens.

use crate::model::fixtures::{CASES, CHAT_SESSIONS, case_by_id};
use crate::model::{CaseId, SessionData};
use crate::tui::app_states::{CasesState, CatalogState, HistoryState};
use crate::tui::router::ViewKind;
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::{render_detail_panel, render_empty_state, render_selectable_table};
use ratatui::{
    prelude::*,
    widgets::{Cell, Row},
};

pub fn render_cases(frame: &mut Frame, area: Rect, state: &CasesState) {
    let rows: Vec<Row> = CASES
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(Span::styled(c.title, Styles::value())),
                Cell::from(c.citation),
                Cell::from(c.court),
                Cell::from(Span::styled(c.status, Styles::text_muted())),
            ])
        })
        .collect();
    render_selectable_table(
        frame,
        area,
        "My Cases",
        Some(Row::new(vec!["Case", "Citation", "Court", "Status"])),
        rows,
        &[
            Constraint::Min(20),
            Constraint::Length(22),
            Constraint::Length(24),
            Constraint::Length(22),
        ],
        Some(state.list.selected),
    );
}

pub fn render_case_detail(frame: &mut Frame, area: Rect, id: CaseId) {
    let Some(case) = case_by_id(id) else {
        render_empty_state(frame, area, "Case not found", Some("Press Esc to go back"));
        return;
    };

    let field = |label: &str, value: &'static str| {
        Line::from(vec![
            Span::styled(format!("{label:<10}"), Styles::label()),
            Span::styled(value, Styles::text()),
        ])
    };
    let lines = vec![
        Line::styled(case.title, Styles::header_title()),
        Line::from(""),
        field("Citation", case.citation),
        field("Court", case.court),
        field("Decided", case.decided),
        field("Status", case.status),
        Line::from(""),
        Line::styled("Summary", Styles::section_title()),
        Line::styled(case.summary, Styles::text()),
        Line::from(""),
        Line::styled("Press a to run a case analysis", Styles::text_muted()),
    ];
    render_detail_panel(frame, area, "Case Detail", lines, colors().border_focused);
}

pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    state: &HistoryState,
    open: Option<&SessionData>,
) {
    let rows: Vec<Row> = CHAT_SESSIONS
        .iter()
        .map(|s| {
            let marker = if open.is_some_and(|o| o.id == s.id) {
                Span::styled("● ", Styles::success())
            } else {
                Span::raw("  ")
            };
            Row::new(vec![
                Cell::from(Line::from(vec![marker, Span::styled(s.title, Styles::text())])),
                Cell::from(Span::styled(s.tool_name, Styles::label())),
                Cell::from(Span::styled(s.updated, Styles::text_muted())),
            ])
        })
        .collect();
    render_selectable_table(
        frame,
        area,
        "Chat History",
        Some(Row::new(vec!["Session", "Tool", "Updated"])),
        rows,
        &[
            Constraint::Min(24),
            Constraint::Length(20),
            Constraint::Length(12),
        ],
        Some(state.list.selected),
    );
}

pub fn render_catalog(frame: &mut Frame, area: Rect, state: &CatalogState) {
    let scheme = colors();
    let rows: Vec<Row> = state
        .entries
        .iter()
        .map(|e| {
            let title_style = match state.view {
                ViewKind::Notifications if e.marked => Styles::text_muted(),
                ViewKind::Notifications => Styles::value(),
                _ => Styles::text(),
            };
            let tag = match state.view {
                ViewKind::Subscription if e.marked => {
                    Span::styled("current", Style::default().fg(scheme.success).bold())
                }
                ViewKind::Help => Span::styled(e.title.clone(), Styles::shortcut_key()),
                _ => Span::styled(e.tag.clone(), Styles::label()),
            };
            let title = if state.view == ViewKind::Help {
                Span::styled(e.detail.clone(), Styles::text())
            } else {
                Span::styled(e.title.clone(), title_style)
            };
            let detail = if state.view == ViewKind::Help {
                String::new()
            } else {
                e.detail.clone()
            };
            Row::new(vec![
                Cell::from(tag),
                Cell::from(title),
                Cell::from(Span::styled(detail, Styles::text_muted())),
            ])
        })
        .collect();
    render_selectable_table(
        frame,
        area,
        state.view.title(),
        None,
        rows,
        &[
            Constraint::Length(18),
            Constraint::Min(24),
            Constraint::Percentage(40),
        ],
        Some(state.list.selected),
    );
}
