//! Precedent radar: dashboard table, setup wizard, preview and case feed.

use crate::model::{RadarDraft, RadarItem};
use crate::tui::app_states::{RadarPhase, RadarScreen};
use crate::tui::theme::{Styles, colors, radar_status_badge};
use crate::tui::widgets::{render_empty_state, render_selectable_table, truncate_str};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Wrap},
};

pub fn render_radar(frame: &mut Frame, area: Rect, screen: &RadarScreen) {
    match screen.workflow.phase() {
        RadarPhase::Dashboard => render_dashboard(frame, area, screen),
        RadarPhase::Setup(draft) => render_setup(frame, area, draft),
        RadarPhase::Preview(draft) => render_preview(frame, area, draft),
        RadarPhase::CaseFeed { radar_id } => {
            render_feed(frame, area, screen, screen.workflow.radar(radar_id));
        }
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, screen: &RadarScreen) {
    let radars = screen.workflow.radars();
    if radars.is_empty() {
        render_empty_state(
            frame,
            area,
            "No radars yet",
            Some("Press n to monitor a new proposition"),
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(area);

    let rows: Vec<Row> = radars
        .iter()
        .map(|r| {
            let alerts = if r.notifications_enabled { "on" } else { "off" };
            Row::new(vec![
                Cell::from(radar_status_badge(r.status)),
                Cell::from(truncate_str(&r.proposition, 48)),
                Cell::from(r.cases_intercepted.to_string()),
                Cell::from(r.articles_intercepted.to_string()),
                Cell::from(alerts),
            ])
        })
        .collect();
    let header = Row::new(vec!["Status", "Proposition", "Cases", "Articles", "Alerts"]);
    render_selectable_table(
        frame,
        chunks[0],
        "Precedent Radars",
        Some(header),
        rows,
        &[
            Constraint::Length(10),
            Constraint::Min(24),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
        Some(screen.list.selected),
    );

    if let Some(radar) = screen.selected_radar() {
        render_radar_detail(frame, chunks[1], radar);
    }
}

fn render_radar_detail(frame: &mut Frame, area: Rect, radar: &RadarItem) {
    let last = radar
        .last_activity
        .map_or_else(|| "no activity yet".to_string(), |t| t.format("%d %b %Y %H:%M").to_string());
    let lines = vec![
        Line::from(vec![
            Span::styled("Courts   ", Styles::label()),
            Span::styled(radar.jurisdiction_label(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Created  ", Styles::label()),
            Span::styled(radar.created_at.format("%d %b %Y").to_string(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Activity ", Styles::label()),
            Span::styled(last, Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Id       ", Styles::label()),
            Span::styled(radar.id.clone(), Styles::text_muted()),
        ]),
    ];
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Details ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(panel, area);
}

fn draft_lines(draft: &RadarDraft) -> Vec<Line<'static>> {
    let courts = if draft.jurisdictions.is_empty() {
        Span::styled("none chosen (Tab to pick)", Styles::warning())
    } else {
        Span::styled(draft.jurisdictions.join(", "), Styles::text())
    };
    vec![
        Line::styled("Proposition", Styles::label()),
        Line::from(vec![
            Span::styled(draft.proposition.clone(), Styles::value()),
            Span::styled("▏", Style::default().fg(colors().accent)),
        ]),
        Line::from(""),
        Line::styled("Courts", Styles::label()),
        Line::from(courts),
    ]
}

fn render_setup(frame: &mut Frame, area: Rect, draft: &RadarDraft) {
    let mut lines = vec![
        Line::styled("Step 1 of 2: describe what to monitor", Styles::section_title()),
        Line::from(""),
    ];
    lines.extend(draft_lines(draft));
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" New Radar ")
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn render_preview(frame: &mut Frame, area: Rect, draft: &RadarDraft) {
    let mut lines = vec![
        Line::styled("Step 2 of 2: review and start monitoring", Styles::section_title()),
        Line::from(""),
    ];
    lines.extend(draft_lines(draft));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "The radar starts active with alerts on.",
        Styles::text_muted(),
    ));
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn render_feed(frame: &mut Frame, area: Rect, screen: &RadarScreen, radar: Option<&RadarItem>) {
    let Some(radar) = radar else {
        render_empty_state(frame, area, "Radar no longer exists", Some("Press Esc to go back"));
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let heading = Paragraph::new(Line::from(vec![
        radar_status_badge(radar.status),
        Span::raw(" "),
        Span::styled(radar.proposition.clone(), Styles::value()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(heading, chunks[0]);

    let cases = screen.workflow.feed_cases();
    if cases.is_empty() {
        render_empty_state(frame, chunks[1], "Nothing intercepted yet", None);
        return;
    }
    let rows: Vec<Row> = cases
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.title),
                Cell::from(c.court),
                Cell::from(c.decided),
            ])
        })
        .collect();
    render_selectable_table(
        frame,
        chunks[1],
        "Intercepted cases",
        Some(Row::new(vec!["Case", "Court", "Decided"])),
        rows,
        &[
            Constraint::Min(24),
            Constraint::Length(28),
            Constraint::Length(11),
        ],
        Some(screen.feed.selected),
    );
}
