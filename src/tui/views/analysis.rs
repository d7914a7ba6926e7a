//! Case analysis progress and findings.

use crate::model::StepStatus;
use crate::model::fixtures::ANALYSIS_FINDINGS;
use crate::tui::app_states::AnalysisScreen;
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::spinner;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

pub fn render_analysis(frame: &mut Frame, area: Rect, screen: &AnalysisScreen, tick: u64) {
    let scheme = colors();
    let progress = &screen.progress;
    let steps = progress.steps();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(steps.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Analysing: {} ", screen.case_title()))
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .gauge_style(Style::default().fg(scheme.primary).bg(scheme.background_alt))
        .percent(progress.percent());
    frame.render_widget(gauge, chunks[0]);

    let lines: Vec<Line> = steps
        .iter()
        .map(|step| {
            let icon = if step.status == StepStatus::Processing {
                spinner(tick)
            } else {
                step.status.icon()
            };
            let color = scheme.step_color(step.status);
            Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(color)),
                Span::styled(step.label, Style::default().fg(color)),
            ])
        })
        .collect();
    let list = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Steps {}/{} ", progress.completed(), steps.len()))
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(list, chunks[1]);

    let findings: Vec<Line> = if progress.is_complete() {
        ANALYSIS_FINDINGS
            .iter()
            .map(|f| Line::from(vec![Span::styled("• ", Styles::success()), Span::raw(*f)]))
            .collect()
    } else if progress.is_running() {
        vec![Line::styled("Findings appear when every step completes.", Styles::text_muted())]
    } else {
        vec![Line::styled("Analysis stopped. Press r to run it again.", Styles::text_muted())]
    };
    let panel = Paragraph::new(findings)
        .block(
            Block::default()
                .title(" Findings ")
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, chunks[2]);
}
