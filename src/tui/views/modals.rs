//! Modal dialogs drawn over the dashboard.

use crate::tui::app_states::{
    ConfirmationDialog, CourtSelectionModal, Modal, NarrationMismatchModal,
    SelectiveTranslationModal, ToolOnboardingModal, ViewJumpModal,
};
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::{checkbox, render_popup_frame};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

pub fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal) {
    match modal {
        Modal::Confirmation(dialog) => render_confirmation(frame, area, dialog),
        Modal::CourtSelection(modal) => render_courts(frame, area, modal),
        Modal::ToolOnboarding(modal) => render_onboarding(frame, area, modal),
        Modal::NarrationMismatch(modal) => render_mismatches(frame, area, modal),
        Modal::SelectiveTranslation(modal) => render_pages(frame, area, modal),
        Modal::ViewJump(modal) => render_jump(frame, area, modal),
    }
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, what)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled(format!(" {what}"), Styles::shortcut_desc()));
    }
    Line::from(spans)
}

fn item_style(selected: bool) -> Style {
    if selected {
        Styles::selected()
    } else {
        Styles::text()
    }
}

fn render_confirmation(frame: &mut Frame, area: Rect, dialog: &ConfirmationDialog) {
    let scheme = colors();
    let inner = render_popup_frame(frame, area, &dialog.title, 50, 30, scheme.warning);

    let button = |label: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(scheme.badge_fg_dark).bg(scheme.accent).bold()
        } else {
            Styles::text_muted()
        };
        Span::styled(format!(" {label} "), style)
    };
    let lines = vec![
        Line::from(""),
        Line::styled(dialog.message.clone(), Styles::text()),
        Line::from(""),
        Line::from(vec![
            button(dialog.confirm_label, dialog.confirm_focused),
            Span::raw("   "),
            button("Cancel", !dialog.confirm_focused),
        ]),
        Line::from(""),
        hint_line(&[("y", "confirm"), ("n/Esc", "cancel")]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_courts(frame: &mut Frame, area: Rect, modal: &CourtSelectionModal) {
    let inner = render_popup_frame(frame, area, "Select Courts", 60, 70, colors().primary);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Filter: ", Styles::label()),
            Span::styled(modal.query.clone(), Styles::value()),
            Span::styled("▏", Style::default().fg(colors().accent)),
        ]),
        Line::from(""),
    ];
    let courts = modal.filtered();
    if courts.is_empty() {
        lines.push(Line::styled("No court matches the filter", Styles::text_muted()));
    }
    for (i, court) in courts.iter().enumerate() {
        let selected = i == modal.list.selected;
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", checkbox(modal.is_selected(court))), item_style(selected)),
            Span::styled(court.name, item_style(selected)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("{} selected", modal.selected.len()),
        Styles::text_muted(),
    ));
    lines.push(hint_line(&[("Tab/Space", "toggle"), ("Enter", "done"), ("Esc", "cancel")]));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_onboarding(frame: &mut Frame, area: Rect, modal: &ToolOnboardingModal) {
    let title = format!("Welcome to {}", modal.tool_name);
    let inner = render_popup_frame(frame, area, &title, 55, 40, colors().primary);

    let text = modal.pages.get(modal.page).copied().unwrap_or_default();
    let next = if modal.is_last_page() { "get started" } else { "next" };
    let lines = vec![
        Line::from(""),
        Line::styled(text, Styles::text()),
        Line::from(""),
        Line::styled(
            format!("{} / {}", modal.page + 1, modal.pages.len().max(1)),
            Styles::text_muted(),
        ),
        hint_line(&[("Enter", next), ("←", "back"), ("Esc", "skip")]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn render_mismatches(frame: &mut Frame, area: Rect, modal: &NarrationMismatchModal) {
    let inner = render_popup_frame(frame, area, "Narration Mismatch", 65, 55, colors().warning);

    let mut lines = vec![
        Line::styled(
            "These statements contradict your client's narration:",
            Styles::warning(),
        ),
        Line::from(""),
    ];
    for (i, (narration, statement)) in modal.mismatches.iter().enumerate() {
        let selected = i == modal.list.selected;
        lines.push(Line::styled(*narration, item_style(selected)));
        lines.push(Line::styled(format!("  vs {statement}"), Styles::text_muted()));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(&[("Enter", "ask about it"), ("Esc", "dismiss")]));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_pages(frame: &mut Frame, area: Rect, modal: &SelectiveTranslationModal) {
    let inner = render_popup_frame(frame, area, "Select Pages to Translate", 55, 60, colors().primary);

    let mut lines = Vec::new();
    for (i, page) in modal.pages.iter().enumerate() {
        let selected = i == modal.list.selected;
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {:>2}. ", checkbox(modal.selected.contains(&i)), i + 1),
                item_style(selected),
            ),
            Span::styled(*page, item_style(selected)),
        ]));
    }
    lines.push(Line::from(""));
    if let Some(warning) = modal.warning {
        lines.push(Line::styled(format!("⚠ {warning}"), Styles::warning()));
    }
    lines.push(hint_line(&[
        ("Space", "toggle"),
        ("a", "all"),
        ("Enter", "translate"),
        ("Esc", "cancel"),
    ]));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_jump(frame: &mut Frame, area: Rect, modal: &ViewJumpModal) {
    let inner = render_popup_frame(frame, area, "Go To", 40, 50, colors().accent);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("> ", Styles::shortcut_key()),
            Span::styled(modal.query.clone(), Styles::value()),
            Span::styled("▏", Style::default().fg(colors().accent)),
        ]),
        Line::from(""),
    ];
    let matches = modal.matches();
    if matches.is_empty() {
        lines.push(Line::styled("No matching view", Styles::text_muted()));
    }
    for (i, view) in matches.iter().enumerate() {
        let selected = i == modal.list.selected;
        lines.push(Line::from(vec![
            Span::styled(format!("{:<20}", view.title()), item_style(selected)),
            Span::styled(view.key(), Styles::text_muted()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
