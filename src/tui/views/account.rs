//! Profile and settings forms.

use crate::tui::app_states::{ProfileField, ProfileState, SettingsRow, SettingsState};
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::checkbox;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

fn row_style(selected: bool) -> Style {
    if selected {
        Styles::selected()
    } else {
        Styles::text()
    }
}

fn cursor() -> Span<'static> {
    Span::styled("▏", Style::default().fg(colors().accent))
}

pub fn render_profile(frame: &mut Frame, area: Rect, state: &ProfileState) {
    let mut lines = vec![Line::from("")];
    for (i, field) in ProfileField::ALL.iter().enumerate() {
        let selected = i == state.list.selected;
        let mut spans = vec![Span::styled(format!(" {:<20}", field.label()), Styles::label())];
        match &state.editing {
            Some((editing, buffer)) if editing == field => {
                spans.push(Span::styled(buffer.clone(), Styles::value()));
                spans.push(cursor());
            }
            _ => {
                let value = state.value(*field);
                if value.is_empty() {
                    spans.push(Span::styled("not set", Styles::text_muted()));
                } else {
                    spans.push(Span::styled(value.to_string(), row_style(selected)));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title(" Profile ")
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(if state.editing.is_some() {
            Styles::border_focused()
        } else {
            Styles::border()
        });
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_settings(frame: &mut Frame, area: Rect, state: &SettingsState) {
    let selected_row = state.selected_row();
    let mut lines = vec![Line::styled(" Appearance", Styles::section_title())];

    for row in state.rows() {
        let selected = row == selected_row;
        let line = match row {
            SettingsRow::Theme => Line::from(vec![
                Span::styled(format!(" {:<24}", "Theme"), Styles::label()),
                Span::styled(state.theme_name(), row_style(selected)),
            ]),
            SettingsRow::Toggle(i) => {
                let (label, enabled) = state.toggles.get(i).copied().unwrap_or(("", false));
                let mut spans = Vec::new();
                if i == 0 {
                    lines.push(Line::from(""));
                    lines.push(Line::styled(" Notifications", Styles::section_title()));
                }
                spans.push(Span::styled(format!(" {} ", checkbox(enabled)), row_style(selected)));
                spans.push(Span::styled(label, row_style(selected)));
                Line::from(spans)
            }
            SettingsRow::NewPassword | SettingsRow::ConfirmPassword => {
                if row == SettingsRow::NewPassword {
                    lines.push(Line::from(""));
                    lines.push(Line::styled(" Change password", Styles::section_title()));
                }
                let (label, value) = if row == SettingsRow::NewPassword {
                    ("New password", &state.password.new_password)
                } else {
                    ("Confirm password", &state.password.confirm_password)
                };
                let mut spans = vec![
                    Span::styled(format!(" {label:<24}"), Styles::label()),
                    Span::styled("•".repeat(value.chars().count()), row_style(selected)),
                ];
                if selected && state.typing {
                    spans.push(cursor());
                }
                Line::from(spans)
            }
            SettingsRow::ChangePassword => {
                if state.password.mismatch() {
                    lines.push(Line::styled(" ⚠ Passwords do not match", Styles::warning()));
                }
                Line::styled(" [ Update password ]", row_style(selected))
            }
        };
        lines.push(line);
    }

    let block = Block::default()
        .title(" Settings ")
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
