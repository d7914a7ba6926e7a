//! Tool chat view: transcript, typing indicator and input line.

use crate::model::{ChatRole, SessionData};
use crate::tui::app_states::ChatState;
use crate::tui::theme::{Styles, colors};
use crate::tui::widgets::{render_empty_state, spinner};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_chat(
    frame: &mut Frame,
    area: Rect,
    chat: &ChatState,
    session: Option<&SessionData>,
    tick: u64,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    // Only show the session title when this chat holds it
    let title = match (session, chat.session_id.as_deref()) {
        (Some(s), Some(id)) if s.id == id => format!(" {} · {} ", chat.tool_name, s.title),
        _ => format!(" {} ", chat.tool_name),
    };

    if chat.messages.is_empty() && !chat.is_waiting() {
        render_empty_state(
            frame,
            chunks[0],
            &format!("Start a new {} conversation", chat.tool_name),
            Some("Press i to type, or open a past session from History"),
        );
    } else {
        render_transcript(frame, chunks[0], chat, &title, tick);
    }

    render_input(frame, chunks[1], chat);
}

fn render_transcript(frame: &mut Frame, area: Rect, chat: &ChatState, title: &str, tick: u64) {
    let scheme = colors();
    let mut lines: Vec<Line> = Vec::new();
    for message in &chat.messages {
        let (who, color) = match message.role {
            ChatRole::User => ("You", scheme.user_message),
            ChatRole::Assistant => ("Jubee", scheme.assistant_message),
        };
        lines.push(Line::styled(who, Style::default().fg(color).bold()));
        lines.push(Line::styled(message.text.clone(), Styles::text()));
        lines.push(Line::from(""));
    }
    if chat.is_waiting() {
        lines.push(Line::styled(
            format!("{} Jubee is typing...", spinner(tick)),
            Styles::text_muted(),
        ));
    }

    // Keep the newest lines in view; `scroll` counts messages up from the bottom
    let inner_height = area.height.saturating_sub(2) as usize;
    let hidden = chat.scroll * 3;
    let bottom = lines.len().saturating_sub(hidden);
    let offset = bottom.saturating_sub(inner_height);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title.to_string())
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, area: Rect, chat: &ChatState) {
    let (border, text) = if chat.composing {
        (
            Styles::border_focused(),
            Line::from(vec![
                Span::styled(chat.input.clone(), Styles::text()),
                Span::styled("▏", Style::default().fg(colors().accent)),
            ]),
        )
    } else if chat.input.is_empty() {
        (
            Styles::border(),
            Line::styled("Ask Jubee...", Styles::text_muted()),
        )
    } else {
        (
            Styles::border(),
            Line::styled(chat.input.clone(), Styles::text_muted()),
        )
    };
    let input = Paragraph::new(text).block(
        Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}
