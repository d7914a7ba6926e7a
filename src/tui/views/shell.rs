//! Sidebar navigation and the sign-in screen.

use crate::tui::app::App;
use crate::tui::router::ViewKind;
use crate::tui::theme::{Styles, colors, count_badge};
use crate::tui::widgets::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let active = app.active_view();
    let unread = app.screens.notifications.unread();

    let items: Vec<ListItem> = ViewKind::ALL
        .iter()
        .map(|view| {
            let mut spans = vec![Span::raw(view.title())];
            if *view == ViewKind::Notifications && unread > 0 {
                spans.push(Span::raw(" "));
                spans.push(count_badge(unread, scheme.warning));
            }
            if app.chat(*view).is_some_and(|c| c.session_id.is_some()) {
                spans.push(Span::styled(" ●", Styles::success()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Jubee ")
                .title_style(Styles::header_title())
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .style(Styles::text())
        .highlight_style(Styles::selected());

    let selected = ViewKind::ALL.iter().position(|v| *v == active);
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn render_login(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::styled("Jubee", Styles::header_title()),
        Line::styled("Your legal assistant", Styles::text_muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Account  ", Styles::label()),
            Span::styled(app.screens.profile.email.clone(), Styles::value()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Styles::shortcut_key()),
            Span::styled(" sign in   ", Styles::shortcut_desc()),
            Span::styled("[q]", Styles::shortcut_key()),
            Span::styled(" quit", Styles::shortcut_desc()),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Sign in ")
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        );
    frame.render_widget(paragraph, popup);
}
