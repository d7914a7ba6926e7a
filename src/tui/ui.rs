//! Dashboard layout and the terminal main loop.

use super::app::App;
use super::constants::{HEADER_HEIGHT, SIDEBAR_WIDTH};
use super::events::{Event, EventHandler, handle_key_event, handle_mouse_event};
use super::router;
use super::theme::{GLOBAL_SHORTCUTS, Styles, Theme, colors, render_footer_hints, set_theme, view_badge};
use super::views;
use super::widgets::{MIN_HEIGHT, MIN_WIDTH, check_terminal_size, render_size_warning, spinner};
use crate::config::{TuiConfig, TuiPreferences};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout};

/// Run the TUI application
///
/// A theme saved from inside the TUI wins over the configured one.
pub fn run_tui(app: &mut App, config: &TuiConfig) -> io::Result<()> {
    let theme = app
        .preferences_path()
        .and_then(TuiPreferences::load_from)
        .map_or_else(|| config.theme.clone(), |p| p.theme);
    set_theme(Theme::from_name(&theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, app, &EventHandler::new(config.tick_rate_ms));

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Draw one frame of the dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    if !app.is_authenticated() {
        views::render_login(frame, area, app);
        return;
    }

    // Main layout: header, body, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    views::render_sidebar(frame, body[0], app);

    // Case detail takes over the content area while a case is selected
    match app.selected_case() {
        Some(case) => views::render_case_detail(frame, body[1], case),
        None => router::route(frame, body[1], app),
    }

    render_status_bar(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if let Some(modal) = app.modal() {
        views::render_modal(frame, area, modal);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let title = if app.selected_case().is_some() {
        "Case Detail"
    } else {
        app.active_view().title()
    };

    let mut spans = vec![
        Span::styled(" jubee", Styles::header_title()),
        Span::raw(" "),
        view_badge(title),
    ];
    if let Some(session) = app.selected_session() {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled(
            format!("{}: {}", session.tool_name, session.title),
            Styles::text(),
        ));
    }

    let user = Line::from(vec![
        Span::styled(" Signed in as ", Styles::text_muted()),
        Span::styled(app.screens.profile.display_name.clone(), Styles::value()),
    ]);

    let header = Paragraph::new(vec![Line::from(spans), user]).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border()),
    );
    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let mut spans = Vec::new();

    match app.status_message() {
        Some(msg) => {
            spans.push(Span::styled(" ℹ ", Style::default().fg(scheme.accent)));
            spans.push(Span::styled(
                msg.to_string(),
                Style::default().fg(scheme.accent).bold(),
            ));
        }
        None => {
            let waiting = app
                .chat(app.active_view())
                .is_some_and(super::app_states::ChatState::is_waiting);
            if waiting {
                spans.push(Span::styled(
                    format!(" {} Jubee is typing", spinner(app.tick)),
                    Styles::text_muted(),
                ));
            } else {
                spans.push(Span::styled(" Ready", Styles::text_muted()));
            }
        }
    }

    let unread = app.screens.notifications.unread();
    if unread > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(scheme.muted)));
        spans.push(Span::styled(
            format!("{unread} unread"),
            Style::default().fg(scheme.warning),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Styles::status_bar());
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = if app.modal().is_some() {
        Vec::new()
    } else if app.selected_case().is_some() {
        vec![
            super::traits::Shortcut::primary("a", "analyze"),
            super::traits::Shortcut::primary("Esc", "back to list"),
        ]
    } else {
        app.screens.view(app.active_view()).shortcuts()
    };
    if app.modal().is_none() && !app.captures_input() {
        hints.extend_from_slice(GLOBAL_SHORTCUTS);
    }

    let mut spans = vec![Span::raw(" ")];
    spans.extend(render_footer_hints(&hints));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
