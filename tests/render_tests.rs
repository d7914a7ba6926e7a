//! Rendering tests through ratatui's `TestBackend`.
//!
//! Every view is drawn into an in-memory buffer and checked for the text
//! a user would see.

use jubee::config::AppConfig;
use jubee::model::SessionData;
use jubee::tui::app_states::{CourtSelectionModal, Modal};
use jubee::tui::{App, ViewKind, render};
use ratatui::{Terminal, backend::TestBackend};

// ============================================================================
// Helpers
// ============================================================================

fn app() -> App {
    let mut config = AppConfig::default();
    config.session.show_onboarding = false;
    App::new(&config)
}

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| render(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn screen(app: &App) -> String {
    draw(app, 140, 45)
}

// ============================================================================
// Shell
// ============================================================================

#[test]
fn test_every_view_renders() {
    let mut app = app();
    for view in ViewKind::ALL {
        app.navigate(view);
        let text = screen(&app);
        assert!(text.contains(view.title()), "{} missing its title", view.key());
    }
}

#[test]
fn test_sidebar_lists_views() {
    let text = screen(&app());
    for title in ["Home", "Precedent Radar", "My Cases", "Settings"] {
        assert!(text.contains(title), "sidebar missing {title}");
    }
}

#[test]
fn test_header_shows_user_and_session() {
    let mut app = app();
    app.select_session(SessionData::new("s-102", "Drafting", "Legal notice"));
    let text = screen(&app);
    assert!(text.contains("Signed in as"));
    assert!(text.contains("Advocate"));
    assert!(text.contains("Drafting: Legal notice"));
}

#[test]
fn test_signed_out_shows_sign_in() {
    let mut app = app();
    app.logout();
    let text = screen(&app);
    assert!(text.contains("Sign in"));
    assert!(!text.contains("Signed in as"));
}

#[test]
fn test_small_terminal_warning() {
    let text = draw(&app(), 30, 8);
    assert!(!text.contains("Signed in as"));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_case_detail_replaces_view() {
    let mut app = app();
    app.navigate(ViewKind::MyCases);
    app.select_case("c-1");
    let text = screen(&app);
    assert!(text.contains("Case Detail"));
    assert!(text.contains("State v. Mehra"));
}

#[test]
fn test_radar_dashboard_lists_radars() {
    let mut app = app();
    app.navigate(ViewKind::PrecedentRadar);
    let text = screen(&app);
    assert!(text.contains("Liability of intermediaries"));
}

#[test]
fn test_modal_drawn_on_top() {
    let mut app = app();
    app.open_modal(Modal::CourtSelection(CourtSelectionModal::new()));
    let text = screen(&app);
    assert!(text.contains("Select Courts"));
    assert!(text.contains("Supreme Court"));
}

#[test]
fn test_status_message_in_status_bar() {
    let mut app = app();
    app.set_status_message("Radar deleted");
    assert!(screen(&app).contains("Radar deleted"));
}
