//! Integration tests for dashboard navigation.
//!
//! These drive [`App`] through key events the way the terminal loop does
//! and check the navigation state after each step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jubee::config::AppConfig;
use jubee::model::SessionData;
use jubee::tui::app_states::Modal;
use jubee::tui::{App, ViewKind, handle_key_event};

// ============================================================================
// Helpers
// ============================================================================

fn app() -> App {
    let mut config = AppConfig::default();
    config.session.show_onboarding = false;
    App::new(&config)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

// ============================================================================
// View switching
// ============================================================================

mod view_switching {
    use super::*;

    #[test]
    fn test_starts_signed_in_on_home() {
        let app = app();
        assert!(app.is_authenticated());
        assert_eq!(app.active_view(), ViewKind::Home);
        assert!(app.selected_session().is_none());
        assert!(app.selected_case().is_none());
    }

    #[test]
    fn test_configured_start_view() {
        let mut config = AppConfig::default();
        config.session.start_view = "my-cases".to_string();
        let app = App::new(&config);
        assert_eq!(app.active_view(), ViewKind::MyCases);
    }

    #[test]
    fn test_unknown_start_view_falls_back_to_home() {
        let mut config = AppConfig::default();
        config.session.start_view = "no-such-view".to_string();
        let app = App::new(&config);
        assert_eq!(app.active_view(), ViewKind::Home);
    }

    #[test]
    fn test_home_enter_opens_first_tool() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_view(), ViewKind::LegalResearch);
        assert_eq!(app.previous_view(), ViewKind::Home);
    }

    #[test]
    fn test_back_returns_to_previous_view() {
        let mut app = app();
        app.navigate(ViewKind::Documents);
        app.navigate(ViewKind::Notifications);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_view(), ViewKind::Documents);
    }

    #[test]
    fn test_help_key_opens_help() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_view(), ViewKind::Help);
    }

    #[test]
    fn test_tab_visits_every_view() {
        let mut app = app();
        let mut seen = vec![app.active_view()];
        for _ in 1..ViewKind::ALL.len() {
            press(&mut app, KeyCode::Tab);
            seen.push(app.active_view());
        }
        assert_eq!(seen, ViewKind::ALL.to_vec());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view(), ViewKind::Home);
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}

// ============================================================================
// Sessions
// ============================================================================

mod sessions {
    use super::*;

    #[test]
    fn test_history_opens_session_in_its_tool() {
        let mut app = app();
        app.navigate(ViewKind::History);
        press(&mut app, KeyCode::Enter);

        let session = app.selected_session().expect("session selected");
        assert_eq!(session.id, "s-101");
        assert_eq!(app.active_view(), jubee::tui::tool_view(&session.tool_name));
        let chat = app.chat(app.active_view()).expect("chat view");
        assert!(!chat.messages.is_empty());
    }

    #[test]
    fn test_unmapped_tool_opens_in_legal_research() {
        let mut app = app();
        app.select_session(SessionData::new("s-105", "Contract Review", "Lease"));
        assert_eq!(app.active_view(), ViewKind::LegalResearch);
        assert_eq!(
            app.selected_session().map(|s| s.tool_name.as_str()),
            Some("Contract Review")
        );
    }

    #[test]
    fn test_new_chat_clears_session_and_transcripts() {
        let mut app = app();
        app.select_session(SessionData::new("s-102", "Drafting", "Notice"));
        assert!(!app.chat(ViewKind::Drafting).expect("chat").messages.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert!(app.selected_session().is_none());
        for view in [
            ViewKind::LegalResearch,
            ViewKind::Drafting,
            ViewKind::Translation,
            ViewKind::CrossExamination,
        ] {
            assert!(app.chat(view).expect("chat").messages.is_empty());
        }
    }

    #[test]
    fn test_history_clear_asks_first() {
        let mut app = app();
        app.select_session(SessionData::new("s-101", "Legal Research", "Bail"));
        app.navigate(ViewKind::History);
        press(&mut app, KeyCode::Char('x'));
        assert!(matches!(app.modal(), Some(Modal::Confirmation(_))));
        assert!(app.selected_session().is_some());

        press(&mut app, KeyCode::Char('y'));
        assert!(app.selected_session().is_none());
        assert_eq!(app.status_message(), Some("Session closed"));
    }

    #[test]
    fn test_history_clear_without_session() {
        let mut app = app();
        app.navigate(ViewKind::History);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.modal().is_none());
        assert_eq!(app.status_message(), Some("No session is open"));
    }
}

// ============================================================================
// Cases
// ============================================================================

mod cases {
    use super::*;

    #[test]
    fn test_case_detail_and_analysis() {
        let mut app = app();
        app.navigate(ViewKind::MyCases);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_case(), Some("c-2"));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_view(), ViewKind::CaseAnalysis);
        assert!(app.selected_case().is_none());
        assert_eq!(app.analysis().case, Some("c-2"));
    }

    #[test]
    fn test_navigating_away_drops_case() {
        let mut app = app();
        app.navigate(ViewKind::MyCases);
        press(&mut app, KeyCode::Enter);
        assert!(app.selected_case().is_some());
        press(&mut app, KeyCode::Tab);
        assert!(app.selected_case().is_none());
        assert_eq!(app.active_view(), ViewKind::History);
    }

    #[test]
    fn test_analysis_runs_to_completion_on_ticks() {
        let mut app = app();
        app.navigate(ViewKind::CaseAnalysis);
        assert!(app.analysis().progress.is_running());
        for _ in 0..10_000 {
            if app.analysis().progress.is_complete() {
                break;
            }
            app.on_tick();
        }
        assert!(app.analysis().progress.is_complete());
        assert_eq!(app.analysis().progress.percent(), 100);
    }
}

// ============================================================================
// Authentication
// ============================================================================

mod authentication {
    use super::*;

    #[test]
    fn test_logout_resets_state() {
        let mut app = app();
        app.select_session(SessionData::new("s-103", "Translation", "Affidavit"));
        app.logout();
        assert!(!app.is_authenticated());
        assert!(app.selected_session().is_none());
        assert_eq!(app.active_view(), ViewKind::Home);
        assert!(app.chat(ViewKind::Translation).expect("chat").messages.is_empty());
    }

    #[test]
    fn test_signed_out_keys() {
        let mut app = app();
        app.logout();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view(), ViewKind::Home);
        press(&mut app, KeyCode::Enter);
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_manual_sign_in_config() {
        let mut config = AppConfig::default();
        config.session.auto_sign_in = false;
        let app = App::new(&config);
        assert!(!app.is_authenticated());
    }
}

// ============================================================================
// Theme preferences
// ============================================================================

mod theme_preferences {
    use super::*;
    use jubee::config::TuiPreferences;
    use tempfile::TempDir;

    fn cycle_from_settings(app: &mut App) {
        app.navigate(ViewKind::Settings);
        press(app, KeyCode::Enter);
        assert!(app.status_message().is_some_and(|m| m.starts_with("Theme: ")));
    }

    #[test]
    fn test_theme_change_stays_in_memory_by_default() {
        let mut app = app();
        assert!(app.preferences_path().is_none());
        cycle_from_settings(&mut app);
        assert!(app.preferences_path().is_none());
    }

    #[test]
    fn test_theme_change_saved_to_preferences_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jubee").join("preferences.json");
        let mut app = app().with_preferences_path(Some(path.clone()));

        cycle_from_settings(&mut app);

        let saved = TuiPreferences::load_from(&path).expect("preferences written");
        assert!(["dark", "light", "high-contrast"].contains(&saved.theme.as_str()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
