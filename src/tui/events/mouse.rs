//! Mouse event handlers.

use crate::tui::App;
use crate::tui::constants::{HEADER_HEIGHT, SIDEBAR_WIDTH};
use crate::tui::router::ViewKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.is_authenticated() {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => scroll(app, KeyCode::Up),
        MouseEventKind::ScrollDown => scroll(app, KeyCode::Down),
        MouseEventKind::Down(MouseButton::Left) => {
            // Modals are keyboard driven
            if app.modal.is_some() {
                return;
            }
            if let Some(view) = sidebar_view_at(mouse.column, mouse.row) {
                app.clear_status_message();
                app.navigate(view);
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if app.modal.is_some() {
                app.close_modal();
            }
        }
        _ => {}
    }
}

/// Feed a wheel step to whatever has focus as an arrow key.
fn scroll(app: &mut App, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if app.modal.is_some() {
        app.handle_modal_key(key);
    } else if app.selected_case().is_none() {
        let view = app.active_view();
        let result = app.with_view(view, |state, ctx| state.handle_key(key, ctx));
        app.handle_event_result(result);
    }
}

/// Sidebar entry under a screen cell. The sidebar list starts one row
/// below the header, inside its border.
pub(crate) fn sidebar_view_at(column: u16, row: u16) -> Option<ViewKind> {
    let first_row = HEADER_HEIGHT + 1;
    if column == 0 || column >= SIDEBAR_WIDTH - 1 || row < first_row {
        return None;
    }
    ViewKind::ALL.get(usize::from(row - first_row)).copied()
}
