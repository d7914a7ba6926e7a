//! Profile and settings screens.

use crate::config::{UserConfig, is_valid_email};
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::theme::current_theme_name;
use crate::tui::traits::{EventResult, Shortcut, ViewContext, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Push a typed character onto an edit buffer, ignoring control chords.
fn edit_buffer(buffer: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(c);
            true
        }
        _ => false,
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    BarId,
}

impl ProfileField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::BarId];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::BarId => "Bar enrolment no.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub display_name: String,
    pub email: String,
    pub bar_id: String,
    pub list: ListState,
    /// Field being edited and its buffer
    pub editing: Option<(ProfileField, String)>,
}

impl ProfileState {
    #[must_use]
    pub fn new(user: &UserConfig) -> Self {
        Self {
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            bar_id: user.bar_id.clone(),
            list: ListState::with_total(ProfileField::ALL.len()),
            editing: None,
        }
    }

    #[must_use]
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.display_name,
            ProfileField::Email => &self.email,
            ProfileField::BarId => &self.bar_id,
        }
    }

    fn selected_field(&self) -> ProfileField {
        ProfileField::ALL[self.list.selected.min(ProfileField::ALL.len() - 1)]
    }

    /// Save the edit buffer. Returns an error message when the value is
    /// rejected; editing continues in that case.
    fn commit(&mut self) -> Result<ProfileField, String> {
        let Some((field, buffer)) = self.editing.take() else {
            return Err("Nothing to save".to_string());
        };
        let value = buffer.trim().to_string();
        match field {
            ProfileField::Email if !is_valid_email(&value) => {
                let message = format!("'{value}' is not a valid email address");
                self.editing = Some((field, buffer));
                return Err(message);
            }
            ProfileField::Name if value.is_empty() => {
                self.editing = Some((field, buffer));
                return Err("Name cannot be empty".to_string());
            }
            ProfileField::Name => self.display_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::BarId => self.bar_id = value,
        }
        Ok(field)
    }
}

impl ViewState for ProfileState {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        if let Some((_, buffer)) = &mut self.editing {
            match key.code {
                KeyCode::Esc => self.editing = None,
                KeyCode::Enter => match self.commit() {
                    Ok(field) => ctx.set_status(format!("{} updated", field.label())),
                    Err(message) => ctx.set_status(message),
                },
                _ => {
                    if !edit_buffer(buffer, key) {
                        return EventResult::Ignored;
                    }
                }
            }
            return EventResult::Consumed;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Enter | KeyCode::Char('e') => {
                let field = self.selected_field();
                self.editing = Some((field, self.value(field).to_string()));
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn title(&self) -> &str {
        "Profile"
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        if self.editing.is_some() {
            vec![
                Shortcut::primary("Enter", "save"),
                Shortcut::primary("Esc", "discard"),
            ]
        } else {
            vec![
                Shortcut::primary("j/k", "select"),
                Shortcut::primary("Enter", "edit"),
            ]
        }
    }

    fn on_leave(&mut self, _ctx: &mut ViewContext) {
        self.editing = None;
    }

    fn captures_input(&self) -> bool {
        self.editing.is_some()
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Rows of the settings screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Theme,
    Toggle(usize),
    NewPassword,
    ConfirmPassword,
    ChangePassword,
}

/// Password change form. A confirmation that differs from the new
/// password shows an inline warning; nothing fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// The inline warning is shown once something was typed in the
    /// confirmation field and it differs.
    #[must_use]
    pub fn mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.confirm_password != self.new_password
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.new_password.is_empty() && self.new_password == self.confirm_password
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    /// Notification preferences: label and enabled flag
    pub toggles: Vec<(&'static str, bool)>,
    pub password: PasswordForm,
    pub list: ListState,
    /// Whether keys go into the selected password field
    pub typing: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        let toggles = vec![
            ("Email notifications", true),
            ("Radar alerts", true),
            ("Weekly digest", false),
        ];
        let rows = toggles.len() + 4;
        Self {
            toggles,
            password: PasswordForm::default(),
            list: ListState::with_total(rows),
            typing: false,
        }
    }
}

impl SettingsState {
    /// All rows, in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<SettingsRow> {
        let mut rows = vec![SettingsRow::Theme];
        rows.extend((0..self.toggles.len()).map(SettingsRow::Toggle));
        rows.extend([
            SettingsRow::NewPassword,
            SettingsRow::ConfirmPassword,
            SettingsRow::ChangePassword,
        ]);
        rows
    }

    #[must_use]
    pub fn selected_row(&self) -> SettingsRow {
        self.rows()
            .get(self.list.selected)
            .copied()
            .unwrap_or(SettingsRow::Theme)
    }

    #[must_use]
    pub fn theme_name(&self) -> &'static str {
        current_theme_name()
    }

    fn password_field(&mut self) -> Option<&mut String> {
        match self.selected_row() {
            SettingsRow::NewPassword => Some(&mut self.password.new_password),
            SettingsRow::ConfirmPassword => Some(&mut self.password.confirm_password),
            _ => None,
        }
    }

    fn submit_password(&mut self, ctx: &mut ViewContext) {
        if self.password.can_submit() {
            self.password = PasswordForm::default();
            ctx.set_status("Password updated");
        } else if self.password.new_password.is_empty() {
            ctx.set_status("Enter a new password first");
        }
        // A mismatch is already shown inline under the confirmation field.
    }
}

impl ViewState for SettingsState {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ViewContext) -> EventResult {
        if self.typing {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => self.typing = false,
                _ => {
                    let handled = self
                        .password_field()
                        .is_some_and(|field| edit_buffer(field, key));
                    if !handled {
                        return EventResult::Ignored;
                    }
                }
            }
            return EventResult::Consumed;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_row() {
                SettingsRow::Theme => return EventResult::CycleTheme,
                SettingsRow::Toggle(i) => {
                    if let Some((label, enabled)) = self.toggles.get_mut(i) {
                        *enabled = !*enabled;
                        let state = if *enabled { "on" } else { "off" };
                        ctx.set_status(format!("{label} {state}"));
                    }
                }
                SettingsRow::NewPassword | SettingsRow::ConfirmPassword => self.typing = true,
                SettingsRow::ChangePassword => self.submit_password(ctx),
            },
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn title(&self) -> &str {
        "Settings"
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        if self.typing {
            vec![Shortcut::primary("Enter/Esc", "done")]
        } else {
            vec![
                Shortcut::primary("j/k", "select"),
                Shortcut::primary("Enter", "change"),
            ]
        }
    }

    fn on_leave(&mut self, _ctx: &mut ViewContext) {
        self.typing = false;
    }

    fn captures_input(&self) -> bool {
        self.typing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ViewKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(view: &mut dyn ViewState, ctx: &mut ViewContext, text: &str) {
        for c in text.chars() {
            view.handle_key(key(KeyCode::Char(c)), ctx);
        }
    }

    #[test]
    fn test_profile_rejects_bad_email() {
        let mut profile = ProfileState::new(&UserConfig::default());
        let mut status = None;
        let mut ctx = ViewContext {
            view: ViewKind::Profile,
            tick: 0,
            session: None,
            status_message: &mut status,
        };

        profile.handle_key(key(KeyCode::Down), &mut ctx);
        profile.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(profile.captures_input());
        if let Some((_, buffer)) = &mut profile.editing {
            buffer.clear();
        }
        type_str(&mut profile, &mut ctx, "not-an-email");
        profile.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(profile.captures_input());
        assert_eq!(profile.email, "advocate@example.com");

        profile.handle_key(key(KeyCode::Esc), &mut ctx);
        assert!(!profile.captures_input());
        assert!(status.unwrap().contains("not a valid email"));
    }

    #[test]
    fn test_profile_saves_name() {
        let mut profile = ProfileState::new(&UserConfig::default());
        let mut status = None;
        let mut ctx = ViewContext {
            view: ViewKind::Profile,
            tick: 0,
            session: None,
            status_message: &mut status,
        };
        profile.handle_key(key(KeyCode::Enter), &mut ctx);
        type_str(&mut profile, &mut ctx, " Rao");
        profile.handle_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(profile.display_name, "Advocate Rao");
        assert_eq!(status.as_deref(), Some("Name updated"));
    }

    #[test]
    fn test_password_mismatch_is_inline_only() {
        let mut settings = SettingsState::default();
        let mut status = None;
        let mut ctx = ViewContext {
            view: ViewKind::Settings,
            tick: 0,
            session: None,
            status_message: &mut status,
        };

        settings.list.selected = 4;
        assert_eq!(settings.selected_row(), SettingsRow::NewPassword);
        settings.handle_key(key(KeyCode::Enter), &mut ctx);
        type_str(&mut settings, &mut ctx, "hunter2");
        settings.handle_key(key(KeyCode::Enter), &mut ctx);

        settings.handle_key(key(KeyCode::Down), &mut ctx);
        settings.handle_key(key(KeyCode::Enter), &mut ctx);
        type_str(&mut settings, &mut ctx, "hunter3");
        settings.handle_key(key(KeyCode::Enter), &mut ctx);
        assert!(settings.password.mismatch());

        settings.handle_key(key(KeyCode::Down), &mut ctx);
        let result = settings.handle_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(result, EventResult::Consumed);
        assert_eq!(settings.password.new_password, "hunter2");
        assert!(status.is_none());
    }

    #[test]
    fn test_password_change_succeeds_when_matching() {
        let mut settings = SettingsState::default();
        settings.password.new_password = "s3cret".into();
        settings.password.confirm_password = "s3cret".into();
        assert!(!settings.password.mismatch());
        assert!(settings.password.can_submit());

        let mut status = None;
        let mut ctx = ViewContext {
            view: ViewKind::Settings,
            tick: 0,
            session: None,
            status_message: &mut status,
        };
        settings.list.go_last();
        settings.handle_key(key(KeyCode::Enter), &mut ctx);
        assert_eq!(settings.password, PasswordForm::default());
        assert_eq!(status.as_deref(), Some("Password updated"));
    }

    #[test]
    fn test_theme_row_requests_cycle() {
        let mut settings = SettingsState::default();
        let mut status = None;
        let mut ctx = ViewContext {
            view: ViewKind::Settings,
            tick: 0,
            session: None,
            status_message: &mut status,
        };
        assert_eq!(
            settings.handle_key(key(KeyCode::Enter), &mut ctx),
            EventResult::CycleTheme
        );
        settings.handle_key(key(KeyCode::Down), &mut ctx);
        settings.handle_key(key(KeyCode::Char(' ')), &mut ctx);
        assert!(!settings.toggles[0].1);
    }
}
