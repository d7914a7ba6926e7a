//! Tool chat screens: legal research, drafting, translation and
//! cross-examination share one state machine.

use super::modals::{Modal, NarrationMismatchModal, SelectiveTranslationModal};
use crate::model::fixtures::{canned_reply, chat_fixture};
use crate::model::{ChatMessage, SessionData};
use crate::tui::constants::MAX_INPUT_LEN;
use crate::tui::router::{ViewKind, tool_view};
use crate::tui::traits::{EventResult, Shortcut, ViewContext, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Ticks between sending a message and the assistant's reply appearing.
const REPLY_DELAY_TICKS: u64 = 2;

/// A reply waiting to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub due_tick: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    pub view: ViewKind,
    pub tool_name: &'static str,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub composing: bool,
    /// Lines scrolled up from the bottom of the transcript
    pub scroll: usize,
    /// Id of the stored session loaded into this chat
    pub session_id: Option<String>,
    pub pending: Option<PendingReply>,
    last_tick: u64,
}

impl ChatState {
    #[must_use]
    pub fn new(view: ViewKind) -> Self {
        Self {
            view,
            tool_name: view.tool_name().unwrap_or("Legal Research"),
            messages: Vec::new(),
            input: String::new(),
            composing: false,
            scroll: 0,
            session_id: None,
            pending: None,
            last_tick: 0,
        }
    }

    /// Load a stored session's transcript. Sessions whose tool is hosted
    /// by another view are ignored.
    pub fn load_session(&mut self, session: &SessionData) {
        if tool_view(&session.tool_name) != self.view
            || self.session_id.as_deref() == Some(session.id.as_str())
        {
            return;
        }
        self.reset();
        self.messages = chat_fixture(&session.id)
            .map(|f| f.messages())
            .unwrap_or_default();
        self.session_id = Some(session.id.clone());
    }

    /// Drop the transcript, input and any pending reply.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.composing = false;
        self.scroll = 0;
        self.session_id = None;
        self.pending = None;
    }

    /// Append a user message and schedule the canned reply.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.flush_pending();
        self.messages.push(ChatMessage::user(text));
        self.pending = Some(PendingReply {
            due_tick: self.last_tick + REPLY_DELAY_TICKS,
            text: canned_reply(self.tool_name, text),
        });
        self.scroll = 0;
        true
    }

    fn send_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.send(&text);
    }

    /// Queue a translation request for the chosen one-based pages.
    pub fn request_pages(&mut self, pages: &[usize]) {
        let list = pages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let noun = if pages.len() == 1 { "page" } else { "pages" };
        self.send(&format!("Translate {noun} {list}"));
    }

    /// Deliver the pending reply if its time has come.
    pub fn advance(&mut self, tick: u64) {
        self.last_tick = tick;
        if self.pending.as_ref().is_some_and(|p| tick >= p.due_tick) {
            self.flush_pending();
        }
    }

    fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.messages.push(ChatMessage::assistant(pending.text));
        }
    }

    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    fn handle_compose_key(&mut self, key: KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Esc => self.composing = false,
            KeyCode::Enter => self.send_input(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

impl ViewState for ChatState {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut ViewContext) -> EventResult {
        if self.composing {
            return self.handle_compose_key(key);
        }
        match key.code {
            KeyCode::Char('i') | KeyCode::Enter => self.composing = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = (self.scroll + 1).min(self.messages.len().saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('n') => return EventResult::ClearSession,
            KeyCode::Char('p') if self.view == ViewKind::Translation => {
                return EventResult::OpenModal(Modal::SelectiveTranslation(
                    SelectiveTranslationModal::default(),
                ));
            }
            KeyCode::Char('m') if self.view == ViewKind::CrossExamination => {
                return EventResult::OpenModal(Modal::NarrationMismatch(
                    NarrationMismatchModal::default(),
                ));
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn title(&self) -> &str {
        self.tool_name
    }

    fn shortcuts(&self) -> Vec<Shortcut> {
        if self.composing {
            return vec![
                Shortcut::primary("Enter", "send"),
                Shortcut::primary("Esc", "stop typing"),
            ];
        }
        let mut shortcuts = vec![
            Shortcut::primary("i", "type"),
            Shortcut::primary("j/k", "scroll"),
            Shortcut::primary("n", "new chat"),
        ];
        match self.view {
            ViewKind::Translation => shortcuts.push(Shortcut::primary("p", "pick pages")),
            ViewKind::CrossExamination => {
                shortcuts.push(Shortcut::primary("m", "check narration"));
            }
            _ => {}
        }
        shortcuts
    }

    fn on_enter(&mut self, ctx: &mut ViewContext) {
        self.last_tick = ctx.tick;
        if let Some(session) = ctx.session {
            self.load_session(session);
        }
    }

    fn on_leave(&mut self, _ctx: &mut ViewContext) {
        self.composing = false;
    }

    fn on_tick(&mut self, ctx: &mut ViewContext) {
        self.advance(ctx.tick);
    }

    fn captures_input(&self) -> bool {
        self.composing
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctx(status: &mut Option<String>) -> ViewContext<'_> {
        ViewContext {
            view: ViewKind::Drafting,
            tick: 0,
            session: None,
            status_message: status,
        }
    }

    #[test]
    fn test_compose_and_send() {
        let mut chat = ChatState::new(ViewKind::Drafting);
        let mut status = None;
        let mut ctx = ctx(&mut status);

        chat.handle_key(key(KeyCode::Char('i')), &mut ctx);
        assert!(chat.captures_input());
        for c in "lease".chars() {
            chat.handle_key(key(KeyCode::Char(c)), &mut ctx);
        }
        chat.handle_key(key(KeyCode::Enter), &mut ctx);

        assert!(chat.input.is_empty());
        assert_eq!(chat.messages.len(), 1);
        assert!(chat.is_waiting());

        chat.advance(1);
        assert_eq!(chat.messages.len(), 1);
        chat.advance(REPLY_DELAY_TICKS);
        assert_eq!(chat.messages.len(), 2);
        assert!(chat.messages[1].text.contains("first draft"));
        assert!(!chat.is_waiting());
    }

    #[test]
    fn test_blank_message_not_sent() {
        let mut chat = ChatState::new(ViewKind::LegalResearch);
        assert!(!chat.send("   "));
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn test_load_session_for_matching_view_only() {
        let mut research = ChatState::new(ViewKind::LegalResearch);
        let mut drafting = ChatState::new(ViewKind::Drafting);
        let session = SessionData::new("s-101", "Legal Research", "Anticipatory bail");

        research.load_session(&session);
        drafting.load_session(&session);
        assert_eq!(research.messages.len(), 2);
        assert_eq!(research.session_id.as_deref(), Some("s-101"));
        assert!(drafting.messages.is_empty());
    }

    #[test]
    fn test_unmapped_tool_loads_in_research() {
        let mut research = ChatState::new(ViewKind::LegalResearch);
        research.load_session(&SessionData::new("s-105", "Contract Review", "MSA"));
        assert_eq!(research.messages.len(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut chat = ChatState::new(ViewKind::Translation);
        chat.send("hello");
        chat.input.push_str("draft");
        ViewState::reset(&mut chat);
        assert!(chat.messages.is_empty());
        assert!(chat.input.is_empty());
        assert!(chat.pending.is_none());
    }

    #[test]
    fn test_tool_specific_modals() {
        let mut status = None;
        let mut ctx = ctx(&mut status);
        let mut translation = ChatState::new(ViewKind::Translation);
        assert!(matches!(
            translation.handle_key(key(KeyCode::Char('p')), &mut ctx),
            EventResult::OpenModal(Modal::SelectiveTranslation(_))
        ));
        let mut drafting = ChatState::new(ViewKind::Drafting);
        assert_eq!(
            drafting.handle_key(key(KeyCode::Char('p')), &mut ctx),
            EventResult::Ignored
        );
        let mut cross = ChatState::new(ViewKind::CrossExamination);
        assert!(matches!(
            cross.handle_key(key(KeyCode::Char('m')), &mut ctx),
            EventResult::OpenModal(Modal::NarrationMismatch(_))
        ));
    }

    #[test]
    fn test_request_pages_message() {
        let mut chat = ChatState::new(ViewKind::Translation);
        chat.request_pages(&[1, 3]);
        assert_eq!(chat.messages[0].text, "Translate pages 1, 3");
        chat.request_pages(&[2]);
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[2].text, "Translate page 2");
    }
}
