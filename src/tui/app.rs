//! TUI application state and event handling.
//!
//! Two views over the same demo data: a chat list, and a chat screen with
//! the in-chat smart search. Typing in the chat screen runs the ranking
//! engine against that chat's history (debounced per keystroke, since
//! every query re-scans the corpus) and overlays grouped Exact/Semantic
//! results over the history; selecting a result jumps the history to the
//! matched message with a transient highlight.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::render_ui;
use super::timestamps::format_timestamp;
use crate::clipboard::copy_to_clipboard;
use crate::engine::{MIN_QUERY_LEN, SearchEngine, SynonymTable};
use crate::models::{ChatSession, MatchKind};
use crate::presentation::{SECTION_PREVIEW_COUNT, group_results};
use crate::utils::strip_ansi_codes;

/// Keystroke debounce before re-running the engine (milliseconds).
const QUERY_DEBOUNCE_MS: u64 = 120;
/// How long a jumped-to message stays highlighted (milliseconds).
const HIGHLIGHT_DURATION_MS: u64 = 2000;
/// Duration for success status messages (milliseconds).
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds).
const STATUS_ERROR_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    ChatList,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Owned snapshot of one ranked hit, pre-formatted for list rendering.
/// Engine results borrow the corpus, so the overlay keeps copies instead.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub message_id: String,
    pub sender: String,
    pub preview: String,
    pub when: String,
    pub badges: Vec<String>,
    pub kind: MatchKind,
}

/// Transient highlight on a jumped-to message.
#[derive(Debug, Clone)]
pub struct Highlight {
    pub message_id: String,
    pub expires_at: Instant,
}

/// Which result rows are visible given the collapsed/expanded state, plus
/// how many stay hidden per section.
pub struct VisibleResults<'a> {
    pub rows: Vec<&'a ResultRow>,
    pub exact_total: usize,
    pub semantic_total: usize,
    pub exact_hidden: usize,
    pub semantic_hidden: usize,
}

pub struct App {
    chats: Vec<ChatSession>,
    engine: SearchEngine,
    pub(crate) view: View,
    pub(crate) list_selected: usize,
    pub(crate) active_chat: usize,
    pub(crate) search_query: String,
    // All ranked rows, exact section first, rank order within sections.
    pub(crate) rows: Vec<ResultRow>,
    pub(crate) exact_count: usize,
    pub(crate) expanded: bool,
    pub(crate) result_selected: usize,
    pub(crate) history_scroll: u16,
    pub(crate) highlight: Option<Highlight>,
    pub(crate) status_message: Option<StatusMessage>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
    query_dirty: bool,
    last_input_time: Instant,
}

impl App {
    pub fn new(chats: Vec<ChatSession>, synonyms: SynonymTable) -> Self {
        Self {
            chats,
            engine: SearchEngine::new(synonyms),
            view: View::ChatList,
            list_selected: 0,
            active_chat: 0,
            search_query: String::new(),
            rows: Vec::new(),
            exact_count: 0,
            expanded: false,
            result_selected: 0,
            history_scroll: u16::MAX, // clamped to the bottom on first draw
            highlight: None,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
            query_dirty: false,
            last_input_time: Instant::now(),
        }
    }

    pub(crate) fn chats(&self) -> &[ChatSession] {
        &self.chats
    }

    pub(crate) fn active_chat(&self) -> &ChatSession {
        &self.chats[self.active_chat]
    }

    /// The overlay is shown once the typed query passes the engine's
    /// minimum-length gate.
    pub(crate) fn search_active(&self) -> bool {
        self.search_query.trim().chars().count() >= MIN_QUERY_LEN
    }

    pub(crate) fn visible_results(&self) -> VisibleResults<'_> {
        let exact: Vec<&ResultRow> = self.rows[..self.exact_count].iter().collect();
        let semantic: Vec<&ResultRow> = self.rows[self.exact_count..].iter().collect();

        let exact_total = exact.len();
        let semantic_total = semantic.len();
        let (mut rows, exact_hidden) = cap_section(exact, self.expanded);
        let (semantic_rows, semantic_hidden) = cap_section(semantic, self.expanded);
        rows.extend(semantic_rows);

        VisibleResults { rows, exact_total, semantic_total, exact_hidden, semantic_hidden }
    }

    /// Re-run the engine against the active chat and snapshot the rows.
    fn requery(&mut self) {
        self.rows.clear();
        self.exact_count = 0;
        self.result_selected = 0;
        self.expanded = false;

        if self.view != View::Chat || !self.search_active() {
            return;
        }

        let chat = &self.chats[self.active_chat];
        let grouped = group_results(self.engine.rank(&self.search_query, &chat.messages));
        self.exact_count = grouped.exact.len();

        let to_row = |result: &crate::models::SearchResult<'_>| ResultRow {
            message_id: result.message.id.clone(),
            sender: strip_ansi_codes(&result.message.sender),
            preview: strip_ansi_codes(result.message.preview()),
            when: format_timestamp(&result.message.timestamp),
            badges: result.badges.iter().map(|b| b.to_string()).collect(),
            kind: result.classification,
        };

        self.rows.extend(grouped.exact.iter().map(to_row));
        self.rows.extend(grouped.semantic.iter().map(to_row));
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }

        let highlight_expired =
            self.highlight.as_ref().is_some_and(|h| Instant::now() >= h.expires_at);
        if highlight_expired {
            self.highlight = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Debounced re-query after typing settles.
            if self.query_dirty
                && self.last_input_time.elapsed() >= Duration::from_millis(QUERY_DEBOUNCE_MS)
            {
                self.requery();
                self.query_dirty = false;
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (terminal resizes).
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, self))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing).
    pub(crate) fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => return,
            Action::Quit => self.should_quit = true,
            Action::Back => self.go_back(),
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::Select => self.select(),
            Action::ToggleExpand => {
                if self.view == View::Chat && self.search_active() {
                    self.expanded = !self.expanded;
                    let visible = self.visible_results().rows.len();
                    if self.result_selected >= visible && visible > 0 {
                        self.result_selected = visible - 1;
                    }
                }
            }
            Action::CopyToClipboard => self.copy_selected(),
            Action::UpdateSearch(c) => {
                if self.view == View::Chat {
                    self.search_query.push(c);
                    self.query_dirty = true;
                    self.last_input_time = Instant::now();
                }
            }
            Action::DeleteChar => {
                if self.view == View::Chat && self.search_query.pop().is_some() {
                    self.query_dirty = true;
                    self.last_input_time = Instant::now();
                }
            }
        }
        self.needs_redraw = true;
    }

    fn go_back(&mut self) {
        match self.view {
            View::ChatList => self.should_quit = true,
            View::Chat => {
                if self.search_query.is_empty() {
                    self.view = View::ChatList;
                } else {
                    self.search_query.clear();
                    self.query_dirty = false;
                    self.requery();
                }
            }
        }
    }

    fn move_selection(&mut self, delta: i64) {
        match self.view {
            View::ChatList => {
                self.list_selected = step(self.list_selected, delta, self.chats.len());
            }
            View::Chat => {
                if self.search_active() {
                    let visible = self.visible_results().rows.len();
                    self.result_selected = step(self.result_selected, delta, visible);
                } else {
                    // Scroll the history; clamped during rendering.
                    self.history_scroll = if delta < 0 {
                        self.history_scroll.saturating_sub(1)
                    } else {
                        self.history_scroll.saturating_add(1)
                    };
                }
            }
        }
    }

    fn select(&mut self) {
        match self.view {
            View::ChatList => {
                if !self.chats.is_empty() {
                    self.active_chat = self.list_selected;
                    self.view = View::Chat;
                    self.search_query.clear();
                    self.rows.clear();
                    self.exact_count = 0;
                    self.history_scroll = u16::MAX;
                    self.highlight = None;
                }
            }
            View::Chat => {
                if !self.search_active() {
                    return;
                }
                let Some(row) = self.visible_results().rows.get(self.result_selected).copied()
                else {
                    return;
                };
                let message_id = row.message_id.clone();

                // Jump the history to the matched message, then close the
                // overlay.
                let chat = &self.chats[self.active_chat];
                if let Some(idx) = chat.messages.iter().position(|m| m.id == message_id) {
                    self.history_scroll = (idx as u16).saturating_sub(2);
                }
                self.highlight = Some(Highlight {
                    message_id,
                    expires_at: Instant::now() + Duration::from_millis(HIGHLIGHT_DURATION_MS),
                });
                self.search_query.clear();
                self.query_dirty = false;
                self.requery();
            }
        }
    }

    fn copy_selected(&mut self) {
        if self.view != View::Chat || !self.search_active() {
            return;
        }
        let text = self
            .visible_results()
            .rows
            .get(self.result_selected)
            .map(|row| row.preview.clone());
        let Some(text) = text else {
            self.set_status("No result selected", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };
        match copy_to_clipboard(&text) {
            Ok(()) => {
                self.set_status("Copied to clipboard", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(
                    format!("Copy failed: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn requery_now(&mut self) {
        self.requery();
        self.query_dirty = false;
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn cap_section(section: Vec<&ResultRow>, expanded: bool) -> (Vec<&ResultRow>, usize) {
    if expanded || section.len() <= SECTION_PREVIEW_COUNT {
        (section, 0)
    } else {
        let hidden = section.len() - SECTION_PREVIEW_COUNT;
        (section.into_iter().take(SECTION_PREVIEW_COUNT).collect(), hidden)
    }
}

fn step(current: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as i64 + delta;
    next.clamp(0, len as i64 - 1) as usize
}
