#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::is_searchable;
use super::Scroll;
use super::Selection;
use super::SessionStore;
use crate::domain::models::Action;
use crate::domain::models::AuthField;
use crate::domain::models::ChatMessage;
use crate::domain::models::Credentials;
use crate::domain::models::Event;
use crate::domain::models::Focus;
use crate::domain::models::Screen;
use crate::domain::models::Status;
use crate::domain::models::TextArea;
use crate::domain::models::Transcript;

pub const SEARCH_TITLE: &str = "Search games";
pub const CHAT_TITLE: &str = "Ask about a game";
pub const USERNAME_TITLE: &str = "Username";
pub const PASSWORD_TITLE: &str = "Password";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful. Please log in.";
const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter a username and password.";
const EMPTY_SELECTION_MESSAGE: &str = "Select at least one game first.";
const PASSWORD_MASK: char = '•';

fn password_textarea<'a>() -> tui_textarea::TextArea<'a> {
    let mut textarea = TextArea::new(PASSWORD_TITLE);
    textarea.set_mask_char(PASSWORD_MASK);
    return textarea;
}

/// Everything the UI renders. Owned by the UI loop and only ever changed
/// through `handle_event`.
pub struct AppState<'a> {
    pub session: SessionStore,
    pub screen: Screen,
    pub focus: Focus,
    pub status: Option<Status>,

    pub auth_field: AuthField,
    pub auth_pending: bool,
    pub username: tui_textarea::TextArea<'a>,
    pub password: tui_textarea::TextArea<'a>,

    pub search_input: tui_textarea::TextArea<'a>,
    pub search_results: Vec<String>,
    pub result_cursor: usize,

    pub selection: Selection,
    pub selection_cursor: usize,

    pub recommendations: Vec<String>,
    pub waiting_for_recommendations: bool,

    pub chat_open: bool,
    pub chat_input: tui_textarea::TextArea<'a>,
    pub transcript: Transcript,
    pub waiting_for_chat: bool,
    pub scroll: Scroll,
    pub last_known_width: u16,
    pub last_known_height: u16,
}

impl<'a> AppState<'a> {
    pub fn new(session: SessionStore, selection_limit: usize, username: &str) -> AppState<'a> {
        let mut app_state = AppState {
            session,
            screen: Screen::Home,
            focus: Focus::Search,
            status: None,
            auth_field: AuthField::Username,
            auth_pending: false,
            username: TextArea::with_text(USERNAME_TITLE, username),
            password: password_textarea(),
            search_input: TextArea::new(SEARCH_TITLE),
            search_results: vec![],
            result_cursor: 0,
            selection: Selection::new(selection_limit),
            selection_cursor: 0,
            recommendations: vec![],
            waiting_for_recommendations: false,
            chat_open: false,
            chat_input: TextArea::new(CHAT_TITLE),
            transcript: Transcript::default(),
            waiting_for_chat: false,
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
        };

        if !username.is_empty() {
            app_state.auth_field = AuthField::Password;
        }

        app_state.apply_route_guard();
        return app_state;
    }

    /// Sends the user to the login screen whenever a protected screen is
    /// shown without a session token.
    pub fn apply_route_guard(&mut self) {
        if self.screen.is_protected() && !self.session.is_authenticated() {
            tracing::debug!(screen = ?self.screen, "redirecting to login");
            self.screen = Screen::Login;
            self.auth_pending = false;
        }
    }

    /// Applies one event. Returns true when the application should exit.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC() => {
                return Ok(true);
            }
            Event::UITick() => {}
            Event::SessionChanged() => {
                self.apply_route_guard();
            }
            Event::SearchResponse(query, results) => {
                self.handle_search_response(&query, results);
            }
            Event::GameDetailsResponse(name, platforms) => {
                self.selection.merge_platforms(&name, platforms);
            }
            Event::RecommendResponse(recommendations) => {
                self.recommendations = recommendations;
                self.waiting_for_recommendations = false;
                self.status = None;
            }
            Event::RecommendFailed(text) => {
                self.waiting_for_recommendations = false;
                self.status = Some(Status::error(&text));
            }
            Event::RequestFailed(text) => {
                self.status = Some(Status::error(&text));
            }
            Event::ChatResponse(msg) => {
                self.add_chat_message(msg);
                self.waiting_for_chat = false;
            }
            Event::LoginSucceeded() => {
                self.auth_pending = false;
                self.password = password_textarea();
                self.status = None;
                self.screen = Screen::Home;
                self.focus = Focus::Search;
                self.apply_route_guard();
            }
            Event::LoginFailed(text) | Event::RegisterFailed(text) => {
                self.auth_pending = false;
                self.status = Some(Status::error(&text));
            }
            Event::RegisterSucceeded(username) => {
                self.auth_pending = false;
                self.screen = Screen::Login;
                self.username = TextArea::with_text(USERNAME_TITLE, &username);
                self.password = password_textarea();
                self.auth_field = AuthField::Password;
                self.status = Some(Status::info(REGISTER_SUCCESS_MESSAGE));
            }
            event => match self.screen {
                Screen::Login | Screen::Register => {
                    self.handle_auth_input(event, tx)?;
                }
                Screen::Home => {
                    self.handle_home_input(event, tx)?;
                }
            },
        }

        return Ok(false);
    }

    fn handle_auth_input(&mut self, event: Event, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match event {
            Event::KeyboardTab() | Event::UIScrollDown() | Event::UIScrollUp() => {
                self.auth_field = match self.auth_field {
                    AuthField::Username => AuthField::Password,
                    AuthField::Password => AuthField::Username,
                };
            }
            Event::KeyboardCTRLN() => {
                self.switch_auth_screen();
            }
            Event::KeyboardEnter() => {
                self.submit_auth(tx)?;
            }
            Event::KeyboardCharInput(input) => match self.auth_field {
                AuthField::Username => {
                    self.username.input(input);
                }
                AuthField::Password => {
                    self.password.input(input);
                }
            },
            _ => {}
        }

        return Ok(());
    }

    pub fn switch_auth_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Login => Screen::Register,
            _ => Screen::Login,
        };
        self.password = password_textarea();
        self.auth_field = AuthField::Username;
        self.status = None;
    }

    pub fn submit_auth(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.auth_pending {
            return Ok(());
        }

        let username = TextArea::text(&self.username);
        let password = TextArea::text(&self.password);
        if username.trim().is_empty() || password.is_empty() {
            self.status = Some(Status::error(MISSING_CREDENTIALS_MESSAGE));
            return Ok(());
        }

        let credentials = Credentials::new(&username, &password);
        match self.screen {
            Screen::Login => {
                tx.send(Action::LoginRequest(credentials))?;
            }
            Screen::Register => {
                tx.send(Action::RegisterRequest(credentials))?;
            }
            Screen::Home => {
                return Ok(());
            }
        }

        self.auth_pending = true;
        self.status = None;
        return Ok(());
    }

    fn handle_home_input(&mut self, event: Event, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match event {
            Event::KeyboardCTRLL() => {
                self.logout();
            }
            Event::KeyboardCTRLA() => {
                self.toggle_chat();
            }
            Event::KeyboardCTRLG() => {
                self.request_recommendations(tx)?;
            }
            Event::KeyboardTab() => {
                self.next_focus();
            }
            Event::KeyboardEsc() => {
                if self.chat_open {
                    self.toggle_chat();
                }
            }
            Event::KeyboardEnter() => match self.focus {
                Focus::Search | Focus::Results => {
                    self.select_result(tx)?;
                }
                Focus::Chat => {
                    self.submit_chat(tx)?;
                }
                Focus::Selection => {}
            },
            Event::UIScrollUp() => match self.focus {
                Focus::Results => {
                    if self.result_cursor == 0 {
                        self.focus = Focus::Search;
                    }
                    self.result_cursor = self.result_cursor.saturating_sub(1);
                }
                Focus::Selection => {
                    self.selection_cursor = self.selection_cursor.saturating_sub(1);
                }
                Focus::Chat => {
                    self.scroll.up();
                }
                Focus::Search => {}
            },
            Event::UIScrollDown() => match self.focus {
                Focus::Search => {
                    if !self.search_results.is_empty() {
                        self.focus = Focus::Results;
                    }
                }
                Focus::Results => {
                    if self.result_cursor + 1 < self.search_results.len() {
                        self.result_cursor += 1;
                    }
                }
                Focus::Selection => {
                    if self.selection_cursor + 1 < self.selection.len() {
                        self.selection_cursor += 1;
                    }
                }
                Focus::Chat => {
                    self.scroll.down();
                }
            },
            Event::UIScrollPageUp() => {
                self.scroll.up_page();
            }
            Event::UIScrollPageDown() => {
                self.scroll.down_page();
            }
            Event::KeyboardCharInput(input) => {
                self.handle_home_char_input(input, tx)?;
            }
            _ => {}
        }

        return Ok(());
    }

    fn handle_home_char_input(
        &mut self,
        input: Input,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match self.focus {
            Focus::Search | Focus::Results => {
                let before = TextArea::text(&self.search_input);
                self.focus = Focus::Search;
                self.search_input.input(input);
                if TextArea::text(&self.search_input) != before {
                    self.on_query_changed(tx)?;
                }
            }
            Focus::Selection => match input.key {
                Key::Left | Key::Char('-') => {
                    self.change_selected_rating(false);
                }
                Key::Right | Key::Char('+') => {
                    self.change_selected_rating(true);
                }
                Key::Delete | Key::Backspace => {
                    self.remove_selected();
                }
                _ => {}
            },
            Focus::Chat => {
                self.chat_input.input(input);
            }
        }

        return Ok(());
    }

    fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Selection,
            Focus::Selection if self.chat_open => Focus::Chat,
            Focus::Selection => Focus::Search,
            Focus::Chat => Focus::Search,
        };
    }

    pub fn query(&self) -> String {
        return TextArea::text(&self.search_input);
    }

    /// Short queries clear the results right away. Every query goes to the
    /// search pipeline so a pending lookup can be cancelled.
    pub fn on_query_changed(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let query = self.query();
        if !is_searchable(&query) {
            self.search_results.clear();
            self.result_cursor = 0;
        }

        tx.send(Action::SearchQuery(query))?;
        return Ok(());
    }

    pub fn handle_search_response(&mut self, query: &str, results: Vec<String>) {
        if query != self.query() {
            tracing::debug!(query, "dropping stale search results");
            return;
        }

        self.search_results = results;
        self.result_cursor = 0;
    }

    /// Adds the highlighted result and asks for its platforms. The search box
    /// is reset whether or not the game fit into the selection.
    pub fn select_result(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let name = match self.search_results.get(self.result_cursor) {
            Some(name) => name.to_string(),
            None => return Ok(()),
        };

        if self.selection.add(&name) {
            tx.send(Action::GameDetailsRequest(name))?;
        } else if self.selection.is_full() {
            self.status = Some(Status::info(&format!(
                "You can select up to {} games.",
                self.selection.capacity()
            )));
        }

        self.search_input = TextArea::new(SEARCH_TITLE);
        self.search_results.clear();
        self.result_cursor = 0;
        self.focus = Focus::Search;
        tx.send(Action::SearchQuery("".to_string()))?;

        return Ok(());
    }

    fn selected_name(&self) -> Option<String> {
        return self
            .selection
            .games()
            .get(self.selection_cursor)
            .map(|game| return game.name.to_string());
    }

    pub fn change_selected_rating(&mut self, increase: bool) {
        if let Some(name) = self.selected_name() {
            if increase {
                self.selection.increase_rating(&name);
            } else {
                self.selection.decrease_rating(&name);
            }
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(name) = self.selected_name() {
            self.selection.remove(&name);
            self.selection_cursor = self
                .selection_cursor
                .min(self.selection.len().saturating_sub(1));
        }
    }

    pub fn request_recommendations(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.selection.is_empty() {
            self.status = Some(Status::info(EMPTY_SELECTION_MESSAGE));
            return Ok(());
        }

        tx.send(Action::RecommendRequest(self.selection.to_request()))?;
        self.waiting_for_recommendations = true;
        self.status = None;
        return Ok(());
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
        if self.chat_open {
            self.focus = Focus::Chat;
        } else if self.focus == Focus::Chat {
            self.focus = Focus::Search;
        }
    }

    pub fn submit_chat(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.waiting_for_chat {
            return Ok(());
        }

        let query = self.chat_input.lines().join("\n");
        if query.is_empty() {
            return Ok(());
        }

        self.chat_input = TextArea::new(CHAT_TITLE);
        self.add_chat_message(ChatMessage::user(&query));
        self.waiting_for_chat = true;
        tx.send(Action::ChatRequest(query))?;

        return Ok(());
    }

    pub fn logout(&mut self) {
        self.session.clear();
        self.status = Some(Status::info("Logged out."));
        self.apply_route_guard();
    }

    /// Transcript wrapped to the chat pane, one entry per rendered line.
    pub fn chat_lines(&self, width: usize) -> Vec<String> {
        let mut lines = vec![];
        for msg in self.transcript.messages() {
            lines.push(format!("{}:", msg.sender));
            lines.extend(msg.as_string_lines(width));
            lines.push("".to_string());
        }

        return lines;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_scroll();
    }

    fn add_chat_message(&mut self, msg: ChatMessage) {
        self.transcript.push(msg);
        self.sync_scroll();
        self.scroll.last();
    }

    fn sync_scroll(&mut self) {
        let lines = self.chat_lines(self.last_known_width as usize).len();
        self.scroll.set_state(lines, self.last_known_height as usize);
    }
}
