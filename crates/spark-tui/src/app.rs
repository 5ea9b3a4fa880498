//! Application state
//!
//! One `App` owns every page's transient state, the persisted config, and
//! the channel the mock executor reports back on. Input is modal in the
//! usual ratatui fashion: normal keys navigate, editing keys type into the
//! focused field.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tracing::warn;

use spark_core::catalog::{self, CATALOG, CategoryFilter};
use spark_core::config::Config;
use spark_core::contribute::{Permission, SubmissionForm};
use spark_core::export::{self, ExportFormat};
use spark_core::profile::{ProfileSettings, UserProfile, mock_user};
use spark_core::session::{MockBackend, QUICK_TASKS, RunResults, Session};
use spark_core::suggest::{self, Debouncer};

use crate::clipboard;
use crate::theme::Theme;

/// Pages of the single-page app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Store,
    Profile,
    Contribute,
}

impl Page {
    /// Nav tab title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Store => "Agent Store",
            Page::Profile => "Profile",
            Page::Contribute => "Contribute",
        }
    }

    /// All pages, in nav order
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Store, Page::Profile, Page::Contribute]
    }

    /// Position in the nav row
    pub fn index(&self) -> usize {
        match self {
            Page::Home => 0,
            Page::Store => 1,
            Page::Profile => 2,
            Page::Contribute => 3,
        }
    }
}

/// Whether keys navigate or type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Text field focused on the contribute form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Tasks,
}

impl FormField {
    /// Field label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Agent Name",
            FormField::Description => "Description",
            FormField::Tasks => "Supported Tasks (comma separated)",
        }
    }

    /// The next field, wrapping
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Tasks,
            FormField::Tasks => FormField::Name,
        }
    }

    /// The previous field, wrapping
    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Tasks,
            FormField::Description => FormField::Name,
            FormField::Tasks => FormField::Description,
        }
    }
}

/// Events delivered back to the UI loop from spawned timers
#[derive(Debug)]
pub enum AppEvent {
    /// A mock run finished
    RunFinished(RunResults),
    /// The contribute form's post-submit delay elapsed
    SubmissionReset,
}

/// Top-level application state
pub struct App {
    pub page: Page,
    pub input_mode: InputMode,
    pub config: Config,
    pub theme: Theme,
    pub should_quit: bool,
    /// Transient status-line message
    pub status: Option<String>,
    pub export_format: ExportFormat,

    // Home
    pub session: Session,
    pub suggestions: &'static [&'static str],
    pub suggestion_cursor: Option<usize>,
    pub debouncer: Debouncer,
    pub quick_cursor: usize,

    // Store
    pub store_search: String,
    pub store_category: usize,
    pub store_list: ListState,

    // Profile
    pub user: UserProfile,
    pub settings: ProfileSettings,

    // Contribute
    pub form: SubmissionForm,
    pub form_field: FormField,
    pub form_error: Option<String>,
    pub perm_cursor: usize,

    tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    /// Create the app from loaded config
    pub fn new(config: Config, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let theme = Theme::from_flag(config.ui.dark_mode);
        let debouncer = Debouncer::new(config.timing.suggest_debounce());

        Self {
            page: Page::Home,
            input_mode: InputMode::Normal,
            theme,
            should_quit: false,
            status: None,
            export_format: ExportFormat::default(),
            session: Session::new(),
            suggestions: &[],
            suggestion_cursor: None,
            debouncer,
            quick_cursor: 0,
            store_search: String::new(),
            store_category: 0,
            store_list: ListState::default(),
            user: mock_user(),
            settings: ProfileSettings::default(),
            form: SubmissionForm::new(),
            form_field: FormField::Name,
            form_error: None,
            perm_cursor: 0,
            tx,
            config,
        }
    }

    /// Category filter currently selected on the store page
    pub fn store_filter(&self) -> CategoryFilter {
        CategoryFilter::all()[self.store_category]
    }

    /// Agents passing the store's current search and category
    pub fn filtered_agents(&self) -> Vec<&'static catalog::CatalogAgent> {
        catalog::filter_catalog(CATALOG, &self.store_search, self.store_filter())
    }

    /// Handle one key press
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        match self.input_mode {
            InputMode::Normal => self.on_normal_key(key),
            InputMode::Editing => self.on_editing_key(key, now),
        }
    }

    fn on_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.page = Page::Home,
            KeyCode::Char('2') => self.page = Page::Store,
            KeyCode::Char('3') => self.page = Page::Profile,
            KeyCode::Char('4') => self.page = Page::Contribute,
            KeyCode::Char('d') => self.toggle_dark_mode(),
            KeyCode::Char('i') | KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                self.status = None;
            }
            _ => self.on_page_key(key),
        }
    }

    fn on_page_key(&mut self, key: KeyEvent) {
        match self.page {
            Page::Home => match key.code {
                KeyCode::Char('m') => self.session.toggle_mode(),
                KeyCode::Char('c') => self.session.clear(),
                KeyCode::Char('y') => self.copy_results(),
                KeyCode::Char('s') => self.save_results(),
                KeyCode::Char('f') => self.export_format = self.export_format.next(),
                KeyCode::Left => {
                    self.quick_cursor =
                        (self.quick_cursor + QUICK_TASKS.len() - 1) % QUICK_TASKS.len();
                }
                KeyCode::Right => {
                    self.quick_cursor = (self.quick_cursor + 1) % QUICK_TASKS.len();
                }
                KeyCode::Enter => {
                    // Quick tasks are only on screen while the session is idle
                    if self.session.results().is_none() && !self.session.is_loading() {
                        self.run_quick_task();
                    }
                }
                _ => {}
            },
            Page::Store => match key.code {
                KeyCode::Left => {
                    let count = CategoryFilter::all().len();
                    self.store_category = (self.store_category + count - 1) % count;
                    self.store_list.select(None);
                }
                KeyCode::Right => {
                    self.store_category = (self.store_category + 1) % CategoryFilter::all().len();
                    self.store_list.select(None);
                }
                KeyCode::Up | KeyCode::Char('k') => self.store_select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.store_select_next(),
                _ => {}
            },
            Page::Profile => match key.code {
                KeyCode::Char('n') => self.settings.toggle_notifications(),
                KeyCode::Char('r') => self.settings.toggle_remember_preferences(),
                KeyCode::Char('m') => self.settings.cycle_default_mode(),
                _ => {}
            },
            Page::Contribute => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    let count = Permission::all().len();
                    self.perm_cursor = (self.perm_cursor + count - 1) % count;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.perm_cursor = (self.perm_cursor + 1) % Permission::all().len();
                }
                KeyCode::Char(' ') => {
                    let permission = Permission::all()[self.perm_cursor];
                    self.form.toggle_permission(permission);
                }
                KeyCode::Enter => self.submit_form(),
                _ => {}
            },
        }
    }

    fn on_editing_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.suggestion_cursor = None;
            }
            KeyCode::Enter => self.on_editing_enter(),
            KeyCode::Tab if self.page == Page::Contribute => {
                self.form_field = self.form_field.next();
            }
            KeyCode::BackTab if self.page == Page::Contribute => {
                self.form_field = self.form_field.prev();
            }
            KeyCode::Up if self.page == Page::Home => self.suggestion_prev(),
            KeyCode::Down if self.page == Page::Home => self.suggestion_next(),
            KeyCode::Backspace => {
                if self.page == Page::Home {
                    self.pop_query_char();
                } else if let Some(buffer) = self.active_buffer_mut() {
                    buffer.pop();
                }
                self.after_edit(now);
            }
            KeyCode::Char(c) => {
                if self.page == Page::Home {
                    self.push_query_char(c);
                } else if let Some(buffer) = self.active_buffer_mut() {
                    buffer.push(c);
                }
                self.after_edit(now);
            }
            _ => {}
        }
    }

    fn on_editing_enter(&mut self) {
        match self.page {
            Page::Home => {
                if let Some(index) = self.suggestion_cursor {
                    self.accept_suggestion(index);
                } else {
                    self.submit_session();
                    self.suggestions = &[];
                    self.suggestion_cursor = None;
                }
            }
            Page::Store | Page::Contribute => {
                self.input_mode = InputMode::Normal;
            }
            Page::Profile => {}
        }
    }

    /// The text buffer the editing mode types into, per page. The home query
    /// is owned by the session and edited through the query helpers instead.
    fn active_buffer_mut(&mut self) -> Option<&mut String> {
        match self.page {
            Page::Home | Page::Profile => None,
            Page::Store => Some(&mut self.store_search),
            Page::Contribute => Some(match self.form_field {
                FormField::Name => &mut self.form.name,
                FormField::Description => &mut self.form.description,
                FormField::Tasks => &mut self.form.tasks,
            }),
        }
    }

    fn after_edit(&mut self, now: Instant) {
        match self.page {
            Page::Home => {
                self.suggestion_cursor = None;
                self.debouncer.touch(now);
            }
            Page::Store => {
                self.store_list.select(None);
            }
            _ => {}
        }
    }

    fn suggestion_prev(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let count = self.suggestions.len();
        self.suggestion_cursor = Some(match self.suggestion_cursor {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        });
    }

    fn suggestion_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let count = self.suggestions.len();
        self.suggestion_cursor = Some(match self.suggestion_cursor {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    fn accept_suggestion(&mut self, index: usize) {
        if let Some(suggestion) = self.suggestions.get(index) {
            self.session.set_query(*suggestion);
            self.suggestions = &[];
            self.suggestion_cursor = None;
            self.debouncer.cancel();
            self.submit_session();
        }
    }

    /// Submit the current query; spawns a mock run when accepted
    pub fn submit_session(&mut self) {
        if !self.session.submit() {
            return;
        }
        let backend = MockBackend::new(self.config.timing.execute_delay());
        let mode = self.session.mode();
        let query = self.session.query().to_string();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let results = backend.run(mode, &query).await;
            let _ = tx.send(AppEvent::RunFinished(results));
        });
    }

    fn run_quick_task(&mut self) {
        let shortcut = QUICK_TASKS[self.quick_cursor];
        self.session.set_query(shortcut.task);
        self.session.set_mode(spark_core::session::Mode::Agent);
        self.submit_session();
    }

    /// Submit the contribute form; arms the reset timer on success
    pub fn submit_form(&mut self) {
        match self.form.submit() {
            Ok(()) => {
                self.form_error = None;
                let delay = self.config.timing.submit_reset();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppEvent::SubmissionReset);
                });
            }
            Err(err) => {
                self.form_error = Some(err.to_string());
            }
        }
    }

    fn toggle_dark_mode(&mut self) {
        if let Err(err) = self.config.toggle_dark_mode() {
            warn!(error = %err, "failed to persist dark-mode preference");
        }
        self.theme = Theme::from_flag(self.config.ui.dark_mode);
    }

    fn copy_results(&mut self) {
        let Some(results) = self.session.results() else {
            return;
        };
        let doc = export::render_results(results, self.session.query(), self.export_format);
        if clipboard::copy_best_effort(&doc) {
            self.status = Some(format!("Copied as {}", self.export_format.name()));
        }
    }

    fn save_results(&mut self) {
        let Some(results) = self.session.results() else {
            return;
        };
        let doc = export::render_results(results, self.session.query(), self.export_format);
        let name = format!(
            "spark-results-{}.{}",
            chrono::Local::now().format("%Y%m%d-%H%M%S"),
            self.export_format.extension()
        );
        match std::fs::write(&name, doc) {
            Ok(()) => self.status = Some(format!("Saved {}", name)),
            Err(err) => warn!(error = %err, "failed to save export"),
        }
    }

    fn store_select_next(&mut self) {
        let count = self.filtered_agents().len();
        if count == 0 {
            self.store_list.select(None);
            return;
        }
        let next = match self.store_list.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.store_list.select(Some(next));
    }

    fn store_select_prev(&mut self) {
        let count = self.filtered_agents().len();
        if count == 0 {
            self.store_list.select(None);
            return;
        }
        let prev = match self.store_list.selected() {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.store_list.select(Some(prev));
    }

    /// Advance time-based state: suggestion debounce
    pub fn on_tick(&mut self, now: Instant) {
        if self.debouncer.fire(now) && self.page == Page::Home {
            self.suggestions = suggest::suggestions(self.session.query());
            self.suggestion_cursor = None;
        }
    }

    /// Handle an event from a spawned timer
    pub fn on_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::RunFinished(results) => {
                // No overlap guard: the last completion to arrive wins
                self.session.finish(results);
            }
            AppEvent::SubmissionReset => {
                self.form.reset();
                self.form_error = None;
            }
        }
    }
}

// The home query is edited through the session; typing goes through these
// two helpers instead of `active_buffer_mut`.
impl App {
    /// Append a character to the home query
    fn push_query_char(&mut self, c: char) {
        let mut query = self.session.query().to_string();
        query.push(c);
        self.session.set_query(query);
    }

    /// Remove the last character of the home query
    fn pop_query_char(&mut self) {
        let mut query = self.session.query().to_string();
        query.pop();
        self.session.set_query(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn test_app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(Config::default(), tx), rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key(
            KeyEvent::new(code, KeyModifiers::NONE),
            Instant::now(),
        );
    }

    #[test]
    fn test_page_switching() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.page, Page::Home);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.page, Page::Store);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.page, Page::Contribute);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_quit_from_normal_mode() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_editing_mode_entry_and_exit() {
        let (mut app, _rx) = test_app();

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_home_typing_edits_query() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('i'));

        for c in "book".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.session.query(), "book");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.query(), "boo");
    }

    #[test]
    fn test_mode_toggle_keeps_query() {
        let (mut app, _rx) = test_app();
        app.session.set_query("book a flight");

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.session.mode(), spark_core::session::Mode::Agent);
        assert_eq!(app.session.query(), "book a flight");
    }

    #[test]
    fn test_suggestions_appear_after_debounce() {
        let (mut app, _rx) = test_app();
        let start = Instant::now();

        app.on_key(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            start,
        );
        for c in "book".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), start);
        }
        assert!(app.suggestions.is_empty());

        app.on_tick(start + app.config.timing.suggest_debounce());
        assert_eq!(app.suggestions.len(), 3);
        assert_eq!(app.suggestions[0], "Book a flight to NYC");
    }

    #[tokio::test]
    async fn test_enter_submits_query() {
        let (mut app, mut rx) = test_app();
        app.config.timing.execute_delay_ms = 0;
        app.session.set_query("weather");

        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_loading());

        let event = rx.recv().await.expect("run should finish");
        app.on_app_event(event);
        assert_eq!(app.session.results().map(|r| r.len()), Some(2));
    }

    #[tokio::test]
    async fn test_blank_enter_is_noop() {
        let (mut app, _rx) = test_app();
        app.session.set_query("   ");

        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Enter);
        assert!(!app.session.is_loading());
    }

    #[tokio::test]
    async fn test_quick_task_forces_agent_mode() {
        let (mut app, mut rx) = test_app();
        app.config.timing.execute_delay_ms = 0;

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.mode(), spark_core::session::Mode::Agent);
        assert_eq!(app.session.query(), "Schedule a meeting");
        assert!(app.session.is_loading());

        let event = rx.recv().await.expect("run should finish");
        app.on_app_event(event);
        assert_eq!(app.session.results().map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_store_category_cycles() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('2'));

        assert_eq!(app.store_filter(), CategoryFilter::All);
        press(&mut app, KeyCode::Right);
        assert_ne!(app.store_filter(), CategoryFilter::All);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.store_filter(), CategoryFilter::All);
    }

    #[test]
    fn test_store_filter_narrows_list() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.filtered_agents().len(), 6);

        press(&mut app, KeyCode::Char('/'));
        for c in "email".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.filtered_agents().len(), 1);
        assert_eq!(app.filtered_agents()[0].name, "Email Assistant");
    }

    #[test]
    fn test_profile_toggles_are_transient() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.settings.notifications);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.settings.notifications);
    }

    #[tokio::test]
    async fn test_contribute_submit_and_reset() {
        let (mut app, mut rx) = test_app();
        app.config.timing.submit_reset_ms = 0;
        press(&mut app, KeyCode::Char('4'));

        // Incomplete form: error, no flag
        press(&mut app, KeyCode::Enter);
        assert!(app.form_error.is_some());
        assert!(!app.form.submitted());

        app.form.name = "News Digest".to_string();
        app.form.description = "Summarizes headlines".to_string();
        app.form.tasks = "Fetch, Summarize".to_string();
        press(&mut app, KeyCode::Enter);
        assert!(app.form.submitted());
        assert!(app.form_error.is_none());

        let event = rx.recv().await.expect("reset timer should fire");
        app.on_app_event(event);
        assert!(!app.form.submitted());
        assert!(app.form.name.is_empty());
    }

    #[test]
    fn test_contribute_permission_toggle() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('4'));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.form.has_permission(Permission::Calendar));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.form.has_permission(Permission::Email));
    }

    #[test]
    fn test_contribute_field_cycle() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('i'));

        assert_eq!(app.form_field, FormField::Name);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form_field, FormField::Description);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.form_field, FormField::Name);
    }
}
