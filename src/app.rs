//! Application state and core logic

use crate::config::FormConfig;
use crate::guard::{ConfigGuard, RouteGuard};
use crate::state::{AppState, CustomerForm, Form, FormButton, FormError, View};
use crate::submission::{LogSink, SubmissionRecord, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Decides whether a route may be entered
    guard: Box<dyn RouteGuard>,
    /// Receives saved form snapshots
    sink: Box<dyn SubmissionSink>,
    /// Quiet period for the email message
    email_debounce: Duration,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App with the default guard and log sink
    pub fn new(config: &FormConfig) -> Self {
        Self::with_collaborators(
            config,
            Box::new(ConfigGuard::from_config(config)),
            Box::new(LogSink),
        )
    }

    pub fn with_collaborators(
        config: &FormConfig,
        guard: Box<dyn RouteGuard>,
        sink: Box<dyn SubmissionSink>,
    ) -> Self {
        let mut app = Self {
            state: AppState::default(),
            guard,
            sink,
            email_debounce: config.email_debounce(),
            quit: false,
            status_message: None,
        };
        app.open_route(config.start_route());
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn customer_form(&self) -> Option<&CustomerForm> {
        self.state.form.customer()
    }

    /// Navigate to a route path, applying redirects
    pub fn open_route(&mut self, path: &str) {
        let view = View::from_route(path);
        if view != self.state.current_view {
            self.navigate(view);
        }
    }

    /// Navigate to a new view. Returns false if the guard refused it.
    pub fn navigate(&mut self, view: View) -> bool {
        if !self.guard.can_activate(view) {
            tracing::info!(route = view.route(), "navigation blocked by route guard");
            self.push_error(format!("{} is not available", view.title()));
            return false;
        }
        self.leave_current_view();
        self.state.view_history.push(self.state.current_view);
        self.enter_view(view);
        true
    }

    /// Go back to the last non-form view
    pub fn go_back(&mut self) {
        let target = loop {
            match self.state.view_history.pop() {
                Some(view) if view.is_form_view() => continue,
                Some(view) => break view,
                None => break View::Welcome,
            }
        };
        self.leave_current_view();
        self.enter_view(target);
    }

    fn enter_view(&mut self, view: View) {
        self.state.current_view = view;
        if view.is_form_view() {
            self.state.form.build(self.email_debounce);
        }
        tracing::debug!(route = view.route(), "view entered");
    }

    fn leave_current_view(&mut self) {
        if self.state.current_view.is_form_view() {
            tracing::debug!(lifecycle = ?self.state.form.lifecycle(), "leaving form");
            self.state.form.teardown();
        }
    }

    /// Advance timers (called once per loop iteration)
    pub fn tick(&mut self, now: Instant) {
        self.state.form.tick(now);
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Welcome => self.handle_welcome_key(key),
            View::CustomerForm => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('f') | KeyCode::Enter => {
                self.navigate(View::CustomerForm);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let now = Instant::now();
        let Some(form) = self.state.form.customer_mut() else {
            return Ok(());
        };
        let on_buttons = form.is_buttons_row_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shortcut = key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER);

        let result = match key.code {
            KeyCode::Tab => {
                form.next_field();
                Ok(())
            }
            KeyCode::BackTab => {
                form.prev_field();
                Ok(())
            }
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => {
                self.save_form().await;
                Ok(())
            }
            KeyCode::Char('a') if shortcut => {
                self.add_address();
                Ok(())
            }
            KeyCode::Char('t') if shortcut => self.populate_test_data(),
            KeyCode::Esc => {
                self.go_back();
                Ok(())
            }
            KeyCode::Left => form.cycle(false, now),
            KeyCode::Right => form.cycle(true, now),
            // Enter on the buttons row triggers the selected button
            KeyCode::Enter if on_buttons => {
                let button = form.selected_form_button();
                self.press_button(button).await
            }
            KeyCode::Enter => {
                form.next_field();
                Ok(())
            }
            // Form field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons && !ctrl => form.input_char(c, now),
            KeyCode::Backspace => form.backspace(now),
            _ => Ok(()),
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, "form edit rejected");
            self.push_error(err.to_string());
        }
        Ok(())
    }

    async fn press_button(&mut self, button: FormButton) -> Result<(), FormError> {
        match button {
            FormButton::Save => self.save_form().await,
            FormButton::AddAddress => self.add_address(),
            FormButton::TestData => return self.populate_test_data(),
        }
        Ok(())
    }

    /// Snapshot the form and hand it to the sink. Invalid forms are saved
    /// too; the status bar notes the validation state.
    pub async fn save_form(&mut self) {
        let Some(form) = self.state.form.customer_mut() else {
            return;
        };
        let valid = form.is_valid();
        let record = SubmissionRecord::new(form.submit());

        match self.sink.submit(&record).await {
            Ok(()) => {
                let msg = if valid {
                    "Saved!"
                } else {
                    "Saved (form has validation errors)"
                };
                self.status_message = Some(msg.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.push_error(format!("Failed to save: {err}"));
            }
        }
    }

    fn add_address(&mut self) {
        if let Some(form) = self.state.form.customer_mut() {
            let index = form.add_address();
            self.status_message = Some(format!("Address {} added", index + 1));
        }
    }

    fn populate_test_data(&mut self) -> Result<(), FormError> {
        if let Some(form) = self.state.form.customer_mut() {
            form.populate_test_data()?;
            self.status_message = Some("Test data loaded".to_string());
        }
        Ok(())
    }
}
