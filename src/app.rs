//! Application state and core logic

use crate::config::SiteConfig;
use crate::state::{AppState, Form, View};
use crate::submission::{LoggingSink, QuoteRequest, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Site content overrides
    pub config: SiteConfig,
    /// Receives submitted quote requests
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App that logs quote requests
    pub fn new(config: SiteConfig) -> Self {
        Self::with_sink(config, Box::new(LoggingSink::new()))
    }

    /// Create a new App with a specific submission sink
    pub fn with_sink(config: SiteConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            config,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request shutdown at the end of the current loop iteration
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        // F1-F4 open pages from anywhere, including the form
        if let KeyCode::F(n) = key.code {
            if let Some(view) = View::from_function_key(n) {
                self.navigate(view);
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Quote => self.handle_quote_key(key).await?,
            View::Home | View::About | View::Schedule => self.handle_page_key(key)?,
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        // Save current view to history
        self.state.view_history.push(self.state.current_view);
        self.state.enter_view(view);
        tracing::info!("Navigated to {}", view.route());
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() || view == self.state.current_view {
                continue;
            }
            self.state.enter_view(view);
            return;
        }
        if self.state.current_view != View::Home {
            self.state.enter_view(View::Home);
        }
    }

    /// Handle keys on the static pages
    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            // Call to action on the home and schedule pages
            KeyCode::Enter
                if matches!(self.state.current_view, View::Home | View::Schedule) =>
            {
                self.navigate(View::Quote);
            }
            KeyCode::Char(c) => {
                if let Some(view) = View::from_shortcut(c) {
                    self.navigate(view);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the quote page
    async fn handle_quote_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.go_back();
            return Ok(());
        }
        let altgr = key.modifiers.contains(KeyModifiers::ALT);
        if key.code == KeyCode::Char('s')
            && key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
            && !altgr
        {
            self.submit_quote().await;
            return Ok(());
        }
        if key.code == KeyCode::Enter
            && self
                .state
                .quote_form
                .as_ref()
                .is_some_and(|f| f.is_buttons_row_active())
        {
            self.submit_quote().await;
            return Ok(());
        }

        let Some(form) = self.state.quote_form.as_mut() else {
            return Ok(());
        };
        let on_select = form.active().is_some_and(|f| f.is_select());

        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) && !altgr => {
                form.clear_active();
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Right if on_select => form.cycle_active_option(true),
            KeyCode::Left if on_select => form.cycle_active_option(false),
            KeyCode::Char(' ') if on_select => form.cycle_active_option(true),
            // AltGr arrives as Ctrl+Alt on Windows
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    || key
                        .modifiers
                        .contains(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c);
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                if form.active().is_some_and(|f| f.is_multiline()) {
                    form.input_newline();
                } else {
                    form.next_field();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Check the form and hand it to the sink.
    ///
    /// The form is reset only when the sink accepts the request; a failed
    /// submission keeps everything the visitor typed.
    async fn submit_quote(&mut self) {
        let Some(form) = self.state.quote_form.as_mut() else {
            return;
        };

        if let Some((field, problem)) = form.values.first_invalid_field() {
            form.focus(field);
            self.state.status_message = Some(format!("{} {}", field.label(), problem));
            return;
        }

        let request = QuoteRequest::new(form.values.clone());
        match self.sink.submit(&request).await {
            Ok(()) => {
                if let Some(form) = self.state.quote_form.as_mut() {
                    form.reset();
                }
                tracing::info!(reference = %request.reference, "Quote request submitted");
                self.state.status_message = Some(format!(
                    "Thanks! Quote request {} received, we'll be in touch.",
                    request.short_reference()
                ));
            }
            Err(e) => {
                tracing::warn!(reference = %request.reference, "Quote submission failed: {e}");
                self.push_error(format!("Could not send your quote request: {e}"));
            }
        }
    }
}
