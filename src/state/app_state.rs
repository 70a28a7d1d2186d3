//! Application state definitions

use super::forms::QuoteForm;
use std::collections::VecDeque;

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    About,
    Schedule,
    Quote,
}

impl View {
    /// Pages in navbar order
    pub const ALL: [View; 4] = [View::Home, View::About, View::Schedule, View::Quote];

    /// Link text shown in the navbar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Schedule => "Schedule",
            Self::Quote => "Get Quote",
        }
    }

    /// Route of the page on the site
    pub fn route(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Schedule => "/schedule",
            Self::Quote => "/quote",
        }
    }

    /// Single-letter shortcut used outside of form input
    pub fn shortcut(&self) -> char {
        match self {
            Self::Home => 'h',
            Self::About => 'a',
            Self::Schedule => 's',
            Self::Quote => 'g',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.shortcut() == c)
    }

    /// Function key (F1-F4) that opens the page from anywhere
    pub fn function_key(&self) -> u8 {
        match self {
            Self::Home => 1,
            Self::About => 2,
            Self::Schedule => 3,
            Self::Quote => 4,
        }
    }

    pub fn from_function_key(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.function_key() == n)
    }

    /// Views that own a form and swallow typed characters
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Quote)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    /// Quote form, present only while the quote page is shown
    pub quote_form: Option<QuoteForm>,

    // UI state
    pub scroll_offset: usize,
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    /// Keep the offset within what the current page can scroll
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Switch pages, creating or dropping the quote form as the quote page
    /// is entered or left
    pub fn enter_view(&mut self, view: View) {
        if view.is_form_view() {
            if self.quote_form.is_none() {
                self.quote_form = Some(QuoteForm::new());
            }
        } else {
            self.quote_form = None;
        }
        self.current_view = view;
        self.scroll_offset = 0;
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown by the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
