//! Quote form record and editing state

use super::field::{cycle_option, option_by_initial, QuoteField};
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The values of a quote request.
///
/// Every key is always present; an unset field is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
}

impl QuoteFormState {
    /// All eight fields empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::Company => &self.company,
            QuoteField::ProjectType => &self.project_type,
            QuoteField::Budget => &self.budget,
            QuoteField::Timeline => &self.timeline,
            QuoteField::Description => &self.description,
        }
    }

    /// Copy of this record with `field` replaced by `value`
    #[must_use]
    pub fn with_field(&self, field: QuoteField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            QuoteField::Name => next.name = value,
            QuoteField::Email => next.email = value,
            QuoteField::Phone => next.phone = value,
            QuoteField::Company => next.company = value,
            QuoteField::ProjectType => next.project_type = value,
            QuoteField::Budget => next.budget = value,
            QuoteField::Timeline => next.timeline = value,
            QuoteField::Description => next.description = value,
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// First field that blocks submission, in page order.
    ///
    /// Required fields must be non-empty and the email must have a local part
    /// and a domain around a single `@`.
    pub fn first_invalid_field(&self) -> Option<(QuoteField, &'static str)> {
        QuoteField::ALL.into_iter().find_map(|field| {
            let value = self.get(field);
            if field.is_required() && value.trim().is_empty() {
                return Some((field, "is required"));
            }
            if field == QuoteField::Email && !value.is_empty() && !looks_like_email(value) {
                return Some((field, "must be an email address"));
            }
            None
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Index of the "Request Quote" button row, after the eight fields
pub const SUBMIT_BUTTON_INDEX: usize = QuoteField::ALL.len();

/// Editing state of the quote page: the record plus which row has focus
#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    pub values: QuoteFormState,
    pub active_field_index: usize,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field with focus, or None when the submit button is focused
    pub fn active(&self) -> Option<QuoteField> {
        QuoteField::ALL.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn focus(&mut self, field: QuoteField) {
        if let Some(idx) = QuoteField::ALL.iter().position(|f| *f == field) {
            self.active_field_index = idx;
        }
    }

    /// Replace one field, leaving the previous record untouched
    pub fn update_field(&mut self, field: QuoteField, value: impl Into<String>) {
        self.values = self.values.with_field(field, value);
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active() else {
            return;
        };
        if field.is_select() {
            if let Some(value) = option_by_initial(field.options(), self.values.get(field), c) {
                self.update_field(field, value);
            }
            return;
        }
        if !field.accepts_char(c) {
            return;
        }
        let mut value = self.values.get(field).to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Insert a line break, only meaningful in the multiline field
    pub fn input_newline(&mut self) {
        if let Some(field) = self.active().filter(|f| f.is_multiline()) {
            let mut value = self.values.get(field).to_string();
            value.push('\n');
            self.update_field(field, value);
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.active() else {
            return;
        };
        if field.is_select() {
            self.update_field(field, "");
            return;
        }
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            self.update_field(field, value);
        }
    }

    pub fn clear_active(&mut self) {
        if let Some(field) = self.active() {
            self.update_field(field, "");
        }
    }

    /// Move a select field to its next/previous option
    pub fn cycle_active_option(&mut self, forward: bool) {
        if let Some(field) = self.active().filter(|f| f.is_select()) {
            let value = cycle_option(field.options(), self.values.get(field), forward);
            self.update_field(field, value);
        }
    }

    /// Back to the initial record with focus on the first field
    pub fn reset(&mut self) {
        self.values = QuoteFormState::new();
        self.active_field_index = 0;
    }
}

impl Form for QuoteForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // eight fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(state: &QuoteFormState) -> Vec<String> {
        let value = serde_json::to_value(state).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.values().all(|v| v.is_string()));
        let mut keys: Vec<_> = object.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn expected_keys() -> Vec<String> {
        let mut keys: Vec<_> = QuoteField::ALL.iter().map(|f| f.name().to_string()).collect();
        keys.sort();
        keys
    }

    mod record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_all_empty() {
            let state = QuoteFormState::new();
            let json = serde_json::to_value(&state).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "name": "",
                    "email": "",
                    "phone": "",
                    "company": "",
                    "projectType": "",
                    "budget": "",
                    "timeline": "",
                    "description": ""
                })
            );
            assert!(state.is_empty());
        }

        #[test]
        fn test_with_field_replaces_one_key() {
            let state = QuoteFormState::new().with_field(QuoteField::Name, "Ada");
            assert_eq!(state.name, "Ada");
            for field in QuoteField::ALL.into_iter().filter(|f| *f != QuoteField::Name) {
                assert_eq!(state.get(field), "");
            }
        }

        #[test]
        fn test_with_field_leaves_original_untouched() {
            let before = QuoteFormState::new().with_field(QuoteField::Email, "a@b.c");
            let after = before.with_field(QuoteField::Email, "x@y.z");
            assert_eq!(before.email, "a@b.c");
            assert_eq!(after.email, "x@y.z");
        }

        #[test]
        fn test_last_write_wins() {
            let base = QuoteFormState::new()
                .with_field(QuoteField::Company, "Analytical Engines")
                .with_field(QuoteField::Timeline, "urgent");
            let state = base
                .with_field(QuoteField::Budget, "<5000")
                .with_field(QuoteField::Budget, "25000+");
            assert_eq!(state.budget, "25000+");
            assert_eq!(state.with_field(QuoteField::Budget, ""), base);
        }

        #[test]
        fn test_update_sequence_keeps_exactly_eight_keys() {
            let mut state = QuoteFormState::new();
            for (i, field) in QuoteField::ALL.iter().cycle().take(40).enumerate() {
                state = state.with_field(*field, format!("value {i}"));
                assert_eq!(keys_of(&state), expected_keys());
            }
            assert_eq!(keys_of(&state.with_field(QuoteField::Phone, "")), expected_keys());
        }

        #[test]
        fn test_phone_can_be_cleared() {
            let state = QuoteFormState::new()
                .with_field(QuoteField::Phone, "555-0000")
                .with_field(QuoteField::Phone, "");
            assert_eq!(state, QuoteFormState::new());
        }

        #[test]
        fn test_deserialize_requires_every_key() {
            let partial = r#"{"name": "Ada"}"#;
            assert!(serde_json::from_str::<QuoteFormState>(partial).is_err());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        fn complete() -> QuoteFormState {
            QuoteFormState::new()
                .with_field(QuoteField::Name, "Ada")
                .with_field(QuoteField::Email, "ada@x.com")
                .with_field(QuoteField::ProjectType, "development")
                .with_field(QuoteField::Budget, "10000-25000")
                .with_field(QuoteField::Timeline, "normal")
                .with_field(QuoteField::Description, "Build a thing")
        }

        #[test]
        fn test_complete_record_is_valid_without_optional_fields() {
            assert_eq!(complete().first_invalid_field(), None);
        }

        #[test]
        fn test_empty_record_reports_name_first() {
            assert_eq!(
                QuoteFormState::new().first_invalid_field(),
                Some((QuoteField::Name, "is required"))
            );
        }

        #[test]
        fn test_whitespace_only_counts_as_missing() {
            let state = complete().with_field(QuoteField::Description, "  \n ");
            assert_eq!(
                state.first_invalid_field(),
                Some((QuoteField::Description, "is required"))
            );
        }

        #[test]
        fn test_missing_select_is_reported() {
            let state = complete().with_field(QuoteField::Timeline, "");
            assert_eq!(
                state.first_invalid_field().map(|(f, _)| f),
                Some(QuoteField::Timeline)
            );
        }

        #[test]
        fn test_email_without_at_is_invalid() {
            let state = complete().with_field(QuoteField::Email, "ada.x.com");
            assert_eq!(
                state.first_invalid_field(),
                Some((QuoteField::Email, "must be an email address"))
            );
        }

        #[test]
        fn test_email_with_empty_domain_is_invalid() {
            let state = complete().with_field(QuoteField::Email, "ada@");
            assert!(state.first_invalid_field().is_some());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_focuses_first_field() {
            let form = QuoteForm::new();
            assert_eq!(form.active(), Some(QuoteField::Name));
            assert!(!form.is_buttons_row_active());
        }

        #[test]
        fn test_field_count_includes_button_row() {
            assert_eq!(QuoteForm::new().field_count(), 9);
        }

        #[test]
        fn test_next_field_reaches_button_then_wraps() {
            let mut form = QuoteForm::new();
            for _ in 0..8 {
                form.next_field();
            }
            assert!(form.is_buttons_row_active());
            assert_eq!(form.active(), None);
            form.next_field();
            assert_eq!(form.active(), Some(QuoteField::Name));
        }

        #[test]
        fn test_prev_field_wraps_to_button() {
            let mut form = QuoteForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = QuoteForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_BUTTON_INDEX);
        }

        #[test]
        fn test_input_char_and_backspace() {
            let mut form = QuoteForm::new();
            for c in "Adaa".chars() {
                form.input_char(c);
            }
            form.backspace();
            assert_eq!(form.values.name, "Ada");
        }

        #[test]
        fn test_backspace_on_empty_field_is_noop() {
            let mut form = QuoteForm::new();
            form.backspace();
            assert!(form.values.is_empty());
        }

        #[test]
        fn test_phone_takes_extensions() {
            let mut form = QuoteForm::new();
            form.focus(QuoteField::Phone);
            for c in "555-0000 ext 12".chars() {
                form.input_char(c);
            }
            assert_eq!(form.values.phone, "555-0000 ext 12");
        }

        #[test]
        fn test_select_cycles_and_types_initials() {
            let mut form = QuoteForm::new();
            form.focus(QuoteField::ProjectType);
            form.cycle_active_option(true);
            assert_eq!(form.values.project_type, "consulting");
            form.input_char('o');
            assert_eq!(form.values.project_type, "other");
            form.backspace();
            assert_eq!(form.values.project_type, "");
        }

        #[test]
        fn test_cycle_on_text_field_is_noop() {
            let mut form = QuoteForm::new();
            form.cycle_active_option(true);
            assert!(form.values.is_empty());
        }

        #[test]
        fn test_newline_only_in_description() {
            let mut form = QuoteForm::new();
            form.input_newline();
            assert_eq!(form.values.name, "");

            form.focus(QuoteField::Description);
            form.input_char('a');
            form.input_newline();
            form.input_char('b');
            assert_eq!(form.values.description, "a\nb");
        }

        #[test]
        fn test_clear_active() {
            let mut form = QuoteForm::new();
            form.focus(QuoteField::Company);
            form.input_char('X');
            form.clear_active();
            assert_eq!(form.values.company, "");
        }

        #[test]
        fn test_typing_on_button_row_is_ignored() {
            let mut form = QuoteForm::new();
            form.set_active_field(SUBMIT_BUTTON_INDEX);
            form.input_char('a');
            form.backspace();
            form.clear_active();
            assert!(form.values.is_empty());
        }

        #[test]
        fn test_reset_restores_initial_state() {
            let mut form = QuoteForm::new();
            form.update_field(QuoteField::Description, "Build a thing");
            form.focus(QuoteField::Description);
            form.reset();
            assert_eq!(form.values, QuoteFormState::new());
            assert_eq!(form.active_field_index, 0);
        }
    }
}
