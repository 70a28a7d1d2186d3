//! Form domain layer
//!
//! Type-safe handling of the quote request form: the eight field keys and
//! their options, the record itself, and the focus/editing state of the page.

mod field;
mod form_state;

pub use field::QuoteField;
pub use form_state::{Form, QuoteForm, QuoteFormState};

#[cfg(test)]
pub use form_state::SUBMIT_BUTTON_INDEX;
