//! Form rendering module
//!
//! - `field_renderer`: single field rendering
//! - `quote_form`: the quote request page

mod field_renderer;
mod quote_form;

pub use quote_form::draw_quote_form;
