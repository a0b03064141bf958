//! UI components

mod common;
pub mod form;
pub mod header;
pub mod response;
pub mod status_bar;

pub use form::{render_form, STACKED_FORM_HEIGHT};
pub use header::render_header;
pub use response::{render_response, ResponseMetrics};
pub use status_bar::render_status_bar;
