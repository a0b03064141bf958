//! Text input editing for form fields

mod field;

pub use field::{FieldEditor, InputAction};
