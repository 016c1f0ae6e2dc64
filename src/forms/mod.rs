//! Schema-driven entry forms
//!
//! Forms are described by static field tables ([`schema`]) and edited through
//! [`Draft`] buffers that parse into records on submit.

pub mod draft;
pub mod schema;

pub use draft::Draft;
pub use schema::{FieldKind, FieldSpec, FormSchema, OptionSource, CATEGORY_FORM, EXPENSE_FORM};
