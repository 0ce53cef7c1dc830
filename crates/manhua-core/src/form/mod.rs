//! Shelf Form
//!
//! Two-step create/edit wizard with batch validation.

mod state;
mod validate;
mod apply;

#[cfg(test)]
mod tests;

pub use state::{ShelfForm, FormStep, FormMode, FormRow, RowField, FormOutcome, clamp_count};
pub use validate::{ShelfFormError, ParsedRow, validate_rows};
pub use apply::{build_created, apply_edits};
