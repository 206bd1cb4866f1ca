// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod document_type;
mod normalization;
mod observability;
mod pattern;
mod validation;

// This is the public API of the validation library
pub use document_type::{DocumentType, UnsupportedTypeError};
pub use validation::{is_valid_id_number, CifValidator, NieValidator, NifValidator, Validator};
