//! Composites built from the atoms.

pub mod card;
pub mod text_field;

pub use card::{Card, CardProps};
pub use text_field::{TextField, TextFieldProps};
