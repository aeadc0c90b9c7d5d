//! Styled primitive controls.

pub mod button;
pub mod input;
pub mod label;

pub use button::{Button, ButtonProps};
pub use input::{Input, InputProps};
pub use label::{Label, LabelProps};
