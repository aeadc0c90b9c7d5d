//! Component library organised with Atomic Design layers.

pub mod foundations;

pub mod atoms;
pub mod molecules;

pub use atoms::{Button, ButtonProps, Input, InputProps, Label, LabelProps};
pub use molecules::{Card, CardProps, TextField, TextFieldProps};
