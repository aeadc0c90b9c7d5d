#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Lumen UI: presentational Yew components styled with Tailwind utility classes.
//! This crate holds the styled primitives (button, card, input, label), the
//! labeled text-field composite, the class-merge utility, and the design tokens
//! the utility classes refer to.

pub mod cn;
pub mod components;
pub mod id;
pub mod theme;

pub use cn::cn;
pub use components::foundations::{ControlSize, Variant};
pub use components::{
    Button, ButtonProps, Card, CardProps, Input, InputProps, Label, LabelProps, TextField,
    TextFieldProps,
};
pub use id::{next_field_id, use_field_id};

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
