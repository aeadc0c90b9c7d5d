//! Stable identity tokens for form controls.
//!
//! A labeled control, its `<label for>`, and any `aria-describedby` targets
//! must all agree on one id. Callers may supply their own; otherwise a
//! process-unique token is generated once per mounted instance and reused for
//! every subsequent render, so accessibility associations never change
//! spuriously.

use std::sync::atomic::{AtomicU64, Ordering};
use yew::prelude::*;

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(1);

/// Returns a process-unique control identifier (`field-1`, `field-2`, ...).
/// No two calls ever return the same token.
#[must_use]
pub fn next_field_id() -> String {
    format!("field-{}", NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
}

/// Resolves the identity of a form control: an explicit id wins verbatim;
/// otherwise a token from [`next_field_id`] is generated on first render and
/// kept for the lifetime of the component instance.
#[hook]
pub fn use_field_id(explicit: Option<AttrValue>) -> AttrValue {
    let generated = use_state(|| AttrValue::from(next_field_id()));
    explicit.unwrap_or_else(|| (*generated).clone())
}
