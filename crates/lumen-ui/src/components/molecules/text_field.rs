//! Labeled text-field composite.
//!
//! Wires a [`Label`], an [`Input`], and at most one auxiliary paragraph (hint
//! or error) into a single accessible unit. The control id, the label `for`,
//! and `aria-describedby` are derived from one identity, supplied by the
//! caller or generated once per mounted instance.

use crate::cn::cn;
use crate::components::atoms::{Input, Label};
use crate::id::use_field_id;
use yew::prelude::*;

/// Generated-content asterisk appended to the label of a required field.
/// Purely visual; the label's text content is untouched.
const REQUIRED_MARKER: &str = "after:ml-0.5 after:text-destructive after:content-['*']";

/// Error styling for the control, merged before caller classes so caller
/// overrides win per utility group.
const ERROR_RING: &str = "border-destructive focus-visible:ring-destructive";

/// Properties for [`TextField`].
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    /// Visible label text.
    pub label: AttrValue,
    /// Marks the field as required with a visual asterisk on the label.
    #[prop_or_default]
    pub required: bool,
    /// Advisory text shown under the control while no error is present.
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    /// Validation message. Takes precedence over `hint` and flags the control
    /// as invalid.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Explicit control identity; generated once per mount when absent.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Controlled value, forwarded to the control.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Placeholder text, forwarded to the control.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// `type` attribute, forwarded to the control.
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    /// Form field name, forwarded to the control.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Disables the control.
    #[prop_or_default]
    pub disabled: bool,
    /// Node ref forwarded to the rendered control.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Caller classes for the control, merged after the error styling.
    #[prop_or_default]
    pub class: Classes,
    /// Emits the current value on every input event.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Label, text entry control, and at most one hint or error paragraph, with
/// accessibility wiring computed automatically. Error beats hint.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let field_id = use_field_id(props.id.clone());
    let error = props.error.as_ref().filter(|error| !error.is_empty());
    let hint = props
        .hint
        .as_ref()
        .filter(|hint| !hint.is_empty() && error.is_none());

    let error_id = error.map(|_| AttrValue::from(format!("{field_id}-error")));
    let hint_id = hint.map(|_| AttrValue::from(format!("{field_id}-hint")));
    // Exactly the ids of the auxiliary nodes actually rendered: one or none.
    let described_by = error_id.clone().or_else(|| hint_id.clone());
    let invalid = if error.is_some() { "true" } else { "false" };

    html! {
        <div class="space-y-2">
            <Label
                for_input={field_id.clone()}
                class={cn(classes!(props.required.then_some(REQUIRED_MARKER)))}
            >
                { props.label.clone() }
            </Label>
            <Input
                id={field_id}
                class={cn(classes!(error.is_some().then_some(ERROR_RING), props.class.clone()))}
                aria_invalid={AttrValue::from(invalid)}
                aria_describedby={described_by}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                input_type={props.input_type.clone()}
                name={props.name.clone()}
                disabled={props.disabled}
                node_ref={props.node_ref.clone()}
                oninput={props.oninput.clone()}
            />
            {error.map(|message| html! {
                <p id={error_id.clone()} class="text-sm text-destructive">{message.clone()}</p>
            }).unwrap_or_default()}
            {hint.map(|message| html! {
                <p id={hint_id.clone()} class="text-sm text-muted-foreground">{message.clone()}</p>
            }).unwrap_or_default()}
        </div>
    }
}
