//! Single-line text entry control.

use crate::cn::cn;
use yew::prelude::*;

const BASE: &str = "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm ring-offset-background placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Properties for [`Input`].
#[derive(Properties, PartialEq)]
pub struct InputProps {
    /// Controlled value.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// `type` attribute, defaults to `text`.
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    /// Element id, used for label association.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Form field name.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    /// Accessible name when no visible label exists.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Invalid-state flag exposed to assistive technology.
    #[prop_or_default]
    pub aria_invalid: Option<AttrValue>,
    /// Space-joined ids of the elements describing this control.
    #[prop_or_default]
    pub aria_describedby: Option<AttrValue>,
    /// Disables the control.
    #[prop_or_default]
    pub disabled: bool,
    /// Node ref forwarded to the rendered element.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Caller classes, merged after the base classes so they win per utility
    /// group.
    #[prop_or_default]
    pub class: Classes,
    /// Emits the current value on every input event.
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Styled single-line text entry control.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    html! {
        <input
            class={cn(classes!(BASE, props.class.clone()))}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            id={props.id.clone()}
            name={props.name.clone()}
            aria-label={props.aria_label.clone()}
            aria-invalid={props.aria_invalid.clone()}
            aria-describedby={props.aria_describedby.clone()}
            disabled={props.disabled}
            oninput={oninput}
            ref={props.node_ref.clone()}
        />
    }
}
