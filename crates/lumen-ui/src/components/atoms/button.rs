//! Push button with variant and size presets.

use crate::cn::cn;
use crate::components::foundations::{ControlSize, Variant};
use yew::prelude::*;

const BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

/// Properties for [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Button content.
    #[prop_or_default]
    pub children: Children,
    /// Visual emphasis variant.
    #[prop_or_default]
    pub variant: Variant,
    /// Sizing preset.
    #[prop_or_default]
    pub size: ControlSize,
    /// Disables the control.
    #[prop_or_default]
    pub disabled: bool,
    /// `type` attribute (`submit`, `button`, ...).
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    /// Caller classes, merged after the variant and size classes so they win
    /// per utility group.
    #[prop_or_default]
    pub class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Styled push button.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = cn(classes!(
        BASE,
        props.variant.classes(),
        props.size.classes(),
        props.class.clone()
    ));
    html! {
        <button
            class={classes}
            disabled={props.disabled}
            r#type={props.r#type.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
