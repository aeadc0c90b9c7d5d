//! Caption associated with a form control.

use crate::cn::cn;
use yew::prelude::*;

const BASE: &str = "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

/// Properties for [`Label`].
#[derive(Properties, PartialEq)]
pub struct LabelProps {
    /// Id of the control this label describes.
    #[prop_or_default]
    pub for_input: Option<AttrValue>,
    /// Label content.
    #[prop_or_default]
    pub children: Children,
    /// Caller classes, merged after the base classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Styled caption for a form control.
#[function_component(Label)]
pub fn label(props: &LabelProps) -> Html {
    html! {
        <label class={cn(classes!(BASE, props.class.clone()))} for={props.for_input.clone()}>
            { for props.children.iter() }
        </label>
    }
}
