//! Bordered content container.

use crate::cn::cn;
use yew::prelude::*;

const BASE: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";

/// Properties for [`Card`].
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Heading shown in the card header.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Supporting text shown under the title.
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Footer content, rendered after the body.
    #[prop_or_default]
    pub footer: Option<Html>,
    /// Caller classes, merged after the base classes.
    #[prop_or_default]
    pub class: Classes,
    /// Card body content.
    #[prop_or_default]
    pub children: Children,
}

/// Bordered content container with optional header and footer.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let classes = cn(classes!(BASE, props.class.clone()));
    html! {
        <div class={classes}>
            {(props.title.is_some() || props.description.is_some()).then(|| html! {
                <div class="flex flex-col space-y-1.5 p-6">
                    {props.title.clone().map(|title| html! {
                        <h3 class="text-2xl font-semibold leading-none tracking-tight">{title}</h3>
                    }).unwrap_or_default()}
                    {props.description.clone().map(|description| html! {
                        <p class="text-sm text-muted-foreground">{description}</p>
                    }).unwrap_or_default()}
                </div>
            }).unwrap_or_default()}
            <div class="p-6 pt-0">
                { for props.children.iter() }
            </div>
            {props.footer.clone().map(|footer| html! {
                <div class="flex items-center p-6 pt-0">{footer}</div>
            }).unwrap_or_default()}
        </div>
    }
}
