//! Demo gallery showing each component in its documented states (wasm only).

use crate::components::foundations::{ControlSize, Variant};
use crate::components::{Button, Card, Input, Label, TextField};
use gloo::console;
use yew::prelude::*;

#[function_component(Gallery)]
fn gallery() -> Html {
    let clicks = use_state(|| 0_u32);
    let onclick = {
        let clicks = clicks.clone();
        Callback::from(move |_| clicks.set(*clicks + 1))
    };
    let oninput = Callback::from(|value: String| {
        console::log!("text field input", value);
    });

    html! {
        <div class="p-6 space-y-2">
            <Card title="Buttons" description="Variants and sizes">
                <div class="flex items-center gap-4">
                    <Button {onclick}>{"Default"}</Button>
                    <Button variant={Variant::Destructive}>{"Destructive"}</Button>
                    <Button variant={Variant::Outline}>{"Outline"}</Button>
                    <Button variant={Variant::Secondary}>{"Secondary"}</Button>
                    <Button variant={Variant::Ghost}>{"Ghost"}</Button>
                    <Button variant={Variant::Link}>{"Link"}</Button>
                </div>
                <div class="flex items-center gap-4">
                    <Button size={ControlSize::Sm}>{"Small"}</Button>
                    <Button size={ControlSize::Lg}>{"Large"}</Button>
                    <Button disabled={true}>{"Disabled"}</Button>
                </div>
                <p class="text-sm text-muted-foreground">
                    { format!("Clicked {} times", *clicks) }
                </p>
            </Card>
            <Card title="Bare primitives">
                <Label for_input="bare-input">{"Standalone label"}</Label>
                <Input id="bare-input" placeholder="Standalone input" oninput={oninput.clone()} />
            </Card>
            <Card title="Text fields" description="Hint, error, and required states">
                <TextField label="Email" placeholder="you@example.com" {oninput} />
                <TextField
                    label="Password"
                    input_type="password"
                    hint="Must be at least 8 characters"
                />
                <TextField
                    label="Email"
                    error="Invalid email format"
                    hint="Hidden while the error is shown"
                />
                <TextField label="Name" required={true} />
            </Card>
        </div>
    }
}

/// Mounts the gallery, preferring a `#root` element when the host page
/// provides one and falling back to the document body otherwise.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let renderer = match gloo::utils::document().get_element_by_id("root") {
        Some(root) => yew::Renderer::<Gallery>::with_root(root),
        None => yew::Renderer::<Gallery>::new(),
    };
    renderer.render();
}
