//! DOM contract for the labeled text field, verified through Yew's server
//! renderer: label/control association, `aria-invalid`, `aria-describedby`,
//! auxiliary-node precedence, and identity stability.

use lumen_ui::{TextField, use_field_id};
use std::cell::RefCell;
use yew::LocalServerRenderer;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct WrapProps {
    content: Html,
}

#[function_component(Wrap)]
fn wrap(props: &WrapProps) -> Html {
    props.content.clone()
}

async fn render(content: Html) -> String {
    LocalServerRenderer::<Wrap>::with_props(WrapProps { content })
        .hydratable(false)
        .render()
        .await
}

/// Collects the values of every `name="..."` attribute occurrence. The needle
/// is prefixed with a space so `id=` never matches inside `aria-invalid=`.
fn attr_values(html: &str, name: &str) -> Vec<String> {
    let needle = format!(" {name}=\"");
    html.split(&needle)
        .skip(1)
        .filter_map(|rest| rest.find('"').map(|end| rest[..end].to_string()))
        .collect()
}

#[tokio::test]
async fn error_wins_over_hint() {
    let html = render(html! {
        <TextField
            label="Email"
            id="email"
            hint="Enter a valid email"
            error="Invalid email format"
        />
    })
    .await;

    assert!(html.contains("Invalid email format"));
    assert!(!html.contains("Enter a valid email"));
    assert!(html.contains("aria-invalid=\"true\""));
    assert_eq!(attr_values(&html, "aria-describedby"), vec!["email-error"]);
    assert_eq!(attr_values(&html, "id"), vec!["email", "email-error"]);
    assert!(!html.contains("email-hint"));
}

#[tokio::test]
async fn hint_renders_when_no_error_is_present() {
    let html = render(html! {
        <TextField label="Password" id="pw" hint="Must be at least 8 characters" />
    })
    .await;

    assert!(html.contains("Must be at least 8 characters"));
    assert!(html.contains("aria-invalid=\"false\""));
    assert_eq!(attr_values(&html, "aria-describedby"), vec!["pw-hint"]);
    assert_eq!(attr_values(&html, "id"), vec!["pw", "pw-hint"]);
}

#[tokio::test]
async fn no_auxiliary_node_means_no_describedby() {
    let html = render(html! { <TextField label="Name" id="name" /> }).await;

    assert!(!html.contains("aria-describedby"));
    assert!(!html.contains("<p"));
    assert!(html.contains("aria-invalid=\"false\""));
}

#[tokio::test]
async fn empty_error_and_hint_count_as_absent() {
    let html = render(html! { <TextField label="Name" id="name" hint="" error="" /> }).await;

    assert!(!html.contains("aria-describedby"));
    assert!(!html.contains("<p"));
    assert!(html.contains("aria-invalid=\"false\""));
}

#[tokio::test]
async fn explicit_identity_wins_over_generation() {
    let html = render(html! { <TextField label="Email" id="custom-id" /> }).await;

    assert_eq!(attr_values(&html, "id"), vec!["custom-id"]);
    assert_eq!(attr_values(&html, "for"), vec!["custom-id"]);
}

#[tokio::test]
async fn generated_identity_associates_label_and_control() {
    let html = render(html! { <TextField label="Email" /> }).await;

    let ids = attr_values(&html, "id");
    let fors = attr_values(&html, "for");
    assert_eq!(ids.len(), 1);
    assert_eq!(fors, ids);
    assert!(ids[0].starts_with("field-"));
}

#[tokio::test]
async fn generated_identity_is_stable_across_re_renders() {
    thread_local! {
        static OBSERVED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    // Schedules a state change during the first render so the same instance
    // renders twice, recording the resolved identity each time.
    #[function_component(Rerendering)]
    fn rerendering() -> Html {
        let tick = use_state(|| 0_u32);
        if *tick == 0 {
            tick.set(1);
        }
        let field_id = use_field_id(None);
        OBSERVED.with(|observed| observed.borrow_mut().push(field_id.to_string()));
        html! { <label for={field_id}>{"Email"}</label> }
    }

    let html = LocalServerRenderer::<Rerendering>::new()
        .hydratable(false)
        .render()
        .await;

    let observed = OBSERVED.with(|observed| observed.borrow().clone());
    assert!(observed.len() >= 2, "expected at least two renders");
    assert!(observed.iter().all(|id| id == &observed[0]));
    assert!(html.contains(&format!(" for=\"{}\"", observed[0])));
}

#[tokio::test]
async fn distinct_instances_never_share_a_generated_identity() {
    let html = render(html! {
        <>
            <TextField label="First" />
            <TextField label="Second" />
        </>
    })
    .await;

    let fors = attr_values(&html, "for");
    let ids = attr_values(&html, "id");
    assert_eq!(fors.len(), 2);
    assert_eq!(ids, fors);
    assert_ne!(fors[0], fors[1]);
}

#[tokio::test]
async fn required_marker_is_visual_only() {
    let html = render(html! { <TextField label="Name" id="name" required={true} /> }).await;

    assert!(html.contains("after:content-"));
    // The marker is generated content; the label text itself is unchanged.
    assert!(html.contains("Name</label>"));
}

#[tokio::test]
async fn unrequired_label_carries_no_marker() {
    let html = render(html! { <TextField label="Name" id="name" /> }).await;

    assert!(!html.contains("after:content-"));
}

#[tokio::test]
async fn caller_class_overrides_error_styling() {
    let html = render(html! {
        <TextField
            label="Email"
            id="email"
            error="Invalid email"
            class={Classes::from("border-primary")}
        />
    })
    .await;

    assert!(html.contains("border-primary"));
    assert!(!html.contains("border-destructive"));
    assert!(!html.contains("border-input"));
    // Non-conflicting error styling survives the caller override.
    assert!(html.contains("focus-visible:ring-destructive"));
}

#[tokio::test]
async fn error_styling_applies_without_caller_classes() {
    let html = render(html! {
        <TextField label="Email" id="email" error="Invalid email" />
    })
    .await;

    assert!(html.contains("border-destructive"));
    assert!(!html.contains("border-input"));
}

#[tokio::test]
async fn pass_through_attributes_reach_the_control() {
    let html = render(html! {
        <TextField
            label="Password"
            id="pw"
            input_type="password"
            placeholder="Enter password"
            name="password"
        />
    })
    .await;

    assert!(html.contains("type=\"password\""));
    assert!(html.contains("placeholder=\"Enter password\""));
    assert_eq!(attr_values(&html, "name"), vec!["password"]);
}
