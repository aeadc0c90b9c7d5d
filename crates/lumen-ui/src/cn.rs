//! Class-name merging with Tailwind-style conflict resolution.
//!
//! [`cn`] flattens an ordered class list (built with yew's `classes!`, which
//! already handles literals, `Option`s, and conditionals) and then resolves
//! conflicts between utility classes that target the same style property: the
//! last token of a utility group wins and earlier ones are dropped. Tokens the
//! group table does not recognise pass through untouched.

use std::collections::HashSet;
use yew::Classes;

/// Font-size suffixes of the `text-*` family. Anything else after `text-` is a
/// text color.
const FONT_SIZES: [&str; 13] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

/// Font-weight suffixes of the `font-*` family. Anything else after `font-` is
/// a font family.
const FONT_WEIGHTS: [&str; 9] = [
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

/// Keywords that all set the `display` property.
const DISPLAY: [&str; 7] = [
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "hidden",
];

/// Unambiguous prefix table, longest-match entries first within each family.
const PREFIX_GROUPS: [(&str, &str); 33] = [
    ("px-", "padding-x"),
    ("py-", "padding-y"),
    ("pt-", "padding-top"),
    ("pr-", "padding-right"),
    ("pb-", "padding-bottom"),
    ("pl-", "padding-left"),
    ("p-", "padding"),
    ("mx-", "margin-x"),
    ("my-", "margin-y"),
    ("mt-", "margin-top"),
    ("mr-", "margin-right"),
    ("mb-", "margin-bottom"),
    ("ml-", "margin-left"),
    ("m-", "margin"),
    ("min-w-", "min-width"),
    ("max-w-", "max-width"),
    ("min-h-", "min-height"),
    ("max-h-", "max-height"),
    ("w-", "width"),
    ("h-", "height"),
    ("bg-", "background-color"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("opacity-", "opacity"),
    ("z-", "z-index"),
    ("items-", "align-items"),
    ("justify-", "justify-content"),
    ("underline-offset-", "underline-offset"),
];

/// Maps a bare token (modifiers already stripped) to its utility group.
fn utility_group(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if base == "rounded" || base.starts_with("rounded-") {
        return Some("border-radius");
    }
    if base == "shadow" || base.starts_with("shadow-") {
        return Some("box-shadow");
    }
    for (prefix, group) in PREFIX_GROUPS {
        if base.starts_with(prefix) {
            return Some(group);
        }
    }
    if let Some(rest) = base.strip_prefix("text-") {
        let size = rest.split('/').next().unwrap_or(rest);
        return Some(if FONT_SIZES.contains(&size) {
            "font-size"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = base.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if base == "border" {
        return Some("border-width");
    }
    if let Some(rest) = base.strip_prefix("border-") {
        return Some(if rest.bytes().all(|b| b.is_ascii_digit()) {
            "border-width"
        } else {
            "border-color"
        });
    }
    if let Some(rest) = base.strip_prefix("ring-offset-") {
        return Some(if rest.bytes().all(|b| b.is_ascii_digit()) {
            "ring-offset-width"
        } else {
            "ring-offset-color"
        });
    }
    if base == "ring" {
        return Some("ring-width");
    }
    if let Some(rest) = base.strip_prefix("ring-") {
        return Some(if rest.bytes().all(|b| b.is_ascii_digit()) {
            "ring-width"
        } else {
            "ring-color"
        });
    }
    None
}

/// Splits the variant-modifier chain (`hover:`, `focus-visible:`, stacks of
/// them) from the utility token. Tokens conflict only within the same chain.
fn split_modifiers(token: &str) -> (&str, &str) {
    token
        .rsplit_once(':')
        .map_or(("", token), |(modifiers, base)| (modifiers, base))
}

/// Merges a class list, keeping only the last token of each utility group.
///
/// `Classes` is set-backed, so a literally repeated token collapses to its
/// first position before merging: `cn(classes!("px-4", "px-8", "px-4"))`
/// yields `px-8`. Identical tokens set the same value, so which occurrence
/// survives never changes the computed style.
#[must_use]
pub fn cn(input: impl Into<Classes>) -> Classes {
    let flat = input.into().to_string();
    let tokens: Vec<&str> = flat.split_whitespace().collect();
    let mut seen: HashSet<(&str, &'static str)> = HashSet::new();
    let mut survivors: Vec<&str> = Vec::with_capacity(tokens.len());
    for token in tokens.iter().rev() {
        let (modifiers, base) = split_modifiers(token);
        match utility_group(base) {
            Some(group) => {
                if seen.insert((modifiers, group)) {
                    survivors.push(token);
                }
            }
            None => survivors.push(token),
        }
    }
    survivors.reverse();
    Classes::from(survivors.join(" "))
}
