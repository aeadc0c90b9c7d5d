//! Semantic design tokens referenced by the component utility classes.

/// A single semantic color token with a stable name and HSL channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier (e.g., "destructive").
    pub name: &'static str,
    /// Space-separated HSL channel values, ready for `hsl(var(--name))`.
    pub hsl: &'static str,
}

/// Default light-theme palette, ordered as emitted by [`css_variables`].
pub const SEMANTIC: &[ColorToken] = &[
    ColorToken {
        name: "background",
        hsl: "0 0% 100%",
    },
    ColorToken {
        name: "foreground",
        hsl: "222.2 84% 4.9%",
    },
    ColorToken {
        name: "card",
        hsl: "0 0% 100%",
    },
    ColorToken {
        name: "card-foreground",
        hsl: "222.2 84% 4.9%",
    },
    ColorToken {
        name: "primary",
        hsl: "222.2 47.4% 11.2%",
    },
    ColorToken {
        name: "primary-foreground",
        hsl: "210 40% 98%",
    },
    ColorToken {
        name: "secondary",
        hsl: "210 40% 96.1%",
    },
    ColorToken {
        name: "secondary-foreground",
        hsl: "222.2 47.4% 11.2%",
    },
    ColorToken {
        name: "muted",
        hsl: "210 40% 96.1%",
    },
    ColorToken {
        name: "muted-foreground",
        hsl: "215.4 16.3% 46.9%",
    },
    ColorToken {
        name: "accent",
        hsl: "210 40% 96.1%",
    },
    ColorToken {
        name: "accent-foreground",
        hsl: "222.2 47.4% 11.2%",
    },
    ColorToken {
        name: "destructive",
        hsl: "0 84.2% 60.2%",
    },
    ColorToken {
        name: "destructive-foreground",
        hsl: "210 40% 98%",
    },
    ColorToken {
        name: "border",
        hsl: "214.3 31.8% 91.4%",
    },
    ColorToken {
        name: "input",
        hsl: "214.3 31.8% 91.4%",
    },
    ColorToken {
        name: "ring",
        hsl: "222.2 84% 4.9%",
    },
];

/// Renders the palette as a `:root` custom-property block for consumers that
/// inject the tokens into their stylesheet.
#[must_use]
pub fn css_variables() -> String {
    let body = SEMANTIC
        .iter()
        .map(|token| format!("  --{}: {};", token.name, token.hsl))
        .collect::<Vec<_>>()
        .join("\n");
    format!(":root {{\n{body}\n}}")
}
