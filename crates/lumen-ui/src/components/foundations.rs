//! Shared style vocabulary for the component set.

/// Visual emphasis variants for button-like controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// Filled with the primary brand color.
    #[default]
    Default,
    /// Filled with the destructive color for dangerous actions.
    Destructive,
    /// Bordered with a transparent background.
    Outline,
    /// Filled with the secondary color.
    Secondary,
    /// No fill until hovered.
    Ghost,
    /// Rendered like an inline link.
    Link,
}

impl Variant {
    /// Returns the utility classes for the variant.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => "bg-destructive text-destructive-foreground hover:bg-destructive/90",
            Self::Outline => "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Sizing presets for interactive controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ControlSize {
    /// Compact height.
    Sm,
    /// Default height.
    #[default]
    Md,
    /// Tall height with wider padding.
    Lg,
    /// Square, for icon-only buttons.
    Icon,
}

impl ControlSize {
    /// Returns the utility classes for the size preset.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-9 rounded-md px-3",
            Self::Md => "h-10 px-4 py-2",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}
