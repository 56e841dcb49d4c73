#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Binary visual mode for the whole site.
///
/// The current theme is mirrored into the `data-theme` attribute on the
/// document element; everything else (colors, shadows) is CSS keyed off
/// that attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other mode. Toggling twice returns the original value.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to `data-theme` and to the persisted preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted preference value. Unknown values yield `None` so a
    /// corrupt stored preference falls through to the system default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Icon shown on the toggle button: the moon offers dark mode while in
    /// light mode, the sun offers the way back.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}
