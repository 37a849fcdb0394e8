use serde::{Deserialize, Serialize};

/// The page's active color scheme. Dark is the default when nothing has
/// been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Restore a mode from the persistence collaborator. Anything other
    /// than the two known strings falls back to the default.
    pub fn from_saved(saved: Option<&str>) -> Self {
        match saved {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Dark,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// The string handed back to the persistence collaborator.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    CardBackground,
    CardBorder,
    CategoryBadge,

    ChipBackground,
    ChipActive,
    ChipText,

    TagBackground,
    TagText,

    LinkText,
    SearchBorder,
    ToastText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
    }

    #[test]
    fn restore_defaults_to_dark() {
        assert_eq!(ThemeMode::from_saved(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_saved(Some("solarized")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_saved(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_saved(Some("dark")), ThemeMode::Dark);
    }

    #[test]
    fn as_str_matches_persisted_form() {
        assert_eq!(ThemeMode::from_saved(Some(ThemeMode::Light.as_str())), ThemeMode::Light);
    }
}
