//! Display mode toggled by the user.

/// Binary display mode, persisted independently of the inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light mode (default).
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// Parses a persisted mode name. Only `"dark"` selects dark mode.
    #[must_use]
    pub fn from_persisted(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// Returns the persisted mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns whether this is dark mode.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_persisted() {
        assert_eq!(ThemeMode::from_persisted("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_persisted("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted("Dark"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_persisted(""), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
