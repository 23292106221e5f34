use serde::{Deserialize, Serialize};

use crate::domain::ThemeMode;
use crate::domain::serde_utils::lenient_theme;

/// Runtime preferences persisted between sessions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Light or dark. Any stored value other than `"dark"` reads as light.
    #[serde(default, with = "lenient_theme")]
    pub theme: ThemeMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_dark() {
        let state = StateConfig {
            theme: ThemeMode::Dark,
        };
        let content = toml::to_string_pretty(&state).unwrap();

        assert_eq!(content.trim(), r#"theme = "dark""#);
        assert_eq!(toml::from_str::<StateConfig>(&content).unwrap(), state);
    }

    #[test]
    fn test_unknown_values_read_as_light() {
        for content in ["", r#"theme = "Dark""#, r#"theme = "solarized""#, "theme = 1"] {
            let state: StateConfig = toml::from_str(content).unwrap();
            assert_eq!(state.theme, ThemeMode::Light, "{content}");
        }
    }
}
