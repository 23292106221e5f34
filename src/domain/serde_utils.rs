//! Serde helpers for tolerant reading of persisted inventory data.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Reads a u64 written either as a JSON number or as a string.
///
/// Records written by the browser version carry `Date.now()` numbers; hand
/// edited files sometimes quote them.
pub mod flexible_u64 {
    use super::{Deserializer, Serializer, Visitor, de, fmt};

    /// 2^64, the first float that no longer fits a u64.
    const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

    /// Serializes a u64 as a plain number.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    /// Deserializes a u64 from a string, an integer, or an integral float.
    ///
    /// # Errors
    ///
    /// Returns an error for negative, fractional or non-numeric values.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlexibleVisitor;

        impl Visitor<'_> for FlexibleVisitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integer or a string holding one")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(value).map_err(|_| E::custom(format!("negative id: {value}")))
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if (0.0..U64_LIMIT).contains(&value) && value.fract() == 0.0 {
                    Ok(value as u64)
                } else {
                    Err(E::custom(format!("not an integral id: {value}")))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.trim().parse::<u64>().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// Reads a text field that older files may hold as a bare number.
pub mod string_or_number {
    use super::{Deserializer, Serializer, Visitor, de, fmt};

    /// Serializes the value as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    #[allow(clippy::ptr_arg)]
    pub fn serialize<S>(value: &String, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    /// Deserializes a string, or formats a number as one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a string nor a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextVisitor;

        impl Visitor<'_> for TextVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a number")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.to_string())
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

/// Maps any persisted theme value onto light or dark.
///
/// Only the exact string `"dark"` selects dark mode; everything else,
/// including values of the wrong type, reads as light.
pub mod lenient_theme {
    use super::{Deserializer, Serializer, Visitor, de, fmt};
    use crate::domain::ThemeMode;

    /// Serializes the mode as its persisted name.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_str())
    }

    /// Deserializes a mode without ever failing on the value itself.
    ///
    /// # Errors
    ///
    /// Only propagates errors raised by the underlying deserializer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ThemeVisitor;

        impl Visitor<'_> for ThemeVisitor {
            type Value = ThemeMode;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ThemeMode::from_persisted(value))
            }

            fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ThemeMode::Light)
            }

            fn visit_i64<E>(self, _value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ThemeMode::Light)
            }

            fn visit_u64<E>(self, _value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ThemeMode::Light)
            }

            fn visit_f64<E>(self, _value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ThemeMode::Light)
            }
        }

        deserializer.deserialize_any(ThemeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::domain::ThemeMode;

    #[derive(Deserialize)]
    struct Id(#[serde(with = "super::flexible_u64")] u64);

    #[derive(Deserialize)]
    struct Quantity(#[serde(with = "super::string_or_number")] String);

    #[derive(Deserialize)]
    struct Theme {
        #[serde(with = "super::lenient_theme")]
        theme: ThemeMode,
    }

    #[test]
    fn test_flexible_u64_accepts_number_string_and_float() {
        assert_eq!(serde_json::from_str::<Id>("17").unwrap().0, 17);
        assert_eq!(serde_json::from_str::<Id>("\"17\"").unwrap().0, 17);
        assert_eq!(serde_json::from_str::<Id>("17.0").unwrap().0, 17);
    }

    #[test]
    fn test_flexible_u64_rejects_negative_and_fractional() {
        assert!(serde_json::from_str::<Id>("-3").is_err());
        assert!(serde_json::from_str::<Id>("1.5").is_err());
        assert!(serde_json::from_str::<Id>("\"abc\"").is_err());
    }

    #[test]
    fn test_flexible_u64_rejects_floats_beyond_u64() {
        assert!(serde_json::from_str::<Id>("1e20").is_err());
        assert!(serde_json::from_str::<Id>("18446744073709551616.0").is_err());
        assert_eq!(serde_json::from_str::<Id>("1e15").unwrap().0, 1_000_000_000_000_000);
    }

    #[test]
    fn test_string_or_number() {
        assert_eq!(serde_json::from_str::<Quantity>("\"2\"").unwrap().0, "2");
        assert_eq!(serde_json::from_str::<Quantity>("3").unwrap().0, "3");
    }

    #[test]
    fn test_lenient_theme() {
        let dark: Theme = toml::from_str("theme = \"dark\"").unwrap();
        let light: Theme = toml::from_str("theme = \"light\"").unwrap();
        let other: Theme = toml::from_str("theme = \"solarized\"").unwrap();
        let wrong_type: Theme = toml::from_str("theme = 3").unwrap();

        assert_eq!(dark.theme, ThemeMode::Dark);
        assert_eq!(light.theme, ThemeMode::Light);
        assert_eq!(other.theme, ThemeMode::Light);
        assert_eq!(wrong_type.theme, ThemeMode::Light);
    }
}
