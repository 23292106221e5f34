//! Freshness classification of inventory records.
//!
//! Everything here is pure and recomputed on every render; nothing is cached
//! on the records themselves.

use chrono::NaiveDate;

/// Items expiring within this many days (inclusive) are flagged as a warning.
pub const WARNING_WINDOW_DAYS: i64 = 5;

/// Tri-state freshness of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreshnessStatus {
    /// More than the warning window left.
    Safe,
    /// Expires today or within the warning window.
    Warning,
    /// Expiry date has passed.
    Expired,
}

impl FreshnessStatus {
    /// Classifies a day offset returned by [`days_left`].
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days <= WARNING_WINDOW_DAYS {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// Classifies an expiry date relative to `today`.
    #[must_use]
    pub fn of(expiry: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days(days_left(expiry, today))
    }

    /// Returns the uppercase label shown in the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Warning => "WARNING",
            Self::Expired => "EXPIRED",
        }
    }
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole calendar days from `today` until `expiry`; negative once expired.
#[must_use]
pub fn days_left(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// Human label for a day offset: `Expired`, `Today`, or `N days`.
#[must_use]
pub fn days_label(days: i64) -> String {
    match days {
        d if d < 0 => "Expired".to_string(),
        0 => "Today".to_string(),
        d => format!("{d} days"),
    }
}
