use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// Holds the single notice shown in the status line.
///
/// A new notice replaces the current one; the form rejects input faster than
/// anyone could read a queue of identical warnings.
#[derive(Debug)]
pub struct NotificationManager {
    current: Option<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Notification::DEFAULT_DURATION)
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            current: None,
            default_duration,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.current =
            Some(Notification::new(level, message).with_duration(self.default_duration));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message);
    }

    /// Starts the display clock of a fresh notice and drops an expired one.
    pub fn tick(&mut self) {
        if let Some(current) = self.current.as_mut() {
            current.mark_displayed();
            if current.is_expired() {
                self.current = None;
            }
        }
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
