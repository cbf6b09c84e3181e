//! Transient, auto-expiring user notifications.

use std::time::Duration;

/// How long a quick confirmation stays visible.
pub const QUICK: Duration = Duration::from_millis(1500);
/// Default visibility for informational messages.
pub const NORMAL: Duration = Duration::from_millis(3000);
/// Visibility for failure messages that deserve a longer look.
pub const LONG: Duration = Duration::from_millis(5000);

/// A message shown to the user and hidden again after its duration elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub duration: Duration,
}

impl Notice {
    /// A quick confirmation ("Bold applied!").
    pub fn quick(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: QUICK,
        }
    }

    /// An informational message with the default duration.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: NORMAL,
        }
    }

    /// A longer-lived message, used for failures.
    pub fn long(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: LONG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_tiered() {
        assert!(Notice::quick("a").duration < Notice::info("b").duration);
        assert!(Notice::info("b").duration < Notice::long("c").duration);
    }
}
