//! Status state identity and priority ordering.
//!
//! Exactly one [`StatusState`] is shown at any tick. The discriminant is
//! the display priority: when several conditions are true at once, the
//! numerically highest eligible state wins. The derived `Ord` therefore
//! agrees with the resolver's tier cascade for every status-derived state
//! (`User` is special: it enters through the priority mode or the manual
//! hold window, not through ranking).

use serde::{Deserialize, Serialize};

/// Every condition the LED can report, ordered by display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StatusState {
    /// Nothing to report and the OK colour is disabled. LED dark.
    None = 0,
    /// Healthy and idle.
    Ok = 1,
    /// Manual control owns the output.
    User = 2,
    /// Network association established, no backend session yet.
    WifiConnected = 3,
    /// Control backend session established.
    ApiConnected = 4,
    /// Startup grace window.
    Boot = 5,
    /// Application warning flag set.
    Warning = 6,
    /// Application error flag set.
    Error = 7,
    /// Firmware update running, progress heartbeat stale.
    OtaProgress = 8,
    /// Firmware update running with a fresh progress heartbeat.
    OtaBegin = 9,
    /// Firmware update failed, failure hold still open.
    OtaError = 10,
}

impl StatusState {
    /// All states in ascending priority order.
    pub const ALL: [Self; 11] = [
        Self::None,
        Self::Ok,
        Self::User,
        Self::WifiConnected,
        Self::ApiConnected,
        Self::Boot,
        Self::Warning,
        Self::Error,
        Self::OtaProgress,
        Self::OtaBegin,
        Self::OtaError,
    ];

    /// Short display name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ok => "ok",
            Self::User => "user",
            Self::WifiConnected => "wifi",
            Self::ApiConnected => "api",
            Self::Boot => "boot",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::OtaProgress => "ota-progress",
            Self::OtaBegin => "ota-begin",
            Self::OtaError => "ota-error",
        }
    }
}

/// Who wins when manual control and status reporting both want the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityMode {
    /// Status reporting wins; a manual gesture holds only while the LED
    /// was calm (see the resolver's hold window).
    Status,
    /// Manual control wins unconditionally.
    User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_is_total_and_fixed() {
        assert!(StatusState::OtaError > StatusState::OtaBegin);
        assert!(StatusState::OtaBegin > StatusState::OtaProgress);
        assert!(StatusState::OtaProgress > StatusState::Error);
        assert!(StatusState::Error > StatusState::Warning);
        assert!(StatusState::Warning > StatusState::Boot);
        assert!(StatusState::Boot > StatusState::ApiConnected);
        assert!(StatusState::ApiConnected > StatusState::WifiConnected);
        assert!(StatusState::WifiConnected > StatusState::User);
        assert!(StatusState::User > StatusState::Ok);
        assert!(StatusState::Ok > StatusState::None);
    }

    #[test]
    fn all_lists_every_state_ascending() {
        for pair in StatusState::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(StatusState::ALL.len(), 11);
    }

    #[test]
    fn names_are_unique() {
        for a in StatusState::ALL {
            for b in StatusState::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn priority_mode_serde_uses_lowercase() {
        let json = serde_json::to_string(&PriorityMode::Status).unwrap();
        assert_eq!(json, "\"status\"");
        let mode: PriorityMode = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(mode, PriorityMode::User);
    }
}
