//! Condition ingestion.
//!
//! [`SignalSet`] is the raw input side of arbitration: a handful of
//! booleans and timestamps that external collaborators flip through the
//! `notify_*` calls. It carries no policy; the resolver reads it fresh
//! every tick and decides what the LED shows.

use log::{debug, trace};

/// Application health bitmask flag: warning present.
pub const HEALTH_WARNING_BIT: u32 = 1 << 0;
/// Application health bitmask flag: error present.
pub const HEALTH_ERROR_BIT: u32 = 1 << 1;

/// Latched external conditions, default false/0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalSet {
    pub wifi_connected: bool,
    pub api_connected: bool,
    /// A firmware update transfer is running.
    pub ota_active: bool,
    /// Timestamp of the most recent update progress heartbeat.
    pub ota_progress_at: u32,
    /// Timestamp of the most recent update failure, while the failure
    /// indication is held.
    pub ota_error_at: Option<u32>,
    pub app_error: bool,
    pub app_warning: bool,
    /// Manual control has been requested. In status-priority mode this is
    /// a one-shot gesture, consumed when status reasserts.
    pub user_control_active: bool,
    /// Startup timestamp, stamped once in setup.
    pub boot_at: u32,
}

impl SignalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the startup clock. The boot window counts from here.
    pub fn mark_boot(&mut self, now_ms: u32) {
        self.boot_at = now_ms;
    }

    pub fn notify_wifi(&mut self, connected: bool) {
        if self.wifi_connected != connected {
            debug!("wifi {}", if connected { "connected" } else { "disconnected" });
        }
        self.wifi_connected = connected;
    }

    pub fn notify_api(&mut self, connected: bool) {
        if self.api_connected != connected {
            debug!("api {}", if connected { "connected" } else { "disconnected" });
        }
        self.api_connected = connected;
    }

    /// An update transfer started (or restarted after a failure).
    pub fn notify_ota_begin(&mut self, now_ms: u32) {
        debug!("ota update started");
        self.ota_active = true;
        self.ota_progress_at = now_ms;
        self.ota_error_at = None;
    }

    /// Progress heartbeat. A beat younger than the begin window keeps the
    /// LED solid instead of blinking.
    pub fn notify_ota_progress(&mut self, now_ms: u32) {
        trace!("ota progress");
        self.ota_progress_at = now_ms;
    }

    /// The transfer finished cleanly.
    pub fn notify_ota_end(&mut self) {
        debug!("ota update completed");
        self.ota_active = false;
        self.ota_error_at = None;
    }

    /// The transfer failed. The failure indication is held for a fixed
    /// window and cleared early by a retry or a clean end.
    pub fn notify_ota_error(&mut self, now_ms: u32) {
        debug!("ota update failed");
        self.ota_active = false;
        self.ota_error_at = Some(now_ms);
    }

    /// Fold an application health bitmask into the error/warning flags.
    pub fn notify_health_bits(&mut self, bits: u32) {
        self.app_warning = bits & HEALTH_WARNING_BIT != 0;
        self.app_error = bits & HEALTH_ERROR_BIT != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_bits_map_to_flags() {
        let mut s = SignalSet::new();
        s.notify_health_bits(HEALTH_WARNING_BIT);
        assert!(s.app_warning);
        assert!(!s.app_error);

        s.notify_health_bits(HEALTH_ERROR_BIT | HEALTH_WARNING_BIT);
        assert!(s.app_warning);
        assert!(s.app_error);

        s.notify_health_bits(0);
        assert!(!s.app_warning);
        assert!(!s.app_error);
    }

    #[test]
    fn unrelated_health_bits_are_ignored() {
        let mut s = SignalSet::new();
        s.notify_health_bits(0xFFFF_FFFC);
        assert!(!s.app_warning);
        assert!(!s.app_error);
    }

    #[test]
    fn ota_begin_resets_heartbeat_and_clears_failure() {
        let mut s = SignalSet::new();
        s.notify_ota_error(100);
        assert_eq!(s.ota_error_at, Some(100));
        assert!(!s.ota_active);

        s.notify_ota_begin(500);
        assert!(s.ota_active);
        assert_eq!(s.ota_progress_at, 500);
        assert_eq!(s.ota_error_at, None);
    }

    #[test]
    fn ota_end_clears_transfer_and_failure() {
        let mut s = SignalSet::new();
        s.notify_ota_begin(0);
        s.notify_ota_error(10);
        s.notify_ota_begin(20);
        s.notify_ota_end();
        assert!(!s.ota_active);
        assert_eq!(s.ota_error_at, None);
    }
}
