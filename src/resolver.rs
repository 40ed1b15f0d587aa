//! Status arbitration.
//!
//! [`resolve`] is a pure function: given the signal set, the config, the
//! clock, and the previously settled state, it picks exactly one
//! [`StatusState`]. Tiers are evaluated top to bottom and the first match
//! wins:
//!
//! 1. user-priority mode            → `User`
//! 2. manual hold window open       → `User`
//! 3. update failure hold open      → `OtaError`
//! 4. update transfer running       → `OtaBegin` / `OtaProgress`
//! 5. application error             → `Error`
//! 6. application warning           → `Warning`
//! 7. boot window open              → `Boot`
//! 8. backend session up            → `ApiConnected`
//! 9. network associated            → `WifiConnected`
//! 10. idle                         → `Ok` or `None`
//!
//! All elapsed-time checks use wrapping subtraction so the millisecond
//! clock may roll over.

use crate::config::LedConfig;
use crate::signals::SignalSet;
use crate::state::{PriorityMode, StatusState};

/// Startup grace window during which `Boot` outranks connectivity.
pub const BOOT_WINDOW_MS: u32 = 10_000;
/// A progress heartbeat younger than this keeps the update display solid.
pub const OTA_BEGIN_WINDOW_MS: u32 = 500;
/// How long a manual gesture holds a calm LED before status reasserts.
pub const USER_HOLD_MS: u32 = 30_000;
/// How long a failed update stays visible before falling through.
pub const OTA_ERROR_HOLD_MS: u32 = 10_000;

/// Pick the single active state for this tick.
///
/// `last_state`/`last_change_at` are the previously settled status state
/// and the time it was entered; they only feed the manual hold window and
/// are never mutated here. The caller owns all bookkeeping.
pub fn resolve(
    signals: &SignalSet,
    config: &LedConfig,
    now_ms: u32,
    last_state: StatusState,
    last_change_at: u32,
) -> StatusState {
    if config.priority_mode == PriorityMode::User {
        return StatusState::User;
    }
    if user_hold_active(signals, now_ms, last_state, last_change_at) {
        return StatusState::User;
    }

    if let Some(failed_at) = signals.ota_error_at {
        if now_ms.wrapping_sub(failed_at) < OTA_ERROR_HOLD_MS {
            return StatusState::OtaError;
        }
    }
    if signals.ota_active {
        // Fresh heartbeats read as "transfer alive", stale ones blink.
        return if now_ms.wrapping_sub(signals.ota_progress_at) < OTA_BEGIN_WINDOW_MS {
            StatusState::OtaBegin
        } else {
            StatusState::OtaProgress
        };
    }

    if signals.app_error {
        return StatusState::Error;
    }
    if signals.app_warning {
        return StatusState::Warning;
    }

    if now_ms.wrapping_sub(signals.boot_at) < BOOT_WINDOW_MS {
        return StatusState::Boot;
    }

    if signals.api_connected {
        return StatusState::ApiConnected;
    }
    if signals.wifi_connected {
        return StatusState::WifiConnected;
    }

    if config.ok_state_enabled {
        StatusState::Ok
    } else {
        StatusState::None
    }
}

/// Manual hold: once the LED has settled on `Ok`, a user gesture owns the
/// output until [`USER_HOLD_MS`] has elapsed since `Ok` was entered.
///
/// The check runs against the previously settled state, not the state
/// being computed, so "was OK and the user intervened" is distinct from
/// "currently computing OK".
fn user_hold_active(
    signals: &SignalSet,
    now_ms: u32,
    last_state: StatusState,
    last_change_at: u32,
) -> bool {
    signals.user_control_active
        && last_state == StatusState::Ok
        && now_ms.wrapping_sub(last_change_at) < USER_HOLD_MS
}
