//! Fuzz target: `resolve`
//!
//! Builds a signal set, clock, and settled-state pair from arbitrary bytes
//! and checks the arbitration invariants on every input:
//!
//! - No panics for any combination of flags and timestamps
//! - The resolver is pure
//! - Manual control is never granted without a gesture
//! - Every verdict is backed by the signal that selects it
//!
//! cargo fuzz run fuzz_resolver

#![no_main]

use libfuzzer_sys::fuzz_target;
use statusled::config::LedConfig;
use statusled::resolver::resolve;
use statusled::signals::SignalSet;
use statusled::state::StatusState;

fuzz_target!(|data: &[u8]| {
    if data.len() < 22 {
        return;
    }

    let flags = data[0];
    let last_state = StatusState::ALL[(data[1] as usize) % StatusState::ALL.len()];
    let word = |i: usize| u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);

    let signals = SignalSet {
        wifi_connected: flags & 0x01 != 0,
        api_connected: flags & 0x02 != 0,
        ota_active: flags & 0x04 != 0,
        ota_progress_at: word(2),
        ota_error_at: (flags & 0x08 != 0).then(|| word(6)),
        app_error: flags & 0x10 != 0,
        app_warning: flags & 0x20 != 0,
        user_control_active: flags & 0x40 != 0,
        boot_at: word(10),
    };
    let now_ms = word(14);
    let last_change_at = word(18);
    let config = LedConfig {
        ok_state_enabled: flags & 0x80 == 0,
        ..LedConfig::default()
    };

    let first = resolve(&signals, &config, now_ms, last_state, last_change_at);
    let second = resolve(&signals, &config, now_ms, last_state, last_change_at);
    assert_eq!(first, second, "resolve must be pure");

    if !signals.user_control_active {
        assert_ne!(
            first,
            StatusState::User,
            "manual control requires a gesture"
        );
    }

    match first {
        StatusState::User => {
            assert_eq!(
                last_state,
                StatusState::Ok,
                "the hold only opens from a settled Ok"
            );
        }
        StatusState::OtaBegin | StatusState::OtaProgress => assert!(signals.ota_active),
        StatusState::OtaError => assert!(signals.ota_error_at.is_some()),
        StatusState::Error => assert!(signals.app_error),
        StatusState::Warning => assert!(signals.app_warning),
        StatusState::Ok => assert!(config.ok_state_enabled),
        StatusState::None => assert!(!config.ok_state_enabled),
        _ => {}
    }
});
