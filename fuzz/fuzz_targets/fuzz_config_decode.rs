//! Fuzz target: `LedConfig` decoding
//!
//! Drives arbitrary bytes through both configuration decode paths (the
//! postcard storage blob and the JSON document) and asserts that hostile
//! input never panics and that anything accepted passes validation.
//!
//! cargo fuzz run fuzz_config_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use statusled::config::LedConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = LedConfig::from_bytes(data) {
        assert!(
            config.validate().is_ok(),
            "decode must never hand out an out-of-range config"
        );
        // Accepted configs survive a storage round trip.
        let bytes = config.to_bytes().expect("re-encode of a valid config");
        let again = LedConfig::from_bytes(&bytes).expect("decode of a fresh blob");
        assert_eq!(config.error_blink_ms, again.error_blink_ms);
        assert_eq!(config.ok_state_enabled, again.ok_state_enabled);
    }

    if let Ok(text) = core::str::from_utf8(data) {
        if let Ok(config) = LedConfig::from_json(text) {
            assert!(config.validate().is_ok());
        }
    }
});
