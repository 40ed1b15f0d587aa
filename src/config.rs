//! Render configuration: colours, blink periods, brightness, arbitration mode.
//!
//! Immutable after construction. Values can arrive as Rust defaults, as a
//! JSON document from host tooling, or as a compact postcard blob from
//! persistent storage; every path validates before the value reaches the
//! core, so the renderer never has to clamp.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::PriorityMode;

/// Linear RGB colour, each channel 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn in_range(self) -> bool {
        let ok = |c: f32| (0.0..=1.0).contains(&c);
        ok(self.r) && ok(self.g) && ok(self.b)
    }
}

/// Full LED configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedConfig {
    // --- Per-state colours ---
    pub error_color: Color,
    pub warning_color: Color,
    pub ok_color: Color,
    pub boot_color: Color,
    pub wifi_color: Color,
    pub api_color: Color,
    pub ota_color: Color,

    // --- Blink timing ---
    /// Error blink period in milliseconds.
    pub error_blink_ms: u32,
    /// Warning blink period in milliseconds.
    pub warning_blink_ms: u32,

    // --- Output scaling ---
    /// Global brightness multiplier (0.0–1.0).
    pub brightness: f32,

    // --- Arbitration ---
    pub priority_mode: PriorityMode,
    /// Show the OK colour when idle; when false the LED goes dark instead.
    pub ok_state_enabled: bool,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            error_color: Color::new(1.0, 0.0, 0.0),
            warning_color: Color::new(1.0, 0.5, 0.0),
            ok_color: Color::new(0.0, 1.0, 0.1),
            boot_color: Color::new(1.0, 0.0, 0.0),
            wifi_color: Color::new(0.7, 0.7, 0.7),
            api_color: Color::new(0.0, 1.0, 0.1),
            ota_color: Color::new(0.0, 0.0, 1.0),

            error_blink_ms: 250,
            warning_blink_ms: 1500,
            brightness: 0.5,

            priority_mode: PriorityMode::Status,
            ok_state_enabled: true,
        }
    }
}

impl LedConfig {
    /// Range-check every field.
    ///
    /// A zero blink period would break the phase arithmetic, so periods
    /// have a hard lower bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let colours = [
            (self.error_color, "error_color channels must be 0.0–1.0"),
            (self.warning_color, "warning_color channels must be 0.0–1.0"),
            (self.ok_color, "ok_color channels must be 0.0–1.0"),
            (self.boot_color, "boot_color channels must be 0.0–1.0"),
            (self.wifi_color, "wifi_color channels must be 0.0–1.0"),
            (self.api_color, "api_color channels must be 0.0–1.0"),
            (self.ota_color, "ota_color channels must be 0.0–1.0"),
        ];
        for (colour, msg) in colours {
            if !colour.in_range() {
                return Err(ConfigError::ValidationFailed(msg));
            }
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(ConfigError::ValidationFailed("brightness must be 0.0–1.0"));
        }
        if !(50..=600_000).contains(&self.error_blink_ms) {
            return Err(ConfigError::ValidationFailed(
                "error_blink_ms must be 50–600000",
            ));
        }
        if !(50..=600_000).contains(&self.warning_blink_ms) {
            return Err(ConfigError::ValidationFailed(
                "warning_blink_ms must be 50–600000",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Decode and validate a postcard blob (the persistent-storage format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode as a postcard blob for persistent storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::Malformed)
    }

    /// Dump the active configuration at startup.
    pub fn log_summary(&self) {
        info!("RGB status LED:");
        info!(
            "  priority mode: {}",
            match self.priority_mode {
                PriorityMode::Status => "status",
                PriorityMode::User => "user",
            }
        );
        info!("  brightness: {:.0}%", self.brightness * 100.0);
        info!(
            "  ok state: {}",
            if self.ok_state_enabled { "shown" } else { "off" }
        );
        info!("  error blink: {} ms", self.error_blink_ms);
        info!("  warning blink: {} ms", self.warning_blink_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let c = LedConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.error_blink_ms, 250);
        assert_eq!(c.warning_blink_ms, 1500);
        assert!((c.brightness - 0.5).abs() < f32::EPSILON);
        assert_eq!(c.priority_mode, PriorityMode::Status);
        assert!(c.ok_state_enabled);
    }

    #[test]
    fn serde_roundtrip() {
        let c = LedConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2 = LedConfig::from_json(&json).unwrap();
        assert_eq!(c.warning_color, c2.warning_color);
        assert_eq!(c.error_blink_ms, c2.error_blink_ms);
        assert_eq!(c.priority_mode, c2.priority_mode);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = LedConfig::default();
        let bytes = c.to_bytes().unwrap();
        let c2 = LedConfig::from_bytes(&bytes).unwrap();
        assert_eq!(c.ota_color, c2.ota_color);
        assert!((c.brightness - c2.brightness).abs() < f32::EPSILON);
        assert_eq!(c.ok_state_enabled, c2.ok_state_enabled);
    }

    #[test]
    fn rejects_out_of_range_brightness() {
        let c = LedConfig {
            brightness: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_colour() {
        let c = LedConfig {
            warning_color: Color::new(0.0, -0.1, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn rejects_zero_blink_period() {
        let c = LedConfig {
            error_blink_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            LedConfig::from_json("not json"),
            Err(ConfigError::Malformed)
        ));
    }

    #[test]
    fn from_json_rejects_invalid_values() {
        let mut c = LedConfig::default();
        c.brightness = 7.0;
        let json = serde_json::to_string(&c).unwrap();
        assert!(matches!(
            LedConfig::from_json(&json),
            Err(ConfigError::ValidationFailed(_))
        ));
    }
}
