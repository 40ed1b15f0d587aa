//! State → visual effect mapping.
//!
//! Each [`StatusState`] renders as one of four time shapes:
//!
//! | Shape  | Used by                                  |
//! |--------|------------------------------------------|
//! | Solid  | boot, wifi, api, ota-begin, ok           |
//! | Blink  | error (3/4 on), warning (1/4 on), ota    |
//! | Off    | none                                     |
//! | Hold   | user (manual control owns the output)    |
//!
//! The mapping is pure data; the renderer consumes the descriptor without
//! knowing which state produced it.

use crate::config::{Color, LedConfig};
use crate::state::StatusState;

/// Blink period while an update transfer has gone quiet.
pub const OTA_PROGRESS_BLINK_MS: u32 = 1_000;

/// How a state occupies time on the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Constant colour, written every tick.
    Solid,
    /// Square wave: on for `on_ms` out of every `period_ms`.
    Blink { period_ms: u32, on_ms: u32 },
    /// All channels dark.
    Off,
    /// No writes at all; the sink already shows what the user asked for.
    Hold,
}

/// A resolved render instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub pattern: Pattern,
    pub color: Color,
}

/// Map an arbitration result onto its effect.
pub fn effect_for(state: StatusState, config: &LedConfig) -> Effect {
    match state {
        StatusState::Boot => solid(config.boot_color),
        StatusState::WifiConnected => solid(config.wifi_color),
        StatusState::ApiConnected => solid(config.api_color),
        StatusState::OtaBegin => solid(config.ota_color),
        StatusState::Ok => solid(config.ok_color),

        StatusState::Error => blink(
            config.error_color,
            config.error_blink_ms,
            config.error_blink_ms * 3 / 4,
        ),
        StatusState::Warning => blink(
            config.warning_color,
            config.warning_blink_ms,
            config.warning_blink_ms / 4,
        ),
        StatusState::OtaProgress => blink(
            config.ota_color,
            OTA_PROGRESS_BLINK_MS,
            OTA_PROGRESS_BLINK_MS / 2,
        ),
        // A failed update blinks at the error rate but keeps the update
        // colour, so it cannot be mistaken for an application error.
        StatusState::OtaError => blink(
            config.ota_color,
            config.error_blink_ms,
            config.error_blink_ms * 3 / 4,
        ),

        StatusState::None => Effect {
            pattern: Pattern::Off,
            color: Color::BLACK,
        },
        StatusState::User => Effect {
            pattern: Pattern::Hold,
            color: Color::BLACK,
        },
    }
}

fn solid(color: Color) -> Effect {
    Effect {
        pattern: Pattern::Solid,
        color,
    }
}

fn blink(color: Color, period_ms: u32, on_ms: u32) -> Effect {
    Effect {
        pattern: Pattern::Blink { period_ms, on_ms },
        color,
    }
}
