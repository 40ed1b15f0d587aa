//! Typed errors for the configuration surface.
//!
//! The render path itself never fails: an absent channel is a silent
//! no-op and every tick is a fresh recomputation. The only fallible
//! surface is configuration ingestion, which rejects out-of-range values
//! instead of clamping them.

use core::fmt;

/// Errors from building or decoding a [`LedConfig`](crate::config::LedConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The payload failed to parse (JSON or binary).
    Malformed,
    /// A field failed range validation.
    /// The `&'static str` names the field and the accepted range.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "config payload malformed"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
