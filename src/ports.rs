//! Port traits — the boundary between the LED core and the outside world.
//!
//! ```text
//!   HealthSource ──▶ ┌──────────────────┐
//!                    │    StatusLed      │ ──▶ LightSink ──▶ ChannelOutput ×3
//!   notify_* calls ─▶│ resolve · render  │
//!                    └──────────────────┘
//! ```
//!
//! Driven adapters (PWM pins, log sinks, test recorders) implement these
//! traits; the core consumes them via generics and never touches hardware
//! directly.

// ───────────────────────────────────────────────────────────────
// Output side
// ───────────────────────────────────────────────────────────────

/// One physical output channel accepting a normalised intensity.
///
/// Writes are fire-and-forget: the render path has no error channel, so
/// implementations log failures rather than propagate them.
pub trait ChannelOutput {
    /// Set the channel intensity, 0.0–1.0.
    fn set_level(&mut self, level: f32);
}

/// The tri-channel light the renderer drives.
pub trait LightSink {
    fn set_red(&mut self, level: f32);
    fn set_green(&mut self, level: f32);
    fn set_blue(&mut self, level: f32);
}

/// Assembles up to three channels into a [`LightSink`].
///
/// A missing channel is skipped, never an error: single- and dual-colour
/// builds wire only the channels they have.
pub struct RgbChannels<R, G, B> {
    pub red: Option<R>,
    pub green: Option<G>,
    pub blue: Option<B>,
}

impl<R, G, B> RgbChannels<R, G, B>
where
    R: ChannelOutput,
    G: ChannelOutput,
    B: ChannelOutput,
{
    pub fn new(red: Option<R>, green: Option<G>, blue: Option<B>) -> Self {
        Self { red, green, blue }
    }
}

impl<R, G, B> LightSink for RgbChannels<R, G, B>
where
    R: ChannelOutput,
    G: ChannelOutput,
    B: ChannelOutput,
{
    fn set_red(&mut self, level: f32) {
        if let Some(ch) = self.red.as_mut() {
            ch.set_level(level);
        }
    }

    fn set_green(&mut self, level: f32) {
        if let Some(ch) = self.green.as_mut() {
            ch.set_level(level);
        }
    }

    fn set_blue(&mut self, level: f32) {
        if let Some(ch) = self.blue.as_mut() {
            ch.set_level(level);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Input side
// ───────────────────────────────────────────────────────────────

/// Read-only provider of the application health bitmask, sampled exactly
/// once per tick. Bit meanings are
/// [`HEALTH_WARNING_BIT`](crate::signals::HEALTH_WARNING_BIT) and
/// [`HEALTH_ERROR_BIT`](crate::signals::HEALTH_ERROR_BIT).
pub trait HealthSource {
    fn health_bits(&self) -> u32;
}

/// A fixed bitmask is a valid source; convenient for tests and for hosts
/// that latch health elsewhere.
impl HealthSource for u32 {
    fn health_bits(&self) -> u32 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Capture<'a> {
        out: &'a mut Vec<f32>,
    }

    impl ChannelOutput for Capture<'_> {
        fn set_level(&mut self, level: f32) {
            self.out.push(level);
        }
    }

    #[test]
    fn all_channels_forward() {
        let mut red = Vec::new();
        let mut green = Vec::new();
        let mut blue = Vec::new();
        {
            let mut sink = RgbChannels::new(
                Some(Capture { out: &mut red }),
                Some(Capture { out: &mut green }),
                Some(Capture { out: &mut blue }),
            );
            sink.set_red(0.1);
            sink.set_green(0.2);
            sink.set_blue(0.3);
        }
        assert_eq!(red, vec![0.1]);
        assert_eq!(green, vec![0.2]);
        assert_eq!(blue, vec![0.3]);
    }

    #[test]
    fn missing_channels_are_skipped() {
        let mut green = Vec::new();
        let mut sink: RgbChannels<Capture<'_>, Capture<'_>, Capture<'_>> =
            RgbChannels::new(None, Some(Capture { out: &mut green }), None);
        sink.set_red(1.0);
        sink.set_green(0.5);
        sink.set_blue(1.0);
        drop(sink);
        assert_eq!(green, vec![0.5]);
    }

    #[test]
    fn u32_is_a_health_source() {
        let bits: u32 = 0b11;
        assert_eq!(bits.health_bits(), 0b11);
    }
}
