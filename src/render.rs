//! Tick-driven temporal rendering.
//!
//! One routine serves every pattern shape. The only persistent render
//! state is `blink_on`, the last *applied* blink phase: blink writes
//! happen only when the desired phase differs from it, so the sink sees
//! at most two writes per period no matter how fast the host ticks.
//!
//! Phase is `now mod period` against the wall clock, never a stored
//! timer, so a missed tick self-heals on the next one.

use crate::config::Color;
use crate::pattern::{Effect, Pattern};
use crate::ports::LightSink;

/// Reserved dimming hook; full scale today.
const OUTPUT_SCALE: f32 = 1.0;

/// Drive one tick of `effect` onto `sink`.
///
/// After a state transition resets `blink_on`, a blink pattern landing in
/// its off phase issues no write until the first on-edge; the previous
/// output holds until then.
pub fn render(
    effect: Effect,
    brightness: f32,
    now_ms: u32,
    blink_on: &mut bool,
    sink: &mut impl LightSink,
) {
    match effect.pattern {
        Pattern::Solid => {
            *blink_on = false;
            write_rgb(sink, effect.color, brightness);
        }
        Pattern::Blink { period_ms, on_ms } => {
            let on = now_ms % period_ms < on_ms;
            if on != *blink_on {
                *blink_on = on;
                let color = if on { effect.color } else { Color::BLACK };
                write_rgb(sink, color, brightness);
            }
        }
        Pattern::Off => {
            *blink_on = false;
            write_rgb(sink, Color::BLACK, brightness);
        }
        Pattern::Hold => {
            *blink_on = false;
        }
    }
}

fn write_rgb(sink: &mut impl LightSink, color: Color, brightness: f32) {
    let gain = brightness * OUTPUT_SCALE;
    sink.set_red(color.r * gain);
    sink.set_green(color.g * gain);
    sink.set_blue(color.b * gain);
}
