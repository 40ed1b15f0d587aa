//! Host simulator — replays a typical device session against the core.
//!
//! Runs the controller through boot, connectivity, health trouble, a
//! firmware update with a mid-transfer failure, and a manual gesture,
//! logging every channel write through the logging sink. Useful for
//! eyeballing arbitration behaviour without hardware.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use statusled::adapters::log_sink::LogLightSink;
use statusled::config::{Color, LedConfig};
use statusled::controller::{StatusLed, UserCommand};
use statusled::signals::{HEALTH_ERROR_BIT, HEALTH_WARNING_BIT};

const TICK_MS: u32 = 50;

/// Tick the controller forward and return the new clock.
fn run_until(
    led: &mut StatusLed,
    sink: &mut LogLightSink,
    health: u32,
    mut now: u32,
    until: u32,
) -> u32 {
    while now < until {
        led.tick(now, &health, sink);
        now += TICK_MS;
    }
    now
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    info!("statusled simulator v{}", env!("CARGO_PKG_VERSION"));

    let config = LedConfig::default();
    let mut led = StatusLed::new(config);
    let mut sink = LogLightSink::new();
    let mut health: u32 = 0;
    let mut now: u32 = 0;

    led.setup(now, &mut sink);

    // Boot, then the network comes up.
    now = run_until(&mut led, &mut sink, health, now, 4_000);
    led.notify_wifi(true);
    now = run_until(&mut led, &mut sink, health, now, 6_000);
    led.notify_api(true);
    now = run_until(&mut led, &mut sink, health, now, 12_000);

    // Application health wobbles.
    health = HEALTH_WARNING_BIT;
    now = run_until(&mut led, &mut sink, health, now, 15_000);
    health = HEALTH_WARNING_BIT | HEALTH_ERROR_BIT;
    now = run_until(&mut led, &mut sink, health, now, 18_000);
    health = 0;
    now = run_until(&mut led, &mut sink, health, now, 20_000);

    // Firmware update: begin, heartbeats, failure, retry.
    led.notify_ota_begin(now);
    now = run_until(&mut led, &mut sink, health, now, 21_000);
    for _ in 0..4 {
        led.notify_ota_progress(now);
        now = run_until(&mut led, &mut sink, health, now, now + 800);
    }
    led.notify_ota_error(now);
    now = run_until(&mut led, &mut sink, health, now, now + 3_000);
    led.notify_ota_begin(now);
    now = run_until(&mut led, &mut sink, health, now, now + 2_000);
    led.notify_ota_end();

    // Connectivity drops after the update; the LED settles on Ok and a
    // manual gesture holds it.
    led.notify_wifi(false);
    led.notify_api(false);
    now = run_until(&mut led, &mut sink, health, now, now + 2_000);
    let cmd = UserCommand {
        on: true,
        color: Color::new(0.2, 0.0, 0.8),
        brightness: 0.8,
    };
    led.handle_user_command(&cmd, now, &mut sink);
    now = run_until(&mut led, &mut sink, health, now, now + 5_000);

    info!("final state: {}", led.state().name());
    let snapshot = led.diagnostics(now);
    info!("diagnostics: {}", serde_json::to_string(&snapshot)?);

    Ok(())
}
