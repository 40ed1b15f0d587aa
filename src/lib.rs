//! Priority-arbitrated RGB status LED core.
//!
//! One LED, many claimants: boot, connectivity, application health,
//! firmware updates, and manual control all compete for it. Each tick the
//! resolver picks exactly one [`state::StatusState`] under a fixed
//! priority order and the renderer turns it into channel writes through a
//! [`ports::LightSink`].
//!
//! The crate is host-agnostic: no timers, no interrupts, no globals. The
//! host owns the clock and drives [`controller::StatusLed::tick`] from
//! its own loop.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod pattern;
pub mod ports;
pub mod render;
pub mod resolver;
pub mod signals;
pub mod state;
