//! Logging light sink.

use log::debug;

use crate::ports::LightSink;

/// Prints every channel write. Stands in for real hardware during
/// bring-up and host simulation.
#[derive(Default)]
pub struct LogLightSink;

impl LogLightSink {
    pub fn new() -> Self {
        Self
    }
}

impl LightSink for LogLightSink {
    fn set_red(&mut self, level: f32) {
        debug!("led r = {:.3}", level);
    }

    fn set_green(&mut self, level: f32) {
        debug!("led g = {:.3}", level);
    }

    fn set_blue(&mut self, level: f32) {
        debug!("led b = {:.3}", level);
    }
}
