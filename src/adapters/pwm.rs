//! PWM-backed channel output.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::ports::ChannelOutput;

/// Drives one LED channel through any HAL PWM pin, mapping the normalised
/// intensity onto the pin's duty range.
///
/// The port contract is infallible, so a failed duty write is logged and
/// dropped; the next phase edge retries naturally.
pub struct PwmChannel<P: SetDutyCycle> {
    pin: P,
    label: &'static str,
}

impl<P: SetDutyCycle> PwmChannel<P> {
    pub fn new(pin: P, label: &'static str) -> Self {
        Self { pin, label }
    }

    /// Hand the pin back, e.g. for shutdown re-configuration.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: SetDutyCycle> ChannelOutput for PwmChannel<P> {
    fn set_level(&mut self, level: f32) {
        let max = self.pin.max_duty_cycle();
        let duty = (level * f32::from(max)) as u16;
        if self.pin.set_duty_cycle(duty.min(max)).is_err() {
            warn!("{} channel: pwm duty write failed", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct FakePin {
        max: u16,
        duties: Vec<u16>,
    }

    impl embedded_hal::pwm::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePin {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duties.push(duty);
            Ok(())
        }
    }

    #[test]
    fn maps_unit_range_onto_duty_range() {
        let pin = FakePin {
            max: 1000,
            duties: Vec::new(),
        };
        let mut ch = PwmChannel::new(pin, "red");
        ch.set_level(0.0);
        ch.set_level(0.5);
        ch.set_level(1.0);
        let pin = ch.release();
        assert_eq!(pin.duties, vec![0, 500, 1000]);
    }

    #[test]
    fn clamps_to_max_duty() {
        let pin = FakePin {
            max: 255,
            duties: Vec::new(),
        };
        let mut ch = PwmChannel::new(pin, "green");
        // Rounding at the top of the range must not exceed max.
        ch.set_level(0.9999);
        let pin = ch.release();
        assert_eq!(pin.duties, vec![254]);
    }
}
