//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements      | Connects to              |
//! |------------|-----------------|--------------------------|
//! | `pwm`      | ChannelOutput   | any embedded-hal PWM pin |
//! | `log_sink` | LightSink       | serial log output        |

pub mod log_sink;
pub mod pwm;
