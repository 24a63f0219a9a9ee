//! Inbound commands to the counter engine.
//!
//! Produced by the [command parser](crate::control::command) once the raw
//! bytes have been validated.  Only `SetValue` can still be refused, for
//! a value above the configured initial value.

use crate::counter::Period;

/// Configuration mutations a client can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCommand {
    /// Change the tick period.  Takes effect at the next rearm.
    SetPeriod(Period),

    /// Overwrite the counter value and redraw the LEDs immediately.
    SetValue(u8),
}
