//! 4-bit LED bus driver.
//!
//! Four independent digital outputs show the low nibble of the counter,
//! bit 0 on LED 0.  A failed write is recorded in a fault mask for the
//! engine to report; the next drive rewrites every line.

use embedded_hal::digital::{OutputPin, PinState};

use crate::app::ports::{DisplayPort, FaultMask};

/// Number of LEDs on the bus.
pub const LED_COUNT: usize = 4;

pub struct LedBus<P> {
    pins: [P; LED_COUNT],
    levels: [bool; LED_COUNT],
    faults: FaultMask,
}

impl<P: OutputPin> LedBus<P> {
    /// Take ownership of the four output pins, bit 0 first.
    pub fn new(pins: [P; LED_COUNT]) -> Self {
        Self {
            pins,
            levels: [false; LED_COUNT],
            faults: 0,
        }
    }

    /// Levels written by the last `drive` or `clear`.
    pub fn levels(&self) -> [bool; LED_COUNT] {
        self.levels
    }

    fn write_all(&mut self, levels: [bool; LED_COUNT]) {
        for (bit, (pin, high)) in self.pins.iter_mut().zip(levels).enumerate() {
            if pin.set_state(PinState::from(high)).is_err() {
                self.faults |= 1 << bit;
            }
        }
        self.levels = levels;
    }
}

/// Split the low four bits of `value` into per-LED levels.
pub fn nibble_levels(value: u8) -> [bool; LED_COUNT] {
    core::array::from_fn(|bit| (value >> bit) & 1 == 1)
}

impl<P: OutputPin> DisplayPort for LedBus<P> {
    fn drive(&mut self, value: u8) {
        self.write_all(nibble_levels(value));
    }

    fn clear(&mut self) {
        self.write_all([false; LED_COUNT]);
    }

    fn take_faults(&mut self) -> FaultMask {
        core::mem::take(&mut self.faults)
    }
}
