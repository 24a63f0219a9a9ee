//! Two-button input pair.
//!
//! ## Hardware
//!
//! Momentary switches on two GPIO inputs, sampled once per tick.  No
//! debouncing.
//!
//! | Button | Held                | Released          |
//! |--------|---------------------|-------------------|
//! | 0      | counter runs        | counter stopped   |
//! | 1      | counts up           | counts down       |
//!
//! A failed read counts as "not pressed" and is recorded in a fault mask
//! that the engine drains after each sample.

use embedded_hal::digital::InputPin;

use crate::app::ports::{ButtonLevels, ButtonPort, FaultMask};

/// Electrical level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct ButtonPair<P> {
    pins: [P; 2],
    active: ActiveLevel,
    faults: FaultMask,
}

impl<P: InputPin> ButtonPair<P> {
    pub fn new(run: P, direction: P, active: ActiveLevel) -> Self {
        Self {
            pins: [run, direction],
            active,
            faults: 0,
        }
    }

    fn pressed(&mut self, index: usize) -> bool {
        let Ok(high) = self.pins[index].is_high() else {
            self.faults |= 1 << index;
            return false;
        };
        match self.active {
            ActiveLevel::High => high,
            ActiveLevel::Low => !high,
        }
    }
}

impl<P: InputPin> ButtonPort for ButtonPair<P> {
    fn sample(&mut self) -> ButtonLevels {
        ButtonLevels {
            run: self.pressed(0),
            up: self.pressed(1),
        }
    }

    fn take_faults(&mut self) -> FaultMask {
        core::mem::take(&mut self.faults)
    }
}
