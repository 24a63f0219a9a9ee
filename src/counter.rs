//! Pure counter logic, zero I/O.
//!
//! The counter is a 4-bit value that lives in `1..=initial_value` and
//! wraps at both ends.  The polling period is restricted to eight fixed
//! half-second steps so it can be selected with a single hex digit.

use crate::error::{Error, Result};

/// Largest value a 4-bit display can show.
pub const MAX_VALUE: u8 = 0x0F;

/// Counter value after power-up and the wrap target when counting down.
pub const DEFAULT_INITIAL_VALUE: u8 = MAX_VALUE;

/// Direction of the most recent counter movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

/// Whether the engine advanced on the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

impl RunState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Running => "Running",
        }
    }
}

/// Tick period, one of eight half-second steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Period {
    Ms500 = 500,
    Ms1000 = 1000,
    Ms1500 = 1500,
    Ms2000 = 2000,
    Ms2500 = 2500,
    Ms3000 = 3000,
    Ms3500 = 3500,
    Ms4000 = 4000,
}

impl Period {
    /// Every selectable period, indexed by `selector - 1`.
    pub const ALL: [Period; 8] = [
        Self::Ms500,
        Self::Ms1000,
        Self::Ms1500,
        Self::Ms2000,
        Self::Ms2500,
        Self::Ms3000,
        Self::Ms3500,
        Self::Ms4000,
    ];

    pub const DEFAULT: Period = Self::Ms1000;

    /// Map a frequency selector `1..=8` onto `selector * 500` ms.
    pub fn from_selector(selector: u32) -> Option<Period> {
        let index = selector.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    /// Reverse of [`Period::millis`] for values read from config.
    pub fn from_millis(ms: u32) -> Result<Period> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.millis() == ms)
            .ok_or(Error::Unreachable("period outside the 500 ms step set"))
    }

    pub const fn millis(self) -> u32 {
        self as u32
    }

    pub const fn as_duration(self) -> core::time::Duration {
        core::time::Duration::from_millis(self.millis() as u64)
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Increment with wrap: `initial` rolls over to 1.
pub fn step_up(value: u8, initial: u8) -> u8 {
    if value >= initial { 1 } else { value + 1 }
}

/// Decrement with wrap: 1 rolls under to `initial`.
pub fn step_down(value: u8, initial: u8) -> u8 {
    if value <= 1 || value > initial {
        initial
    } else {
        value - 1
    }
}

/// Complete engine state.  `Copy` so readers always get a whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub value: u8,
    pub direction: Direction,
    pub run_state: RunState,
    pub period: Period,
}

impl CounterState {
    /// Power-up state: full value, counting down, stopped.
    pub fn initial(initial_value: u8, period: Period) -> Self {
        Self {
            value: initial_value,
            direction: Direction::Down,
            run_state: RunState::Stopped,
            period,
        }
    }

    /// Apply one tick's button sample.  Returns `true` if the value moved.
    pub fn advance(&mut self, run: bool, up: bool, initial_value: u8) -> bool {
        if !run {
            self.run_state = RunState::Stopped;
            return false;
        }
        self.run_state = RunState::Running;
        if up {
            self.direction = Direction::Up;
            self.value = step_up(self.value, initial_value);
        } else {
            self.direction = Direction::Down;
            self.value = step_down(self.value, initial_value);
        }
        true
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::initial(DEFAULT_INITIAL_VALUE, Period::DEFAULT)
    }
}
