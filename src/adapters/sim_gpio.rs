//! Simulated digital pins for host runs and tests.
//!
//! Each pin is a shared atomic level.  Clones observe and drive the same
//! line, so a test (or the CLI) keeps one handle as a probe while the
//! driver owns the other.

use core::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// A button line whose level is set from outside.
#[derive(Debug, Clone, Default)]
pub struct SimInput {
    level: Arc<AtomicBool>,
}

impl SimInput {
    pub fn new(high: bool) -> Self {
        Self {
            level: Arc::new(AtomicBool::new(high)),
        }
    }

    /// Drive the simulated line.
    pub fn set(&self, high: bool) {
        self.level.store(high, Ordering::Release);
    }
}

impl ErrorType for SimInput {
    type Error = Infallible;
}

impl InputPin for SimInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.load(Ordering::Acquire))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.load(Ordering::Acquire))
    }
}

/// An LED line whose level can be probed from outside.
#[derive(Debug, Clone, Default)]
pub struct SimOutput {
    level: Arc<AtomicBool>,
}

impl SimOutput {
    /// New line, initially low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level as last written by the driver.
    pub fn is_set_high(&self) -> bool {
        self.level.load(Ordering::Acquire)
    }
}

impl ErrorType for SimOutput {
    type Error = Infallible;
}

impl OutputPin for SimOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.store(false, Ordering::Release);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.store(true, Ordering::Release);
        Ok(())
    }
}
