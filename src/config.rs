//! Driver configuration parameters.
//!
//! Defaults reproduce the stock board: device `mygpio` on major 61, a
//! counter that starts at 15, and a one-second tick.  A JSON file can
//! override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::counter::{DEFAULT_INITIAL_VALUE, MAX_VALUE, Period};
use crate::error::{Error, Result};
use crate::pins;

/// Core driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    // --- Device registration ---
    /// Name the character device registers under.
    pub device_name: String,
    /// Major device number.
    pub major: u32,

    // --- Counter ---
    /// Start value and wrap target (1–15).
    pub initial_value: u8,
    /// Tick period after load (one of 500, 1000, ..., 4000 ms).
    pub default_period_ms: u32,

    // --- Wiring ---
    /// Run/stop and direction buttons.
    pub button_gpios: [u32; 2],
    /// LEDs, least significant bit first.
    pub led_gpios: [u32; 4],
    /// Buttons read LOW while pressed.
    pub buttons_active_low: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            device_name: "mygpio".into(),
            major: 61,

            initial_value: DEFAULT_INITIAL_VALUE,
            default_period_ms: Period::DEFAULT.millis(),

            button_gpios: pins::BUTTON_GPIOS,
            led_gpios: pins::LED_GPIOS,
            buttons_active_low: false,
        }
    }
}

impl CounterConfig {
    /// Reject values the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.device_name.is_empty() {
            return Err(Error::Config("device_name must not be empty"));
        }
        if self.major == 0 {
            return Err(Error::Config("major must be nonzero"));
        }
        if !(1..=MAX_VALUE).contains(&self.initial_value) {
            return Err(Error::Config("initial_value must be in 1..=15"));
        }
        Period::from_millis(self.default_period_ms)
            .map_err(|_| Error::Config("default_period_ms must be a multiple of 500 in 500..=4000"))?;
        Ok(())
    }

    /// The default period as a typed value.  Call after [`validate`](Self::validate).
    pub fn default_period(&self) -> Period {
        Period::from_millis(self.default_period_ms).unwrap_or_default()
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|_| Error::Config("unreadable file"))?;
        Self::from_json_str(&json)
    }
}
