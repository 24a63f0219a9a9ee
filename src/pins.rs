//! GPIO pin assignments for the counter board.
//!
//! Single source of truth for the default wiring.  [`CounterConfig`]
//! copies these into its defaults, so a JSON config can override them
//! without touching code.
//!
//! [`CounterConfig`]: crate::config::CounterConfig

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// Run/stop button.  Held = counter runs.
pub const BUTTON0_GPIO: u32 = 17;
/// Direction button.  Held = count up, released = count down.
pub const BUTTON1_GPIO: u32 = 101;

// ---------------------------------------------------------------------------
// LEDs (bit 0 first)
// ---------------------------------------------------------------------------

pub const LED0_GPIO: u32 = 28;
pub const LED1_GPIO: u32 = 29;
pub const LED2_GPIO: u32 = 30;
pub const LED3_GPIO: u32 = 31;

pub const BUTTON_GPIOS: [u32; 2] = [BUTTON0_GPIO, BUTTON1_GPIO];
pub const LED_GPIOS: [u32; 4] = [LED0_GPIO, LED1_GPIO, LED2_GPIO, LED3_GPIO];
