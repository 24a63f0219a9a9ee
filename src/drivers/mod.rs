//! Pin-level drivers behind the engine's port traits.

pub mod buttons;
pub mod led_bus;
