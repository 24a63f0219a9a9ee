//! Application core: the counter engine and its port boundary.
//!
//! The engine never touches pins directly.  Buttons, LEDs, event output,
//! and the periodic scheduler are reached through **port traits** defined
//! in [`ports`], keeping this layer testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
