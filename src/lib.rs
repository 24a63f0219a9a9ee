//! GPIO counter library.
//!
//! A two-button, four-LED counter engine with a character-device style
//! control surface.  Everything hardware-specific sits behind
//! embedded-hal pin traits, so the whole crate runs and tests on the host
//! with the simulated pins in [`adapters::sim_gpio`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod counter;
pub mod driver;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod scheduler;

pub use error::{Error, Result};
