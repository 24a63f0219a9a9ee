//! Port traits: the boundary between the counter engine and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ CounterService (domain)
//! ```
//!
//! Driven adapters (buttons, LEDs, event sinks) implement these traits.
//! The [`CounterService`](super::service::CounterService) consumes them via
//! generics, so the engine never touches hardware directly.

use core::time::Duration;

use super::events::CounterEvent;

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Logical button levels for one tick.  `true` means pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonLevels {
    /// Button 0: counter runs while held.
    pub run: bool,
    /// Button 1: counts up while held, down otherwise.
    pub up: bool,
}

/// Bitmask of lines whose last access failed, bit `n` for line `n`.
pub type FaultMask = u8;

/// Read-side port: sampled once per tick.
///
/// Implementations run inside the engine's critical section, so they
/// must not log or block.  Faults are recorded and handed over through
/// [`take_faults`](Self::take_faults) instead.
pub trait ButtonPort {
    fn sample(&mut self) -> ButtonLevels;

    /// Drain the buttons whose reads failed since the last call.
    fn take_faults(&mut self) -> FaultMask {
        0
    }
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the 4-bit LED bus.  Same no-logging rule as
/// [`ButtonPort`].
pub trait DisplayPort {
    /// Show the low four bits of `value`; higher bits are ignored.
    fn drive(&mut self, value: u8);

    /// Force every output low.
    fn clear(&mut self);

    /// Drain the LEDs whose writes failed since the last call.
    fn take_faults(&mut self) -> FaultMask {
        0
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The engine emits structured [`CounterEvent`]s through this port.
/// Each execution context owns its own sink.
pub trait EventSink {
    fn emit(&mut self, event: &CounterEvent);
}

// ───────────────────────────────────────────────────────────────
// Tick handler (decouples the scheduler from the engine)
// ───────────────────────────────────────────────────────────────

/// Callback the [`TickTimer`](crate::scheduler::TickTimer) invokes each
/// time its one-shot delay expires.
///
/// The return value is the delay before the next invocation, so a handler
/// can change its own rate from inside the callback.
pub trait TickHandler: Send + 'static {
    fn on_tick(&mut self) -> Duration;
}
