//! Outbound engine events.
//!
//! The [`CounterService`](super::service::CounterService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::counter::{Direction, Period, RunState};
use crate::error::InvalidArgument;

/// Structured events emitted by the counter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    /// The engine drew its initial value.
    Started { value: u8, period: Period },

    /// Button 0 changed the run state.
    RunStateChanged { from: RunState, to: RunState },

    /// A button changed level since the previous tick's sample.
    ButtonChanged { button: u8, pressed: bool },

    /// A running tick moved the counter.
    Stepped { value: u8, direction: Direction },

    /// A client changed the tick period.
    PeriodChanged(Period),

    /// A client overwrote the counter value.
    ValueSet(u8),

    /// A client command was rejected; state is unchanged.
    CommandRejected(InvalidArgument),

    /// A button read failed; the button counted as released.
    ButtonFault(u8),

    /// An LED write failed; the line may show a stale level.
    LedFault(u8),

    /// Outputs cleared; the engine will not tick again.
    Shutdown,
}
