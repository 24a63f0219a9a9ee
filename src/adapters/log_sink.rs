//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing engine events through the `log`
//! facade.  Per-tick steps go to debug level so a running counter does
//! not flood the console.

use log::{debug, info, warn};

use crate::app::events::CounterEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`CounterEvent`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &CounterEvent) {
        match event {
            CounterEvent::Started { value, period } => {
                info!("START | value={} period={}ms", value, period.millis());
            }
            CounterEvent::RunStateChanged { from, to } => {
                info!("STATE | {} -> {}", from.label(), to.label());
            }
            CounterEvent::ButtonChanged { button, pressed } => {
                debug!(
                    "BTN   | BTN{} {}",
                    button,
                    if *pressed { "pressed" } else { "released" }
                );
            }
            CounterEvent::Stepped { value, direction } => {
                debug!("TICK  | value={:2} ({})", value, direction.label());
            }
            CounterEvent::PeriodChanged(period) => {
                info!("CONF  | period={}ms", period.millis());
            }
            CounterEvent::ValueSet(value) => {
                info!("CONF  | value={}", value);
            }
            CounterEvent::CommandRejected(reason) => {
                warn!("CONF  | rejected: {}", reason);
            }
            CounterEvent::ButtonFault(button) => {
                warn!("FAULT | BTN{} read failed", button);
            }
            CounterEvent::LedFault(led) => {
                warn!("FAULT | LED{} write failed", led);
            }
            CounterEvent::Shutdown => {
                info!("STOP  | outputs cleared");
            }
        }
    }
}
