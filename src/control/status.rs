//! Status report formatter.
//!
//! Renders a [`CounterState`] as exactly four lines:
//!
//! ```text
//! Counter Value:     <value>
//! Counter Period:    <seconds> sec
//! Counter Direction: <Up|Down>
//! Counter State:     <Running|Stopped>
//! ```

use core::fmt::Write;

use log::warn;

use crate::counter::CounterState;

/// Longest report is 100 bytes; leave headroom.
pub const STATUS_CAPACITY: usize = 128;

/// A rendered report, stack-allocated.
pub type StatusText = heapless::String<STATUS_CAPACITY>;

/// Seconds label for a period.  Off-step values fall back to `"1.0"`.
pub fn period_seconds(ms: u32) -> &'static str {
    match ms {
        500 => "0.5",
        1000 => "1.0",
        1500 => "1.5",
        2000 => "2.0",
        2500 => "2.5",
        3000 => "3.0",
        3500 => "3.5",
        4000 => "4.0",
        other => {
            warn!("status: period {} ms outside the step set, reporting 1.0", other);
            "1.0"
        }
    }
}

/// Render the report.  Pure: equal states give byte-identical output.
pub fn format_status(state: &CounterState) -> StatusText {
    let mut out = StatusText::new();
    let written = write!(
        out,
        "Counter Value:     {}\n\
         Counter Period:    {} sec\n\
         Counter Direction: {}\n\
         Counter State:     {}\n",
        state.value,
        period_seconds(state.period.millis()),
        state.direction.label(),
        state.run_state.label(),
    );
    debug_assert!(written.is_ok(), "status report exceeds {STATUS_CAPACITY} bytes");
    if written.is_err() {
        warn!("status: report truncated at {} bytes", out.len());
    }
    out
}
