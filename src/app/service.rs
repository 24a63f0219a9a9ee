//! Counter service, the engine core.
//!
//! [`CounterService`] owns the single [`CounterState`] together with the
//! button and LED ports.  Everything sits behind one critical-section
//! mutex so the tick context and any number of clients see whole states:
//! the counter update and the LED drive that follows it happen inside the
//! same critical section.
//!
//! ```text
//!  ButtonPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │     CounterService     │
//! DisplayPort ◀── │  CounterState · lock   │ ◀── CounterCommand
//!                 └────────────────────────┘
//! ```
//!
//! Nothing inside the critical section logs.  Button edges and port
//! faults are collected under the lock and emitted as events after it is
//! released, into a sink owned by the calling context.
//!
//! After [`shutdown`](CounterService::shutdown) the engine is inert:
//! ticks do nothing and commands fail with [`Error::Unloaded`].

use core::cell::RefCell;
use core::time::Duration;
use std::sync::Arc;

use embassy_sync::blocking_mutex::CriticalSectionMutex;
use log::info;

use crate::counter::{CounterState, Period, RunState};
use crate::error::{Error, InvalidArgument, Result};

use super::commands::CounterCommand;
use super::events::CounterEvent;
use super::ports::{ButtonLevels, ButtonPort, DisplayPort, EventSink, FaultMask, TickHandler};

struct Engine<B, D> {
    state: CounterState,
    buttons: B,
    display: D,
    last_levels: Option<ButtonLevels>,
    shut_down: bool,
}

impl<B: ButtonPort, D: DisplayPort> Engine<B, D> {
    fn take_faults(&mut self) -> PortFaults {
        PortFaults {
            buttons: self.buttons.take_faults(),
            leds: self.display.take_faults(),
        }
    }
}

/// Port faults drained under the lock, reported after it.
#[derive(Clone, Copy, Default)]
struct PortFaults {
    buttons: FaultMask,
    leds: FaultMask,
}

impl PortFaults {
    fn emit(self, sink: &mut impl EventSink) {
        for bit in 0..8 {
            if self.buttons & (1 << bit) != 0 {
                sink.emit(&CounterEvent::ButtonFault(bit));
            }
            if self.leds & (1 << bit) != 0 {
                sink.emit(&CounterEvent::LedFault(bit));
            }
        }
    }
}

/// Everything one tick hands out of the critical section.
struct TickOutcome {
    prev: CounterState,
    now: CounterState,
    prev_levels: Option<ButtonLevels>,
    levels: ButtonLevels,
    faults: PortFaults,
}

// ───────────────────────────────────────────────────────────────
// CounterService
// ───────────────────────────────────────────────────────────────

pub struct CounterService<B, D> {
    engine: CriticalSectionMutex<RefCell<Engine<B, D>>>,
    initial_value: u8,
}

impl<B: ButtonPort, D: DisplayPort> CounterService<B, D> {
    /// Build the engine in its power-up state.  Nothing is driven until
    /// [`start`](Self::start).
    pub fn new(initial_value: u8, period: Period, buttons: B, display: D) -> Self {
        Self {
            engine: CriticalSectionMutex::new(RefCell::new(Engine {
                state: CounterState::initial(initial_value, period),
                buttons,
                display,
                last_levels: None,
                shut_down: false,
            })),
            initial_value,
        }
    }

    fn with_engine<U>(&self, f: impl FnOnce(&mut Engine<B, D>) -> U) -> U {
        self.engine.lock(|cell| f(&mut cell.borrow_mut()))
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Draw the initial value on the LEDs.
    pub fn start(&self, sink: &mut impl EventSink) {
        let (state, faults) = self.with_engine(|e| {
            e.display.drive(e.state.value);
            (e.state, e.take_faults())
        });
        faults.emit(sink);
        sink.emit(&CounterEvent::Started {
            value: state.value,
            period: state.period,
        });
        info!(
            "CounterService started at {} ({} ms)",
            state.value,
            state.period.millis()
        );
    }

    /// Force every LED low and make the engine inert.  The caller must
    /// have stopped the tick source.
    pub fn shutdown(&self, sink: &mut impl EventSink) {
        let faults = self.with_engine(|e| {
            e.display.clear();
            e.shut_down = true;
            e.take_faults()
        });
        faults.emit(sink);
        sink.emit(&CounterEvent::Shutdown);
    }

    pub fn is_shut_down(&self) -> bool {
        self.with_engine(|e| e.shut_down)
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Sample the buttons, advance the counter, and redraw if it moved.
    /// Returns the state after the tick.  A no-op after shutdown.
    pub fn tick(&self, sink: &mut impl EventSink) -> CounterState {
        let initial = self.initial_value;
        let outcome = self.with_engine(|e| {
            if e.shut_down {
                return Err(e.state);
            }
            let levels = e.buttons.sample();
            let prev = e.state;
            if e.state.advance(levels.run, levels.up, initial) {
                e.display.drive(e.state.value);
            }
            Ok(TickOutcome {
                prev,
                now: e.state,
                prev_levels: e.last_levels.replace(levels),
                levels,
                faults: e.take_faults(),
            })
        });
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(frozen) => return frozen,
        };

        outcome.faults.emit(sink);
        if let Some(prev) = outcome.prev_levels {
            let pairs = [(0, prev.run, outcome.levels.run), (1, prev.up, outcome.levels.up)];
            for (button, was, is) in pairs {
                if was != is {
                    sink.emit(&CounterEvent::ButtonChanged { button, pressed: is });
                }
            }
        }

        let (prev, now) = (outcome.prev, outcome.now);
        if prev.run_state != now.run_state {
            sink.emit(&CounterEvent::RunStateChanged {
                from: prev.run_state,
                to: now.run_state,
            });
        }
        if now.run_state == RunState::Running {
            sink.emit(&CounterEvent::Stepped {
                value: now.value,
                direction: now.direction,
            });
        }
        now
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply a parsed client command.  A rejected command leaves the
    /// state untouched.
    pub fn apply(&self, cmd: CounterCommand, sink: &mut impl EventSink) -> Result<()> {
        match cmd {
            CounterCommand::SetPeriod(period) => {
                self.with_engine(|e| {
                    if e.shut_down {
                        return Err(Error::Unloaded);
                    }
                    e.state.period = period;
                    Ok(())
                })?;
                sink.emit(&CounterEvent::PeriodChanged(period));
            }
            CounterCommand::SetValue(value) => {
                if !(1..=self.initial_value).contains(&value) {
                    let err = InvalidArgument::ValueOutOfRange(u32::from(value));
                    sink.emit(&CounterEvent::CommandRejected(err));
                    return Err(err.into());
                }
                let faults = self.with_engine(|e| {
                    if e.shut_down {
                        return Err(Error::Unloaded);
                    }
                    e.state.value = value;
                    e.display.drive(value);
                    Ok(e.take_faults())
                })?;
                faults.emit(sink);
                sink.emit(&CounterEvent::ValueSet(value));
            }
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> CounterState {
        self.with_engine(|e| e.state)
    }

    /// Delay until the next tick.
    pub fn period(&self) -> Period {
        self.with_engine(|e| e.state.period)
    }

    /// Start value and wrap target.
    pub fn initial_value(&self) -> u8 {
        self.initial_value
    }
}

// ───────────────────────────────────────────────────────────────
// Tick glue
// ───────────────────────────────────────────────────────────────

/// [`TickHandler`] that runs one engine tick and rearms with the period
/// current at that moment, so a period change lands on the next rearm.
pub struct ServiceTicker<B, D, S> {
    service: Arc<CounterService<B, D>>,
    sink: S,
}

impl<B, D, S> ServiceTicker<B, D, S> {
    pub fn new(service: Arc<CounterService<B, D>>, sink: S) -> Self {
        Self { service, sink }
    }
}

impl<B, D, S> TickHandler for ServiceTicker<B, D, S>
where
    B: ButtonPort + Send + 'static,
    D: DisplayPort + Send + 'static,
    S: EventSink + Send + 'static,
{
    fn on_tick(&mut self) -> Duration {
        self.service.tick(&mut self.sink).period.as_duration()
    }
}
