//! Mock hardware adapters for integration tests.
//!
//! The engine owns its ports, so each mock keeps its state behind an
//! `Arc` and hands out a probe clone that tests keep.

use std::sync::{Arc, Mutex};

use gpiocounter::app::events::CounterEvent;
use gpiocounter::app::ports::{ButtonLevels, ButtonPort, DisplayPort, EventSink};
use gpiocounter::app::service::CounterService;
use gpiocounter::counter::Period;

// ── Buttons ───────────────────────────────────────────────────

/// Buttons held at whatever level the test last set.
#[derive(Clone, Default)]
pub struct MockButtons {
    levels: Arc<Mutex<ButtonLevels>>,
}

#[allow(dead_code)]
impl MockButtons {
    pub fn set(&self, run: bool, up: bool) {
        *self.levels.lock().unwrap() = ButtonLevels { run, up };
    }
}

impl ButtonPort for MockButtons {
    fn sample(&mut self) -> ButtonLevels {
        *self.levels.lock().unwrap()
    }
}

/// Buttons that replay a fixed script, cycling forever.
pub struct ScriptedButtons {
    script: Vec<ButtonLevels>,
    next: usize,
}

#[allow(dead_code)]
impl ScriptedButtons {
    pub fn new(script: Vec<ButtonLevels>) -> Self {
        Self { script, next: 0 }
    }
}

impl ButtonPort for ScriptedButtons {
    fn sample(&mut self) -> ButtonLevels {
        let levels = self.script[self.next % self.script.len()];
        self.next += 1;
        levels
    }
}

// ── Display ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCall {
    Drive(u8),
    Clear,
}

/// Records every display call.
#[derive(Clone, Default)]
pub struct MockDisplay {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<DisplayCall> {
        self.calls.lock().unwrap().last().copied()
    }

    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl DisplayPort for MockDisplay {
    fn drive(&mut self, value: u8) {
        self.calls.lock().unwrap().push(DisplayCall::Drive(value));
    }

    fn clear(&mut self) {
        self.calls.lock().unwrap().push(DisplayCall::Clear);
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<CounterEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &CounterEvent) {
        self.events.push(*event);
    }
}

// ── Fixtures ──────────────────────────────────────────────────

pub type MockService = CounterService<MockButtons, MockDisplay>;

/// A started service at the stock defaults, with probes on its ports.
#[allow(dead_code)]
pub fn started_service() -> (MockService, MockButtons, MockDisplay, RecordingSink) {
    let buttons = MockButtons::default();
    let display = MockDisplay::default();
    let svc = CounterService::new(15, Period::DEFAULT, buttons.clone(), display.clone());
    let mut sink = RecordingSink::new();
    svc.start(&mut sink);
    (svc, buttons, display, sink)
}
