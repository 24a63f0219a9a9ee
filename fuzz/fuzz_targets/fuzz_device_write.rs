//! Fuzz target: `CounterDevice::write` followed by a full read
//!
//! Splits the input into writes and checks that the report stays
//! well-formed after every one of them.
//!
//! cargo fuzz run fuzz_device_write

#![no_main]

use std::sync::Arc;

use gpiocounter::adapters::log_sink::LogEventSink;
use gpiocounter::adapters::sim_gpio::{SimInput, SimOutput};
use gpiocounter::app::service::CounterService;
use gpiocounter::control::device::CounterDevice;
use gpiocounter::counter::Period;
use gpiocounter::drivers::buttons::{ActiveLevel, ButtonPair};
use gpiocounter::drivers::led_bus::LedBus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let buttons = ButtonPair::new(SimInput::new(false), SimInput::new(false), ActiveLevel::High);
    let leds = LedBus::new(core::array::from_fn(|_| SimOutput::new()));
    let service = Arc::new(CounterService::new(15, Period::DEFAULT, buttons, leds));
    let device = CounterDevice::new(service);

    for chunk in data.split(|&b| b == b'\n') {
        let mut file = device.open();
        let _ = device.write(&mut file, chunk, &mut LogEventSink);
        file.rewind();

        let mut report = Vec::new();
        let n = device.read_to(&mut file, &mut report).unwrap_or(0);
        assert_eq!(n, report.len());
        assert_eq!(report.iter().filter(|&&b| b == b'\n').count(), 4);
        device.release(file);
    }
});
