//! Integration tests for the driver lifecycle on simulated pins.
//!
//! These run the real tick timer, so they use the shortest period and
//! generous sleeps.

use std::thread::sleep;
use std::time::Duration;

use gpiocounter::adapters::log_sink::LogEventSink;
use gpiocounter::adapters::sim_gpio::{SimInput, SimOutput};
use gpiocounter::config::CounterConfig;
use gpiocounter::counter::RunState;
use gpiocounter::driver::CounterDriver;
use gpiocounter::error::Error;

fn board() -> ([SimInput; 2], [SimOutput; 4]) {
    (
        [SimInput::new(false), SimInput::new(false)],
        core::array::from_fn(|_| SimOutput::new()),
    )
}

fn leds_value(leds: &[SimOutput; 4]) -> u8 {
    leds.iter()
        .enumerate()
        .map(|(bit, led)| u8::from(led.is_set_high()) << bit)
        .sum()
}

fn fast_config() -> CounterConfig {
    CounterConfig {
        default_period_ms: 500,
        ..CounterConfig::default()
    }
}

#[test]
fn load_draws_initial_value() {
    let (buttons, leds) = board();
    let driver = CounterDriver::from_pins(&CounterConfig::default(), buttons, leds.clone()).unwrap();
    assert!(driver.is_loaded());
    assert_eq!(driver.info().name, "mygpio");
    assert_eq!(driver.info().major, 61);
    assert_eq!(leds_value(&leds), 15);
    driver.unload();
}

#[test]
fn held_buttons_advance_then_unload_clears() {
    let (buttons, leds) = board();
    let driver = CounterDriver::from_pins(&fast_config(), buttons.clone(), leds.clone()).unwrap();

    buttons[0].set(true);
    buttons[1].set(true);
    sleep(Duration::from_millis(1300));
    buttons[0].set(false);
    sleep(Duration::from_millis(700));

    let state = driver.service().snapshot();
    assert_eq!(state.run_state, RunState::Stopped);
    assert_ne!(state.value, 15, "no tick advanced the counter");
    assert_eq!(leds_value(&leds), state.value);

    driver.unload();
    assert_eq!(leds_value(&leds), 0);
}

#[test]
fn no_ticks_after_unload() {
    let (buttons, leds) = board();
    let driver = CounterDriver::from_pins(&fast_config(), buttons.clone(), leds.clone()).unwrap();
    let device = driver.device();
    buttons[0].set(true);
    driver.unload();

    let after = device.service().snapshot();
    sleep(Duration::from_millis(1200));
    assert_eq!(device.service().snapshot(), after);
    assert_eq!(leds_value(&leds), 0);
}

#[test]
fn drop_unloads() {
    let (buttons, leds) = board();
    {
        let driver = CounterDriver::from_pins(&CounterConfig::default(), buttons, leds.clone()).unwrap();
        driver
            .device()
            .write(&mut driver.device().open(), b"v6", &mut LogEventSink)
            .unwrap();
        assert_eq!(leds_value(&leds), 6);
    }
    assert_eq!(leds_value(&leds), 0);
}

#[test]
fn active_low_buttons_idle_high() {
    let config = CounterConfig {
        buttons_active_low: true,
        default_period_ms: 500,
        ..CounterConfig::default()
    };
    let buttons = [SimInput::new(true), SimInput::new(true)];
    let leds: [SimOutput; 4] = core::array::from_fn(|_| SimOutput::new());
    let driver = CounterDriver::from_pins(&config, buttons, leds).unwrap();
    sleep(Duration::from_millis(700));
    assert_eq!(driver.service().snapshot().value, 15);
    assert_eq!(driver.service().snapshot().run_state, RunState::Stopped);
    driver.unload();
}

#[test]
fn invalid_config_refuses_to_load() {
    let (buttons, leds) = board();
    let config = CounterConfig {
        major: 0,
        ..CounterConfig::default()
    };
    let err = CounterDriver::from_pins(&config, buttons, leds.clone())
        .err()
        .unwrap();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(leds_value(&leds), 0, "nothing may be driven on a failed load");
}

#[test]
fn handles_kept_across_unload_cannot_drive_leds() {
    let (buttons, leds) = board();
    let driver = CounterDriver::from_pins(&CounterConfig::default(), buttons, leds.clone()).unwrap();
    let device = driver.device();
    driver.unload();
    assert_eq!(leds_value(&leds), 0);

    let mut file = device.open();
    assert_eq!(
        device.write(&mut file, b"v5", &mut LogEventSink),
        Err(Error::Unloaded)
    );
    assert_eq!(
        device.write(&mut file, b"f1", &mut LogEventSink),
        Err(Error::Unloaded)
    );
    assert_eq!(Error::Unloaded.errno(), -19);
    assert_eq!(leds_value(&leds), 0);

    device.service().tick(&mut LogEventSink);
    assert_eq!(leds_value(&leds), 0);
}
