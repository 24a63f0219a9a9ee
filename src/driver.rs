//! Driver lifecycle: load and unload.
//!
//! Load validates the config, registers the device, draws the initial
//! value, and arms the tick timer.  Unload runs the reverse in a fixed
//! order: stop the timer (joining any in-flight tick), clear the LEDs,
//! then release the engine.  Dropping a loaded driver unloads it.

use std::sync::Arc;

use embedded_hal::digital::{InputPin, OutputPin};
use log::{error, info};

use crate::adapters::log_sink::LogEventSink;
use crate::app::ports::{ButtonPort, DisplayPort};
use crate::app::service::{CounterService, ServiceTicker};
use crate::config::CounterConfig;
use crate::control::device::CounterDevice;
use crate::drivers::buttons::{ActiveLevel, ButtonPair};
use crate::drivers::led_bus::{LED_COUNT, LedBus};
use crate::error::Result;
use crate::scheduler::TickTimer;

/// Character-device registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub major: u32,
}

pub struct CounterDriver<B, D>
where
    B: ButtonPort + Send + 'static,
    D: DisplayPort + Send + 'static,
{
    info: DeviceInfo,
    service: Arc<CounterService<B, D>>,
    timer: Option<TickTimer>,
}

impl<I, O> CounterDriver<ButtonPair<I>, LedBus<O>>
where
    I: InputPin + Send + 'static,
    O: OutputPin + Send + 'static,
{
    /// Load on raw pins: buttons `[run, direction]`, LEDs bit 0 first.
    pub fn from_pins(config: &CounterConfig, buttons: [I; 2], leds: [O; LED_COUNT]) -> Result<Self> {
        let active = if config.buttons_active_low {
            ActiveLevel::Low
        } else {
            ActiveLevel::High
        };
        let [run, direction] = buttons;
        Self::load(
            config,
            ButtonPair::new(run, direction, active),
            LedBus::new(leds),
        )
    }
}

impl<B, D> CounterDriver<B, D>
where
    B: ButtonPort + Send + 'static,
    D: DisplayPort + Send + 'static,
{
    pub fn load(config: &CounterConfig, buttons: B, display: D) -> Result<Self> {
        if let Err(e) = config.validate() {
            error!("{}: cannot load: {}", config.device_name, e);
            return Err(e);
        }
        let info = DeviceInfo {
            name: config.device_name.clone(),
            major: config.major,
        };

        let service = Arc::new(CounterService::new(
            config.initial_value,
            config.default_period(),
            buttons,
            display,
        ));
        service.start(&mut LogEventSink);

        let timer = match TickTimer::start(
            &format!("{}-tick", info.name),
            service.period().as_duration(),
            ServiceTicker::new(Arc::clone(&service), LogEventSink),
        ) {
            Ok(timer) => timer,
            Err(e) => {
                error!("{}: cannot arm tick timer: {}", info.name, e);
                service.shutdown(&mut LogEventSink);
                return Err(e);
            }
        };

        info!("{}: module loaded (major {}).", info.name, info.major);
        Ok(Self {
            info,
            service,
            timer: Some(timer),
        })
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn service(&self) -> &CounterService<B, D> {
        &self.service
    }

    /// A client handle for open/read/write.
    pub fn device(&self) -> CounterDevice<B, D> {
        CounterDevice::new(Arc::clone(&self.service))
    }

    pub fn is_loaded(&self) -> bool {
        self.timer.is_some()
    }

    pub fn unload(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(mut timer) = self.timer.take() else {
            return;
        };
        timer.stop();
        self.service.shutdown(&mut LogEventSink);
        info!("{}: module unloaded.", self.info.name);
    }
}

impl<B, D> Drop for CounterDriver<B, D>
where
    B: ButtonPort + Send + 'static,
    D: DisplayPort + Send + 'static,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
