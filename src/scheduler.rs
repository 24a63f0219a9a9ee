//! Self-rearming tick timer.
//!
//! Runs a [`TickHandler`] once per delay on a dedicated worker thread.
//! Each invocation returns the next delay, so the timer behaves like a
//! one-shot alarm rearmed from inside its own callback rather than a
//! fixed-rate clock: a slow tick pushes every later tick back.
//!
//! ```text
//!   start ──▶ wait(delay) ──▶ on_tick() ──▶ wait(next delay) ──▶ ...
//!                 │
//!   stop ─────────┘  (wakes the wait, joins the worker)
//! ```
//!
//! The wait is a channel receive with timeout, never a spin.  `stop`
//! returns only after the worker has exited, so no tick can run once it
//! has returned.

use core::time::Duration;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;

use log::{info, warn};

use crate::app::ports::TickHandler;
use crate::error::{Error, Result};

pub struct TickTimer {
    name: String,
    cancel: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl TickTimer {
    /// Arm the timer.  The first tick fires after `first_delay`.
    pub fn start(name: &str, first_delay: Duration, mut handler: impl TickHandler) -> Result<Self> {
        let (cancel, cancelled) = mpsc::channel::<()>();

        let worker = std::thread::Builder::new()
            .name(name.into())
            .spawn(move || {
                let mut delay = first_delay;
                loop {
                    match cancelled.recv_timeout(delay) {
                        Err(RecvTimeoutError::Timeout) => delay = handler.on_tick(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
            .map_err(|_| Error::Init("tick timer thread spawn failed"))?;

        info!("TickTimer '{}': armed ({} ms)", name, first_delay.as_millis());
        Ok(Self {
            name: name.into(),
            cancel: Some(cancel),
            worker: Some(worker),
        })
    }

    /// Whether the worker is still armed.
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Cancel future ticks and wait for an in-flight tick to finish.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        if let Some(cancel) = self.cancel.take() {
            // A send error means the worker already exited.
            let _ = cancel.send(());
        }
        if worker.join().is_err() {
            warn!("TickTimer '{}': worker panicked", self.name);
        }
        info!("TickTimer '{}': stopped", self.name);
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
