//! GpioCounter host simulator.
//!
//! Loads the driver on simulated pins and exposes the device on stdin.
//!
//! ```text
//!   stdin ──▶ cat | leds | b0/b1 on|off | <command> | quit
//!                  │
//!                  ▼
//!   CounterDevice ──▶ CounterService ◀── TickTimer
//!                          │
//!                          ▼
//!                  SimOutput × 4 (LEDs)
//! ```
#![deny(unused_must_use)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use gpiocounter::adapters::log_sink::LogEventSink;
use gpiocounter::adapters::sim_gpio::{SimInput, SimOutput};
use gpiocounter::config::CounterConfig;
use gpiocounter::driver::CounterDriver;

// ── CLI ───────────────────────────────────────────────────────

/// Button-driven 4-bit LED counter on simulated pins.
#[derive(Debug, Parser)]
#[command(name = "gpiocounter", version, long_about = None)]
struct Cli {
    /// JSON configuration file; missing fields keep their defaults.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Override the start value and wrap target (1-15).
    #[arg(short = 'i', long = "initial-value")]
    initial_value: Option<u8>,

    /// Override the tick period in ms (500, 1000, ..., 4000).
    #[arg(short = 'p', long = "period-ms")]
    period_ms: Option<u32>,
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CounterConfig::load_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CounterConfig::default(),
    };
    if let Some(v) = cli.initial_value {
        config.initial_value = v;
    }
    if let Some(ms) = cli.period_ms {
        config.default_period_ms = ms;
    }

    info!("GpioCounter v{}", env!("CARGO_PKG_VERSION"));

    // ── Simulated board ───────────────────────────────────────
    let buttons = [SimInput::new(false), SimInput::new(false)];
    let leds: [SimOutput; 4] = core::array::from_fn(|_| SimOutput::new());

    let driver = CounterDriver::from_pins(&config, buttons.clone(), leds.clone())
        .context("loading driver")?;
    let device = driver.device();
    let mut sink = LogEventSink::new();

    println!("commands: cat | leds | b0 on|off | b1 on|off | f<1-8> | v<1-f> | quit");

    // ── Command loop ──────────────────────────────────────────
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["cat"] => {
                let mut file = device.open();
                if let Err(e) = device.read_to(&mut file, &mut stdout) {
                    println!("error {}: {}", e.errno(), e);
                }
                device.release(file);
            }
            ["leds"] => {
                let bits: String = leds
                    .iter()
                    .rev()
                    .map(|led| if led.is_set_high() { '1' } else { '0' })
                    .collect();
                println!("LED3..0: {bits}");
            }
            [button @ ("b0" | "b1"), level @ ("on" | "off")] => {
                let index = usize::from(*button == "b1");
                buttons[index].set(*level == "on");
            }
            _ => {
                let mut file = device.open();
                match device.write(&mut file, line.trim().as_bytes(), &mut sink) {
                    Ok(n) => println!("ok ({n} bytes)"),
                    Err(e) => println!("error {}: {}", e.errno(), e),
                }
                device.release(file);
            }
        }
        stdout.flush().context("flushing stdout")?;
    }

    driver.unload();
    Ok(())
}
