//! Fuzz target: `parse_command`
//!
//! Arbitrary client bytes must yield a command or a typed rejection,
//! and anything accepted must be in range.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use gpiocounter::app::commands::CounterCommand;
use gpiocounter::control::command::{MAX_COMMAND_LEN, parse_command};
use gpiocounter::counter::MAX_VALUE;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match parse_command(data) {
        Ok(CounterCommand::SetValue(v)) => {
            assert!((1..=MAX_VALUE).contains(&v));
            assert!(data.len() <= MAX_COMMAND_LEN);
        }
        Ok(CounterCommand::SetPeriod(p)) => {
            assert!((500..=4000).contains(&p.millis()));
            assert!(data.len() <= MAX_COMMAND_LEN);
        }
        Err(e) => assert_eq!(e.errno(), -22),
    }
});
