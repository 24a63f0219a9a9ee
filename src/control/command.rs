//! Configuration command parser.
//!
//! Grammar: one command byte, one hex digit, optional terminator.
//!
//! | Command | Digit | Effect                       |
//! |---------|-------|------------------------------|
//! | `f`     | 1–8   | period = digit × 500 ms      |
//! | `v`     | 1–f   | counter value = digit        |
//!
//! A digit of `0` is rejected exactly like a non-hex byte, for both
//! commands.  The third byte, if any, is never inspected.

use crate::app::commands::CounterCommand;
use crate::counter::Period;
use crate::error::{InvalidArgument, Result};

/// Command byte, digit, terminator.
pub const MAX_COMMAND_LEN: usize = 3;

pub fn parse_command(input: &[u8]) -> Result<CounterCommand> {
    if input.len() > MAX_COMMAND_LEN {
        return Err(InvalidArgument::TooLong { len: input.len() }.into());
    }
    let Some(&cmd) = input.first() else {
        return Err(InvalidArgument::Empty.into());
    };

    let digit = input
        .get(1)
        .and_then(|&b| char::from(b).to_digit(16))
        .filter(|&n| n != 0)
        .ok_or(InvalidArgument::BadDigit)?;

    match cmd {
        b'f' => Period::from_selector(digit)
            .map(CounterCommand::SetPeriod)
            .ok_or_else(|| InvalidArgument::PeriodOutOfRange(digit).into()),
        b'v' => Ok(CounterCommand::SetValue(digit as u8)),
        other => Err(InvalidArgument::UnknownCommand(other).into()),
    }
}
