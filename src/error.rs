//! Unified error types for the GPIO counter.
//!
//! A single `Error` enum that every subsystem converts into.  All variants
//! are `Copy` so they can be handed across the tick and client contexts
//! without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A configuration command was malformed or out of range.
    InvalidArgument(InvalidArgument),
    /// Data could not be transferred across the client boundary.
    IoFault,
    /// A value fell outside a set that should be closed by construction.
    Unreachable(&'static str),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
    /// Driver bring-up failed (device registration, timer thread).
    Init(&'static str),
    /// The driver was unloaded; the outputs stay cleared.
    Unloaded,
}

/// Kernel-style errno for invalid arguments.
pub const EINVAL: i32 = 22;
/// Kernel-style errno for a bad client buffer.
pub const EFAULT: i32 = 14;
/// Kernel-style errno for a resource that could not be acquired.
pub const EBUSY: i32 = 16;
/// Kernel-style errno for a device that has gone away.
pub const ENODEV: i32 = 19;

impl Error {
    /// Negative errno, as returned by a character-device `read`/`write`.
    pub const fn errno(self) -> i32 {
        match self {
            Self::IoFault => -EFAULT,
            Self::Init(_) => -EBUSY,
            Self::Unloaded => -ENODEV,
            Self::InvalidArgument(_) | Self::Unreachable(_) | Self::Config(_) => -EINVAL,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Self::IoFault => write!(f, "I/O fault transferring client data"),
            Self::Unreachable(what) => write!(f, "unreachable: {what}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Unloaded => write!(f, "device unloaded"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Why a configuration command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// No bytes were written.
    Empty,
    /// More than a command, a digit, and a terminator.
    TooLong { len: usize },
    /// The digit after the command is missing, not hex, or zero.
    BadDigit,
    /// The first byte is not a known command.
    UnknownCommand(u8),
    /// Period selector outside `1..=8`.
    PeriodOutOfRange(u32),
    /// Counter value above the configured initial value.
    ValueOutOfRange(u32),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::TooLong { len } => write!(f, "command too long ({len} bytes)"),
            Self::BadDigit => write!(f, "missing, zero, or non-hex digit"),
            Self::UnknownCommand(c) => write!(f, "unknown command {:?}", char::from(*c)),
            Self::PeriodOutOfRange(n) => write!(f, "period selector {n} not in 1..=8"),
            Self::ValueOutOfRange(n) => write!(f, "counter value {n} out of range"),
        }
    }
}

impl From<InvalidArgument> for Error {
    fn from(e: InvalidArgument) -> Self {
        Self::InvalidArgument(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
