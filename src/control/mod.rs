//! Control surface: the text protocol layered over the engine.
//!
//! | Module    | Direction          | Contract                             |
//! |-----------|--------------------|--------------------------------------|
//! | `status`  | engine → client    | four-line status report              |
//! | `command` | client → engine    | `f<1-8>` period, `v<1-f>` value      |
//! | `device`  | both               | character-device open/read/write     |

pub mod command;
pub mod device;
pub mod status;
