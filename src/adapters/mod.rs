//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements                 | Connects to            |
//! |------------|----------------------------|------------------------|
//! | `log_sink` | EventSink                  | `log` facade           |
//! | `sim_gpio` | embedded-hal Input/Output  | in-memory pin levels   |

pub mod log_sink;
pub mod sim_gpio;
