//! Building blocks for the check_fr24feed plugin, a Nagios/Icinga check that
//! tracks whether a Flightradar24 feeder is connected.
//!
//! The check queries the feeder's local monitor endpoint, derives the time
//! elapsed since the last status update and maps it onto a service state:
//!
//! ```rust
//! use check_fr24feed::{State, Thresholds};
//!
//! let thresholds = Thresholds { warning: 600, critical: 3600 };
//! assert_eq!(thresholds.evaluate(42), State::Ok);
//! assert_eq!(thresholds.evaluate(4000), State::Critical);
//! ```
//!
//! Everything here is library code so it stays testable without a network;
//! the binary in `main.rs` only parses the CLI and wires the pieces.

pub mod check;
pub mod client;
pub mod monitor;
pub mod perfdata;
pub mod state;

pub use crate::check::{evaluate, safe_run, CheckOutcome, Thresholds};
pub use crate::client::{fetch_monitor, monitor_url, FetchError};
pub use crate::monitor::{FeederStatus, MonitorError, MonitorReport};
pub use crate::state::State;
