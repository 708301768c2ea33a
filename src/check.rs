//! Threshold evaluation and plugin output assembly.

use std::process;

use crate::monitor::FeederStatus;
use crate::perfdata::{self, PerfData, Unit};
use crate::state::State;

/// Warning and critical thresholds, in seconds since the last status update.
#[derive(Copy, Clone, Debug)]
pub struct Thresholds {
    pub warning: i64,
    pub critical: i64,
}

impl Thresholds {
    /// Maps an elapsed time onto a service state. Critical takes precedence
    /// over warning; a value below both is fine.
    pub fn evaluate(&self, seconds: i64) -> State {
        if seconds >= self.critical {
            State::Critical
        } else if seconds >= self.warning {
            State::Warning
        } else {
            State::Ok
        }
    }
}

/// Final result of a check run: the text to print and the state to exit with.
#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub state: State,
    pub message: String,
}

impl CheckOutcome {
    /// Prints the plugin output and exits with the exit code of the state.
    pub fn print_and_exit(&self) -> ! {
        println!("{}", self.message);
        process::exit(self.state.exit_code())
    }
}

/// Evaluates a feeder snapshot against the thresholds and builds the plugin
/// output.
///
/// The output is two text lines, with the perfdata section attached after the
/// last one:
///
/// ```text
/// Feeder: OK - 42s since last status update
/// Status: connected since 2022-03-17 11:49:31|adsb_tracked=12;;;0 ...
/// ```
///
/// With `always_ok` set, the reported state is forced to OK no matter what
/// was measured. Meant for maintenance windows; the measured value still
/// shows up in the text and the perfdata.
pub fn evaluate(status: &FeederStatus, thresholds: &Thresholds, always_ok: bool) -> CheckOutcome {
    let state = if always_ok {
        State::Ok
    } else {
        thresholds.evaluate(status.seconds_since_update)
    };

    let perf = [
        PerfData::new("adsb_tracked", status.adsb_tracked as i64).with_min(0),
        PerfData::new("non_adsb_tracked", status.non_adsb_tracked as i64).with_min(0),
        PerfData::new("sum_tracked", status.sum_tracked as i64).with_min(0),
        PerfData::new("time_since_update", status.seconds_since_update)
            .with_unit(Unit::Seconds)
            .with_thresholds(thresholds.warning, thresholds.critical)
            .with_min(0),
    ];

    let message = format!(
        "Feeder: {} - {}s since last status update\nStatus: {} since {}|{}",
        state,
        status.seconds_since_update,
        status.connection_state,
        status.last_connected.format("%Y-%m-%d %H:%M:%S"),
        perfdata::render(&perf),
    );

    CheckOutcome { state, message }
}

/// Runs the given check body and exits with its outcome. Any error prints as
/// `UNKNOWN: <message>` and exits with code 3, so a failing plugin never
/// masquerades as a hard service problem.
pub fn safe_run<F>(f: F) -> !
where
    F: FnOnce() -> Result<CheckOutcome, anyhow::Error>,
{
    match f() {
        Ok(outcome) => outcome.print_and_exit(),
        Err(err) => {
            println!("UNKNOWN: {:#}", err);
            process::exit(State::Unknown.exit_code())
        }
    }
}
