use std::cmp::Ordering;
use std::fmt;

/// Represents a service state as understood by Nagios and Icinga.
///
/// States order by severity, with [`State::Unknown`] below everything else,
/// so `a.max(b)` yields the state that should win when two results are
/// combined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl State {
    /// Returns the process exit code signalling this state to the
    /// monitoring system.
    pub fn exit_code(self) -> i32 {
        match self {
            State::Ok => 0,
            State::Warning => 1,
            State::Critical => 2,
            State::Unknown => 3,
        }
    }

    fn severity(self) -> u8 {
        match self {
            State::Unknown => 0,
            State::Ok => 1,
            State::Warning => 2,
            State::Critical => 3,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            State::Ok => "OK",
            State::Warning => "WARNING",
            State::Critical => "CRITICAL",
            State::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &State) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &State) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

#[cfg(test)]
mod tests {
    use super::State;

    #[test]
    fn test_exit_codes() {
        assert_eq!(State::Ok.exit_code(), 0);
        assert_eq!(State::Warning.exit_code(), 1);
        assert_eq!(State::Critical.exit_code(), 2);
        assert_eq!(State::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(&State::Ok.to_string(), "OK");
        assert_eq!(&State::Warning.to_string(), "WARNING");
        assert_eq!(&State::Critical.to_string(), "CRITICAL");
        assert_eq!(&State::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(State::Unknown < State::Ok);
        assert!(State::Ok < State::Warning);
        assert!(State::Warning < State::Critical);
        assert_eq!(State::Warning.max(State::Critical), State::Critical);
    }
}
