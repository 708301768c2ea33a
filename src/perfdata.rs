//! Rendering of Nagios performance data, the `label=value[UOM];warn;crit;min;max`
//! pairs a monitoring system picks up after the `|` separator.

use std::fmt;

/// Unit of measurement attached to a perfdata value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    None,
    Seconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::None => Ok(()),
            Unit::Seconds => f.write_str("s"),
        }
    }
}

/// A single performance data entry.
///
/// Display renders the full `label=value[UOM];warn;crit;min;max` form with
/// trailing empty fields trimmed.
///
/// ```rust
/// # use check_fr24feed::perfdata::PerfData;
/// let p = PerfData::new("sum_tracked", 15).with_min(0);
/// assert_eq!(&p.to_string(), "sum_tracked=15;;;0");
/// ```
#[derive(Clone, Debug)]
pub struct PerfData {
    label: String,
    value: i64,
    unit: Unit,
    warning: Option<i64>,
    critical: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
}

impl PerfData {
    pub fn new(label: &str, value: i64) -> Self {
        PerfData {
            label: label.to_owned(),
            value,
            unit: Unit::None,
            warning: None,
            critical: None,
            min: None,
            max: None,
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_thresholds(mut self, warning: i64, critical: i64) -> Self {
        self.warning = Some(warning);
        self.critical = Some(critical);
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = format!("{}={}{}", quote_label(&self.label), self.value, self.unit);
        for field in [self.warning, self.critical, self.min, self.max] {
            s.push(';');
            if let Some(v) = field {
                s.push_str(&v.to_string());
            }
        }
        f.write_str(s.trim_end_matches(';'))
    }
}

/// Joins the given entries into the space separated perfdata section.
pub fn render(entries: &[PerfData]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labels may not contain `=`, must double any single quote and need quoting
/// as a whole when they contain spaces.
fn quote_label(label: &str) -> String {
    let name = label.replace('=', "_").replace('\'', "''");

    if name.contains(' ') {
        format!("'{}'", name)
    } else {
        name
    }
}
