//! Wire model of the feeder's `monitor.json` status payload.
//!
//! The fr24feed software exposes a flat JSON object on its monitor port in
//! which every value, timestamps and counters included, is a string. This
//! module decodes that payload and derives the transient [`FeederStatus`]
//! record the check evaluates.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("error decoding monitor payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("field {field} is not a number: {value:?}")]
    BadNumber { field: &'static str, value: String },
    #[error("field {field} is not a unix timestamp: {value:?}")]
    BadTimestamp { field: &'static str, value: String },
}

/// The raw fields of `monitor.json` this check cares about. Everything else
/// in the payload is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct MonitorReport {
    pub feed_last_ac_sent_time: String,
    pub feed_status: String,
    pub feed_last_connected_time: String,
    pub last_rx_connect_status: String,
    pub feed_num_ac_adsb_tracked: String,
    pub feed_num_ac_non_adsb_tracked: String,
    pub feed_num_ac_tracked: String,
}

/// Snapshot of the feeder derived from a [`MonitorReport`], valid for a
/// single invocation.
#[derive(Clone, Debug)]
pub struct FeederStatus {
    /// Whole seconds elapsed since the feeder last sent aircraft data.
    pub seconds_since_update: i64,
    /// `connected` or `disconnected`, as reported by the feeder.
    pub connection_state: String,
    pub last_connected: DateTime<Utc>,
    pub rx_connect_status: String,
    pub adsb_tracked: u64,
    pub non_adsb_tracked: u64,
    pub sum_tracked: u64,
}

impl MonitorReport {
    pub fn from_json(body: &str) -> Result<MonitorReport, MonitorError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Derives the feeder status relative to `now`.
    ///
    /// `now` is passed in rather than taken from the system clock so the
    /// elapsed time computation stays deterministic under test. A last-sent
    /// timestamp in the future counts by its absolute distance, feeder and
    /// monitoring host clocks are not necessarily in sync.
    pub fn status_at(&self, now: DateTime<Utc>) -> Result<FeederStatus, MonitorError> {
        let last_sent = parse_timestamp("feed_last_ac_sent_time", &self.feed_last_ac_sent_time)?;
        let last_connected =
            parse_timestamp("feed_last_connected_time", &self.feed_last_connected_time)?;

        Ok(FeederStatus {
            seconds_since_update: (now - last_sent).num_seconds().abs(),
            connection_state: self.feed_status.clone(),
            last_connected,
            rx_connect_status: self.last_rx_connect_status.clone(),
            adsb_tracked: parse_counter("feed_num_ac_adsb_tracked", &self.feed_num_ac_adsb_tracked)?,
            non_adsb_tracked: parse_counter(
                "feed_num_ac_non_adsb_tracked",
                &self.feed_num_ac_non_adsb_tracked,
            )?,
            sum_tracked: parse_counter("feed_num_ac_tracked", &self.feed_num_ac_tracked)?,
        })
    }
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, MonitorError> {
    let secs: i64 = value.parse().map_err(|_| MonitorError::BadTimestamp {
        field,
        value: value.to_owned(),
    })?;

    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| MonitorError::BadTimestamp {
            field,
            value: value.to_owned(),
        })
}

fn parse_counter(field: &'static str, value: &str) -> Result<u64, MonitorError> {
    value.parse().map_err(|_| MonitorError::BadNumber {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{MonitorError, MonitorReport};

    const SAMPLE: &str = r#"{
        "build_arch": "static_armel",
        "build_os": "Linux",
        "feed_alias": "T-EDDK123",
        "feed_last_ac_sent_time": "1647519571",
        "feed_last_connected_time": "1647516571",
        "feed_num_ac_adsb_tracked": "12",
        "feed_num_ac_non_adsb_tracked": "3",
        "feed_num_ac_tracked": "15",
        "feed_status": "connected",
        "last_rx_connect_status": "Connected",
        "rx_connected": "1"
    }"#;

    #[test]
    fn test_decodes_sample_payload() {
        let report = MonitorReport::from_json(SAMPLE).unwrap();
        assert_eq!(report.feed_status, "connected");
        assert_eq!(report.feed_last_ac_sent_time, "1647519571");
    }

    #[test]
    fn test_status_at_derives_elapsed_seconds() {
        let report = MonitorReport::from_json(SAMPLE).unwrap();
        let now = Utc.timestamp_opt(1647519871, 0).unwrap();

        let status = report.status_at(now).unwrap();
        assert_eq!(status.seconds_since_update, 300);
        assert_eq!(status.connection_state, "connected");
        assert_eq!(status.rx_connect_status, "Connected");
        assert_eq!(status.adsb_tracked, 12);
        assert_eq!(status.non_adsb_tracked, 3);
        assert_eq!(status.sum_tracked, 15);
        assert_eq!(
            status.last_connected,
            Utc.timestamp_opt(1647516571, 0).unwrap()
        );
    }

    #[test]
    fn test_future_timestamp_counts_absolute() {
        let report = MonitorReport::from_json(SAMPLE).unwrap();
        let now = Utc.timestamp_opt(1647519571 - 90, 0).unwrap();

        let status = report.status_at(now).unwrap();
        assert_eq!(status.seconds_since_update, 90);
    }

    #[test]
    fn test_missing_field_is_a_decode_error() {
        let err = MonitorReport::from_json(r#"{"feed_status": "connected"}"#).unwrap_err();
        assert!(matches!(err, MonitorError::Decode(_)));
    }

    #[test]
    fn test_malformed_timestamp() {
        let body = SAMPLE.replace("1647519571", "2022-03-17 12:39:31");
        let report = MonitorReport::from_json(&body).unwrap();

        let err = report.status_at(Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            MonitorError::BadTimestamp {
                field: "feed_last_ac_sent_time",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_counter() {
        let body = SAMPLE.replace("\"15\"", "\"n/a\"");
        let report = MonitorReport::from_json(&body).unwrap();

        let err = report.status_at(Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            MonitorError::BadNumber {
                field: "feed_num_ac_tracked",
                ..
            }
        ));
    }
}
