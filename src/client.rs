//! One blocking HTTP GET against the feeder's monitor endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

// A check plugin runs under a scheduler deadline, so keep the timeouts well
// below common check_timeout defaults.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Builds the monitor endpoint URL for the given feeder host and port.
pub fn monitor_url(host: &str, port: u16) -> String {
    format!("http://{}:{}/monitor.json", host, port)
}

/// Fetches the raw monitor payload. Any transport failure, timeout or non-2xx
/// response is an error, decoding is left to the caller.
pub fn fetch_monitor(url: &str) -> Result<String, FetchError> {
    let request_err = |source| FetchError::Request {
        url: url.to_owned(),
        source,
    };

    let client = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(request_err)?;

    log::debug!("fetching {}", url);
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .map_err(request_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().map_err(request_err)?;
    log::debug!("received {} bytes from {}", body.len(), url);
    Ok(body)
}
