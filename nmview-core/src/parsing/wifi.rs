use super::tabular::split_columns;
use crate::config::ParseConfig;
use crate::structs::WifiScanRecord;
use serde::Serialize;
use thiserror::Error;

/// Columns after the network name: mode, channel, rate, signal, bars, security.
const TRAILING_COLUMNS: usize = 6;
/// bssid + ssid + the trailing columns.
const SCAN_COLUMNS: usize = TRAILING_COLUMNS + 2;

/// Why a single scan row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RowError {
    #[error("expected at least 8 columns, found {found}")]
    TooFewColumns { found: usize },

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("signal {value} is outside 0..=100")]
    SignalOutOfRange { value: u32 },
}

/// A scan row that could not be parsed, kept for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
    /// 1-based line number within the scan output.
    pub line_number: usize,
    pub line: String,
    pub error: RowError,
}

/// Result of reading a whole `nmcli device wifi list` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    /// Usable access points, in the order the tool printed them.
    pub records: Vec<WifiScanRecord>,
    /// Rows that were rejected; they never affect `records`.
    pub failures: Vec<RowFailure>,
}

impl ScanOutcome {
    /// The access point the device is currently connected to.
    pub fn active(&self) -> Option<&WifiScanRecord> {
        self.records.iter().find(|r| r.is_active)
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, RowError> {
    value.parse().map_err(|_| RowError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parses one row of `nmcli device wifi list` with the default options.
pub fn parse_wifi_row(line: &str) -> Result<WifiScanRecord, RowError> {
    parse_wifi_row_with(line, &ParseConfig::default())
}

/// Parses one scan row into its eight columns.
///
/// The SSID is free text and may itself contain a run of two or more spaces,
/// which looks exactly like a column break. Every other column is a fixed
/// token, so the first column is taken as the BSSID, the last six as mode
/// through security, and whatever sits between them is joined back (with two
/// spaces) into the SSID.
///
/// Placeholder values are returned as-is; dropping them is up to the caller.
pub fn parse_wifi_row_with(line: &str, config: &ParseConfig) -> Result<WifiScanRecord, RowError> {
    let line = line.trim_start();
    let (is_active, line) = match line.strip_prefix(config.active_marker) {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let tokens = split_columns(line.trim());
    if tokens.len() < SCAN_COLUMNS {
        return Err(RowError::TooFewColumns {
            found: tokens.len(),
        });
    }

    let (bssid, rest) = (tokens[0], &tokens[1..]);
    let (ssid, tail) = rest.split_at(rest.len() - TRAILING_COLUMNS);
    let [mode, channel, rate, signal, bars, security] = tail else {
        return Err(RowError::TooFewColumns {
            found: tokens.len(),
        });
    };

    let channel = parse_number("channel", channel.trim())?;
    let signal = parse_number("signal", signal.trim())?;
    let signal = u8::try_from(signal)
        .ok()
        .filter(|s| *s <= 100)
        .ok_or(RowError::SignalOutOfRange { value: signal })?;

    Ok(WifiScanRecord {
        is_active,
        bssid: bssid.trim().to_string(),
        ssid: ssid.join("  ").trim().to_string(),
        mode: mode.trim().to_string(),
        channel,
        rate: rate.trim().to_string(),
        signal,
        bars: bars.trim().to_string(),
        security: security.trim().to_string(),
    })
}

/// Parses a full scan listing with the default options.
pub fn parse_wifi_scan(output: &str) -> ScanOutcome {
    parse_wifi_scan_with(output, &ParseConfig::default())
}

/// Parses a full scan listing.
///
/// The header line(s) are dropped, blank lines are ignored, and every other
/// line goes through [`parse_wifi_row_with`]. A bad row lands in
/// [`ScanOutcome::failures`] and parsing carries on. Rows whose bssid, ssid or
/// security is the placeholder are left out of the records.
pub fn parse_wifi_scan_with(output: &str, config: &ParseConfig) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for (index, line) in output.lines().enumerate().skip(config.header_lines) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_wifi_row_with(line, config) {
            Ok(record) if record.is_placeholder(&config.placeholder) => {}
            Ok(record) => outcome.records.push(record),
            Err(error) => outcome.failures.push(RowFailure {
                line_number: index + 1,
                line: line.to_string(),
                error,
            }),
        }
    }

    outcome
}
