//! Parsers for `nmcli` text output.
//!
//! Everything in here is a pure function over text that has already been
//! captured: no I/O, no logging, no state between calls. Rejected scan rows
//! come back as data in [`ScanOutcome::failures`] so the caller decides how to
//! report them.

mod columns;
mod properties;
mod tabular;
mod wifi;

pub use columns::{parse_connection_list, parse_device_list};
pub use properties::{parse_connection_properties, parse_device_properties, parse_properties};
pub use tabular::split_columns;
pub use wifi::{
    RowError, RowFailure, ScanOutcome, parse_wifi_row, parse_wifi_row_with, parse_wifi_scan,
    parse_wifi_scan_with,
};
