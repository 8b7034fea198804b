//! Query service: fetch `nmcli` output through an [`OutputSource`] and parse it.
//!
//! This is the only layer that logs. Parsers hand back rejected rows as data,
//! and a failed `nmcli` run is turned into [`Error::UpstreamFailure`] before
//! any parsing starts.

use crate::config::ParseConfig;
use crate::parsing::{
    self, ScanOutcome, parse_connection_list, parse_device_list, parse_wifi_scan_with,
};
use crate::structs::{ConnectionRecord, DeviceRecord, PropertyMap};
use crate::traits::OutputSource;
use crate::{Error, Result};
use std::sync::Arc;

pub struct NetworkQuery<S: ?Sized> {
    source: Arc<S>,
    config: Arc<ParseConfig>,
}

// Hand-written so cloning does not require `S: Clone`.
impl<S: ?Sized> Clone for NetworkQuery<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S: OutputSource + ?Sized> NetworkQuery<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, ParseConfig::default())
    }

    pub fn with_config(source: Arc<S>, config: ParseConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Runs `nmcli <args>` and returns its stdout, or an error if it did not
    /// exit cleanly.
    async fn fetch(&self, args: &[&str]) -> Result<String> {
        let output = self.source.run(args).await?;
        if !output.is_success() {
            let command = args.join(" ");
            tracing::error!(
                command = %command,
                status = ?output.status,
                "❌ nmcli failed: {}",
                output.stderr.trim()
            );
            return Err(Error::UpstreamFailure {
                command,
                status: output.status,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout)
    }

    /// `nmcli device`
    pub async fn devices(&self) -> Result<Vec<DeviceRecord>> {
        let stdout = self.fetch(&["device"]).await?;
        let devices = parse_device_list(&stdout);
        tracing::debug!("Found {} devices", devices.len());
        Ok(devices)
    }

    /// `nmcli connection show`
    pub async fn connections(&self) -> Result<Vec<ConnectionRecord>> {
        let stdout = self.fetch(&["connection", "show"]).await?;
        let connections = parse_connection_list(&stdout);
        tracing::debug!("Found {} connections", connections.len());
        Ok(connections)
    }

    /// `nmcli device show <name>`
    pub async fn device_properties(&self, name: &str) -> Result<PropertyMap> {
        let stdout = self.fetch(&["device", "show", name]).await?;
        Ok(parsing::parse_device_properties(&stdout))
    }

    /// `nmcli connection show <id>`
    pub async fn connection_properties(&self, id: &str) -> Result<PropertyMap> {
        let stdout = self.fetch(&["connection", "show", id]).await?;
        Ok(parsing::parse_connection_properties(&stdout))
    }

    /// `nmcli device wifi list`
    ///
    /// Rows that cannot be parsed are logged and returned in
    /// [`ScanOutcome::failures`]; they never fail the call.
    pub async fn wifi_scan(&self) -> Result<ScanOutcome> {
        let stdout = self.fetch(&["device", "wifi", "list"]).await?;
        let outcome = parse_wifi_scan_with(&stdout, &self.config);

        for failure in &outcome.failures {
            tracing::warn!(
                line_number = failure.line_number,
                "Skipping malformed scan row: {} ({:?})",
                failure.error,
                failure.line
            );
        }
        tracing::debug!(
            "Scan complete: {} networks, {} rejected rows",
            outcome.records.len(),
            outcome.failures.len()
        );
        Ok(outcome)
    }
}
