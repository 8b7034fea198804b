use crate::traits::{CommandOutput, OutputSource};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;

/// A mock output source for testing purposes.
/// It replays canned `nmcli` output without running anything.
#[derive(Debug, Default, Clone)]
pub struct MockSource {
    outputs: HashMap<String, CommandOutput>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `nmcli <args>` with `stdout` and a zero exit status.
    pub fn with_stdout(self, args: &[&str], stdout: impl Into<String>) -> Self {
        self.with_output(args, CommandOutput::success(stdout))
    }

    /// Answers `nmcli <args>` with a non-zero exit status.
    pub fn with_failure(self, args: &[&str], status: i32, stderr: impl Into<String>) -> Self {
        self.with_output(args, CommandOutput::failure(status, stderr))
    }

    pub fn with_output(mut self, args: &[&str], output: CommandOutput) -> Self {
        self.outputs.insert(args.join(" "), output);
        self
    }
}

#[async_trait]
impl OutputSource for MockSource {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let command = args.join(" ");
        self.outputs
            .get(&command)
            .cloned()
            .ok_or_else(|| Error::CommandFailed(format!("no canned output for `nmcli {command}`")))
    }
}
