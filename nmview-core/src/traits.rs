use async_trait::async_trait;

/// Output of one finished `nmcli` invocation.
/// 一次 nmcli 调用结束后捕获到的完整输出。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Something that can run `nmcli` with the given arguments and hand back its
/// complete output.
///
/// Implementations only return once the tool has exited; parsing never sees
/// partial output.
#[async_trait]
pub trait OutputSource: Send + Sync {
    /// Runs `nmcli <args...>`.
    ///
    /// # Returns
    /// The captured output whatever the exit status, or an `Error` if the
    /// tool could not be run at all.
    async fn run(&self, args: &[&str]) -> crate::Result<CommandOutput>;
}
