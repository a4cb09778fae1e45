//! # Command Runner Port
//!
//! Boundary between the orchestration logic and the operating system.
//! The engine never links against BlueZ or PulseAudio; it drives their
//! command line tools through this trait, one argument vector at a time.

use async_trait::async_trait;

use crate::error::Result;

/// What an external command left behind once it exited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, decoded as (lossy) UTF-8.
    pub stdout: String,
    /// Standard error, untouched.
    pub stderr: Vec<u8>,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<Vec<u8>>, code: Option<i32>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            code,
        }
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Spawns an external program and waits for it to exit.
///
/// Implementations must not interpret the output: deciding whether a run
/// succeeded belongs to the caller.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `argv[0]` with the remaining elements as arguments.
    async fn execute(&self, argv: &[String]) -> Result<CommandOutput>;
}

/// Human readable form of an argument vector.
pub fn command_line(argv: &[String]) -> String {
    argv.join(" ")
}
