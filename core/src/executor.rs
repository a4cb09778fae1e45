//! # Command Executor
//!
//! Runs one external command, captures both output streams and decides
//! whether the run succeeded.
//!
//! A run succeeds only when the caller's validator accepts stdout **and**
//! stderr is empty. The exit code is not consulted: the wrapped tools
//! (`btmgmt` in particular) report many failures with a zero status, and
//! print warnings on stderr that must not be silently tolerated.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::{process::Command, signal, time};

use bluetap_common::{
    command,
    config::Config,
    error::{BluetapError, Result},
    exec::{self, CommandOutput, CommandRunner},
    output,
};

/// How long an interrupted child gets to flush and exit before it is killed.
const INTERRUPT_GRACE: Duration = Duration::from_secs(2);

/// Decides whether a command's stdout denotes success.
pub type Validator = fn(&str) -> bool;

/// The default validator: only stderr decides.
pub fn accept_any(_stdout: &str) -> bool {
    true
}

/// Spawns real processes with `tokio::process`.
///
/// The argument vector is passed as is; nothing goes through a shell.
/// While the child runs, Ctrl-C is watched as well: the terminal delivers the
/// same SIGINT to the child, which gets [`INTERRUPT_GRACE`] to exit on its
/// own before it is killed, and the run ends with [`BluetapError::Interrupted`].
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn execute(&self, argv: &[String]) -> Result<CommandOutput> {
        let command_line = exec::command_line(argv);
        let spawn_error = |source: io::Error| BluetapError::Spawn {
            command: command_line.clone(),
            source,
        };

        let (program, args) = argv.split_first().ok_or_else(|| {
            spawn_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty argument vector",
            ))
        })?;

        let child = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_error)?;

        let output = child.wait_with_output();
        tokio::pin!(output);

        tokio::select! {
            biased;

            Ok(()) = signal::ctrl_c() => {
                let _ = time::timeout(INTERRUPT_GRACE, &mut output).await;
                Err(BluetapError::Interrupted { during: command_line.clone() })
            }

            result = &mut output => {
                let output = result.map_err(spawn_error)?;
                Ok(CommandOutput::new(
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                    output.stderr,
                    output.status.code(),
                ))
            }
        }
    }
}

/// Runs commands through a [`CommandRunner`] and applies the success policy.
pub struct Executor {
    runner: Box<dyn CommandRunner>,
    verbose: bool,
}

impl Executor {
    pub fn new(runner: Box<dyn CommandRunner>, verbose: bool) -> Self {
        Self { runner, verbose }
    }

    /// An executor spawning real processes.
    pub fn system(cfg: &Config) -> Self {
        Self::new(Box::new(ProcessRunner), cfg.verbose)
    }

    /// Runs `argv`; any stderr output is a failure.
    pub async fn run(&self, argv: &[String]) -> Result<()> {
        self.run_checked(argv, accept_any).await
    }

    /// Runs `argv`; fails when stderr is not empty or `validate` rejects stdout.
    pub async fn run_checked(&self, argv: &[String], validate: Validator) -> Result<()> {
        let command_line = exec::command_line(argv);
        if self.verbose {
            command!("{command_line}");
        }

        let output = self.runner.execute(argv).await?;
        if self.verbose {
            output!("{}", output.stdout);
        }

        check_output(command_line, output, validate)
    }

    /// Waits `delay`, unless Ctrl-C arrives first.
    pub async fn pause(&self, delay: Duration) -> Result<()> {
        if delay.is_zero() {
            return Ok(());
        }

        tokio::select! {
            biased;

            Ok(()) = signal::ctrl_c() => Err(BluetapError::Interrupted {
                during: "pause between steps".to_string(),
            }),
            _ = time::sleep(delay) => Ok(()),
        }
    }
}

fn check_output(command: String, output: CommandOutput, validate: Validator) -> Result<()> {
    if validate(&output.stdout) && output.stderr.is_empty() {
        return Ok(());
    }

    let stderr = output.stderr_text();
    Err(BluetapError::CommandExecution {
        command,
        stdout: output.stdout,
        stderr,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
