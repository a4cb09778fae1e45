use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bluetap_common::config::{Config, DEFAULT_CAPTURE_PROFILE};
use bluetap_common::error::Result;
use bluetap_common::exec::{self, CommandOutput, CommandRunner};
use bluetap_core::executor::Executor;

pub type Handler = Box<dyn Fn(&[String]) -> Result<CommandOutput> + Send + Sync>;

/// Every command line a [`ScriptedRunner`] was asked to run, in order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn commands(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.commands().iter().position(|cmd| cmd.contains(needle))
    }

    pub fn ran(&self, needle: &str) -> bool {
        self.position(needle).is_some()
    }
}

/// Answers commands through a handler instead of spawning processes.
pub struct ScriptedRunner {
    log: CallLog,
    handler: Handler,
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn execute(&self, argv: &[String]) -> Result<CommandOutput> {
        self.log.0.lock().unwrap().push(exec::command_line(argv));
        (self.handler)(argv)
    }
}

pub fn executor<F>(handler: F) -> (Executor, CallLog)
where
    F: Fn(&[String]) -> Result<CommandOutput> + Send + Sync + 'static,
{
    let log = CallLog::default();
    let runner = ScriptedRunner {
        log: log.clone(),
        handler: Box::new(handler),
    };
    (Executor::new(Box::new(runner), false), log)
}

pub fn ok(stdout: &str) -> Result<CommandOutput> {
    Ok(CommandOutput::new(stdout, Vec::new(), Some(0)))
}

pub fn with_stderr(stdout: &str, stderr: &str) -> Result<CommandOutput> {
    Ok(CommandOutput::new(stdout, stderr.as_bytes().to_vec(), Some(0)))
}

/// Configuration without elevation or pauses.
pub fn test_config() -> Config {
    Config {
        verbose: false,
        sudo: false,
        scan_timeout: 2,
        settle_delay: Duration::ZERO,
        capture_profile: DEFAULT_CAPTURE_PROFILE.to_string(),
    }
}

pub fn program(argv: &[String]) -> &str {
    argv.first().map(String::as_str).unwrap_or_default()
}

pub fn subcommand(argv: &[String]) -> &str {
    argv.get(1).map(String::as_str).unwrap_or_default()
}
