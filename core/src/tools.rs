//! # System Tools
//!
//! Argument vectors for every external program the workflow drives, and a
//! `PATH` lookup to find out which of them are installed.
//!
//! Arguments are assembled element by element; addresses, file names and
//! sink names are never interpolated into a shell string.

use std::env;
use std::fmt;
use std::path::Path;

use bluetap_common::{
    bluetooth::{capability::IoCapability, target::Target},
    config::Config,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Kernel management interface client (BlueZ).
    Btmgmt,
    /// BlueZ daemon client, used for discovery and connection.
    Bluetoothctl,
    /// PulseAudio/PipeWire control.
    Pactl,
    Parecord,
    Paplay,
    Sudo,
}

impl Tool {
    pub fn program(self) -> &'static str {
        match self {
            Tool::Btmgmt => "btmgmt",
            Tool::Bluetoothctl => "bluetoothctl",
            Tool::Pactl => "pactl",
            Tool::Parecord => "parecord",
            Tool::Paplay => "paplay",
            Tool::Sudo => "sudo",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

fn argv<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}

/// `btmgmt <args>`, elevated through `sudo` when configured.
fn btmgmt<'a>(cfg: &Config, args: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut command: Vec<String> = Vec::new();
    if cfg.sudo {
        command.push(Tool::Sudo.program().to_string());
    }
    command.push(Tool::Btmgmt.program().to_string());
    command.extend(args.into_iter().map(str::to_string));
    command
}

/// Makes the local controller bondable and pairable, with link level
/// security disabled.
pub fn adapter_setup(cfg: &Config) -> [Vec<String>; 3] {
    [
        btmgmt(cfg, ["bondable", "true"]),
        btmgmt(cfg, ["pairable", "true"]),
        btmgmt(cfg, ["linksec", "false"]),
    ]
}

pub fn pair(cfg: &Config, target: &Target, capability: IoCapability) -> Vec<String> {
    let capability = capability.code().to_string();
    let address_type = target.address_type().code().to_string();
    let address = target.address().to_string();
    btmgmt(
        cfg,
        [
            "pair",
            "-c",
            capability.as_str(),
            "-t",
            address_type.as_str(),
            address.as_str(),
        ],
    )
}

pub fn scan(cfg: &Config) -> Vec<String> {
    argv([
        Tool::Bluetoothctl.program().to_string(),
        "--timeout".to_string(),
        cfg.scan_timeout.to_string(),
        "scan".to_string(),
        "on".to_string(),
    ])
}

pub fn connect(target: &Target) -> Vec<String> {
    argv([
        Tool::Bluetoothctl.program().to_string(),
        "connect".to_string(),
        target.address().to_string(),
    ])
}

pub fn set_card_profile(card: &str, profile: &str) -> Vec<String> {
    argv([Tool::Pactl.program(), "set-card-profile", card, profile])
}

pub fn record(source: &str, outfile: &Path) -> Vec<String> {
    argv([
        Tool::Parecord.program().to_string(),
        "-d".to_string(),
        source.to_string(),
        outfile.to_string_lossy().into_owned(),
    ])
}

pub fn playback(sink: &str, file: &Path) -> Vec<String> {
    argv([
        Tool::Paplay.program().to_string(),
        "-d".to_string(),
        sink.to_string(),
        file.to_string_lossy().into_owned(),
    ])
}

/// Every tool the full pair-connect-record-playback workflow needs.
pub fn required_tools(cfg: &Config) -> Vec<Tool> {
    let mut tools = vec![
        Tool::Btmgmt,
        Tool::Bluetoothctl,
        Tool::Pactl,
        Tool::Parecord,
        Tool::Paplay,
    ];
    if cfg.sudo {
        tools.push(Tool::Sudo);
    }
    tools
}

/// Returns the tools that cannot be found in any `PATH` directory.
pub fn missing_tools(tools: &[Tool]) -> Vec<Tool> {
    tools
        .iter()
        .copied()
        .filter(|tool| !is_installed(tool.program()))
        .collect()
}

/// Looks `program` up in `PATH`.
pub fn is_installed(program: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| is_executable(&dir.join(program)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
