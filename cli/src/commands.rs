pub mod connect;
pub mod pair;
pub mod record;
pub mod spy;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use bluetap_common::{
    bluetooth::{
        address::Address,
        target::{AddressType, Target},
    },
    config::{Config, DEFAULT_CAPTURE_PROFILE, DEFAULT_SCAN_TIMEOUT, DEFAULT_SETTLE_DELAY},
    warn,
};
use bluetap_core::tools;

pub const DEFAULT_RECORDING: &str = "recording.wav";
pub const DEFAULT_SINK: &str = "alsa_output.pci-0000_00_05.0.analog-stereo";

#[derive(Parser)]
#[command(name = "bluetap", version)]
#[command(about = "Pair with, connect to and record Bluetooth audio devices without user interaction.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Echo every external command and its output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seconds spent discovering devices before connecting
    #[arg(long, global = true, default_value_t = DEFAULT_SCAN_TIMEOUT)]
    pub scan_timeout: u64,

    /// Card profile that exposes the device microphone
    #[arg(long, global = true, default_value = DEFAULT_CAPTURE_PROFILE)]
    pub profile: String,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pair, connect, record and optionally play the recording back
    #[command(alias = "s")]
    Spy(SpyArgs),
    /// Pair with a device without user interaction
    #[command(alias = "p")]
    Pair(TargetArgs),
    /// Connect to a device using system tools
    #[command(alias = "c")]
    Connect(TargetArgs),
    /// Record sound from an already connected device
    #[command(alias = "r")]
    Record(RecordArgs),
}

#[derive(Args)]
pub struct TargetArgs {
    /// Target device address (xx:xx:xx:xx:xx:xx)
    #[arg(short = 'a', long = "target-address")]
    pub address: Address,

    /// Target address type: BR_EDR, LE_PUBLIC or LE_RANDOM
    #[arg(short = 't', long = "target-address-type", default_value = "BR_EDR")]
    pub address_type: AddressType,
}

impl TargetArgs {
    pub fn target(&self) -> Target {
        Target::new(self.address, self.address_type)
    }
}

#[derive(Args)]
pub struct RecordArgs {
    /// Target device address (xx:xx:xx:xx:xx:xx)
    #[arg(short = 'a', long = "target-address")]
    pub address: Address,

    /// File to store recorded audio
    #[arg(short = 'f', long = "file", default_value = DEFAULT_RECORDING)]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct SpyArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// File to store recorded audio
    #[arg(short = 'f', long = "file", default_value = DEFAULT_RECORDING)]
    pub file: PathBuf,

    /// Sink to play the audio back
    #[arg(short = 's', long = "sink", default_value = DEFAULT_SINK)]
    pub sink: String,

    /// Whether to play the recording back once it is stored
    #[arg(long, value_enum, default_value_t = PlaybackMode::Ask)]
    pub playback: PlaybackMode,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PlaybackMode {
    #[default]
    Ask,
    Always,
    Never,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            verbose: self.verbose,
            sudo: !is_root::is_root(),
            scan_timeout: self.scan_timeout,
            settle_delay: DEFAULT_SETTLE_DELAY,
            capture_profile: self.profile.clone(),
        }
    }
}

/// Warns about tools that are not installed.
///
/// The run goes on regardless; the failing command reports the details.
pub fn preflight(cfg: &Config) {
    for tool in tools::missing_tools(&tools::required_tools(cfg)) {
        warn!("'{tool}' was not found in PATH");
    }
}
