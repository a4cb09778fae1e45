use std::time::Duration;

pub const DEFAULT_SCAN_TIMEOUT: u64 = 2;
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_CAPTURE_PROFILE: &str = "headset-head-unit-msbc";

pub struct Config {
    /// Echo every external command before it runs and its stdout after.
    pub verbose: bool,
    /// Prefix adapter management commands with `sudo`.
    ///
    /// Not needed when already running as root.
    pub sudo: bool,
    /// Seconds `bluetoothctl` spends discovering before the connect attempt.
    pub scan_timeout: u64,
    /// Pause between pairing, connecting and recording.
    pub settle_delay: Duration,
    /// Card profile that exposes the device microphone as a source.
    pub capture_profile: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            sudo: true,
            scan_timeout: DEFAULT_SCAN_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
            capture_profile: DEFAULT_CAPTURE_PROFILE.to_string(),
        }
    }
}
