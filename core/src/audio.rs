//! # Audio Session Controller
//!
//! Turns a connected device into a capturable microphone and records it.
//!
//! BlueZ registers a connected audio device with the sound server under
//! names derived from its address (`bluez_card.AA_BB_...` for the card,
//! `bluez_input.AA_BB_....0` for its source). Switching the card to a
//! headset profile exposes the source, which `parecord` then captures.
//!
//! The profile is left as is after recording.

use std::path::Path;

use bluetap_common::{
    bluetooth::target::Target,
    config::Config,
    error::{BluetapError, Result},
    info, success, warn,
};

use crate::executor::Executor;
use crate::tools;

const CARD_PREFIX: &str = "bluez_card.";
const SOURCE_PREFIX: &str = "bluez_input.";
const SOURCE_SUFFIX: &str = ".0";

/// `AA_BB_CC_DD_EE_FF` for `aa:bb:cc:dd:ee:ff`.
pub fn normalized_address(target: &Target) -> String {
    target.address().normalized()
}

pub fn card_name(target: &Target) -> String {
    format!("{CARD_PREFIX}{}", normalized_address(target))
}

pub fn source_name(target: &Target) -> String {
    format!("{SOURCE_PREFIX}{}{SOURCE_SUFFIX}", normalized_address(target))
}

pub struct AudioService<'a> {
    executor: &'a Executor,
    cfg: &'a Config,
}

impl<'a> AudioService<'a> {
    pub fn new(executor: &'a Executor, cfg: &'a Config) -> Self {
        Self { executor, cfg }
    }

    /// Switches the device card to the capture profile.
    pub async fn switch_profile(&self, target: &Target) -> Result<()> {
        let card = card_name(target);
        info!("Switching {card} to {}", self.cfg.capture_profile);
        self.executor
            .run(&tools::set_card_profile(&card, &self.cfg.capture_profile))
            .await
    }

    /// Records the device microphone into `outfile` until the capture tool
    /// exits.
    ///
    /// Ctrl-C ends the capture normally: the partial recording stays on disk
    /// and `Ok(())` is returned. Any other failure propagates.
    pub async fn record(&self, target: &Target, outfile: &Path) -> Result<()> {
        self.switch_profile(target).await?;

        let source = source_name(target);
        warn!("Recording from {source}! Press Ctrl-C to stop");

        match self.executor.run(&tools::record(&source, outfile)).await {
            Err(BluetapError::Interrupted { .. }) => {
                info!("Capture stopped");
                Ok(())
            }
            result => result,
        }
    }

    /// Plays `file` on `sink`.
    pub async fn playback(&self, sink: &str, file: &Path) -> Result<()> {
        info!("Playing {} on {sink}", file.display());
        self.executor.run(&tools::playback(sink, file)).await?;
        success!("Playback finished");
        Ok(())
    }
}
