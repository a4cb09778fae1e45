//! # Bypass Orchestrator
//!
//! Pairs with and connects to a device without any confirmation on either
//! side. The sequence only moves forward:
//!
//! 1. **Adapter configuration**: bondable, pairable, no link security.
//! 2. **Pairing**: announce `NoInputNoOutput` so the "Just Works" model is used.
//! 3. **Scan**: a short discovery so BlueZ can resolve the address.
//! 4. **Connect**.
//!
//! The first failure aborts the sequence. Nothing is rolled back: a pairing
//! that succeeded stays in the BlueZ database even if connecting fails.
//!
//! Pairing can still fail when an agent insists on interactive
//! confirmation; that surfaces as an ordinary command failure.

use bluetap_common::{
    bluetooth::{capability::IoCapability, target::Target},
    config::Config,
    error::Result,
    info, success,
};

use crate::executor::Executor;
use crate::tools;

/// Capability announced while pairing.
pub const PAIRING_CAPABILITY: IoCapability = IoCapability::NoInputNoOutput;

/// Judges `btmgmt pair` output.
///
/// Output mentioning "failed" is a failure, except when the device is
/// already paired: `btmgmt` reports that case as a failed pairing, but the
/// bond it wanted already exists.
pub fn pairing_succeeded(stdout: &str) -> bool {
    !stdout.contains("failed") || stdout.contains("Already Paired")
}

pub struct BypassService<'a> {
    executor: &'a Executor,
    cfg: &'a Config,
}

impl<'a> BypassService<'a> {
    pub fn new(executor: &'a Executor, cfg: &'a Config) -> Self {
        Self { executor, cfg }
    }

    /// Phase 1: bondable, pairable, link security off.
    pub async fn configure_adapter(&self) -> Result<()> {
        info!("Configuring local adapter: bondable, pairable, no link security");
        for argv in tools::adapter_setup(self.cfg) {
            self.executor.run(&argv).await?;
        }
        Ok(())
    }

    /// Phases 1 and 2: configures the adapter, then forces pairing.
    pub async fn pair(&self, target: &Target) -> Result<()> {
        self.configure_adapter().await?;

        info!("Avoiding authentication with {target} as {PAIRING_CAPABILITY}...");
        let argv = tools::pair(self.cfg, target, PAIRING_CAPABILITY);
        self.executor.run_checked(&argv, pairing_succeeded).await?;

        success!("Shared key generated for {}", target.address());
        Ok(())
    }

    /// Phase 3: bounded discovery.
    pub async fn scan(&self) -> Result<()> {
        info!("Discovering devices for {}s...", self.cfg.scan_timeout);
        self.executor.run(&tools::scan(self.cfg)).await
    }

    /// Phases 3 and 4: scans, then connects.
    pub async fn connect(&self, target: &Target) -> Result<()> {
        self.scan().await?;

        info!("Establishing connection with {}...", target.address());
        self.executor.run(&tools::connect(target)).await?;

        success!("Connected to {}", target.address());
        Ok(())
    }

    /// The whole sequence, with a settle pause between pairing and connecting.
    pub async fn bypass(&self, target: &Target) -> Result<()> {
        self.pair(target).await?;
        self.executor.pause(self.cfg.settle_delay).await?;
        self.connect(target).await
    }
}
