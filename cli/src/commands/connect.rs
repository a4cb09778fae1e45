use tracing::{Instrument, info_span};

use bluetap_common::config::Config;
use bluetap_core::{bypass::BypassService, executor::Executor};

use crate::commands::TargetArgs;
use crate::terminal::{print, spinner};

/// Scans, then connects to an already paired device.
pub async fn connect(args: TargetArgs, cfg: &Config) -> anyhow::Result<()> {
    let target = args.target();
    print::target_summary(&target, Vec::new());

    let executor = Executor::system(cfg);
    let span = info_span!("connect", indicatif.pb_show = true);
    spinner::decorate(&span, "Connecting...");
    BypassService::new(&executor, cfg)
        .connect(&target)
        .instrument(span)
        .await?;
    Ok(())
}
