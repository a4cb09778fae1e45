use bluetap_common::config::Config;
use bluetap_core::{bypass::BypassService, executor::Executor};

use crate::commands::TargetArgs;
use crate::terminal::print;

/// Configures the adapter and pairs without user interaction.
pub async fn pair(args: TargetArgs, cfg: &Config) -> anyhow::Result<()> {
    let target = args.target();
    print::target_summary(&target, Vec::new());

    let executor = Executor::system(cfg);
    BypassService::new(&executor, cfg).pair(&target).await?;
    Ok(())
}
