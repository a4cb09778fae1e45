use tracing::{Instrument, info_span};

use bluetap_common::{bluetooth::target::Target, config::Config, success};
use bluetap_core::{audio::AudioService, executor::Executor};

use crate::commands::RecordArgs;
use crate::terminal::{print, spinner};

/// Records an already connected device until Ctrl-C.
pub async fn record(args: RecordArgs, cfg: &Config) -> anyhow::Result<()> {
    let target = Target::from(args.address);
    print::target_summary(&target, vec![("Output", args.file.display().to_string())]);

    let executor = Executor::system(cfg);
    let span = info_span!("capture", indicatif.pb_show = true);
    spinner::decorate(&span, "Recording...");
    AudioService::new(&executor, cfg)
        .record(&target, &args.file)
        .instrument(span)
        .await?;

    success!("Recording stored in \"{}\"", args.file.display());
    Ok(())
}
