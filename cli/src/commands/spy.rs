use tracing::{Instrument, info_span};

use bluetap_common::{config::Config, info, success, warn};
use bluetap_core::{audio::AudioService, bypass::BypassService, executor::Executor};

use crate::commands::{PlaybackMode, SpyArgs};
use crate::terminal::{print, prompt, spinner};

/// Pair, connect, record, then optionally play the recording back.
pub async fn spy(args: SpyArgs, cfg: &Config) -> anyhow::Result<()> {
    let target = args.target.target();
    print::target_summary(
        &target,
        vec![
            ("Output", args.file.display().to_string()),
            ("Sink", args.sink.clone()),
            ("Profile", cfg.capture_profile.clone()),
        ],
    );
    super::preflight(cfg);

    let executor = Executor::system(cfg);
    let bypass = BypassService::new(&executor, cfg);
    let audio = AudioService::new(&executor, cfg);

    print::header("bypass");
    let span = info_span!("bypass", indicatif.pb_show = true);
    spinner::decorate(&span, "Pairing and connecting...");
    bypass.bypass(&target).instrument(span).await?;

    print::header("capture");
    executor.pause(cfg.settle_delay).await?;
    let span = info_span!("capture", indicatif.pb_show = true);
    spinner::decorate(&span, "Recording...");
    audio.record(&target, &args.file).instrument(span).await?;
    success!("Recording stored in \"{}\"", args.file.display());

    let play = match args.playback {
        PlaybackMode::Always => true,
        PlaybackMode::Never => false,
        PlaybackMode::Ask => prompt::confirm("Play audio back?").await?,
    };

    if play {
        warn!("Playing audio back!");
        audio.playback(&args.sink, &args.file).await?;
    }

    info!("Exiting");
    Ok(())
}
