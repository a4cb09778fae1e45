use std::fs;

use bluetap_common::bluetooth::target::{AddressType, Target};
use bluetap_common::error::BluetapError;
use bluetap_core::audio::AudioService;

use crate::support::{self, ok, program, with_stderr};

fn target() -> Target {
    Target::parse("aa:bb:cc:dd:ee:ff", AddressType::BrEdr).unwrap()
}

#[tokio::test]
async fn record_switches_profile_then_captures() {
    let cfg = support::test_config();
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("capture.wav");
    let (executor, log) = support::executor(|_| ok(""));

    AudioService::new(&executor, &cfg)
        .record(&target(), &outfile)
        .await
        .unwrap();

    assert_eq!(
        log.commands(),
        vec![
            "pactl set-card-profile bluez_card.AA_BB_CC_DD_EE_FF headset-head-unit-msbc".to_string(),
            format!(
                "parecord -d bluez_input.AA_BB_CC_DD_EE_FF.0 {}",
                outfile.display()
            ),
        ]
    );
}

#[tokio::test]
async fn interrupted_capture_keeps_the_partial_file() {
    let cfg = support::test_config();
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("partial.wav");
    let (executor, _log) = support::executor(|argv| match program(argv) {
        "parecord" => {
            let path = argv.last().unwrap();
            fs::write(path, b"RIFF").unwrap();
            Err(BluetapError::Interrupted {
                during: argv.join(" "),
            })
        }
        _ => ok(""),
    });

    AudioService::new(&executor, &cfg)
        .record(&target(), &outfile)
        .await
        .unwrap();

    assert_eq!(fs::read(&outfile).unwrap(), b"RIFF");
}

#[tokio::test]
async fn capture_errors_other_than_interruption_propagate() {
    let cfg = support::test_config();
    let dir = tempfile::tempdir().unwrap();
    let (executor, _log) = support::executor(|argv| match program(argv) {
        "parecord" => with_stderr("", "Stream error: No such entity\n"),
        _ => ok(""),
    });

    let err = AudioService::new(&executor, &cfg)
        .record(&target(), &dir.path().join("out.wav"))
        .await
        .unwrap_err();

    assert!(matches!(err, BluetapError::CommandExecution { .. }));
}

#[tokio::test]
async fn profile_switch_failure_skips_capture() {
    let cfg = support::test_config();
    let dir = tempfile::tempdir().unwrap();
    let (executor, log) = support::executor(|argv| match program(argv) {
        "pactl" => with_stderr("", "Failure: No such entity\n"),
        _ => ok(""),
    });

    let err = AudioService::new(&executor, &cfg)
        .record(&target(), &dir.path().join("out.wav"))
        .await
        .unwrap_err();

    assert!(matches!(err, BluetapError::CommandExecution { .. }));
    assert!(!log.ran("parecord"));
}

#[tokio::test]
async fn interruption_outside_capture_is_not_swallowed() {
    let cfg = support::test_config();
    let (executor, _log) = support::executor(|argv| {
        Err(BluetapError::Interrupted {
            during: argv.join(" "),
        })
    });

    let err = AudioService::new(&executor, &cfg)
        .switch_profile(&target())
        .await
        .unwrap_err();

    assert!(matches!(err, BluetapError::Interrupted { .. }));
}

#[tokio::test]
async fn playback_targets_the_given_sink() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|_| ok(""));

    AudioService::new(&executor, &cfg)
        .playback("alsa_output.test.analog-stereo", "recording.wav".as_ref())
        .await
        .unwrap();

    assert_eq!(
        log.commands(),
        vec!["paplay -d alsa_output.test.analog-stereo recording.wav"]
    );
}
