use bluetap_common::bluetooth::target::{AddressType, Target};
use bluetap_common::error::BluetapError;
use bluetap_core::bypass::BypassService;

use crate::support::{self, ok, program, subcommand, with_stderr};

const ADDRESS: &str = "00:11:22:33:44:55";

fn target(address_type: AddressType) -> Target {
    Target::parse(ADDRESS, address_type).unwrap()
}

#[tokio::test]
async fn bypass_runs_every_phase_in_order() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|argv| match subcommand(argv) {
        "pair" => ok("Paired with 00:11:22:33:44:55 (BR/EDR)\n"),
        _ => ok(""),
    });

    BypassService::new(&executor, &cfg)
        .bypass(&target(AddressType::BrEdr))
        .await
        .unwrap();

    assert_eq!(
        log.commands(),
        vec![
            "btmgmt bondable true",
            "btmgmt pairable true",
            "btmgmt linksec false",
            "btmgmt pair -c 3 -t 0 00:11:22:33:44:55",
            "bluetoothctl --timeout 2 scan on",
            "bluetoothctl connect 00:11:22:33:44:55",
        ]
    );
}

#[tokio::test]
async fn pairing_passes_the_address_type_code() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|_| ok(""));

    BypassService::new(&executor, &cfg)
        .pair(&target(AddressType::LeRandom))
        .await
        .unwrap();

    assert!(log.ran("btmgmt pair -c 3 -t 2 00:11:22:33:44:55"));
}

#[tokio::test]
async fn failed_pairing_aborts_before_connecting() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|argv| match subcommand(argv) {
        "pair" => ok("Pairing with 00:11:22:33:44:55 (BR/EDR) failed. status 0x05 (Authentication Failed)\n"),
        _ => ok(""),
    });

    let err = BypassService::new(&executor, &cfg)
        .bypass(&target(AddressType::BrEdr))
        .await
        .unwrap_err();

    match err {
        BluetapError::CommandExecution { command, stdout, .. } => {
            assert_eq!(command, "btmgmt pair -c 3 -t 0 00:11:22:33:44:55");
            assert!(stdout.contains("Authentication Failed"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!log.ran("bluetoothctl"));
}

#[tokio::test]
async fn already_paired_device_still_gets_connected() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|argv| match subcommand(argv) {
        "pair" => ok("Pairing with 00:11:22:33:44:55 (BR/EDR) failed. status 0x13 (Already Paired)\n"),
        _ => ok(""),
    });

    BypassService::new(&executor, &cfg)
        .bypass(&target(AddressType::BrEdr))
        .await
        .unwrap();

    assert!(log.ran("bluetoothctl connect 00:11:22:33:44:55"));
}

#[tokio::test]
async fn stderr_output_fails_the_step() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|argv| match subcommand(argv) {
        "linksec" => with_stderr("", "Set Link Security failed with status 0x0c (Not Supported)\n"),
        _ => ok(""),
    });

    let err = BypassService::new(&executor, &cfg)
        .bypass(&target(AddressType::BrEdr))
        .await
        .unwrap_err();

    match err {
        BluetapError::CommandExecution { command, stderr, .. } => {
            assert_eq!(command, "btmgmt linksec false");
            assert!(stderr.contains("Not Supported"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!log.ran("pair -c"));
}

#[tokio::test]
async fn connect_failure_keeps_the_pairing() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|argv| match (program(argv), subcommand(argv)) {
        ("bluetoothctl", "connect") => with_stderr("", "Device 00:11:22:33:44:55 not available\n"),
        _ => ok(""),
    });

    let err = BypassService::new(&executor, &cfg)
        .bypass(&target(AddressType::BrEdr))
        .await
        .unwrap_err();

    assert!(matches!(err, BluetapError::CommandExecution { .. }));
    assert!(log.position("pair -c").unwrap() < log.position("connect").unwrap());
}

#[tokio::test]
async fn adapter_commands_are_elevated_when_configured() {
    let mut cfg = support::test_config();
    cfg.sudo = true;
    let (executor, log) = support::executor(|_| ok(""));

    BypassService::new(&executor, &cfg)
        .bypass(&target(AddressType::BrEdr))
        .await
        .unwrap();

    for command in log.commands() {
        if command.contains("btmgmt") {
            assert!(command.starts_with("sudo btmgmt"), "{command}");
        } else {
            assert!(command.starts_with("bluetoothctl"), "{command}");
        }
    }
}

#[tokio::test]
async fn spawn_failure_propagates() {
    let cfg = support::test_config();
    let (executor, log) = support::executor(|argv| {
        Err(BluetapError::Spawn {
            command: argv.join(" "),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        })
    });

    let err = BypassService::new(&executor, &cfg)
        .configure_adapter()
        .await
        .unwrap_err();

    assert!(matches!(err, BluetapError::Spawn { .. }));
    assert_eq!(log.commands().len(), 1);
}
