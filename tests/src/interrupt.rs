use std::path::Path;
use std::time::Duration;

use bluetap_common::error::BluetapError;
use bluetap_core::executor::{Executor, ProcessRunner};
use tokio::{fs, process::Command, time};

/// Writes "head", waits for SIGINT, then appends "tail" and exits cleanly.
/// Its pid lands in `<file>.pid` once the trap is in place.
const TRAPPING_RECORDER: &str = r#"
trap 'kill $! 2>/dev/null; printf tail >> "$1"; exit 0' INT
printf head > "$1"
sleep 30 >/dev/null 2>&1 &
echo $$ > "$1.pid"
wait
"#;

async fn send_sigint(pid: &str) {
    let status = Command::new("kill")
        .args(["-INT", pid])
        .status()
        .await
        .unwrap();
    assert!(status.success(), "kill -INT {pid} failed");
}

async fn wait_for_pid(pid_file: &Path) -> String {
    for _ in 0..250 {
        if let Ok(pid) = fs::read_to_string(pid_file).await {
            let pid = pid.trim().to_string();
            if !pid.is_empty() {
                return pid;
            }
        }
        time::sleep(Duration::from_millis(20)).await;
    }
    panic!("child never reported its pid");
}

#[tokio::test]
async fn sigint_interrupts_the_child_and_keeps_its_output() {
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("capture.raw");
    let pid_file = dir.path().join("capture.raw.pid");

    let argv: Vec<String> = vec![
        "sh".to_string(),
        "-c".to_string(),
        TRAPPING_RECORDER.to_string(),
        "sh".to_string(),
        outfile.to_string_lossy().into_owned(),
    ];
    let executor = Executor::new(Box::new(ProcessRunner), false);

    // The terminal delivers SIGINT to the whole foreground group: the
    // executor sees it first, the child right after.
    let interrupter = async {
        let child = wait_for_pid(&pid_file).await;
        send_sigint(&std::process::id().to_string()).await;
        time::sleep(Duration::from_millis(100)).await;
        send_sigint(&child).await;
    };

    let started = time::Instant::now();
    let (result, ()) = tokio::join!(executor.run(&argv), interrupter);

    match result {
        Err(BluetapError::Interrupted { during }) => assert!(during.starts_with("sh -c")),
        other => panic!("expected Interrupted, got {other:?}"),
    }
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(fs::read_to_string(&outfile).await.unwrap(), "headtail");
}
