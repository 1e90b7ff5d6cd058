#![cfg(feature = "std")]

use std::io::Write;
use std::process::{Command, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_toy_robot"))
        .args(args)
        .env("TOY_ROBOT_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start toy_robot");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for toy_robot")
}

#[test]
fn test_piped_session() {
    let output = run_cli(&[], "place 1,2,east\nmove\nmove\nleft\nmove\nreport\nexit\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Output: 3,3,NORTH\n");
}

#[test]
fn test_custom_dimensions() {
    let output = run_cli(&["--width", "3", "--height", "2"], "PLACE 2,2,NORTH\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "x or y value out of bounds. Expected x: 0 to 2, y: 0 to 1.\n"
    );
}

#[test]
fn test_logs_go_to_stderr() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_toy_robot"))
        .args(["--log-level", "warn"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start toy_robot");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"PLACE 4,4,NORTH\nMOVE\nJUMP\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "WARN: Move ignored to prevent falling off the table from (4, 4) facing NORTH"
    ));
    assert!(stderr.contains("ERROR: Invalid command: JUMP"));
    assert!(!stderr.contains("INFO"));
}

#[test]
fn test_zero_width_fails() {
    let output = run_cli(&["--width", "0"], "");
    assert!(!output.status.success());
}
