#![cfg(feature = "std")]

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "42", "--steps", "500", "--robots", "3", "--width", "4", "--height", "6"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 42);
    assert_eq!(v["table"]["board_width"], 4);
    assert_eq!(v["robots"].as_array().map(|r| r.len()), Some(3));
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["--seed", "7", "--steps", "200"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn sim_binary_rejects_zero_width() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--width", "0"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
