//! Exit codes and stderr of the `tf-make-script` binary.

use std::process::{Command, Output};

fn make_script(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tf-make-script"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_successful_generation_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_str().unwrap();

    let output = make_script(&["--module", "Invoke", "--maxparam", "1", "-o", out]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("[OK] Invoke arities 0..=1"));
    assert!(dir.path().join("MakeInvoke.bat").exists());
}

#[test]
fn test_missing_output_dir_exits_one_with_cause_chain() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let output = make_script(&[
        "--module",
        "Invoke",
        "--maxparam",
        "2",
        "-o",
        missing.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "{}", stderr);
    assert!(stderr.contains("InvokeOpt0.txt"), "{}", stderr);
    assert!(stderr.contains("caused by:"), "{}", stderr);
    assert!(!missing.exists());
}

#[test]
fn test_invalid_maxparam_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_str().unwrap();

    let output = make_script(&["--module", "Invoke", "--maxparam", "-1", "-o", out]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
