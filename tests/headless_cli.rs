//! End-to-end tests driving the `roster --headless` binary over stdin

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

fn run_script(args: &[&str], script: &str) -> Vec<Value> {
    let home = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .arg("--headless")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn roster");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("every line is JSON"))
        .collect()
}

#[test]
fn test_open_nested_and_close() {
    let lines = run_script(
        &["--records", "demos/records.toml"],
        "open 2\nnested\nclose\nquit\n",
    );

    let directives: Vec<&str> = lines
        .iter()
        .filter(|v| v["event"] == "directive")
        .map(|v| v["directive"].as_str().unwrap())
        .collect();
    assert_eq!(
        directives,
        vec!["show_primary", "show_nested", "hide_nested", "hide_primary"]
    );

    let last = lines.last().unwrap();
    assert_eq!(last["disclosure"]["phase"], "closed");
    assert_eq!(last["records"], 4);
}

#[test]
fn test_mode_flag_sets_single_select() {
    let lines = run_script(&["--records", "demos/records.toml", "--mode", "single"], "");
    assert_eq!(lines[0]["mode"], "single");
}

#[test]
fn test_missing_records_file_fails() {
    let status = Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(["--headless", "--records", "does/not/exist.toml"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(!status.success());
}
