use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_stdin(input: &[u8]) -> (i32, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_eco_pipeline"))
        .env_remove("ECO_CLASSIFIER")
        .env_remove("ECO_ZERO_SHOT_URL")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    let out = child.wait_with_output().unwrap();
    (
        out.status.code().unwrap(),
        String::from_utf8(out.stdout).unwrap(),
    )
}

#[test]
fn empty_stdin_prints_no_input_and_exits_zero() {
    let (code, stdout) = run_with_stdin(b"");
    assert_eq!(code, 0);
    assert_eq!(stdout, "{\"error\":\"No input provided\"}\n");
}

#[test]
fn malformed_json_exits_zero_with_failure_envelope() {
    let (code, stdout) = run_with_stdin(b"{not json");
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(v["success"], serde_json::json!(false));
    assert!(v["error"].is_string());
}

#[test]
fn invalid_utf8_is_a_failure_envelope() {
    let (code, stdout) = run_with_stdin(&[0xff, 0xfe, 0x7b]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("{\"success\":false,"));
}

#[test]
fn item_produces_exactly_one_line() {
    let (code, stdout) = run_with_stdin(
        br#"{"item_name": "Cardboard box", "item_description": "recycled cardboard"}"#,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(v["data"]["materials"], serde_json::json!(["Cardboard"]));
}
