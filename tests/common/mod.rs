use assert_cmd::Command;
use serde_json::Value;

pub fn cmd() -> Command {
    Command::cargo_bin("tutor").unwrap()
}

pub fn run_json(args: &[&str], stdin: &str) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .write_stdin(stdin)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}
