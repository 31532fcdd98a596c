use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("heart-predict").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn fields_lists_all_parameters() {
    let mut cmd = Command::cargo_bin("heart-predict").expect("binary exists");
    let output = cmd
        .args(["fields", "--no-color"])
        .env("PREDICT_THEME", "light")
        .output()
        .expect("runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 13);
    assert!(stdout.contains("Thalassemia"));
}

#[test]
fn unreachable_service_exits_non_zero() {
    let mut cmd = Command::cargo_bin("heart-predict").expect("binary exists");
    cmd.args(["--api-url", "http://127.0.0.1:1", "predict", "--json"])
        .env("NO_PROXY", "127.0.0.1")
        .assert()
        .failure();
}
