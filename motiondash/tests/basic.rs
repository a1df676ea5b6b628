use std::fs;
use std::process::Command;

const RUN: &str = r#"{
  "time": [0.0, 10.0, 20.0],
  "distance": [0.0, 250.0, 500.0],
  "speed": [0.0, 25.0, 25.0]
}"#;

#[test]
fn render_prints_readouts_ticks_and_paths() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("run.json");
    fs::write(&input, RUN).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_motiondash"))
        .args(["render", "--input"])
        .arg(&input)
        .output()
        .expect("run motiondash render");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Time: 20.0 s"));
    assert!(stdout.contains("Distance: 500.0 m"));
    assert!(stdout.contains("Speed: 25.0 m/s"));
    assert!(stdout.contains("y: 500m 400m 300m 200m 100m 0m"));
    assert!(stdout.contains("x: 0s 10s 20s 30s 40s 50s"));
    assert!(stdout.contains("path: M 0 100 L 20 50 L 40 0"));
}

#[test]
fn render_json_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("run.json");
    fs::write(&input, RUN).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_motiondash"))
        .args(["render", "--format", "json", "--input"])
        .arg(&input)
        .output()
        .expect("run motiondash render");
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["summary"][0]["text"], "20.0 s");
    assert_eq!(view["charts"][1]["kind"], "speed");
    assert_eq!(view["charts"][1]["axis_max"], 25.0);
}

#[test]
fn settings_flag_changes_scaling() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("run.json");
    let settings = dir.path().join("dash.toml");
    fs::write(&input, RUN).unwrap();
    fs::write(&settings, "distance_axis = { floor = 1000.0, step = 250.0 }\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_motiondash"))
        .arg("--settings")
        .arg(&settings)
        .args(["render", "--input"])
        .arg(&input)
        .output()
        .expect("run motiondash render");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("y: 1000m 800m 600m 400m 200m 0m"));
}

#[test]
fn missing_input_fails_with_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_motiondash"))
        .args(["render", "--input"])
        .arg(dir.path().join("absent.json"))
        .output()
        .expect("run motiondash render");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[motiondash][ERROR]"));
}

#[test]
fn export_rejects_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("run.json");
    fs::write(&input, RUN).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_motiondash"))
        .args(["export", "--chart", "speed", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("speed.bmp"))
        .output()
        .expect("run motiondash export");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported export format"));
}

#[test]
fn export_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("run.json");
    let chart = dir.path().join("distance.svg");
    fs::write(&input, RUN).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_motiondash"))
        .args(["export", "--chart", "distance", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&chart)
        .output()
        .expect("run motiondash export");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("[motiondash][INFO] Chart written"));
    let svg = fs::read_to_string(&chart).unwrap();
    assert!(svg.contains("\n500m\n</text>"));
    assert!(svg.contains("\n50s\n</text>"));
}
