use std::fs;
use std::process::Command;

fn bin() -> String {
    env!("CARGO_BIN_EXE_fractal_viewer").to_string()
}

#[test]
fn missing_fractal_prints_usage_and_fails() {
    let output = Command::new(bin()).output().expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr:\n{}", stderr);
}

#[test]
fn unknown_fractal_fails() {
    let output = Command::new(bin()).arg("sierpinski").output().expect("run");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn julia_with_malformed_number_fails() {
    let output = Command::new(bin())
        .args(["julia", "0.3", "1.2.3"])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1.2.3"), "stderr:\n{}", stderr);
}

#[test]
fn julia_accepts_negative_parts_without_leading_digit() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.ppm");

    let output = Command::new(bin())
        .args(["julia", "-.5", "-.25", "--snapshot"])
        .arg(&out)
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out.exists());
}

#[test]
fn julia_with_one_parameter_fails() {
    let output = Command::new(bin()).args(["julia", "0.3"]).output().expect("run");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn snapshot_failure_is_reported_on_stderr_with_logging_off() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("out.ppm");

    let output = Command::new(bin())
        .env("RUST_LOG", "off")
        .arg("mandelbrot")
        .arg("--snapshot")
        .arg(&out)
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: failed to write ppm"), "stderr:\n{}", stderr);
}

#[test]
fn help_succeeds() {
    let output = Command::new(bin()).arg("--help").output().expect("run");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("julia"));
}

#[test]
fn snapshot_writes_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandelbrot.ppm");

    let output = Command::new(bin())
        .arg("mandelbrot")
        .arg("--snapshot")
        .arg(out.to_str().unwrap())
        .output()
        .expect("run");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let ppm = fs::read(&out).expect("snapshot exists");
    let header = b"P6\n800 800\n255\n";
    assert!(ppm.starts_with(header));
    assert_eq!(ppm.len(), header.len() + 800 * 800 * 3);

    // The origin is in the set.
    let centre = header.len() + (400 * 800 + 400) * 3;
    assert_eq!(&ppm[centre..centre + 3], &[0, 0, 0]);
}

#[test]
fn parallel_snapshot_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let sequential = dir.path().join("sequential.ppm");
    let parallel = dir.path().join("parallel.ppm");

    for (path, extra) in [(&sequential, None), (&parallel, Some("--parallel"))] {
        let mut command = Command::new(bin());
        command.args(["julia", "-0.8", "0.156", "--snapshot"]).arg(path);
        if let Some(flag) = extra {
            command.arg(flag);
        }
        let status = command.status().expect("run");
        assert!(status.success());
    }

    assert_eq!(fs::read(&sequential).unwrap(), fs::read(&parallel).unwrap());
}
