use std::fs;
use std::path::PathBuf;
use std::process::Command;

use sensorelay::USAGE;

fn work_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "sensorelay-{test_name}-{pid}",
        pid = std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(test_name: &str, args: &[&str]) -> (std::process::Output, PathBuf) {
    let dir = work_dir(test_name);

    let output = Command::new(env!("CARGO_BIN_EXE_sensorelay"))
        .args(args)
        .current_dir(&dir)
        .output()
        .unwrap();

    (output, dir)
}

fn assert_usage(output: &std::process::Output, dir: &PathBuf) {
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), USAGE);

    let pid_files = fs::read_dir(dir).unwrap().count();
    assert_eq!(pid_files, 0);
}

#[test]
fn test_no_arguments() {
    let (output, dir) = run("no-args", &[]);
    assert_usage(&output, &dir);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_too_many_arguments() {
    let (output, dir) = run("two-args", &["5", "6"]);
    assert_usage(&output, &dir);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_invalid_cycle_time() {
    let (output, dir) = run("invalid", &["often"]);
    assert_usage(&output, &dir);

    fs::remove_dir_all(dir).unwrap();
}
