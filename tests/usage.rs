use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gh-activity"))
}

#[test]
fn help_exits_zero() {
    let out = bin().arg("--help").output().expect("run help");
    assert_eq!(out.status.code(), Some(0));
    let s = String::from_utf8_lossy(&out.stdout);
    assert!(s.contains("--limit"));
    assert!(!s.contains("--api-url"));
}

#[test]
fn help_wins_over_username() {
    // No server is listening; help must be handled before any request.
    let out = bin()
        .args(["octocat", "--help", "--api-url", "http://127.0.0.1:9"])
        .output()
        .expect("run help");
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn help_wins_over_invalid_arguments() {
    for args in [
        &["octocat", "--limit", "ten", "--help"][..],
        &["octocat", "extra", "--help"][..],
        &["octocat", "extra", "-h"][..],
    ] {
        let out = bin().args(args).output().expect("run help");
        assert_eq!(out.status.code(), Some(0), "{args:?}");
        assert!(String::from_utf8_lossy(&out.stdout).contains("--limit"), "{args:?}");
        assert!(out.stderr.is_empty(), "{args:?}");
    }
}

#[test]
fn missing_username_fails() {
    let out = bin().output().expect("run without args");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&out.stderr).contains("Error: GitHub username is required.")
    );
}

#[test]
fn non_numeric_limit_fails() {
    let out = bin()
        .args(["octocat", "--limit", "lots"])
        .output()
        .expect("run bad limit");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("--limit"));
}

#[test]
fn unreachable_api_fails() {
    let out = bin()
        .args(["octocat", "--api-url", "http://127.0.0.1:9"])
        .output()
        .expect("run unreachable");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: "));
}
