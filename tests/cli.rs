use std::process::Command;

fn tinysheet() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tinysheet"))
}

#[test]
fn test_help_flag() {
    for flag in ["-h", "--help"] {
        let output = tinysheet().arg(flag).output().unwrap();
        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage: tinysheet"), "{stderr}");
    }
}

#[test]
fn test_unexpected_argument() {
    let output = tinysheet().arg("sheet.txt").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unexpected argument: sheet.txt"), "{stderr}");
    assert!(stderr.contains("Usage: tinysheet"), "{stderr}");
}
