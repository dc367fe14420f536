use std::fs::{read_to_string, write};
use std::process::Command;

const ICONS: &str = "\
| Glyph | Unicode point | Description |
|-------|---------------|-------------|
| &#xE700; | E700 | :::no-loc text=\"Home\"::: |
| &#xE701; | E701 | :::no-loc text=\"Settings16\"::: |
";

fn glyphmap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_glyphmap"))
}

#[test]
fn writes_tsv() {
    let dir = tempfile::tempdir().unwrap();
    let md = dir.path().join("icons.md");
    let out = dir.path().join("names.tsv");
    write(&md, ICONS).unwrap();

    let status = glyphmap()
        .args(["--font", "Test Icons", "--md"])
        .arg(&md)
        .arg("--out")
        .arg(&out)
        .status()
        .expect("run failed");
    assert!(status.success());
    assert_eq!(
        read_to_string(&out).unwrap(),
        "font\tcodepoint\tname\nTest Icons\tE700\tHome\nTest Icons\tE701\tSettings16\n"
    );
}

#[test]
fn writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let md = dir.path().join("segoe-fluent-icons-font.md");
    let out = dir.path().join("include/names.h");
    write(&md, ICONS).unwrap();

    let status =
        glyphmap().arg("--md").arg(&md).arg("--out").arg(&out).status().expect("run failed");
    assert!(status.success());

    let text = read_to_string(&out).unwrap();
    assert!(text.contains("static const uint32_t kUwpcharFluentBase = 0xE700;"));
    assert!(text.contains("static const uint32_t kUwpcharMdl2Count = 0;"));
}

#[test]
fn font_count_mismatch_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let md = dir.path().join("icons.md");
    let out = dir.path().join("names.tsv");
    write(&md, ICONS).unwrap();

    let output = glyphmap()
        .arg("--md")
        .arg(&md)
        .arg("--md")
        .arg(&md)
        .args(["--font", "Only One", "--out"])
        .arg(&out)
        .output()
        .expect("run failed");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--font must be provided"));
    assert!(!out.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("names.tsv");

    let output = glyphmap()
        .arg("--md")
        .arg(dir.path().join("missing.md"))
        .arg("--out")
        .arg(&out)
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing file:"));
    assert!(!out.exists());
}
