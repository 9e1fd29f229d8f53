//! End-to-end tests of the `display_set` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const ANNOTATED: &str = "system {\n    /* primary */\n    host-name r1;\n}\n";

fn display_set(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_display_set"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run display_set")
}

fn write_conf(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write config");
    path
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

#[test]
fn input_flag_prints_commands_and_annotations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_conf(dir.path(), "r1.conf", ANNOTATED);
    let o = display_set(&["--input", path.to_str().expect("utf8 path")]);
    assert!(o.status.success(), "stderr: {}", String::from_utf8_lossy(&o.stderr));
    assert_eq!(
        stdout(&o),
        "set system host-name r1\ntop\nedit system\nannotate host-name \"primary\"\n"
    );
}

#[test]
fn input_flag_with_ignore_annotations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_conf(dir.path(), "r1.conf", ANNOTATED);
    let o = display_set(&["--ignore-annotations", "--input", path.to_str().expect("utf8 path")]);
    assert!(o.status.success());
    assert_eq!(stdout(&o), "set system host-name r1\n");
}

#[test]
fn positional_files_are_prefixed_without_annotations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = write_conf(dir.path(), "a.conf", ANNOTATED);
    let b = write_conf(dir.path(), "b.conf", "snmp { location lab; }\n");
    let a = a.to_str().expect("utf8 path");
    let b = b.to_str().expect("utf8 path");
    let o = display_set(&[a, b]);
    assert!(o.status.success(), "stderr: {}", String::from_utf8_lossy(&o.stderr));
    assert_eq!(
        stdout(&o),
        format!("{a}:set system host-name r1\n{b}:set snmp location lab\n")
    );
}

#[test]
fn both_sources_is_a_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_conf(dir.path(), "r1.conf", ANNOTATED);
    let p = path.to_str().expect("utf8 path");
    let o = display_set(&["--input", p, p]);
    assert_eq!(o.status.code(), Some(2));
    assert!(o.stdout.is_empty());
}

#[test]
fn no_source_is_a_usage_error() {
    let o = display_set(&[]);
    assert_eq!(o.status.code(), Some(2));
}

#[test]
fn unreadable_file_names_the_path_and_stops() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_conf(dir.path(), "good.conf", "a;\n");
    let missing = dir.path().join("missing.conf");
    let later = write_conf(dir.path(), "later.conf", "b;\n");
    let o = display_set(&[
        good.to_str().expect("utf8 path"),
        missing.to_str().expect("utf8 path"),
        later.to_str().expect("utf8 path"),
    ]);
    assert_eq!(o.status.code(), Some(1));
    let out = stdout(&o);
    assert!(out.contains("good.conf:set a"), "{}", out);
    assert!(!out.contains("later.conf"), "{}", out);
    let err = String::from_utf8_lossy(&o.stderr);
    assert_eq!(err.matches("missing.conf").count(), 1, "{}", err);
}

#[test]
fn unmatched_brace_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_conf(dir.path(), "bad.conf", "a {\n b;\n}\n}\n");
    let o = display_set(&["--input", path.to_str().expect("utf8 path")]);
    assert_eq!(o.status.code(), Some(1));
    assert!(o.stdout.is_empty());
    let err = String::from_utf8_lossy(&o.stderr);
    assert!(err.contains("bad.conf") && err.contains("line 4"), "{}", err);
}
