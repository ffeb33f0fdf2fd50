use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn jotter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jotter"))
}

/// Run jotter in `dir` with `args`, feeding `input` on stdin.
fn run_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = jotter_cmd()
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The child may exit before reading everything (usage, init failure)
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_prints_usage_and_creates_nothing() {
    let tmp = TempDir::new().unwrap();

    for args in [
        vec!["-h"],
        vec!["--help"],
        vec![],
        vec!["a", "b"],
        vec!["--", "-h"],
        vec!["--", "work"],
    ] {
        let output = run_with_input(tmp.path(), &args, "");
        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("How to use this app:"), "args {:?}", args);
        assert!(out.contains("[COLLECTION]"));
    }

    assert!(!tmp.path().join("notes").exists());
}

#[test]
fn test_unknown_flag_prints_usage() {
    let tmp = TempDir::new().unwrap();

    let output = run_with_input(tmp.path(), &["--verbose"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("How to use this app:"));
    assert!(!tmp.path().join("notes").exists());
}

#[test]
fn test_full_note_workflow() {
    let tmp = TempDir::new().unwrap();
    let notes_file = tmp.path().join("notes/work_notes.txt");

    // Add a note, list, exit
    let output = run_with_input(tmp.path(), &["work"], "2\ntodo\nbuy milk\n1\n4\n");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Welcome to the Notes App!"));
    assert!(out.contains("Collection: work"));
    assert!(out.contains("Notes file created."));
    assert!(out.contains("Note added: todo"));
    assert!(out.contains("001 - todo: buy milk"));
    assert!(out.contains("Bye! See you next time."));
    assert_eq!(fs::read_to_string(&notes_file).unwrap(), "todo:buy milk\n");

    // Delete it in a second run
    let output = run_with_input(tmp.path(), &["work"], "3\n1\n1\n4\n");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.contains("Notes file created."));
    assert!(out.contains("Deleted note: todo"));
    assert!(out.contains("No notes available."));
    assert_eq!(fs::read_to_string(&notes_file).unwrap(), "");
}

#[test]
fn test_notes_survive_restart_in_order() {
    let tmp = TempDir::new().unwrap();

    let input = "2\nfirst\none\n2\nsecond\ntwo: with colon\n2\n\nthird\n4\n";
    let output = run_with_input(tmp.path(), &["daily"], input);
    assert!(output.status.success());

    let output = run_with_input(tmp.path(), &["daily"], "1\n4\n");
    let out = stdout(&output);
    let first = out.find("001 - first: one").unwrap();
    let second = out.find("002 - second: two: with colon").unwrap();
    let third = out.find("003 - (untitled): third").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_hand_edited_malformed_lines_are_dropped() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("notes")).unwrap();
    fs::write(
        tmp.path().join("notes/misc_notes.txt"),
        "a:kept\nthis line has no separator\nb:also kept\n",
    )
    .unwrap();

    let output = run_with_input(tmp.path(), &["misc"], "1\n4\n");
    let out = stdout(&output);
    assert!(out.contains("001 - a: kept"));
    assert!(out.contains("002 - b: also kept"));
    assert!(!out.contains("003 -"));
    assert!(!out.contains("no separator"));
}

#[test]
fn test_delete_keeps_relative_order() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("notes")).unwrap();
    let path = tmp.path().join("notes/list_notes.txt");
    fs::write(&path, "a:1\nb:2\nc:3\nd:4\n").unwrap();

    let output = run_with_input(tmp.path(), &["list"], "3\n2\n4\n");
    assert!(stdout(&output).contains("Deleted note: b"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a:1\nc:3\nd:4\n");
}

#[test]
fn test_rejected_inputs_leave_file_alone() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("notes")).unwrap();
    let path = tmp.path().join("notes/safe_notes.txt");
    fs::write(&path, "keep:me\n").unwrap();

    // empty content, cancel, non-numeric, out of range, bad menu choice
    let input = "2\ntitle\n\n3\n0\n3\nx\n3\n5\nfoo\n4\n";
    let output = run_with_input(tmp.path(), &["safe"], input);
    let out = stdout(&output);
    assert!(out.contains("Error: Note cannot be empty."));
    assert!(out.contains("Delete cancelled."));
    assert_eq!(out.matches("Invalid note number.").count(), 2);
    assert!(out.contains("Invalid choice. Please try again."));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep:me\n");
}

#[test]
fn test_collection_name_is_sanitized() {
    let tmp = TempDir::new().unwrap();

    let output = run_with_input(tmp.path(), &["a/b:c"], "4\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Collection: abc"));
    assert!(tmp.path().join("notes/abc_notes.txt").exists());
}

#[test]
fn test_unusable_collection_name_falls_back() {
    let tmp = TempDir::new().unwrap();

    let output = run_with_input(tmp.path(), &["???"], "4\n");
    assert!(output.status.success());
    let err = stderr(&output);
    assert_eq!(err.matches("Warning:").count(), 2);
    assert!(err.contains("using generated collection name"));

    let files: Vec<_> = fs::read_dir(tmp.path().join("notes"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("_notes.txt"));
    assert_eq!(files[0].len(), "yyMMdd_HHmmss_notes.txt".len());
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let tmp = TempDir::new().unwrap();

    let output = run_with_input(tmp.path(), &["work"], "2\nhalf a note\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Bye! See you next time."));
    assert_eq!(
        fs::read_to_string(tmp.path().join("notes/work_notes.txt")).unwrap(),
        ""
    );
}

#[test]
fn test_init_failure_reports_and_exits() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes"), "occupied").unwrap();

    let output = run_with_input(tmp.path(), &["work"], "1\n4\n");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("ERROR: Unable to initialize notes file."));
    assert!(!out.contains("Choose an option:"));
}

#[test]
fn test_invalid_utf8_on_stdin_does_not_crash() {
    let tmp = TempDir::new().unwrap();

    let mut child = jotter_cmd()
        .current_dir(tmp.path())
        .arg("work")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let _ = child
        .stdin
        .take()
        .unwrap()
        .write_all(b"2\ncaf\xe9\nx\n1\n4\n");
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("001 - caf\u{fffd}: x"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("notes/work_notes.txt")).unwrap(),
        "caf\u{fffd}:x\n"
    );
}

#[test]
fn test_invalid_utf8_in_file_keeps_every_note() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("notes")).unwrap();
    let path = tmp.path().join("notes/latin_notes.txt");
    fs::write(&path, b"a:one\nb:caf\xe9\nc:three\n").unwrap();

    let output = run_with_input(tmp.path(), &["latin"], "3\n1\n4\n");
    let out = stdout(&output);
    assert!(out.contains("002 - b: caf\u{fffd}"));
    assert!(out.contains("Deleted note: a"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "b:caf\u{fffd}\nc:three\n"
    );
}
