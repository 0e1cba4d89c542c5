use std::io::Write;
use std::process::{Command, Output, Stdio};

fn has_lines_sequence(tokens: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_has-lines-sequence"))
        .args(tokens)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn has-lines-sequence");

    {
        let mut stdin = child.stdin.take().expect("stdin");
        // The checker may exit before reading everything.
        let _ = stdin.write_all(input.as_bytes());
    }

    child.wait_with_output().expect("wait for has-lines-sequence")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn tokens_in_order_succeed() {
    let output = has_lines_sequence(&["a", "b", "c"], "xa\nyb\nzc\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}

#[test]
fn wrong_order_fails_with_context() {
    let output = has_lines_sequence(&["a", "b"], "xb\nya\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "No line containing: \"b\"\nAfter match of \"a\" on line:\nya\n"
    );
}

#[test]
fn missing_first_token_fails_without_context() {
    let output = has_lines_sequence(&["zzz"], "a\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "No line containing: \"zzz\"\n");
}

#[test]
fn zero_tokens_succeed_even_on_empty_input() {
    assert_eq!(has_lines_sequence(&[], "").status.code(), Some(0));
    assert_eq!(has_lines_sequence(&[], "whatever\n").status.code(), Some(0));
}

#[test]
fn hyphen_tokens_are_tokens() {
    let output = has_lines_sequence(&["-x", "--y"], "run -x\nthen --y\n");
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
}

#[test]
fn help_and_version_flags_are_tokens() {
    for token in ["-h", "--help", "-V", "--version"] {
        let output = has_lines_sequence(&[token], "nothing here\n");

        assert_eq!(output.status.code(), Some(1), "token {}", token);
        assert!(output.stdout.is_empty(), "token {}", token);
        assert_eq!(
            stderr(&output),
            format!("No line containing: \"{}\"\n", token)
        );
    }

    let output = has_lines_sequence(&["--help"], "try --help\n");
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
}

#[test]
fn double_dash_is_a_token() {
    let output = has_lines_sequence(&["--"], "nothing here\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "No line containing: \"--\"\n");

    let output = has_lines_sequence(&["a", "--", "b"], "a\nx -- y\nb\n");
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let output = has_lines_sequence(&["a", "--", "b"], "a\nb\n");
    assert_eq!(output.status.code(), Some(1));
}
