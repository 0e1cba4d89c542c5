//! Succeeds iff lines read from stdin contain TOKENs in the given order.
//!
//! ```sh
//! x2l -x < files.txt 2>&1 | has-lines-sequence "a.TXT -> a.txt" "b.JPG -> b.jpg"
//! ```
//!
//! Every argument is a token, including `-h`, `--version` and `--`.

use std::ffi::OsString;

use clap::Parser;

use x2l_testkit::sequence::SequenceChecker;

#[derive(Parser)]
#[command(name = "has-lines-sequence")]
#[command(about = "Check that stdin has lines containing each TOKEN, in order")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Substrings that must appear on successive (not necessarily adjacent) lines
    #[arg(value_name = "TOKEN", value_parser = clap::value_parser!(OsString))]
    tokens: Vec<OsString>,
}

/// Command line with an end-of-options marker in front of the user's
/// arguments, so clap hands every one of them (a later `--` included) to
/// TOKEN verbatim.
fn verbatim_args() -> Vec<OsString> {
    let mut raw = std::env::args_os();
    let bin = raw
        .next()
        .unwrap_or_else(|| OsString::from("has-lines-sequence"));

    let mut args = vec![bin, OsString::from("--")];
    args.extend(raw);
    args
}

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse_from(verbatim_args()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return std::process::ExitCode::FAILURE;
        }
    };

    let tokens = cli
        .tokens
        .iter()
        .map(|token| token.to_string_lossy().into_owned());

    let stdin = std::io::stdin();
    match SequenceChecker::new(tokens).check(stdin.lock()) {
        Ok(outcome) => match outcome.report() {
            None => std::process::ExitCode::SUCCESS,
            Some(report) => {
                eprintln!("{}", report);
                std::process::ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::ExitCode::FAILURE
        }
    }
}
